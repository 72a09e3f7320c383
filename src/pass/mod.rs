//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;

pub use charset::CharClass;
pub use generate::{assemble, generate};
