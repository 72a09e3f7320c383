//! Shared terminal utilities.
//!
//! Line I/O capabilities, ANSI helpers, and terminal reset.

mod console;
mod output;

pub use console::*;
pub use output::*;
