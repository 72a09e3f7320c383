//! Interactive password generator.
//!
//! Asks which character classes to use and how long the password should be,
//! then prints a shuffled password holding at least one character from every
//! selected class.

pub mod error;
pub mod exits;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, Result};
pub use settings::Selection;
pub use tui::Outcome;
