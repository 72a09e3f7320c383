//! Error types.
//!
//! Validation errors carry the exact text shown to the user; the collector
//! prints them and asks again. `Error` is what escapes a session.

use thiserror::Error;

/// Rejected password length input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthError {
    #[error("Invalid input! Please enter a whole number.")]
    NotANumber,

    #[error("Error: Password length must be at least {min} to fit your choices!")]
    TooShort { min: usize },

    #[error("Error: Password length is too large (maximum {max}).")]
    TooLarge { max: usize },
}

/// Rejected yes/no input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNoError {
    #[error("Invalid input! Please enter 'y' or 'n'.")]
    Invalid,
}

/// Password assembly preconditions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Error: You must select at least one character type!")]
    EmptyPool,

    #[error("password length {length} cannot hold {required} required characters")]
    LengthTooShort { length: usize, required: usize },

    #[error("not enough memory for a password of length {length}")]
    OutOfMemory { length: usize },
}

/// Errors that end a session.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before a valid answer was given")]
    InputClosed,

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

pub type Result<T> = std::result::Result<T, Error>;
