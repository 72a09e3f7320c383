//! Interactive prompt session.

mod input;
mod text;
pub mod validate;

pub use input::*;
pub use text::*;

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::error::{GenerateError, Result};
use crate::pass::{self, output::log_entropy, output::present};
use crate::rand::{Rand, RandomSource};
use crate::settings::Selection;
use crate::terminal::{LineInput, LineOutput, LineReader, LineWriter};

/// How a session ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Password(Zeroizing<String>),
    NoCharacterTypeSelected,
}

/// Ask which character classes to include.
pub fn collect_selection<I: LineInput, O: LineOutput>(
    input: &mut I,
    output: &mut O,
) -> Result<Selection> {
    Ok(Selection::new(
        get_yes_no_input(input, output, LOWERCASE_PROMPT)?,
        get_yes_no_input(input, output, UPPERCASE_PROMPT)?,
        get_yes_no_input(input, output, NUMBERS_PROMPT)?,
        get_yes_no_input(input, output, SPECIAL_PROMPT)?,
    ))
}

/// Run one prompt session: selections, length, generation, presentation.
///
/// Declining every class is a normal outcome; the message is printed and no
/// password is produced.
pub fn run<I, O, R>(input: &mut I, output: &mut O, rng: &mut R) -> Result<Outcome>
where
    I: LineInput,
    O: LineOutput,
    R: RandomSource,
{
    let selection = collect_selection(input, output)?;
    debug!(?selection, "classes selected");

    let length = get_valid_password_length(input, output, selection.min_length())?;

    let password = match pass::generate(&selection, length, rng) {
        Ok(password) => password,
        Err(GenerateError::EmptyPool) => {
            info!("no character type selected");
            output.write_error(&GenerateError::EmptyPool.to_string())?;
            return Ok(Outcome::NoCharacterTypeSelected);
        }
        Err(e) => return Err(e.into()),
    };

    log_entropy(&selection, length);
    present(output, &password)?;
    Ok(Outcome::Password(password))
}

/// Run a session over the process console with a fresh generator.
pub fn run_stdio() -> Result<Outcome> {
    let mut input = LineReader::stdin();
    let mut output = LineWriter::stdout();
    let mut rng = Rand::new();
    debug!(source = rng.entropy_source(), "generator ready");
    run(&mut input, &mut output, &mut rng)
}
