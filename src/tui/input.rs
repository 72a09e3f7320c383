//! Interactive prompts that repeat until the answer is valid.

use tracing::{debug, warn};

use super::text;
use super::validate::{parse_length, parse_yes_no};
use crate::error::{Error, Result};
use crate::terminal::{LineInput, LineOutput};

/// Prompt and read one line. End of input ends the session: nothing typed
/// later can satisfy the prompt.
fn ask<I: LineInput, O: LineOutput>(input: &mut I, output: &mut O, prompt: &str) -> Result<String> {
    output.prompt(prompt)?;
    match input.read_line()? {
        Some(line) => Ok(line),
        None => {
            warn!(prompt = prompt.trim_end(), "input closed while prompting");
            Err(Error::InputClosed)
        }
    }
}

/// Ask for a password length until a whole number `>= min_length` is given.
pub fn get_valid_password_length<I: LineInput, O: LineOutput>(
    input: &mut I,
    output: &mut O,
    min_length: usize,
) -> Result<usize> {
    let prompt = text::length_prompt(min_length);
    loop {
        let line = ask(input, output, &prompt)?;
        match parse_length(&line, min_length) {
            Ok(length) => return Ok(length),
            Err(e) => {
                debug!(reason = ?e, "length rejected");
                output.write_error(&e.to_string())?;
            }
        }
    }
}

/// Ask a yes/no question until the answer is "y" or "n".
pub fn get_yes_no_input<I: LineInput, O: LineOutput>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> Result<bool> {
    loop {
        let line = ask(input, output, prompt)?;
        match parse_yes_no(&line) {
            Ok(answer) => return Ok(answer),
            Err(e) => output.write_error(&e.to_string())?,
        }
    }
}
