//! Pure validation of prompt answers.

use crate::error::{LengthError, YesNoError};

/// Parse a length answer and check it against `min_length`.
///
/// Any whole number is a number here: negatives fail the minimum check and
/// values past `usize::MAX` are reported as too large, so only input that is
/// not an integer at all gets the "whole number" message.
pub fn parse_length(raw: &str, min_length: usize) -> Result<usize, LengthError> {
    let raw = raw.trim();
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LengthError::NotANumber);
    }

    let value = if negative {
        if !digits.bytes().all(|b| b == b'0') {
            return Err(LengthError::TooShort { min: min_length });
        }
        0
    } else {
        digits
            .parse::<usize>()
            .map_err(|_| LengthError::TooLarge { max: usize::MAX })?
    };

    if value < min_length {
        return Err(LengthError::TooShort { min: min_length });
    }

    Ok(value)
}

/// Accept exactly "y" or "n", ignoring case and surrounding whitespace.
pub fn parse_yes_no(raw: &str) -> Result<bool, YesNoError> {
    match raw.trim().to_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err(YesNoError::Invalid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_accepts_padded_numbers() {
        assert_eq!(parse_length("  12 \n", 4), Ok(12));
        assert_eq!(parse_length("4", 4), Ok(4));
        assert_eq!(parse_length("+7", 1), Ok(7));
    }

    #[test]
    fn length_rejects_non_integers() {
        for raw in ["", "abc", "3.5", "12abc", "1 2", "\n"] {
            assert_eq!(parse_length(raw, 1), Err(LengthError::NotANumber), "{raw:?}");
        }
    }

    #[test]
    fn length_enforces_minimum() {
        assert_eq!(parse_length("0", 1), Err(LengthError::TooShort { min: 1 }));
        assert_eq!(parse_length("3", 4), Err(LengthError::TooShort { min: 4 }));
        assert_eq!(parse_length("-3", 1), Err(LengthError::TooShort { min: 1 }));
    }

    #[test]
    fn length_has_no_upper_limit_below_usize() {
        assert_eq!(parse_length("100000", 1), Ok(100_000));
        assert_eq!(parse_length(&usize::MAX.to_string(), 1), Ok(usize::MAX));
    }

    #[test]
    fn huge_whole_numbers_are_not_called_non_numbers() {
        assert_eq!(
            parse_length("99999999999999999999999", 1),
            Err(LengthError::TooLarge { max: usize::MAX })
        );
        assert_eq!(
            parse_length("-99999999999999999999", 1),
            Err(LengthError::TooShort { min: 1 })
        );
    }

    #[test]
    fn signs_and_zero() {
        assert_eq!(parse_length("-0", 1), Err(LengthError::TooShort { min: 1 }));
        assert_eq!(parse_length("-0", 0), Ok(0));
        assert_eq!(parse_length("-", 1), Err(LengthError::NotANumber));
        assert_eq!(parse_length("+-5", 1), Err(LengthError::NotANumber));
        assert_eq!(parse_length("1_000", 1), Err(LengthError::NotANumber));
    }

    #[test]
    fn length_error_messages() {
        assert_eq!(
            LengthError::NotANumber.to_string(),
            "Invalid input! Please enter a whole number."
        );
        assert_eq!(
            LengthError::TooShort { min: 3 }.to_string(),
            "Error: Password length must be at least 3 to fit your choices!"
        );
    }

    #[test]
    fn yes_no_normalizes() {
        assert_eq!(parse_yes_no("y\n"), Ok(true));
        assert_eq!(parse_yes_no("  N  "), Ok(false));
        assert_eq!(parse_yes_no("Y"), Ok(true));
    }

    #[test]
    fn yes_no_rejects_everything_else() {
        for raw in ["", "yes", "no", "x", "yn", "1"] {
            assert_eq!(parse_yes_no(raw), Err(YesNoError::Invalid), "{raw:?}");
        }
    }
}
