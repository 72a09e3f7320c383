//! Prompt text.

pub const LOWERCASE_PROMPT: &str = "Include lowercase letters? (y/n): ";
pub const UPPERCASE_PROMPT: &str = "Include uppercase letters? (y/n): ";
pub const NUMBERS_PROMPT: &str = "Include numbers? (y/n): ";
pub const SPECIAL_PROMPT: &str = "Include special characters? (y/n): ";

pub fn length_prompt(min_length: usize) -> String {
    format!("Enter password length (minimum {min_length}): ")
}
