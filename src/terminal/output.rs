//! Terminal output utilities.
//!
//! ANSI helpers, attribute reset, entropy estimates.

use crossterm::tty::IsTty;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Attribute reset to emit at startup; nothing when output is not a terminal.
fn reset_sequence(is_tty: bool) -> &'static str {
    if is_tty { RESET } else { "" }
}

/// Clear any lingering ANSI attributes.
pub fn reset_terminal() {
    let seq = reset_sequence(io::stdout().is_tty());
    if !seq.is_empty() {
        print!("{seq}");
        flush();
    }
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print error message to stderr, red when stderr is a terminal.
pub fn print_error(msg: &str) {
    if io::stderr().is_tty() {
        eprintln!("{RED}{msg}{RESET}");
    } else {
        eprintln!("{msg}");
    }
}

// ============================================================================
// Entropy Calculation
// ============================================================================

/// Calculate password entropy in bits.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

/// Get entropy strength description.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
