//! Password presentation.

use std::io;

use tracing::debug;
use zeroize::Zeroizing;

use super::charset;
use crate::settings::Selection;
use crate::terminal::{LineOutput, calculate_entropy, entropy_strength};

pub const LABEL: &str = "Generated Password:";

/// Write the password after its fixed label.
pub fn present<O: LineOutput>(out: &mut O, password: &str) -> io::Result<()> {
    let line = Zeroizing::new(format!("{LABEL} {password}"));
    out.write_line(&line)
}

/// Log the strength estimate for a password of `length` over the selection.
pub fn log_entropy(selection: &Selection, length: usize) {
    let chars = charset::size(selection);
    let bits = calculate_entropy(length, chars);
    debug!(
        bits,
        strength = entropy_strength(bits),
        charset = chars,
        "password entropy"
    );
}
