//! Character set building for password generation.

use crate::settings::Selection;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Special,
}

impl CharClass {
    /// Canonical order. Pools and guaranteed characters both follow it.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Special,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }

    /// Number of characters in the class (all ASCII).
    pub fn size(self) -> usize {
        self.chars().len()
    }
}

/// Build the character pool for the selected classes.
pub fn build(selection: &Selection) -> Vec<char> {
    let mut chars: Vec<char> = Vec::with_capacity(size(selection));

    for class in selection.classes() {
        chars.extend(class.chars().chars());
    }

    chars
}

/// Pool size without building it (for entropy calculation).
pub fn size(selection: &Selection) -> usize {
    selection.classes().map(CharClass::size).sum()
}
