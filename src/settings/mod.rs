//! Password generation settings.
//!
//! Collected interactively for each run and never persisted.

use crate::pass::charset::CharClass;

/// Which character classes the password must draw from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub special: bool,
}

impl Selection {
    pub fn new(lowercase: bool, uppercase: bool, numbers: bool, special: bool) -> Self {
        Self {
            lowercase,
            uppercase,
            numbers,
            special,
        }
    }

    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Digits => self.numbers,
            CharClass::Special => self.special,
        }
    }

    /// Selected classes in canonical order.
    pub fn classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL
            .into_iter()
            .filter(move |&c| self.includes(c))
    }

    pub fn count(&self) -> usize {
        self.classes().count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Shortest length that still fits one character of every selected class.
    pub fn min_length(&self) -> usize {
        self.count().max(1)
    }
}
