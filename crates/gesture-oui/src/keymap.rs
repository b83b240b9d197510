//! Gesture pattern to input symbol mapping
//!
//! Patterns are laid out like a phone keypad around the start point:
//!
//! ```text
//!  UL(1)  U(2)  UR(3)
//!  LU(4)  L(5)  LD(6)
//!  RU(7)  R(8)  RD(9)
//!  DL(del) D(0) DR(.)
//! ```

use std::fmt;

/// Decoded meaning of a finished gesture pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Digit(u8),
    Delete,
    Separator,
    Invalid,
}

/// The complete pattern table, in keypad order
pub const PATTERN_TABLE: [(&str, Symbol); 12] = [
    ("UL", Symbol::Digit(1)),
    ("U", Symbol::Digit(2)),
    ("UR", Symbol::Digit(3)),
    ("LU", Symbol::Digit(4)),
    ("L", Symbol::Digit(5)),
    ("LD", Symbol::Digit(6)),
    ("RU", Symbol::Digit(7)),
    ("R", Symbol::Digit(8)),
    ("RD", Symbol::Digit(9)),
    ("DL", Symbol::Delete),
    ("D", Symbol::Digit(0)),
    ("DR", Symbol::Separator),
];

impl Symbol {
    /// Look up a pattern; anything outside the table is `Invalid`
    pub fn from_pattern(pattern: &str) -> Self {
        PATTERN_TABLE
            .iter()
            .find(|(p, _)| *p == pattern)
            .map(|(_, symbol)| *symbol)
            .unwrap_or(Symbol::Invalid)
    }

    pub fn is_valid(self) -> bool {
        self != Symbol::Invalid
    }

    /// Character this symbol inserts into the address, if any
    pub fn as_char(self) -> Option<char> {
        match self {
            Symbol::Digit(d) => char::from_digit(u32::from(d), 10),
            Symbol::Separator => Some('.'),
            Symbol::Delete | Symbol::Invalid => None,
        }
    }

    /// Label shown in the pending-input preview
    pub fn glyph(self) -> String {
        match self {
            Symbol::Delete => "DEL".to_string(),
            Symbol::Invalid => String::new(),
            other => other.as_char().map(String::from).unwrap_or_default(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Digit(d) => write!(f, "{d}"),
            Symbol::Delete => f.write_str("delete"),
            Symbol::Separator => f.write_str("separator"),
            Symbol::Invalid => f.write_str("invalid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_digits() {
        let digits: Vec<_> = ["D", "UL", "U", "UR", "LU", "L", "LD", "RU", "R", "RD"]
            .iter()
            .map(|p| Symbol::from_pattern(p))
            .collect();
        let expected: Vec<_> = (0..=9).map(Symbol::Digit).collect();
        assert_eq!(digits, expected);
    }

    #[test]
    fn test_edit_symbols() {
        assert_eq!(Symbol::from_pattern("DL"), Symbol::Delete);
        assert_eq!(Symbol::from_pattern("DR"), Symbol::Separator);
    }

    #[test]
    fn test_unknown_patterns_are_invalid() {
        for pattern in ["", "LR", "UD", "ULD", "RUR", "u", "UU"] {
            assert_eq!(Symbol::from_pattern(pattern), Symbol::Invalid, "{pattern}");
        }
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Symbol::Digit(7).glyph(), "7");
        assert_eq!(Symbol::Separator.glyph(), ".");
        assert_eq!(Symbol::Delete.glyph(), "DEL");
        assert_eq!(Symbol::Invalid.glyph(), "");
    }
}
