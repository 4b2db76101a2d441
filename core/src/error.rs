use std::{error, fmt};

/// The reason an escaped string body failed to parse.
///
/// Only [`crate::unescape`] produces these; escaping never fails since
/// every code point has a defined mapping.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    UnterminatedEscape,
    UnknownEscape(char),
    InvalidUnicodeEscape,
    UnpairedSurrogate(u16),
    UnescapedControlCharacter(char),
    UnescapedQuote,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedEscape => {
                write!(f, "input ends in the middle of an escape sequence")
            }
            Self::UnknownEscape(ch) => write!(f, "unknown escape sequence: \\{ch}"),
            Self::InvalidUnicodeEscape => {
                write!(f, "invalid Unicode escape sequence, expected e.g. \\u00E9")
            }
            Self::UnpairedSurrogate(code_unit) => {
                write!(f, "unpaired surrogate in Unicode escape: \\u{code_unit:04X}")
            }
            Self::UnescapedControlCharacter(ch) => {
                write!(
                    f,
                    "unescaped control character (U+{:04X}) must be escaped",
                    u32::from(*ch)
                )
            }
            Self::UnescapedQuote => write!(f, "unescaped '\"' must be written as \\\""),
        }
    }
}

impl error::Error for ParseError {}
