#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(elided_lifetimes_in_paths)]

//! Converts plain text to its JSON-string-literal escaped form and back.
//! The escaped form carries no surrounding quotes: it is the *body* of a
//! JSON string literal, suitable for pasting between a pair of double
//! quotes in a JSON document.
//!
//! ```rust
//! assert_eq!(jsonesc_core::escape("a\nb"), "a\\nb");
//! assert_eq!(jsonesc_core::unescape("a\\nb").unwrap(), "a\nb");
//! ```

mod error;
mod escape;
mod unescape;

pub use error::ParseError;

/// Escapes `input` so that wrapping the result in double quotes yields a
/// valid JSON string literal whose value is `input`.
///
/// The output is pure ASCII: every character outside the printable ASCII
/// range (and every control character) becomes a `\uXXXX` escape, one per
/// UTF-16 code unit, so characters outside the Basic Multilingual Plane
/// produce a pair of escapes. Forward slashes are escaped as `\/`.
///
/// This function never fails; empty input yields empty output.
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    escape::escape_string(input, &mut out);
    out
}

/// Decodes the body of a JSON string literal back into plain text.
///
/// `input` is interpreted as if it were wrapped in double quotes and
/// parsed under the JSON string-literal grammar: the named escapes
/// `\" \\ \/ \b \f \n \r \t`, `\uXXXX` escapes, and surrogate-pair
/// reassembly for code points above the Basic Multilingual Plane.
///
/// # Errors
///
/// Returns a [`ParseError`] when `input` is not a valid escaped string
/// body: an unknown or unterminated escape sequence, invalid `\uXXXX`
/// digits, an unpaired surrogate, a raw control character, or a stray
/// unescaped quote.
pub fn unescape(input: &str) -> Result<String, ParseError> {
    unescape::unescape_string(input)
}

/// Returns the current version of jsonesc-core.
#[must_use]
pub fn get_version() -> String {
    "0.1.0".to_string()
}
