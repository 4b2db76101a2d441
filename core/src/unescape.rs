use crate::error::ParseError;

// reads the four hex digits following a `\u`
fn parse_unicode_escape(chars_iter: &mut std::str::Chars<'_>) -> Result<u16, ParseError> {
    let mut code_unit: u32 = 0;
    for _ in 0..4 {
        let ch = chars_iter.next().ok_or(ParseError::UnterminatedEscape)?;
        let digit = ch.to_digit(16).ok_or(ParseError::InvalidUnicodeEscape)?;
        code_unit = code_unit * 16 + digit;
    }
    u16::try_from(code_unit).map_err(|_| ParseError::InvalidUnicodeEscape)
}

fn is_high_surrogate(code_unit: u16) -> bool {
    (0xd800..=0xdbff).contains(&code_unit)
}

fn is_low_surrogate(code_unit: u16) -> bool {
    (0xdc00..=0xdfff).contains(&code_unit)
}

// decodes a \uXXXX escape (after the `\u` has been consumed), including the
// second half of a surrogate pair where one is required
fn parse_unicode_char(chars_iter: &mut std::str::Chars<'_>) -> Result<char, ParseError> {
    let code_unit = parse_unicode_escape(chars_iter)?;
    if is_low_surrogate(code_unit) {
        return Err(ParseError::UnpairedSurrogate(code_unit));
    }
    if is_high_surrogate(code_unit) {
        // a high surrogate is only valid immediately before a low one
        if chars_iter.next() != Some('\\') || chars_iter.next() != Some('u') {
            return Err(ParseError::UnpairedSurrogate(code_unit));
        }
        let low = parse_unicode_escape(chars_iter)?;
        if !is_low_surrogate(low) {
            return Err(ParseError::UnpairedSurrogate(low));
        }
        let code_point =
            0x10000 + (u32::from(code_unit) - 0xd800) * 0x400 + (u32::from(low) - 0xdc00);
        return char::from_u32(code_point).ok_or(ParseError::InvalidUnicodeEscape);
    }
    char::from_u32(u32::from(code_unit)).ok_or(ParseError::InvalidUnicodeEscape)
}

pub(crate) fn unescape_string(input: &str) -> Result<String, ParseError> {
    let mut result = String::with_capacity(input.len());
    let mut chars_iter = input.chars();
    while let Some(ch) = chars_iter.next() {
        match ch {
            // inside a string literal these would terminate it early
            '"' => return Err(ParseError::UnescapedQuote),
            '\u{0}'..='\u{1f}' => return Err(ParseError::UnescapedControlCharacter(ch)),
            '\\' => {
                let next = chars_iter.next().ok_or(ParseError::UnterminatedEscape)?;
                let escaped_char = match next {
                    '"' => '"',
                    '\\' => '\\',
                    '/' => '/',
                    'b' => '\u{8}',  // backspace
                    'f' => '\u{c}',  // form feed
                    'n' => '\n',     // line feed
                    'r' => '\r',     // carriage return
                    't' => '\t',     // tab
                    'u' => parse_unicode_char(&mut chars_iter)?,
                    _ => return Err(ParseError::UnknownEscape(next)),
                };
                result.push(escaped_char);
            }
            _ => result.push(ch),
        }
    }
    Ok(result)
}
