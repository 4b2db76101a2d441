fn to_hex_upper(n: u16) -> char {
    match n {
        0 => '0',
        1 => '1',
        2 => '2',
        3 => '3',
        4 => '4',
        5 => '5',
        6 => '6',
        7 => '7',
        8 => '8',
        9 => '9',
        10 => 'A',
        11 => 'B',
        12 => 'C',
        13 => 'D',
        14 => 'E',
        15 => 'F',
        _ => panic!("{n} is not a hex digit (0..16)"),
    }
}

pub(crate) fn escape_string(input: &str, out: &mut String) {
    for ch in input.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '/' => out.push_str("\\/"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x20'..='\x7e' => out.push(ch),
            _ => {
                // one escape per UTF-16 code unit, so astral characters
                // become a surrogate pair of two \uXXXX sequences
                let mut buf = [0; 2];
                for &mut code_unit in ch.encode_utf16(&mut buf) {
                    out.push_str("\\u");
                    out.push(to_hex_upper(code_unit / 0x1000));
                    out.push(to_hex_upper(code_unit % 0x1000 / 0x100));
                    out.push(to_hex_upper(code_unit % 0x100 / 0x10));
                    out.push(to_hex_upper(code_unit % 0x10));
                }
            }
        }
    }
}
