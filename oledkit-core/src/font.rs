//! Proportional bitmap font
//!
//! One entry per printable ASCII code from 32 (space) to 127, where 127
//! holds a degree sign instead of DEL. Each byte is one column of the
//! glyph, most significant bit at the top; the text engine reverses the
//! bits to match the framebuffer's top-is-bit-0 layout.

/// First code point in the table
pub const FIRST_CHAR: u8 = 32;

/// Last code point in the table
pub const LAST_CHAR: u8 = 127;

/// Code point rendered as a degree sign
pub const DEGREE_SIGN: char = '\u{7f}';

/// Column data for codes 32..=127
pub static GLYPHS: [&[u8]; 96] = [
    &[0x00, 0x00], // ' '
    &[0xfa], // '!'
    &[0xe0, 0xc0, 0x00, 0xe0, 0xc0], // '"'
    &[0x24, 0x7e, 0x24, 0x7e, 0x24], // '#'
    &[0x24, 0xd4, 0x56, 0x48], // '$'
    &[0xc6, 0xc8, 0x10, 0x26, 0xc6], // '%'
    &[0x6c, 0x92, 0x6a, 0x04, 0x0a], // '&'
    &[0xc0], // '\''
    &[0x7c, 0x82], // '('
    &[0x82, 0x7c], // ')'
    &[0x10, 0x7c, 0x38, 0x7c, 0x10], // '*'
    &[0x10, 0x10, 0x7c, 0x10, 0x10], // '+'
    &[0x06, 0x07], // ','
    &[0x10, 0x10, 0x10, 0x10, 0x10], // '-'
    &[0x06, 0x06], // '.'
    &[0x04, 0x08, 0x10, 0x20, 0x40], // '/'
    &[0x7c, 0x8a, 0x92, 0xa2, 0x7c], // '0'
    &[0x42, 0xfe, 0x02], // '1'
    &[0x46, 0x8a, 0x92, 0x92, 0x62], // '2'
    &[0x44, 0x92, 0x92, 0x92, 0x6c], // '3'
    &[0x18, 0x28, 0x48, 0xfe, 0x08], // '4'
    &[0xf4, 0x92, 0x92, 0x92, 0x8c], // '5'
    &[0x3c, 0x52, 0x92, 0x92, 0x8c], // '6'
    &[0x80, 0x8e, 0x90, 0xa0, 0xc0], // '7'
    &[0x6c, 0x92, 0x92, 0x92, 0x6c], // '8'
    &[0x60, 0x92, 0x92, 0x94, 0x78], // '9'
    &[0x36, 0x36], // ':'
    &[0x36, 0x37], // ';'
    &[0x10, 0x28, 0x44, 0x82], // '<'
    &[0x24, 0x24, 0x24, 0x24, 0x24], // '='
    &[0x82, 0x44, 0x28, 0x10], // '>'
    &[0x60, 0x80, 0x9a, 0x90, 0x60], // '?'
    &[0x7c, 0x82, 0xba, 0xaa, 0x78], // '@'
    &[0x7e, 0x90, 0x90, 0x90, 0x7e], // 'A'
    &[0xfe, 0x92, 0x92, 0x92, 0x6c], // 'B'
    &[0x7c, 0x82, 0x82, 0x82, 0x44], // 'C'
    &[0xfe, 0x82, 0x82, 0x82, 0x7c], // 'D'
    &[0xfe, 0x92, 0x92, 0x92, 0x82], // 'E'
    &[0xfe, 0x90, 0x90, 0x90, 0x80], // 'F'
    &[0x7c, 0x82, 0x92, 0x92, 0x5c], // 'G'
    &[0xfe, 0x10, 0x10, 0x10, 0xfe], // 'H'
    &[0x82, 0xfe, 0x82], // 'I'
    &[0x0c, 0x02, 0x02, 0x02, 0xfc], // 'J'
    &[0xfe, 0x10, 0x28, 0x44, 0x82], // 'K'
    &[0xfe, 0x02, 0x02, 0x02, 0x02], // 'L'
    &[0xfe, 0x40, 0x20, 0x40, 0xfe], // 'M'
    &[0xfe, 0x40, 0x20, 0x10, 0xfe], // 'N'
    &[0x7c, 0x82, 0x82, 0x82, 0x7c], // 'O'
    &[0xfe, 0x90, 0x90, 0x90, 0x60], // 'P'
    &[0x7c, 0x82, 0x92, 0x8c, 0x7a], // 'Q'
    &[0xfe, 0x90, 0x90, 0x98, 0x66], // 'R'
    &[0x64, 0x92, 0x92, 0x92, 0x4c], // 'S'
    &[0x80, 0x80, 0xfe, 0x80, 0x80], // 'T'
    &[0xfc, 0x02, 0x02, 0x02, 0xfc], // 'U'
    &[0xf8, 0x04, 0x02, 0x04, 0xf8], // 'V'
    &[0xfc, 0x02, 0x3c, 0x02, 0xfc], // 'W'
    &[0xc6, 0x28, 0x10, 0x28, 0xc6], // 'X'
    &[0xe0, 0x10, 0x0e, 0x10, 0xe0], // 'Y'
    &[0x86, 0x8a, 0x92, 0xa2, 0xc2], // 'Z'
    &[0xfe, 0x82, 0x82], // '['
    &[0x40, 0x20, 0x10, 0x08, 0x04], // '\\'
    &[0x82, 0x82, 0xfe], // ']'
    &[0x20, 0x40, 0x80, 0x40, 0x20], // '^'
    &[0x02, 0x02, 0x02, 0x02, 0x02], // '_'
    &[0xc0, 0xe0], // '`'
    &[0x04, 0x2a, 0x2a, 0x2a, 0x1e], // 'a'
    &[0xfe, 0x22, 0x22, 0x22, 0x1c], // 'b'
    &[0x1c, 0x22, 0x22, 0x22], // 'c'
    &[0x1c, 0x22, 0x22, 0x22, 0xfc], // 'd'
    &[0x1c, 0x2a, 0x2a, 0x2a, 0x10], // 'e'
    &[0x10, 0x7e, 0x90, 0x90, 0x80], // 'f'
    &[0x18, 0x25, 0x25, 0x25, 0x3e], // 'g'
    &[0xfe, 0x20, 0x20, 0x20, 0x1e], // 'h'
    &[0xbe, 0x02], // 'i'
    &[0x02, 0x01, 0x01, 0x21, 0xbe], // 'j'
    &[0xfe, 0x08, 0x14, 0x22], // 'k'
    &[0xfe, 0x02], // 'l'
    &[0x3e, 0x20, 0x18, 0x20, 0x1e], // 'm'
    &[0x3e, 0x20, 0x20, 0x20, 0x1e], // 'n'
    &[0x1c, 0x22, 0x22, 0x22, 0x1c], // 'o'
    &[0x3f, 0x22, 0x22, 0x22, 0x1c], // 'p'
    &[0x1c, 0x22, 0x22, 0x22, 0x3f], // 'q'
    &[0x22, 0x1e, 0x22, 0x20, 0x10], // 'r'
    &[0x12, 0x2a, 0x2a, 0x2a, 0x04], // 's'
    &[0x20, 0x7c, 0x22, 0x22, 0x04], // 't'
    &[0x3c, 0x02, 0x02, 0x3e], // 'u'
    &[0x38, 0x04, 0x02, 0x04, 0x38], // 'v'
    &[0x3c, 0x06, 0x0c, 0x06, 0x3c], // 'w'
    &[0x22, 0x14, 0x08, 0x14, 0x22], // 'x'
    &[0x39, 0x05, 0x06, 0x3c], // 'y'
    &[0x26, 0x2a, 0x2a, 0x32], // 'z'
    &[0x10, 0x7c, 0x82, 0x82], // '{'
    &[0xee], // '|'
    &[0x82, 0x82, 0x7c, 0x10], // '}'
    &[0x40, 0x80, 0x40, 0x80], // '~'
    &[0x60, 0x90, 0x90, 0x60], // degree sign (replaces DEL)
];

/// Columns for `ch`; characters outside the table render as a space
pub fn glyph(ch: char) -> &'static [u8] {
    let code = ch as u32;
    if (FIRST_CHAR as u32..=LAST_CHAR as u32).contains(&code) {
        GLYPHS[(code - FIRST_CHAR as u32) as usize]
    } else {
        GLYPHS[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_glyph_has_columns() {
        assert!(GLYPHS.iter().all(|g| !g.is_empty() && g.len() <= 5));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(glyph(' '), &[0x00, 0x00]);
        assert_eq!(glyph('!'), &[0xfa]);
        assert_eq!(glyph('A'), &[0x7e, 0x90, 0x90, 0x90, 0x7e]);
        assert_eq!(glyph(DEGREE_SIGN), &[0x60, 0x90, 0x90, 0x60]);
    }

    #[test]
    fn test_double_quote_is_two_ticks() {
        assert_eq!(glyph('"'), &[0xe0, 0xc0, 0x00, 0xe0, 0xc0]);
    }

    #[test]
    fn test_unknown_chars_map_to_space() {
        assert_eq!(glyph('\n'), glyph(' '));
        assert_eq!(glyph('é'), glyph(' '));
        assert_eq!(glyph('\u{80}'), glyph(' '));
    }
}
