//! Hexadecimal code point entry.

use crate::keysyms;

/// Result of parsing the digits typed in hex mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexParse {
    /// A key in the buffer is not a hex digit.
    NotHex,
    /// Only hex digits, but they do not (yet) name a character.
    Pending,
    /// The digits name this character.
    Value(char),
}

/// The hex digit a keysym produces, if any.
pub fn hex_digit(keyval: u32) -> Option<u32> {
    keysyms::keyval_to_unicode(keyval)
        .filter(|c| c.is_ascii_hexdigit())
        .and_then(|c| c.to_digit(16))
}

/// Parse buffered keysyms as a hexadecimal code point.
///
/// U+0000 and values that are not Unicode scalar values are `Pending`, since
/// the digits may still be edited into something valid.
pub fn parse_hex(keys: &[u32]) -> HexParse {
    let mut value: u32 = 0;
    let mut overflow = false;
    for &k in keys {
        let Some(digit) = hex_digit(k) else {
            return HexParse::NotHex;
        };
        match value.checked_mul(16).and_then(|v| v.checked_add(digit)) {
            Some(v) => value = v,
            None => overflow = true,
        }
    }

    if overflow || value == 0 {
        return HexParse::Pending;
    }
    match char::from_u32(value) {
        Some(ch) => HexParse::Value(ch),
        None => HexParse::Pending,
    }
}

/// Preedit text for hex mode: `u` followed by the typed digits.
pub fn hex_preedit(keys: &[u32]) -> String {
    let mut text = String::with_capacity(keys.len() + 1);
    text.push('u');
    text.extend(keys.iter().filter_map(|&k| keysyms::keyval_to_unicode(k)));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keysyms::unicode_to_keyval;

    fn keys(s: &str) -> Vec<u32> {
        s.chars().map(unicode_to_keyval).collect()
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_hex(&keys("41")), HexParse::Value('A'));
        assert_eq!(parse_hex(&keys("0041")), HexParse::Value('A'));
        assert_eq!(parse_hex(&keys("1F600")), HexParse::Value('😀'));
        assert_eq!(parse_hex(&keys("e9")), HexParse::Value('é'));
    }

    #[test]
    fn test_pending_values() {
        assert_eq!(parse_hex(&[]), HexParse::Pending);
        assert_eq!(parse_hex(&keys("0")), HexParse::Pending);
        // surrogate
        assert_eq!(parse_hex(&keys("d800")), HexParse::Pending);
        // beyond U+10FFFF
        assert_eq!(parse_hex(&keys("110000")), HexParse::Pending);
    }

    #[test]
    fn test_non_hex_key() {
        assert_eq!(parse_hex(&keys("4g")), HexParse::NotHex);
        assert_eq!(parse_hex(&[keysyms::DEAD_ACUTE]), HexParse::NotHex);
        assert_eq!(parse_hex(&[keysyms::KP_0 + 4, 0x31]), HexParse::Value('A'));
    }

    #[test]
    fn test_preedit() {
        assert_eq!(hex_preedit(&[]), "u");
        assert_eq!(hex_preedit(&keys("00e")), "u00e");
    }
}
