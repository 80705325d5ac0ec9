//! Platform overlay hooks.
//!
//! An overlay reproduces a platform's exceptions to the generic compose
//! rules. Overlays are consulted in order after the registered flat tables
//! and before the built-in table; the first one that matches wins.

use crate::error::{ComposeError, Result};
use crate::keysyms::*;

/// A platform-specific matching rule.
pub trait ComposeOverlay: Send + Sync {
    /// Short name used in configuration files.
    fn name(&self) -> &'static str;

    /// Return the code point to commit for `keys`, or `None` to defer.
    fn try_match(&self, keys: &[u32]) -> Option<u32>;
}

/// Windows behaviour: a dead accent followed by space gives the spacing
/// accent rather than the ASCII look-alike.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32SpacingAccents;

impl ComposeOverlay for Win32SpacingAccents {
    fn name(&self) -> &'static str {
        "win32"
    }

    fn try_match(&self, keys: &[u32]) -> Option<u32> {
        match keys {
            [DEAD_ACUTE, SPACE] => Some(0x00b4),
            [DEAD_DIAERESIS, SPACE] => Some(0x00a8),
            _ => None,
        }
    }
}

/// macOS behaviour: the double-acute dead key doubles as the umlaut key, and
/// acute + c gives c-cedilla.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuartzDeadKeys;

impl ComposeOverlay for QuartzDeadKeys {
    fn name(&self) -> &'static str {
        "quartz"
    }

    fn try_match(&self, keys: &[u32]) -> Option<u32> {
        let &[first, second] = keys else {
            return None;
        };
        match first {
            DEAD_DOUBLEACUTE => match second {
                DEAD_DOUBLEACUTE | SPACE => Some('"' as u32),
                _ => {
                    let base = char::from_u32(second)?;
                    let umlaut = match base {
                        'a' => 'ä',
                        'A' => 'Ä',
                        'e' => 'ë',
                        'E' => 'Ë',
                        'i' => 'ï',
                        'I' => 'Ï',
                        'o' => 'ö',
                        'O' => 'Ö',
                        'u' => 'ü',
                        'U' => 'Ü',
                        'y' => 'ÿ',
                        'Y' => 'Ÿ',
                        _ => return None,
                    };
                    Some(umlaut as u32)
                }
            },
            DEAD_ACUTE => match second {
                0x63 => Some('ç' as u32),
                0x43 => Some('Ç' as u32),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Typing the same dead key twice gives its spacing accent.
#[derive(Debug, Default, Clone, Copy)]
pub struct RepeatedDeadKey;

impl ComposeOverlay for RepeatedDeadKey {
    fn name(&self) -> &'static str {
        "repeated-dead-key"
    }

    fn try_match(&self, keys: &[u32]) -> Option<u32> {
        match keys {
            &[a, b] if a == b && is_dead_key(a) => spacing_accent(a).map(|c| c as u32),
            _ => None,
        }
    }
}

/// Spacing form of a dead key's accent.
pub fn spacing_accent(dead_key: u32) -> Option<char> {
    let accent = match dead_key {
        DEAD_GRAVE => '`',
        DEAD_ACUTE => '\u{b4}',
        DEAD_CIRCUMFLEX => '^',
        DEAD_TILDE => '~',
        DEAD_MACRON => '\u{af}',
        DEAD_BREVE => '\u{2d8}',
        DEAD_ABOVEDOT => '\u{2d9}',
        DEAD_DIAERESIS => '\u{a8}',
        DEAD_ABOVERING => '\u{2da}',
        DEAD_DOUBLEACUTE => '\u{2dd}',
        DEAD_CARON => '\u{2c7}',
        DEAD_CEDILLA => '\u{b8}',
        DEAD_OGONEK => '\u{2db}',
        DEAD_IOTA => '\u{37a}',
        DEAD_VOICED_SOUND => '\u{309b}',
        DEAD_SEMIVOICED_SOUND => '\u{309c}',
        _ => return None,
    };
    Some(accent)
}

/// Resolve an overlay by its configuration name.
pub fn overlay_by_name(name: &str) -> Result<Box<dyn ComposeOverlay>> {
    match name {
        "win32" => Ok(Box::new(Win32SpacingAccents)),
        "quartz" => Ok(Box::new(QuartzDeadKeys)),
        "repeated-dead-key" => Ok(Box::new(RepeatedDeadKey)),
        other => Err(ComposeError::UnknownOverlay(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win32() {
        let o = Win32SpacingAccents;
        assert_eq!(o.try_match(&[DEAD_ACUTE, SPACE]), Some(0xb4));
        assert_eq!(o.try_match(&[DEAD_DIAERESIS, SPACE]), Some(0xa8));
        assert_eq!(o.try_match(&[DEAD_GRAVE, SPACE]), None);
        assert_eq!(o.try_match(&[DEAD_ACUTE]), None);
    }

    #[test]
    fn test_quartz() {
        let o = QuartzDeadKeys;
        assert_eq!(o.try_match(&[DEAD_DOUBLEACUTE, SPACE]), Some('"' as u32));
        assert_eq!(
            o.try_match(&[DEAD_DOUBLEACUTE, DEAD_DOUBLEACUTE]),
            Some('"' as u32)
        );
        assert_eq!(o.try_match(&[DEAD_DOUBLEACUTE, 0x6f]), Some('ö' as u32));
        assert_eq!(o.try_match(&[DEAD_DOUBLEACUTE, 0x59]), Some(0x178));
        assert_eq!(o.try_match(&[DEAD_ACUTE, 0x63]), Some('ç' as u32));
        assert_eq!(o.try_match(&[DEAD_ACUTE, 0x65]), None);
        assert_eq!(o.try_match(&[DEAD_DOUBLEACUTE, 0x62]), None);
    }

    #[test]
    fn test_repeated_dead_key() {
        let o = RepeatedDeadKey;
        assert_eq!(o.try_match(&[DEAD_GRAVE, DEAD_GRAVE]), Some('`' as u32));
        assert_eq!(o.try_match(&[DEAD_CARON, DEAD_CARON]), Some(0x2c7));
        assert_eq!(o.try_match(&[DEAD_GRAVE, DEAD_ACUTE]), None);
        assert_eq!(o.try_match(&[0x61, 0x61]), None);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(overlay_by_name("quartz").unwrap().name(), "quartz");
        assert!(matches!(
            overlay_by_name("beos"),
            Err(ComposeError::UnknownOverlay(_))
        ));
    }
}
