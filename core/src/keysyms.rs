//! Keysym vocabulary used by the compose engine.
//!
//! Keysyms are platform-independent integers naming a logical key (the X11
//! numbering). This module provides the constants the engine refers to by
//! name, classification helpers (dead keys, pure modifiers) and conversion
//! between keysyms, Unicode characters and keysym names.

use crate::event::ModifierType;
use crate::keysym_data::{KEYSYM_TO_NAME, LEGACY_KEYSYM_TO_UNICODE, NAME_TO_KEYSYM};

pub const SPACE: u32 = 0x0020;
pub const U: u32 = 0x0055;

pub const BACKSPACE: u32 = 0xff08;
pub const TAB: u32 = 0xff09;
pub const RETURN: u32 = 0xff0d;
pub const ESCAPE: u32 = 0xff1b;
pub const DELETE: u32 = 0xffff;
pub const MULTI_KEY: u32 = 0xff20;
pub const MODE_SWITCH: u32 = 0xff7e;

pub const KP_SPACE: u32 = 0xff80;
pub const KP_TAB: u32 = 0xff89;
pub const KP_ENTER: u32 = 0xff8d;
pub const KP_EQUAL: u32 = 0xffbd;
pub const KP_MULTIPLY: u32 = 0xffaa;
pub const KP_DIVIDE: u32 = 0xffaf;
pub const KP_0: u32 = 0xffb0;
pub const KP_9: u32 = 0xffb9;

pub const ISO_LEVEL3_SHIFT: u32 = 0xfe03;
pub const ISO_ENTER: u32 = 0xfe34;

pub const SHIFT_L: u32 = 0xffe1;
pub const SHIFT_R: u32 = 0xffe2;
pub const CONTROL_L: u32 = 0xffe3;
pub const CONTROL_R: u32 = 0xffe4;
pub const CAPS_LOCK: u32 = 0xffe5;
pub const SHIFT_LOCK: u32 = 0xffe6;
pub const META_L: u32 = 0xffe7;
pub const META_R: u32 = 0xffe8;
pub const ALT_L: u32 = 0xffe9;
pub const ALT_R: u32 = 0xffea;
pub const SUPER_L: u32 = 0xffeb;
pub const SUPER_R: u32 = 0xffec;
pub const HYPER_L: u32 = 0xffed;
pub const HYPER_R: u32 = 0xffee;

pub const DEAD_GRAVE: u32 = 0xfe50;
pub const DEAD_ACUTE: u32 = 0xfe51;
pub const DEAD_CIRCUMFLEX: u32 = 0xfe52;
pub const DEAD_TILDE: u32 = 0xfe53;
pub const DEAD_MACRON: u32 = 0xfe54;
pub const DEAD_BREVE: u32 = 0xfe55;
pub const DEAD_ABOVEDOT: u32 = 0xfe56;
pub const DEAD_DIAERESIS: u32 = 0xfe57;
pub const DEAD_ABOVERING: u32 = 0xfe58;
pub const DEAD_DOUBLEACUTE: u32 = 0xfe59;
pub const DEAD_CARON: u32 = 0xfe5a;
pub const DEAD_CEDILLA: u32 = 0xfe5b;
pub const DEAD_OGONEK: u32 = 0xfe5c;
pub const DEAD_IOTA: u32 = 0xfe5d;
pub const DEAD_VOICED_SOUND: u32 = 0xfe5e;
pub const DEAD_SEMIVOICED_SOUND: u32 = 0xfe5f;
pub const DEAD_BELOWDOT: u32 = 0xfe60;
pub const DEAD_HOOK: u32 = 0xfe61;
pub const DEAD_HORN: u32 = 0xfe62;
pub const DEAD_STROKE: u32 = 0xfe63;
pub const DEAD_ABOVECOMMA: u32 = 0xfe64;
pub const DEAD_ABOVEREVERSEDCOMMA: u32 = 0xfe65;
/// Alias of `DEAD_ABOVECOMMA`.
pub const DEAD_PSILI: u32 = DEAD_ABOVECOMMA;
/// Alias of `DEAD_ABOVEREVERSEDCOMMA`.
pub const DEAD_DASIA: u32 = DEAD_ABOVEREVERSEDCOMMA;

/// Offset of the keysym block that encodes Unicode code points directly.
pub const UNICODE_KEYSYM_OFFSET: u32 = 0x0100_0000;

/// Keys that never take part in a compose sequence.
const COMPOSE_IGNORE: [u32; 16] = [
    SHIFT_L,
    SHIFT_R,
    CONTROL_L,
    CONTROL_R,
    CAPS_LOCK,
    SHIFT_LOCK,
    META_L,
    META_R,
    ALT_L,
    ALT_R,
    SUPER_L,
    SUPER_R,
    HYPER_L,
    HYPER_R,
    MODE_SWITCH,
    ISO_LEVEL3_SHIFT,
];

/// Whether `keyval` is a dead key.
///
/// The range ends one past `dead_dasia`: xserver 1.4 shipped dasia as 0xfe66
/// and layouts built against it still send that value.
pub fn is_dead_key(keyval: u32) -> bool {
    (DEAD_GRAVE..=DEAD_DASIA + 1).contains(&keyval)
}

/// Whether `keyval` is a pure modifier key that compose input ignores.
pub fn is_modifier_key(keyval: u32) -> bool {
    COMPOSE_IGNORE.contains(&keyval)
}

/// The modifier bit a modifier key sets while held.
///
/// `Mode_switch` and `ISO_Level3_Shift` map to no fixed bit and give `None`.
pub fn modifier_for_keyval(keyval: u32) -> Option<ModifierType> {
    match keyval {
        SHIFT_L | SHIFT_R => Some(ModifierType::SHIFT),
        CONTROL_L | CONTROL_R => Some(ModifierType::CONTROL),
        CAPS_LOCK | SHIFT_LOCK => Some(ModifierType::LOCK),
        ALT_L | ALT_R => Some(ModifierType::MOD1),
        SUPER_L | SUPER_R => Some(ModifierType::SUPER),
        HYPER_L | HYPER_R => Some(ModifierType::HYPER),
        META_L | META_R => Some(ModifierType::META),
        _ => None,
    }
}

/// Whether `keyval` terminates a hex sequence (space or one of the enter keys).
pub fn is_hex_end(keyval: u32) -> bool {
    matches!(keyval, SPACE | KP_SPACE | RETURN | ISO_ENTER | KP_ENTER)
}

/// Whether `keyval` is one of the enter keys.
pub fn is_enter(keyval: u32) -> bool {
    matches!(keyval, RETURN | ISO_ENTER | KP_ENTER)
}

/// Convert a keysym to the character it produces, if any.
///
/// Dead keys, modifiers and function keys have no character.
pub fn keyval_to_unicode(keyval: u32) -> Option<char> {
    match keyval {
        0x20..=0x7e | 0xa0..=0xff => char::from_u32(keyval),
        k if k & 0xff00_0000 == UNICODE_KEYSYM_OFFSET => char::from_u32(k & 0x00ff_ffff),
        BACKSPACE => Some('\u{8}'),
        TAB | KP_TAB => Some('\t'),
        RETURN | KP_ENTER => Some('\r'),
        ESCAPE => Some('\u{1b}'),
        DELETE => Some('\u{7f}'),
        KP_SPACE => Some(' '),
        KP_EQUAL => Some('='),
        // KP_Multiply .. KP_9 mirror '*' .. '9' in ASCII order.
        KP_MULTIPLY..=KP_9 => char::from_u32(keyval - KP_MULTIPLY + 0x2a),
        k if k <= 0xffff => {
            let k = k as u16;
            LEGACY_KEYSYM_TO_UNICODE
                .binary_search_by_key(&k, |&(sym, _)| sym)
                .ok()
                .and_then(|idx| char::from_u32(LEGACY_KEYSYM_TO_UNICODE[idx].1 as u32))
        }
        _ => None,
    }
}

/// Convert a character to the keysym that produces it.
///
/// Latin-1 and legacy charset characters map to their classic keysyms,
/// everything else to the direct Unicode keysym block.
pub fn unicode_to_keyval(ch: char) -> u32 {
    let cp = ch as u32;
    if (0x20..=0x7e).contains(&cp) || (0xa0..=0xff).contains(&cp) {
        return cp;
    }
    if cp <= 0xffff {
        if let Some(&(sym, _)) = LEGACY_KEYSYM_TO_UNICODE
            .iter()
            .find(|&&(_, code)| code as u32 == cp)
        {
            return sym as u32;
        }
    }
    cp | UNICODE_KEYSYM_OFFSET
}

/// Name of a keysym, e.g. `"dead_acute"` or `"eacute"`.
///
/// Direct Unicode keysyms without a name are rendered as `U<hex>`.
pub fn keyval_name(keyval: u32) -> Option<String> {
    if let Some(name) = KEYSYM_TO_NAME.get(&keyval) {
        return Some((*name).to_string());
    }
    if keyval & 0xff00_0000 == UNICODE_KEYSYM_OFFSET {
        return Some(format!("U{:04X}", keyval & 0x00ff_ffff));
    }
    None
}

/// Parse a keysym name. Accepts the symbolic names, `U<hex>` for direct
/// Unicode keysyms and `0x<hex>` for raw values.
pub fn keyval_from_name(name: &str) -> Option<u32> {
    if let Some(&value) = NAME_TO_KEYSYM.get(name) {
        return Some(value);
    }
    if let Some(hex) = name.strip_prefix("0x") {
        return u32::from_str_radix(hex, 16).ok();
    }
    if let Some(hex) = name.strip_prefix('U') {
        if !hex.is_empty() && hex.len() <= 6 {
            let cp = u32::from_str_radix(hex, 16).ok()?;
            return char::from_u32(cp).map(unicode_to_keyval);
        }
    }
    None
}

/// Render a keysym sequence for diagnostics, e.g. `[ dead_acute e ]`.
pub fn describe_sequence(keyvals: &[u32]) -> String {
    let mut out = String::from("[ ");
    for &keyval in keyvals {
        match keyval_name(keyval) {
            Some(name) => out.push_str(&name),
            None => out.push_str(&format!("{:04x}", keyval)),
        }
        out.push(' ');
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin1_and_unicode_keysyms() {
        assert_eq!(keyval_to_unicode(0x41), Some('A'));
        assert_eq!(keyval_to_unicode(0xe9), Some('é'));
        assert_eq!(keyval_to_unicode(0x0100_20ac), Some('€'));
        assert_eq!(keyval_to_unicode(DEAD_ACUTE), None);
        assert_eq!(keyval_to_unicode(SHIFT_L), None);
    }

    #[test]
    fn test_keypad_keysyms() {
        assert_eq!(keyval_to_unicode(KP_0), Some('0'));
        assert_eq!(keyval_to_unicode(KP_9), Some('9'));
        assert_eq!(keyval_to_unicode(KP_MULTIPLY), Some('*'));
        assert_eq!(keyval_to_unicode(KP_DIVIDE), Some('/'));
        assert_eq!(keyval_to_unicode(KP_SPACE), Some(' '));
    }

    #[test]
    fn test_legacy_blocks() {
        // Greek_alpha and Latin-2 Aogonek
        assert_eq!(keyval_to_unicode(0x07e1), Some('α'));
        assert_eq!(keyval_to_unicode(0x01a1), Some('Ą'));
        assert_eq!(unicode_to_keyval('α'), 0x07e1);
        assert_eq!(unicode_to_keyval('é'), 0xe9);
        assert_eq!(unicode_to_keyval('ế'), 0x0100_1ebf);
    }

    #[test]
    fn test_dead_key_range() {
        assert!(is_dead_key(DEAD_GRAVE));
        assert!(is_dead_key(DEAD_DASIA));
        assert!(is_dead_key(DEAD_DASIA + 1));
        assert!(!is_dead_key(DEAD_DASIA + 2));
        assert!(!is_dead_key(MULTI_KEY));
    }

    #[test]
    fn test_modifier_keys() {
        assert!(is_modifier_key(SHIFT_L));
        assert!(is_modifier_key(ISO_LEVEL3_SHIFT));
        assert!(!is_modifier_key(MULTI_KEY));
        assert!(!is_modifier_key(0x61));
    }

    #[test]
    fn test_modifier_bits() {
        assert_eq!(modifier_for_keyval(CONTROL_R), Some(ModifierType::CONTROL));
        assert_eq!(modifier_for_keyval(SHIFT_L), Some(ModifierType::SHIFT));
        assert_eq!(modifier_for_keyval(SUPER_L), Some(ModifierType::SUPER));
        assert_eq!(modifier_for_keyval(ALT_R), Some(ModifierType::MOD1));
        assert_eq!(modifier_for_keyval(ISO_LEVEL3_SHIFT), None);
        assert_eq!(modifier_for_keyval(0x61), None);
    }

    #[test]
    fn test_names_round_trip() {
        assert_eq!(keyval_from_name("dead_acute"), Some(DEAD_ACUTE));
        assert_eq!(keyval_from_name("Multi_key"), Some(MULTI_KEY));
        assert_eq!(keyval_from_name("quotedbl"), Some(0x22));
        assert_eq!(keyval_from_name("U20AC"), Some(0x20ac));
        assert_eq!(keyval_from_name("U1EBF"), Some(0x0100_1ebf));
        assert_eq!(keyval_from_name("0xfe51"), Some(DEAD_ACUTE));
        assert_eq!(keyval_from_name("no_such_key"), None);
        assert_eq!(keyval_name(DEAD_ACUTE).as_deref(), Some("dead_acute"));
        assert_eq!(keyval_name(0x0100_1ebf).as_deref(), Some("U1EBF"));
    }

    #[test]
    fn test_describe_sequence() {
        assert_eq!(describe_sequence(&[DEAD_ACUTE, 0x65]), "[ dead_acute e ]");
    }
}
