//! Key events as delivered by the embedding widget.

use bitflags::bitflags;

bitflags! {
    /// Modifier state carried by a key event.
    ///
    /// Serializes as a `"CONTROL | SHIFT"` style string in human-readable
    /// formats, which is what configuration files use.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct ModifierType: u32 {
        const SHIFT = 1 << 0;
        const LOCK = 1 << 1;
        const CONTROL = 1 << 2;
        const MOD1 = 1 << 3;
        const MOD2 = 1 << 4;
        const MOD3 = 1 << 5;
        const MOD4 = 1 << 6;
        const MOD5 = 1 << 7;
        const SUPER = 1 << 26;
        const HYPER = 1 << 27;
        const META = 1 << 28;
    }
}

/// Whether the key went down or came up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    Press,
    Release,
}

/// A single raw key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Logical key (keysym), see [`crate::keysyms`]
    pub keyval: u32,
    /// Hardware scan code, used to find alternative keysyms for the same key
    pub hardware_keycode: u16,
    /// Modifiers held when the event was generated
    pub state: ModifierType,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A key press with no modifiers.
    pub fn press(keyval: u32) -> Self {
        Self {
            keyval,
            hardware_keycode: 0,
            state: ModifierType::empty(),
            kind: KeyEventKind::Press,
        }
    }

    /// A key release with no modifiers.
    pub fn release(keyval: u32) -> Self {
        Self {
            kind: KeyEventKind::Release,
            ..Self::press(keyval)
        }
    }

    pub fn with_state(mut self, state: ModifierType) -> Self {
        self.state = state;
        self
    }

    pub fn with_keycode(mut self, hardware_keycode: u16) -> Self {
        self.hardware_keycode = hardware_keycode;
        self
    }

    pub fn is_press(&self) -> bool {
        self.kind == KeyEventKind::Press
    }

    /// Copy of this event carrying a different keysym.
    pub(crate) fn with_keyval(mut self, keyval: u32) -> Self {
        self.keyval = keyval;
        self
    }
}

/// Access to the keyboard layout, used to recover hex digits typed while
/// modifiers change the produced keysym (Shift+1 giving `exclam`, say).
pub trait Keymap {
    /// All keysyms the given hardware key can produce, across levels and groups.
    fn entries_for_keycode(&self, hardware_keycode: u16) -> Vec<u32>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let ev = KeyEvent::press(0x61)
            .with_state(ModifierType::CONTROL | ModifierType::SHIFT)
            .with_keycode(38);
        assert!(ev.is_press());
        assert_eq!(ev.hardware_keycode, 38);
        assert!(ev.state.contains(ModifierType::CONTROL));

        let rel = KeyEvent::release(0x61);
        assert!(!rel.is_press());
        assert!(rel.state.is_empty());
    }

    #[test]
    fn test_modifier_mask_toml_form() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            mods: ModifierType,
        }
        let w: Wrapper = toml::from_str("mods = \"CONTROL | SHIFT\"").expect("parse mask");
        assert_eq!(w.mods, ModifierType::CONTROL | ModifierType::SHIFT);
    }
}
