//! Ctrl+Shift+U hex code point entry.

use libcompose_core::keysyms::*;
use libcompose_core::{
    ComposeContext, ComposeEngine, ComposeEvent, ComposeState, ComposeTableStore, Config,
    KeyEvent, ModifierType,
};
use std::sync::Arc;

fn engine() -> ComposeEngine<ComposeContext> {
    ComposeEngine::with_context(Arc::new(ComposeTableStore::with_builtin()), Config::default())
}

fn held() -> ModifierType {
    ModifierType::CONTROL | ModifierType::SHIFT
}

fn start(e: &mut ComposeEngine<ComposeContext>) {
    assert!(e.filter_key_event(KeyEvent::press(U).with_state(held())));
}

fn digits(e: &mut ComposeEngine<ComposeContext>, s: &str, state: ModifierType) {
    for ch in s.chars() {
        assert!(e.filter_key_event(KeyEvent::press(unicode_to_keyval(ch)).with_state(state)));
    }
}

#[test]
fn test_hex_roundtrip_with_return() {
    let mut e = engine();
    start(&mut e);
    digits(&mut e, "0041", held());
    assert!(e.filter_key_event(KeyEvent::press(RETURN).with_state(held())));

    assert_eq!(
        e.context().events,
        vec![
            ComposeEvent::PreeditStart,
            ComposeEvent::PreeditChanged { text: "u".into(), cursor: 1 },
            ComposeEvent::PreeditChanged { text: "u0".into(), cursor: 2 },
            ComposeEvent::PreeditChanged { text: "u00".into(), cursor: 3 },
            ComposeEvent::PreeditChanged { text: "u004".into(), cursor: 4 },
            ComposeEvent::PreeditChanged { text: "u0041".into(), cursor: 5 },
            ComposeEvent::PreeditChanged { text: String::new(), cursor: 0 },
            ComposeEvent::PreeditEnd,
            ComposeEvent::Commit("A".into()),
        ]
    );
    assert_eq!(e.state(), ComposeState::Idle);
}

#[test]
fn test_release_commits_astral_value() {
    let mut e = engine();
    start(&mut e);
    digits(&mut e, "1f600", held());
    assert!(e.filter_key_event(KeyEvent::release(SHIFT_R).with_state(held())));
    assert_eq!(e.context_mut().take_commit(), "😀");
}

#[test]
fn test_release_with_invalid_value_bells() {
    let mut e = engine();
    start(&mut e);
    digits(&mut e, "d800", held());
    assert!(e.filter_key_event(KeyEvent::release(CONTROL_L).with_state(held())));
    assert_eq!(e.context().bells, 1);
    assert!(!e.context().has_commit());
    assert_eq!(e.state(), ComposeState::Idle);
    assert_eq!(e.context().events.last(), Some(&ComposeEvent::PreeditEnd));
}

#[test]
fn test_release_of_other_keys_is_ignored() {
    let mut e = engine();
    start(&mut e);
    assert!(!e.filter_key_event(KeyEvent::release(U).with_state(held())));
    assert!(!e.filter_key_event(KeyEvent::release(ALT_L).with_state(held())));
    assert_eq!(e.state(), ComposeState::HexEntry);
}

#[test]
fn test_digits_after_releasing_modifiers() {
    let mut e = engine();
    start(&mut e);
    assert!(e.filter_key_event(KeyEvent::release(CONTROL_L).with_state(held())));
    digits(&mut e, "3b1", ModifierType::empty());
    assert_eq!(e.preedit().text, "u3b1");
    assert!(e.filter_key_event(KeyEvent::press(SPACE)));
    assert_eq!(e.context_mut().take_commit(), "α");
}

#[test]
fn test_escape_abandons_hex_entry() {
    let mut e = engine();
    start(&mut e);
    digits(&mut e, "41", held());
    assert!(e.filter_key_event(KeyEvent::press(ESCAPE).with_state(held())));
    assert_eq!(e.state(), ComposeState::Idle);
    assert!(!e.context().has_commit());
    assert_eq!(e.context().bells, 0);
}

#[test]
fn test_restart_with_invalid_digits_bells() {
    let mut e = engine();
    start(&mut e);
    digits(&mut e, "0", held());
    assert!(e.filter_key_event(KeyEvent::press(U).with_state(held())));
    assert_eq!(e.context().bells, 1);
    assert_eq!(e.state(), ComposeState::HexEntry);
    assert_eq!(e.preedit().text, "u");
}

#[test]
fn test_digit_overflow_is_rejected() {
    let mut e = engine();
    start(&mut e);
    digits(&mut e, "0000041", held());
    assert!(e.filter_key_event(KeyEvent::press(0x31).with_state(held())));
    assert_eq!(e.context().bells, 1);
    assert_eq!(e.preedit().text, "u0000041");
    assert!(e.filter_key_event(KeyEvent::press(SPACE).with_state(held())));
    assert_eq!(e.context_mut().take_commit(), "A");
}

#[test]
fn test_custom_trigger() {
    let config = Config {
        hex_start_keysym: 0x75,
        hex_modifiers: ModifierType::SUPER,
        ..Config::default()
    };
    let mut e = ComposeEngine::with_context(Arc::new(ComposeTableStore::new()), config);
    assert!(e.filter_key_event(KeyEvent::press(0x75).with_state(ModifierType::SUPER)));
    assert_eq!(e.state(), ComposeState::HexEntry);
    digits(&mut e, "e9", ModifierType::SUPER);
    assert!(e.filter_key_event(KeyEvent::press(KP_ENTER).with_state(ModifierType::SUPER)));
    assert_eq!(e.context_mut().take_commit(), "é");

    // letting go of Super commits what was typed
    assert!(e.filter_key_event(KeyEvent::press(0x75).with_state(ModifierType::SUPER)));
    digits(&mut e, "e8", ModifierType::SUPER);
    assert!(e.filter_key_event(KeyEvent::release(SUPER_L).with_state(ModifierType::SUPER)));
    assert_eq!(e.context_mut().take_commit(), "è");
    assert_eq!(e.state(), ComposeState::Idle);
}

#[test]
fn test_release_outside_trigger_is_ignored() {
    let config = Config {
        hex_start_keysym: 0x75,
        hex_modifiers: ModifierType::SUPER,
        ..Config::default()
    };
    let mut e = ComposeEngine::with_context(Arc::new(ComposeTableStore::new()), config);
    assert!(e.filter_key_event(KeyEvent::press(0x75).with_state(ModifierType::SUPER)));
    digits(&mut e, "4", ModifierType::SUPER);

    assert!(!e.filter_key_event(KeyEvent::release(SHIFT_L).with_state(ModifierType::SUPER)));
    assert!(!e.filter_key_event(KeyEvent::release(CONTROL_R).with_state(ModifierType::SUPER)));
    assert_eq!(e.state(), ComposeState::HexEntry);
    assert_eq!(e.preedit().text, "u4");
    assert!(!e.context().has_commit());
}

#[test]
fn test_control_characters_can_be_entered() {
    let mut e = engine();
    start(&mut e);
    digits(&mut e, "1b", held());
    assert!(e.filter_key_event(KeyEvent::press(SPACE).with_state(held())));
    assert_eq!(e.context_mut().take_commit(), "\u{1b}");

    start(&mut e);
    digits(&mut e, "4", held());
    assert!(e.filter_key_event(KeyEvent::release(SHIFT_L).with_state(held())));
    assert_eq!(e.context_mut().take_commit(), "\u{4}");
    assert_eq!(e.context().bells, 0);
}

#[test]
fn test_extra_modifiers_still_start_entry() {
    let mut e = engine();
    let state = held() | ModifierType::MOD1;
    assert!(e.filter_key_event(KeyEvent::press(U).with_state(state)));
    assert_eq!(e.state(), ComposeState::HexEntry);
    digits(&mut e, "e9", state);
    assert!(e.filter_key_event(KeyEvent::press(SPACE).with_state(state)));
    assert_eq!(e.context_mut().take_commit(), "é");
}
