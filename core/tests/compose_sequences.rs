//! End-to-end behaviour of compose sequences through the public API.
//!
//! Every test drives a `ComposeEngine` with key presses and inspects the
//! notifications recorded by its `ComposeContext`.

use libcompose_core::keysyms::*;
use libcompose_core::{
    ComposeContext, ComposeEngine, ComposeEvent, ComposeState, ComposeTable, ComposeTableStore,
    Config,
};
use std::sync::Arc;

const MULTI: u32 = MULTI_KEY;

/// Store holding only the given table (plus the algorithmic fallback).
fn store_with(entries: &[(&[u32], char)], max_seq_len: usize) -> Arc<ComposeTableStore> {
    let (table, skipped) = ComposeTable::from_entries(
        entries.iter().map(|(seq, ch)| (seq.to_vec(), *ch as u32)),
        max_seq_len,
    )
    .unwrap();
    assert_eq!(skipped, 0);
    let mut store = ComposeTableStore::new();
    store.add_compose_table(table);
    Arc::new(store)
}

fn engine(store: Arc<ComposeTableStore>) -> ComposeEngine<ComposeContext> {
    ComposeEngine::with_context(store, Config::default())
}

fn type_keys(engine: &mut ComposeEngine<ComposeContext>, keys: &[u32]) {
    for &k in keys {
        engine.filter_key_event(libcompose_core::KeyEvent::press(k));
    }
}

fn commits(ctx: &ComposeContext) -> Vec<String> {
    ctx.events
        .iter()
        .filter_map(|e| match e {
            ComposeEvent::Commit(s) => Some(s.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_every_unextended_row_commits_once() {
    let entries: &[(&[u32], char)] = &[
        (&[DEAD_ACUTE, 0x65], 'é'),
        (&[DEAD_GRAVE, 0x61], 'à'),
        (&[MULTI, 0x6f, 0x63], '©'),
        (&[MULTI, 0x3d, 0x65], '€'),
        (&[MULTI, 0x2d, 0x2d, 0x2d], '—'),
    ];
    let store = store_with(entries, 4);

    for (seq, ch) in entries {
        let mut e = engine(store.clone());
        type_keys(&mut e, seq);
        assert_eq!(commits(e.context()), vec![ch.to_string()], "sequence {:x?}", seq);
        assert_eq!(e.context().bells, 0);
        assert_eq!(e.state(), ComposeState::Idle);
    }
}

#[test]
fn test_prefix_extension_waits_for_longer_row() {
    let store = store_with(
        &[(&[MULTI, 0x61], 'ª'), (&[MULTI, 0x61, 0x65], 'æ')],
        3,
    );
    let mut e = engine(store);

    type_keys(&mut e, &[MULTI, 0x61]);
    assert!(commits(e.context()).is_empty());
    assert_eq!(e.state(), ComposeState::Composing);
    assert_eq!(e.preedit().text, "ª");

    type_keys(&mut e, &[0x65]);
    assert_eq!(commits(e.context()), vec!["æ"]);
    assert_eq!(
        e.context().events,
        vec![
            ComposeEvent::PreeditStart,
            ComposeEvent::PreeditChanged {
                text: "ª".to_string(),
                cursor: "ª".len()
            },
            ComposeEvent::PreeditChanged {
                text: String::new(),
                cursor: 0
            },
            ComposeEvent::PreeditEnd,
            ComposeEvent::Commit("æ".to_string()),
        ]
    );
}

#[test]
fn test_abandoned_tentative_match_replays_following_keys() {
    let store = store_with(
        &[(&[MULTI, 0x61], 'ª'), (&[MULTI, 0x61, 0x62, 0x63], '⁂')],
        4,
    );
    let mut e = engine(store);

    // Multi a b d: "a" was a tentative match, "b d" are replayed
    type_keys(&mut e, &[MULTI, 0x61, 0x62]);
    assert!(commits(e.context()).is_empty());
    assert!(e.filter_key_event(libcompose_core::KeyEvent::press(0x64)));

    assert_eq!(commits(e.context()), vec!["ª", "b", "d"]);
    assert_eq!(e.context().bells, 0);
    assert_eq!(e.state(), ComposeState::Idle);
}

#[test]
fn test_replayed_keys_can_start_a_new_sequence() {
    let store = store_with(
        &[
            (&[MULTI, 0x61], 'ª'),
            (&[MULTI, 0x61, 0x61, 0x61], 'å'),
            (&[DEAD_ACUTE, 0x65], 'é'),
        ],
        4,
    );
    let mut e = engine(store);

    type_keys(&mut e, &[MULTI, 0x61, 0x61, DEAD_ACUTE]);
    assert_eq!(commits(e.context()), vec!["ª", "a"]);
    assert_eq!(e.state(), ComposeState::Composing);

    type_keys(&mut e, &[0x65]);
    assert_eq!(commits(e.context()), vec!["ª", "a", "é"]);
}

#[test]
fn test_invalid_sequence_bells_once() {
    let store = store_with(&[(&[MULTI, 0x61, 0x62], 'x')], 3);
    let mut e = engine(store);

    type_keys(&mut e, &[MULTI, 0x61, 0x7a]);
    assert_eq!(e.context().bells, 1);
    assert_eq!(e.state(), ComposeState::Idle);
    // the failing key still reaches the document
    assert_eq!(commits(e.context()), vec!["z"]);
}

#[test]
fn test_invalid_sequence_ending_in_control_key() {
    let store = store_with(&[(&[MULTI, 0x61, 0x62], 'x')], 3);
    let mut e = engine(store);

    type_keys(&mut e, &[MULTI, 0x61]);
    assert!(e.filter_key_event(libcompose_core::KeyEvent::press(TAB)));
    assert_eq!(e.context().bells, 1);
    assert!(commits(e.context()).is_empty());
    assert_eq!(e.state(), ComposeState::Idle);
}

#[test]
fn test_diacritic_fallback() {
    let mut e = engine(Arc::new(ComposeTableStore::new()));
    type_keys(&mut e, &[DEAD_ACUTE, 0x65]);
    assert_eq!(e.context_mut().take_commit(), "é");

    type_keys(&mut e, &[DEAD_ACUTE, DEAD_CIRCUMFLEX, 0x61]);
    let first = e.context_mut().take_commit();
    type_keys(&mut e, &[DEAD_CIRCUMFLEX, DEAD_ACUTE, 0x61]);
    let second = e.context_mut().take_commit();
    assert_eq!(first, "ấ");
    assert_eq!(first, second);
    assert_eq!(e.context().bells, 0);
}

#[test]
fn test_builtin_table() {
    let mut e = engine(Arc::new(ComposeTableStore::with_builtin()));
    type_keys(&mut e, &[MULTI, 0x6f, 0x63]);
    type_keys(&mut e, &[DEAD_DIAERESIS, 0x75]);
    type_keys(&mut e, &[MULTI, 0x2d, 0x2d, 0x2d]);
    assert_eq!(e.context_mut().take_commit(), "©ü—");
}

#[test]
fn test_reset_is_idempotent() {
    let mut e = engine(Arc::new(ComposeTableStore::with_builtin()));
    e.reset();
    e.reset();
    assert!(e.context().events.is_empty());

    type_keys(&mut e, &[DEAD_ACUTE]);
    e.reset();
    assert_eq!(e.state(), ComposeState::Idle);
    e.reset();
    assert!(e.context().events.is_empty());
}

#[test]
fn test_reset_closes_tentative_preedit() {
    let store = store_with(
        &[(&[MULTI, 0x61], 'ª'), (&[MULTI, 0x61, 0x65], 'æ')],
        3,
    );
    let mut e = engine(store);
    type_keys(&mut e, &[MULTI, 0x61]);
    e.context_mut().take_events();

    e.focus_out();
    assert_eq!(
        e.context().events,
        vec![
            ComposeEvent::PreeditChanged {
                text: String::new(),
                cursor: 0
            },
            ComposeEvent::PreeditEnd,
        ]
    );
    assert!(!e.context().has_commit());
}
