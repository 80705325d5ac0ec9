//! Table files, overlays and configuration-driven table resolution.

use libcompose_core::keysyms::*;
use libcompose_core::{
    ComposeContext, ComposeEngine, ComposeTable, ComposeTableStore, Config, DefaultTableProvider,
    KeyEvent, Lookup, TableFile, TableProvider,
};
use std::path::PathBuf;
use std::sync::Arc;

fn temp_path(name: &str) -> PathBuf {
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("compose_{}_{}_{}", std::process::id(), stamp, name))
}

fn type_keys(engine: &mut ComposeEngine<ComposeContext>, keys: &[u32]) -> String {
    for &k in keys {
        engine.filter_key_event(KeyEvent::press(k));
    }
    engine.context_mut().take_commit()
}

fn user_table() -> ComposeTable {
    let (table, _) = ComposeTable::from_entries(
        vec![
            (vec![MULTI_KEY, 0x3c, 0x33], '♥' as u32),
            (vec![MULTI_KEY, 0x6f, 0x63], 'ↄ' as u32),
        ],
        3,
    )
    .unwrap();
    table
}

#[test]
fn test_bincode_table_file_via_config() {
    let path = temp_path("user.bin");
    user_table().save_bincode(&path).unwrap();

    let config = Config {
        extra_tables: vec![path.clone()],
        ..Config::default()
    };
    let store = DefaultTableProvider.resolve(&config).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(store.tables().len(), 1);
    let mut e = ComposeEngine::with_context(store, config);
    assert_eq!(type_keys(&mut e, &[MULTI_KEY, 0x3c, 0x33]), "♥");
    // the user table overrides the built-in copyright sign
    assert_eq!(type_keys(&mut e, &[MULTI_KEY, 0x6f, 0x63]), "ↄ");
    // built-in sequences are still available
    assert_eq!(type_keys(&mut e, &[DEAD_GRAVE, 0x65]), "è");
}

#[test]
fn test_json_table_file() {
    let path = temp_path("user.json");
    let file: TableFile = user_table().to_table_file();
    std::fs::write(&path, serde_json::to_string(&file).unwrap()).unwrap();

    let table = ComposeTable::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(table.len(), 2);
    assert_eq!(table.check(&[MULTI_KEY, 0x3c, 0x33]), Lookup::Exact('♥' as u32));
}

#[test]
fn test_raw_rows_registration() {
    // max_seq_len 2: two keysyms, then value hi/lo
    let rows: [u16; 8] = [
        DEAD_MACRON as u16, 0x61, 0x0000, 0x0101, //
        DEAD_MACRON as u16, 0x65, 0x0000, 0x0113,
    ];
    let mut store = ComposeTableStore::new();
    store.add_table(&rows, 2, 2).unwrap();

    let mut e = ComposeEngine::with_context(Arc::new(store), Config::default());
    assert_eq!(type_keys(&mut e, &[DEAD_MACRON, 0x65]), "ē");
    assert_eq!(type_keys(&mut e, &[DEAD_MACRON, 0x61]), "ā");
}

#[test]
fn test_astral_values_in_flat_table() {
    let (table, _) =
        ComposeTable::from_entries(vec![(vec![MULTI_KEY, 0x3a, 0x29], 0x1f642)], 3).unwrap();
    let mut store = ComposeTableStore::new();
    store.add_compose_table(table);
    let mut e = ComposeEngine::with_context(Arc::new(store), Config::default());
    assert_eq!(type_keys(&mut e, &[MULTI_KEY, 0x3a, 0x29]), "🙂");
}

#[test]
fn test_overlays_from_config() {
    let config = Config::from_toml_str(r#"overlays = ["win32", "repeated-dead-key"]"#).unwrap();
    let store = DefaultTableProvider.resolve(&config).unwrap();
    assert_eq!(store.overlay_names(), vec!["win32", "repeated-dead-key"]);

    let mut e = ComposeEngine::with_context(store, config);
    assert_eq!(type_keys(&mut e, &[DEAD_ACUTE, SPACE]), "´");
    assert_eq!(type_keys(&mut e, &[DEAD_DIAERESIS, SPACE]), "¨");
    assert_eq!(type_keys(&mut e, &[DEAD_CARON, DEAD_CARON]), "ˇ");
    assert_eq!(type_keys(&mut e, &[DEAD_ACUTE, 0x65]), "é");
}

#[test]
fn test_quartz_overlay() {
    let config = Config {
        overlays: vec!["quartz".into()],
        ..Config::default()
    };
    let store = DefaultTableProvider.resolve(&config).unwrap();
    let mut e = ComposeEngine::with_context(store, config);
    assert_eq!(type_keys(&mut e, &[DEAD_DOUBLEACUTE, 0x75]), "ü");
    assert_eq!(type_keys(&mut e, &[DEAD_DOUBLEACUTE, SPACE]), "\"");
    assert_eq!(type_keys(&mut e, &[DEAD_ACUTE, 0x43]), "Ç");
}

#[test]
fn test_builtin_can_be_disabled() {
    let config = Config {
        use_builtin_table: false,
        ..Config::default()
    };
    let store = DefaultTableProvider.resolve(&config).unwrap();
    let mut e = ComposeEngine::with_context(store, config);
    // Multi_key alone means nothing without the built-in table
    assert!(!e.filter_key_event(KeyEvent::press(MULTI_KEY)));
    // dead keys still compose algorithmically
    assert_eq!(type_keys(&mut e, &[DEAD_TILDE, 0x6e]), "ñ");
}

#[test]
fn test_set_tables_switches_store() {
    let mut e = ComposeEngine::with_context(
        Arc::new(ComposeTableStore::with_builtin()),
        Config::default(),
    );
    assert_eq!(type_keys(&mut e, &[MULTI_KEY, 0x6f, 0x63]), "©");

    let mut store = ComposeTableStore::with_builtin();
    store.add_compose_table(user_table());
    e.set_tables(Arc::new(store));
    assert_eq!(type_keys(&mut e, &[MULTI_KEY, 0x6f, 0x63]), "ↄ");
}
