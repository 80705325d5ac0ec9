//! The compose table store and the lookup chain.
//!
//! A store is built once, then shared read-only (behind an `Arc`) by every
//! engine instance. Lookup consults, in order: the registered flat tables
//! newest first, the platform overlays, the built-in compact table and
//! finally the diacritic composer.

use crate::compact::CompactComposeTable;
use crate::config::Config;
use crate::diacritics::{self, DiacriticMatch};
use crate::error::Result;
use crate::keysyms;
use crate::overlay::{self, ComposeOverlay};
use crate::table::{ComposeTable, Lookup};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Immutable set of compose tables and overlays.
#[derive(Default)]
pub struct ComposeTableStore {
    /// Newest first.
    tables: Vec<ComposeTable>,
    overlays: Vec<Box<dyn ComposeOverlay>>,
    compact: Option<&'static CompactComposeTable>,
}

impl fmt::Debug for ComposeTableStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposeTableStore")
            .field("tables", &self.tables.len())
            .field(
                "overlays",
                &self.overlays.iter().map(|o| o.name()).collect::<Vec<_>>(),
            )
            .field("builtin", &self.compact.is_some())
            .finish()
    }
}

impl ComposeTableStore {
    /// An empty store: only the diacritic composer is active.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store consulting the built-in compact table.
    pub fn with_builtin() -> Self {
        Self {
            compact: Some(CompactComposeTable::builtin()),
            ..Self::default()
        }
    }

    /// Register a flat table from raw rows.
    ///
    /// `rows` must hold at least `n_seqs` rows of `max_seq_len + 2` columns,
    /// sorted ascending on the keysym columns. Sortedness is not checked.
    pub fn add_table(&mut self, rows: &[u16], max_seq_len: usize, n_seqs: usize) -> Result<()> {
        let table = ComposeTable::new(rows, max_seq_len, n_seqs)?;
        self.add_compose_table(table);
        Ok(())
    }

    /// Register an already-built table. It is consulted before all tables
    /// registered earlier.
    pub fn add_compose_table(&mut self, table: ComposeTable) {
        debug!(
            "registered compose table: {} rows, max_seq_len {}",
            table.len(),
            table.max_seq_len()
        );
        self.tables.insert(0, table);
    }

    /// Append an overlay after those already installed.
    pub fn add_overlay(&mut self, overlay: Box<dyn ComposeOverlay>) {
        debug!("installed overlay {}", overlay.name());
        self.overlays.push(overlay);
    }

    /// Turn the built-in compact table on or off.
    pub fn set_builtin(&mut self, enabled: bool) {
        self.compact = enabled.then(CompactComposeTable::builtin);
    }

    pub fn tables(&self) -> &[ComposeTable] {
        &self.tables
    }

    pub fn overlay_names(&self) -> Vec<&'static str> {
        self.overlays.iter().map(|o| o.name()).collect()
    }

    pub fn has_builtin(&self) -> bool {
        self.compact.is_some()
    }

    /// Consult only the registered flat tables, newest first; the first
    /// answer other than `NoMatch` wins.
    pub fn lookup_tables(&self, keys: &[u32]) -> Lookup {
        self.tables
            .iter()
            .map(|table| table.check(keys))
            .find(Lookup::is_match)
            .unwrap_or(Lookup::NoMatch)
    }

    /// Run the full lookup chain for an ordinary (non-hex) buffer.
    pub fn lookup(&self, keys: &[u32]) -> Lookup {
        let result = self.lookup_tables(keys);
        if result.is_match() {
            trace!("{} table: {:?}", keyseq(keys), result);
            return result;
        }

        if let Some(value) = self.overlays.iter().find_map(|o| o.try_match(keys)) {
            trace!("{} overlay: U+{:04X}", keyseq(keys), value);
            return Lookup::Exact(value);
        }

        if let Some(compact) = self.compact {
            let result = compact.check(keys);
            if result.is_match() {
                trace!("{} builtin: {:?}", keyseq(keys), result);
                return result;
            }
        }

        let result = match diacritics::check_algorithmically(keys) {
            DiacriticMatch::Pending => Lookup::Partial,
            DiacriticMatch::Composed(ch) => Lookup::Exact(ch as u32),
            DiacriticMatch::NoMatch => Lookup::NoMatch,
        };
        trace!("{} algorithmic: {:?}", keyseq(keys), result);
        result
    }
}

fn keyseq(keys: &[u32]) -> String {
    keysyms::describe_sequence(keys)
}

/// Resolves a [`Config`] into a table store.
///
/// Callers re-resolve whenever the locale or settings change and hand the
/// new store to [`ComposeEngine::set_tables`](crate::ComposeEngine::set_tables).
pub trait TableProvider {
    fn resolve(&self, config: &Config) -> Result<Arc<ComposeTableStore>>;
}

/// Builds a store from the configuration alone.
///
/// Table files that fail to load and unknown overlay names are logged and
/// skipped so a bad entry never leaves the user without compose support.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTableProvider;

impl TableProvider for DefaultTableProvider {
    fn resolve(&self, config: &Config) -> Result<Arc<ComposeTableStore>> {
        let mut store = ComposeTableStore::new();
        store.set_builtin(config.use_builtin_table);

        for path in &config.extra_tables {
            match ComposeTable::load(path) {
                Ok(table) => store.add_compose_table(table),
                Err(e) => warn!("skipping compose table {}: {}", path.display(), e),
            }
        }

        for name in &config.overlays {
            match overlay::overlay_by_name(name) {
                Ok(o) => store.add_overlay(o),
                Err(e) => warn!("{}", e),
            }
        }

        Ok(Arc::new(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keysyms::*;
    use crate::overlay::{RepeatedDeadKey, Win32SpacingAccents};

    fn table(entries: &[(&[u32], u32)]) -> ComposeTable {
        let (table, _) = ComposeTable::from_entries(
            entries.iter().map(|(seq, v)| (seq.to_vec(), *v)),
            4,
        )
        .unwrap();
        table
    }

    #[test]
    fn test_newest_table_wins() {
        let mut store = ComposeTableStore::new();
        store.add_compose_table(table(&[(&[MULTI_KEY, 0x61, 0x61], 0x100)]));
        store.add_compose_table(table(&[(&[MULTI_KEY, 0x61, 0x61], 0x200)]));
        assert_eq!(store.lookup_tables(&[MULTI_KEY, 0x61, 0x61]), Lookup::Exact(0x200));
        assert_eq!(store.lookup_tables(&[MULTI_KEY, 0x61]), Lookup::Partial);
        assert_eq!(store.lookup_tables(&[MULTI_KEY, 0x62]), Lookup::NoMatch);
    }

    #[test]
    fn test_add_table_raw_rows() {
        let mut store = ComposeTableStore::new();
        // one row: dead_acute x, padded to 3 keys, value U+1E8B
        let rows = [DEAD_ACUTE as u16, 0x78, 0, 0, 0x1e8b];
        store.add_table(&rows, 3, 1).unwrap();
        assert_eq!(store.lookup(&[DEAD_ACUTE, 0x78]), Lookup::Exact(0x1e8b));
        assert!(store.add_table(&rows, 3, 2).is_err());
        assert!(store.add_table(&rows, 9, 1).is_err());
    }

    #[test]
    fn test_chain_order() {
        let mut store = ComposeTableStore::with_builtin();
        store.add_overlay(Box::new(Win32SpacingAccents));
        // builtin gives apostrophe for dead_acute space; the overlay runs first
        assert_eq!(store.lookup(&[DEAD_ACUTE, SPACE]), Lookup::Exact(0xb4));
        // a user table beats the overlay
        store.add_compose_table(table(&[(&[DEAD_ACUTE, SPACE], 0x2032)]));
        assert_eq!(store.lookup(&[DEAD_ACUTE, SPACE]), Lookup::Exact(0x2032));
    }

    #[test]
    fn test_builtin_then_diacritics() {
        let store = ComposeTableStore::with_builtin();
        assert_eq!(store.lookup(&[DEAD_ACUTE, 0x65]), Lookup::Exact(0xe9));
        // Greek_alpha is not in the builtin list; composed algorithmically
        assert_eq!(store.lookup(&[DEAD_ACUTE, 0x07e1]), Lookup::Exact(0x3ac));
        assert_eq!(store.lookup(&[DEAD_HOOK, DEAD_HORN]), Lookup::Partial);
        assert_eq!(store.lookup(&[0x61, 0x62]), Lookup::NoMatch);
    }

    #[test]
    fn test_without_builtin() {
        let store = ComposeTableStore::new();
        assert_eq!(store.lookup(&[MULTI_KEY]), Lookup::NoMatch);
        assert_eq!(store.lookup(&[DEAD_GRAVE]), Lookup::Partial);
        assert_eq!(store.lookup(&[DEAD_GRAVE, 0x61]), Lookup::Exact(0xe0));
    }

    #[test]
    fn test_default_provider() {
        let config = Config {
            use_builtin_table: false,
            overlays: vec!["repeated-dead-key".into(), "nonsense".into()],
            extra_tables: vec!["/nonexistent/compose.bin".into()],
            ..Config::default()
        };
        let store = DefaultTableProvider.resolve(&config).unwrap();
        assert!(!store.has_builtin());
        assert!(store.tables().is_empty());
        assert_eq!(store.overlay_names(), vec![RepeatedDeadKey.name()]);
    }
}
