//! libcompose-core
//!
//! Compose-sequence input engine: turns raw key events into committed
//! Unicode text. Supports dead-key and `Multi_key` sequences from sorted
//! compose tables, an algorithmic fallback that combines dead keys with a
//! base character through Unicode normalization, and Ctrl+Shift+U hex code
//! point entry, with preedit feedback while a sequence is in progress.
//!
//! Public API:
//! - `ComposeEngine` - per-widget state machine, fed with `KeyEvent`s
//! - `ComposeObserver` - preedit/commit/bell notifications from the engine
//! - `ComposeContext` - observer that records notifications as plain data
//! - `ComposeTableStore` - shared, read-only set of compose tables
//! - `ComposeTable` / `CompactComposeTable` - flat and indexed table layouts
//! - `Config` / `TableProvider` - explicit configuration and table resolution

pub mod keysyms;
mod keysym_data;

pub mod event;
pub use event::{KeyEvent, KeyEventKind, Keymap, ModifierType};

pub mod error;
pub use error::{ComposeError, Result};

pub mod compose_buffer;
pub use compose_buffer::{ComposeBuffer, MAX_COMPOSE_LEN};

pub mod table;
pub use table::{ComposeTable, Lookup, TableFile};

pub mod compact;
pub use compact::{CompactComposeTable, CompactTableBuilder};
mod builtin_data;

pub mod diacritics;
pub use diacritics::DiacriticMatch;

pub mod hex;
pub use hex::HexParse;

pub mod overlay;
pub use overlay::{ComposeOverlay, QuartzDeadKeys, RepeatedDeadKey, Win32SpacingAccents};

pub mod config;
pub use config::Config;

pub mod store;
pub use store::{ComposeTableStore, DefaultTableProvider, TableProvider};

pub mod notifier;
pub use notifier::ComposeObserver;

pub mod context;
pub use context::{ComposeContext, ComposeEvent};

pub mod engine;
pub use engine::{ComposeEngine, ComposeState, Preedit};
