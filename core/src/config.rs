//! Engine configuration.
//!
//! Passed explicitly to [`ComposeEngine::new`](crate::ComposeEngine::new) and
//! to a [`TableProvider`](crate::TableProvider); there is no process-wide
//! default.

use crate::error::Result;
use crate::event::ModifierType;
use crate::keysyms;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the compose engine and its table set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Key that starts hex entry while `hex_modifiers` are held.
    pub hex_start_keysym: u32,

    /// Modifiers that must all be held to start hex entry; others may be
    /// held as well. Releasing any of them ends entry.
    pub hex_modifiers: ModifierType,

    /// Events carrying any of these modifiers pass through untouched unless
    /// they drive hex entry.
    pub no_text_input_modifiers: ModifierType,

    /// Emit `bell()` on invalid sequences.
    pub error_bell: bool,

    /// Consult the built-in compact table.
    pub use_builtin_table: bool,

    /// Serialized flat tables to register, in order (the last one is
    /// consulted first).
    pub extra_tables: Vec<PathBuf>,

    /// Platform overlays to install, by name, in lookup order.
    pub overlays: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Ctrl+Shift+U
            hex_start_keysym: keysyms::U,
            hex_modifiers: ModifierType::CONTROL | ModifierType::SHIFT,
            no_text_input_modifiers: ModifierType::MOD1 | ModifierType::CONTROL,
            error_bell: true,
            use_builtin_table: true,
            extra_tables: Vec::new(),
            overlays: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.hex_start_keysym, 0x55);
        assert_eq!(config.hex_modifiers, ModifierType::CONTROL | ModifierType::SHIFT);
        assert!(config.error_bell);
        assert!(config.use_builtin_table);
        assert!(config.overlays.is_empty());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            error_bell = false
            overlays = ["win32", "repeated-dead-key"]
            hex_modifiers = "CONTROL | SHIFT | MOD1"
            "#,
        )
        .unwrap();
        assert!(!config.error_bell);
        assert_eq!(config.overlays, vec!["win32", "repeated-dead-key"]);
        assert!(config.hex_modifiers.contains(ModifierType::MOD1));
        assert_eq!(config.hex_start_keysym, keysyms::U);
    }

    #[test]
    fn test_toml_string_roundtrip() {
        let mut config = Config::default();
        config.extra_tables.push(PathBuf::from("/tmp/user.bin"));
        config.use_builtin_table = false;
        let text = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "compose_config_{}_{}.toml",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let config = Config {
            overlays: vec!["quartz".to_string()],
            ..Config::default()
        };
        config.save_toml(&path).unwrap();
        let loaded = Config::load_toml(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }
}
