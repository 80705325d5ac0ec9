//! Error type for table registration, table files and configuration.
//!
//! Key handling itself never fails; only setup paths return these.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("compose buffer is full ({0} keys)")]
    BufferFull(usize),

    #[error("sequence length {max_seq_len} exceeds the compose limit of {limit}")]
    SequenceTooLong { max_seq_len: usize, limit: usize },

    #[error("table data too short: expected {expected} values, got {actual}")]
    TruncatedTable { expected: usize, actual: usize },

    #[error("compact table index row {row}: {reason}")]
    MalformedIndex { row: usize, reason: &'static str },

    #[error("unknown overlay '{0}'")]
    UnknownOverlay(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("decode table: {0}")]
    Decode(#[from] bincode::Error),

    #[error("decode json table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ComposeError>;
