//! Error types for everything around the calculator engine.
//!
//! The engine itself never fails: arithmetic errors are shown in-band as the
//! `Error` sentinel. These errors cover configuration, key input and the
//! clipboard.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("unknown key: {0:?}")]
    UnknownKey(String),

    #[error("unknown operation: {0:?}")]
    UnknownOperation(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
