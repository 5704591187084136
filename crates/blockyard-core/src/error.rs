//! Error types for Blockyard

use thiserror::Error;

/// The main error type for Blockyard operations
#[derive(Debug, Error)]
pub enum BlockyardError {
    #[error("No saved world at {0}")]
    SaveNotFound(String),

    #[error("Malformed save: {0}")]
    MalformedSave(String),

    #[error("Unknown block code: {0}")]
    UnknownBlock(u8),

    #[error("Unknown block name: {0}")]
    UnknownBlockName(String),

    #[error("Invalid key binding: {0}")]
    InvalidBinding(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(String),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

/// Result type alias for Blockyard operations
pub type Result<T> = std::result::Result<T, BlockyardError>;

impl From<serde_json::Error> for BlockyardError {
    fn from(err: serde_json::Error) -> Self {
        BlockyardError::JsonError(err.to_string())
    }
}

impl From<toml::de::Error> for BlockyardError {
    fn from(err: toml::de::Error) -> Self {
        BlockyardError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for BlockyardError {
    fn from(err: toml::ser::Error) -> Self {
        BlockyardError::TomlSerError(err.to_string())
    }
}
