use crate::catalog::{ConfigType, TransportKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum McpcastError {
    #[error("Unknown agent: {0}")]
    UnknownAgent(String),

    #[error("Unknown config type: {0}")]
    UnknownConfigType(String),

    #[error("Agent '{agent}' does not support config type '{config_type}'")]
    UnsupportedConfigType {
        agent: String,
        config_type: ConfigType,
    },

    #[error("Agent '{agent}' does not support the {transport} transport")]
    UnsupportedTransport {
        agent: String,
        transport: TransportKind,
    },

    #[error("Ambiguous server description: both 'command' and 'url' are set")]
    AmbiguousServer,

    #[error("Missing required field '{field}' for a {kind} server")]
    MissingRequiredField {
        field: &'static str,
        kind: &'static str,
    },

    #[error("Invalid catalog entry: {0}")]
    InvalidCatalog(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, McpcastError>;
