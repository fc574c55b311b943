use crate::core::models::error::InputError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeserializationError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed binary payload in '{path}': {source}")]
    Decode {
        path: String,
        source: bincode::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error("'{path}' is not a {expected} file (unrecognized magic bytes)")]
    BadMagic { path: String, expected: &'static str },

    #[error("Unsupported schema version {version} in '{path}'")]
    UnsupportedVersion { path: String, version: u32 },

    #[error("Record in '{path}' violates input invariants: {source}")]
    Validation { path: String, source: InputError },
}

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to encode record for '{path}': {source}")]
    Encode {
        path: String,
        source: bincode::Error,
    },
}
