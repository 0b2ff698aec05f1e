//! Errors that can occur while reading, writing or elaborating configuration.

use std::path::PathBuf;

/// The errors that can be thrown when processing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {file_path}:{line}:{column}: {message}")]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
    #[error("I/O error on {file_path}: {source}")]
    IoError {
        file_path: PathBuf,
        source: std::io::Error,
    },
}

/// The errors that can be thrown when writing configuration to disk.
#[derive(Debug, thiserror::Error)]
pub enum WriteParsedConfigurationError {
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Configuration that parsed but cannot be used to translate queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MakeRuntimeConfigurationError {
    #[error("unsupported configuration version: {0}")]
    UnsupportedVersion(u32),
    #[error("invalid document variable '{0}': expected an identifier")]
    InvalidDocumentVariable(String),
    #[error("default limit {default_limit} exceeds maximum limit {max_limit}")]
    DefaultLimitExceedsMaxLimit { default_limit: u64, max_limit: u64 },
}
