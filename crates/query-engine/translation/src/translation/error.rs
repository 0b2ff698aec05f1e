//! Errors for query translation.

use query_engine_aql::aql;

/// A type for translation errors.
///
/// All of these are caused by the request, not by the translation itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Aql(#[from] aql::error::Error),
    #[error("invalid collection name: '{0}'")]
    InvalidCollection(String),
    #[error("invalid field: '{0}'")]
    InvalidField(String),
    #[error("cannot filter '{field}' by value {value}")]
    UnsupportedValue {
        field: String,
        value: serde_json::Value,
    },
    #[error("an offset requires a limit")]
    OffsetWithoutLimit,
}
