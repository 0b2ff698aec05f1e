//! Errors for operator and sort direction normalization.

use super::operators::ValueType;

/// A caller supplied a token that cannot be used in an AQL query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid operator: '{0}'")]
    InvalidOperator(String),
    #[error("invalid operator '{operator}' for {value_type} value")]
    InvalidOperatorForType {
        operator: String,
        value_type: ValueType,
    },
    #[error("invalid sort direction: '{0}'")]
    InvalidSortDirection(String),
}
