//! Handle the translation of fields and literal values.

use query_engine_aql::aql::operators::ValueType;
use serde_json::Value;

use crate::translation::error::Error;

/// The kind of operator a filter value can be compared with.
///
/// `null` only supports (in)equality, just like Booleans.
pub fn value_type(field: &str, value: &Value) -> Result<ValueType, Error> {
    match value {
        Value::Array(_) => Ok(ValueType::Array),
        Value::Bool(_) | Value::Null => Ok(ValueType::Bool),
        Value::Number(_) => Ok(ValueType::Number),
        Value::String(_) => Ok(ValueType::String),
        Value::Object(_) => Err(Error::UnsupportedValue {
            field: field.to_string(),
            value: value.clone(),
        }),
    }
}

/// The value to bind to an attribute name parameter (`doc.@field`).
///
/// A dotted path binds as an array of attribute names, which AQL resolves as nested access.
pub fn field_path(field: &str) -> Result<Value, Error> {
    let segments: Vec<&str> = field.split('.').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(Error::InvalidField(field.to_string()));
    }

    Ok(match segments.as_slice() {
        [name] => Value::from(*name),
        path => Value::from(path.to_vec()),
    })
}
