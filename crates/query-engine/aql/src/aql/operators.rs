//! Map comparison operators onto AQL.
//!
//! Besides the AQL operators themselves, the short-form vocabulary used by query string
//! filters (`eq`, `gte`, `not like`, ...) is accepted. Lookups are case-sensitive.

use std::fmt;
use std::str::FromStr;

use enum_iterator::Sequence;

use super::error::Error;

/// A comparison operator AQL accepts in a `FILTER` condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum Operator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    In,
    NotIn,
    Like,
    NotLike,
}

/// The kind of value an operator is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum ValueType {
    Array,
    Bool,
    Number,
    String,
}

impl Operator {
    /// Look up an operator by its AQL symbol or its short form.
    pub fn parse(op: &str) -> Result<Operator, Error> {
        match op {
            "==" | "eq" => Ok(Operator::Equal),
            "!=" | "neq" => Ok(Operator::NotEqual),
            ">" | "gt" => Ok(Operator::GreaterThan),
            ">=" | "gte" => Ok(Operator::GreaterThanOrEqualTo),
            "<" | "lt" => Ok(Operator::LessThan),
            "<=" | "lte" => Ok(Operator::LessThanOrEqualTo),
            "IN" | "in" => Ok(Operator::In),
            "NOT IN" | "not in" => Ok(Operator::NotIn),
            "LIKE" | "like" => Ok(Operator::Like),
            "NOT LIKE" | "not like" => Ok(Operator::NotLike),
            _ => Err(Error::InvalidOperator(op.to_string())),
        }
    }

    /// Look up an operator and check it can be used with a `value_type` value.
    pub fn parse_for(value_type: ValueType, op: &str) -> Result<Operator, Error> {
        let operator = Operator::parse(op)?;
        if operator.supports(value_type) {
            Ok(operator)
        } else {
            Err(Error::InvalidOperatorForType {
                operator: op.to_string(),
                value_type,
            })
        }
    }

    /// The operator as written in AQL.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqualTo => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqualTo => "<=",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
        }
    }

    pub fn supports(self, value_type: ValueType) -> bool {
        match value_type {
            ValueType::Array => matches!(
                self,
                Operator::Equal | Operator::NotEqual | Operator::In | Operator::NotIn
            ),
            ValueType::Bool => matches!(self, Operator::Equal | Operator::NotEqual),
            ValueType::Number => self.is_comparison(),
            ValueType::String => {
                self.is_comparison() || matches!(self, Operator::Like | Operator::NotLike)
            }
        }
    }

    fn is_comparison(self) -> bool {
        matches!(
            self,
            Operator::Equal
                | Operator::NotEqual
                | Operator::GreaterThan
                | Operator::GreaterThanOrEqualTo
                | Operator::LessThan
                | Operator::LessThanOrEqualTo
        )
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::parse(s)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueType::Array => "array",
            ValueType::Bool => "boolean",
            ValueType::Number => "number",
            ValueType::String => "string",
        })
    }
}

/// The AQL operator for an arbitrary operator string.
pub fn normalize(op: &str) -> Result<&'static str, Error> {
    Operator::parse(op).map(Operator::as_str)
}

/// The AQL operator for an operator used with a `value_type` value.
pub fn normalize_for(value_type: ValueType, op: &str) -> Result<&'static str, Error> {
    Operator::parse_for(value_type, op).map(Operator::as_str)
}

pub fn normalize_array(op: &str) -> Result<&'static str, Error> {
    normalize_for(ValueType::Array, op)
}

pub fn normalize_bool(op: &str) -> Result<&'static str, Error> {
    normalize_for(ValueType::Bool, op)
}

pub fn normalize_number(op: &str) -> Result<&'static str, Error> {
    normalize_for(ValueType::Number, op)
}

pub fn normalize_string(op: &str) -> Result<&'static str, Error> {
    normalize_for(ValueType::String, op)
}

/// Whether `op` can be used with an array value.
pub fn is_array_operator(op: &str) -> bool {
    normalize_array(op).is_ok()
}

/// Whether `op` can be used with a Boolean value.
pub fn is_bool_operator(op: &str) -> bool {
    normalize_bool(op).is_ok()
}

/// Whether `op` can be used with a numeric value.
pub fn is_number_operator(op: &str) -> bool {
    normalize_number(op).is_ok()
}

/// Whether `op` can be used with a string value.
pub fn is_string_operator(op: &str) -> bool {
    normalize_string(op).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use enum_iterator::all;

    #[test]
    fn short_forms() {
        let cases = [
            ("eq", "=="),
            ("neq", "!="),
            ("gt", ">"),
            ("gte", ">="),
            ("lt", "<"),
            ("lte", "<="),
            ("in", "IN"),
            ("not in", "NOT IN"),
            ("like", "LIKE"),
            ("not like", "NOT LIKE"),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize(input), Ok(expected), "normalize({input:?})");
        }
    }

    #[test]
    fn canonical_operators_map_to_themselves() {
        for operator in all::<Operator>() {
            let canonical = operator.as_str();
            assert_eq!(normalize(canonical), Ok(canonical));
            assert_eq!(Operator::parse(canonical), Ok(operator));
        }
    }

    #[test]
    fn unknown_operators() {
        for input in ["bogus", "", "EQ", "Like", "not  in", " ==", "==="] {
            assert_eq!(
                normalize(input),
                Err(Error::InvalidOperator(input.to_string()))
            );
        }
    }

    #[test]
    fn type_classes() {
        assert!(is_array_operator("IN"));
        assert!(is_array_operator("not in"));
        assert!(!is_array_operator("LIKE"));
        assert!(!is_array_operator(">="));
        assert!(is_array_operator("=="));
        assert!(is_array_operator("!="));
        assert!(is_array_operator("neq"));
        assert_eq!(normalize_array("eq"), Ok("=="));

        assert!(is_bool_operator("eq"));
        assert!(is_bool_operator("!="));
        assert!(!is_bool_operator(">"));

        assert!(is_number_operator("gte"));
        assert!(!is_number_operator("LIKE"));
        assert!(!is_number_operator("IN"));

        assert!(is_string_operator("=="));
        assert!(is_string_operator("<"));
        assert!(is_string_operator("not like"));
        assert!(!is_string_operator("in"));

        assert!(!is_string_operator("bogus"));
    }

    #[test]
    fn equality_supports_every_type() {
        for value_type in all::<ValueType>() {
            assert!(Operator::Equal.supports(value_type));
            assert!(Operator::NotEqual.supports(value_type));
        }
    }

    #[test]
    fn typed_errors() {
        assert_eq!(
            normalize_number("like"),
            Err(Error::InvalidOperatorForType {
                operator: "like".to_string(),
                value_type: ValueType::Number,
            })
        );
        assert_eq!(
            normalize_array("bogus"),
            Err(Error::InvalidOperator("bogus".to_string()))
        );
        assert_eq!(normalize_string("not like"), Ok("NOT LIKE"));
        assert_eq!(
            Error::InvalidOperatorForType {
                operator: "IN".to_string(),
                value_type: ValueType::Bool,
            }
            .to_string(),
            "invalid operator 'IN' for boolean value"
        );
    }

    #[test]
    fn predicates_agree_with_normalize() {
        let inputs = ["==", "eq", ">=", "lt", "IN", "not in", "LIKE", "bogus"];
        for input in inputs {
            assert_eq!(is_array_operator(input), normalize_array(input).is_ok());
            assert_eq!(is_bool_operator(input), normalize_bool(input).is_ok());
            assert_eq!(is_number_operator(input), normalize_number(input).is_ok());
            assert_eq!(is_string_operator(input), normalize_string(input).is_ok());
        }
    }
}
