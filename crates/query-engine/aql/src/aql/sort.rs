//! Map sort directions onto AQL.

use std::fmt;
use std::str::FromStr;

use enum_iterator::Sequence;

use super::error::Error;

/// The direction of a `SORT` expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Look up a direction by its AQL keyword or the lowercase form used by query strings.
    ///
    /// AQL accepts lowercase keywords too, but uppercase is what we write.
    pub fn parse(direction: &str) -> Result<SortDirection, Error> {
        match direction {
            "ASC" | "asc" => Ok(SortDirection::Ascending),
            "DESC" | "desc" => Ok(SortDirection::Descending),
            _ => Err(Error::InvalidSortDirection(direction.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortDirection::parse(s)
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The AQL keyword for an arbitrary direction string.
pub fn normalize_direction(direction: &str) -> Result<&'static str, Error> {
    SortDirection::parse(direction).map(SortDirection::as_str)
}
