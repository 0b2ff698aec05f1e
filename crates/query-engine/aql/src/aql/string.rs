//! Type definitions of a low-level AQL string representation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::params::extract_params;

/// Values of bind parameters, keyed the way ArangoDB expects them in `bindVars`.
pub type BindVars = BTreeMap<String, Value>;

/// An AQL query built up line by line, together with the values of its bind parameters.
///
/// Not every parameter referenced by a line needs a value. Binding is left to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub lines: Vec<String>,
    pub params: BindVars,
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

/// The body of a request to the ArangoDB cursor API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub query: String,
    pub bind_vars: BindVars,
}

impl Query {
    pub fn new() -> Query {
        Query {
            lines: vec![],
            params: BTreeMap::new(),
        }
    }

    /// Append a line, binding `values` to the parameters it references.
    ///
    /// Values are assigned to parameters in the order the parameters appear in the line:
    ///
    ///   - leftover values are discarded
    ///   - parameters left without a value stay unbound
    ///   - parameters that already have a value are overwritten
    pub fn append<I>(&mut self, line: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let line = line.into();
        let names = extract_params(&line);
        tracing::trace!(line = %line, params = ?names, "appending AQL line");

        for (name, value) in names.into_iter().zip(values) {
            self.params.insert(name, value.into());
        }
        self.lines.push(line);
        self
    }

    /// Append a line without binding anything.
    pub fn append_syntax(&mut self, line: impl Into<String>) -> &mut Self {
        self.append(line, std::iter::empty::<Value>())
    }

    /// Append a line produced by formatting, e.g.
    ///
    /// ```
    /// # use query_engine_aql::aql::string::Query;
    /// let mut query = Query::new();
    /// query.append_formatted(format_args!("LIMIT {}", 10));
    /// assert_eq!(query.render(), "LIMIT 10");
    /// ```
    ///
    /// Formatted values become literal query text, they are not bound.
    pub fn append_formatted(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        self.append_syntax(args.to_string())
    }

    /// Bind a value to a bind parameter.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Bind every value in `params`. An empty collection changes nothing.
    pub fn bind_many<I, K, V>(&mut self, params: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.params
            .extend(params.into_iter().map(|(name, value)| (name.into(), value.into())));
        self
    }

    /// The lines appended so far, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The bind parameters bound so far.
    pub fn params(&self) -> &BindVars {
        &self.params
    }

    /// The query text, one line per appended line.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// Package the query for the cursor API.
    pub fn to_request(&self) -> QueryRequest {
        QueryRequest {
            query: self.render(),
            bind_vars: self.params.clone(),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
