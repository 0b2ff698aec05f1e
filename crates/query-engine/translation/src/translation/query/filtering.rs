//! Handle filtering/`FILTER` clauses translation.

use query_engine_aql::aql::operators::Operator;
use query_engine_aql::aql::string::Query;

use super::values;
use crate::translation::error::Error;
use crate::translation::request::Filter;

/// Append a `FILTER` line comparing a document attribute against a bound value.
///
/// The operator must suit the type of the value, e.g. `like` is only accepted for strings.
pub fn translate_filter(
    query: &mut Query,
    document: &str,
    index: usize,
    filter: &Filter,
) -> Result<(), Error> {
    let value_type = values::value_type(&filter.field, &filter.value)?;
    let operator = Operator::parse_for(value_type, &filter.operator)?;
    let field = values::field_path(&filter.field)?;

    query.append(
        format!("FILTER {document}.@filter{index}_field {operator} @filter{index}_value"),
        [field, filter.value.clone()],
    );
    Ok(())
}
