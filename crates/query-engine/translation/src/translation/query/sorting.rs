//! Handle `SORT` clause translation.

use query_engine_aql::aql::sort::SortDirection;
use query_engine_aql::aql::string::Query;

use super::values;
use crate::translation::error::Error;
use crate::translation::request::Sort;

/// Append a single `SORT` line covering every sort element, in order.
/// Nothing is appended when there is nothing to sort by.
pub fn translate_sort(query: &mut Query, document: &str, sort: &[Sort]) -> Result<(), Error> {
    if sort.is_empty() {
        return Ok(());
    }

    let mut expressions = Vec::with_capacity(sort.len());
    let mut fields = Vec::with_capacity(sort.len());
    for (index, element) in sort.iter().enumerate() {
        let direction = SortDirection::parse(&element.direction)?;
        fields.push(values::field_path(&element.field)?);
        expressions.push(format!("{document}.@sort{index}_field {direction}"));
    }

    query.append(format!("SORT {}", expressions.join(", ")), fields);
    Ok(())
}
