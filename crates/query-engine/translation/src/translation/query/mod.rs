//! Translate an incoming `QueryRequest`.

pub mod filtering;
pub mod sorting;
pub mod values;

use aql_configuration::Configuration;
use query_engine_aql::aql::string::Query;

use super::error::Error;
use super::request::QueryRequest;

/// Translate the incoming QueryRequest to an AQL query.
///
/// The collection, filter fields and values, sort fields and limits are all passed as bind
/// parameters; only operators and directions are written into the query text.
pub fn translate(
    configuration: &Configuration,
    query_request: &QueryRequest,
) -> Result<Query, Error> {
    if query_request.collection.is_empty() {
        return Err(Error::InvalidCollection(query_request.collection.clone()));
    }

    let document = configuration.document_variable.as_str();
    let mut query = Query::new();

    query.append(
        format!("FOR {document} IN @@collection"),
        [query_request.collection.as_str()],
    );

    for (index, filter) in query_request.filters.iter().enumerate() {
        filtering::translate_filter(&mut query, document, index, filter)?;
    }

    sorting::translate_sort(&mut query, document, &query_request.sort)?;

    translate_limit(&mut query, configuration, query_request)?;

    query.append_formatted(format_args!("RETURN {document}"));

    // log and return
    tracing::debug!(collection = %query_request.collection, aql = %query, "translated request");
    Ok(query)
}

/// Add a `LIMIT` when the request or the configuration asks for one.
fn translate_limit(
    query: &mut Query,
    configuration: &Configuration,
    query_request: &QueryRequest,
) -> Result<(), Error> {
    match (
        configuration.effective_limit(query_request.limit),
        query_request.offset,
    ) {
        (Some(limit), offset) => {
            query.append("LIMIT @offset, @limit", [offset.unwrap_or(0), limit]);
            Ok(())
        }
        (None, Some(_)) => Err(Error::OffsetWithoutLimit),
        (None, None) => Ok(()),
    }
}
