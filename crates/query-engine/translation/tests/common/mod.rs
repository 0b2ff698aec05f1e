use std::fs;
use std::path::PathBuf;

use aql_configuration::Configuration;
use query_engine_translation::translation;

/// Translate the request in a goldenfile directory and render the query with its bind parameters.
///
/// A `configuration.json` next to the request is used when present, the default configuration
/// otherwise.
pub async fn test_translation(testname: &str) -> anyhow::Result<String> {
    let directory = PathBuf::from("tests/goldenfiles").join(testname);

    let configuration = if directory
        .join(aql_configuration::version1::CONFIGURATION_FILENAME)
        .exists()
    {
        let parsed_configuration = aql_configuration::parse_configuration(&directory).await?;
        aql_configuration::make_runtime_configuration(parsed_configuration)?
    } else {
        Configuration::default()
    };

    let request = serde_json::from_str(&fs::read_to_string(directory.join("request.json"))?)?;

    let query = translation::query::translate(&configuration, &request)?;

    Ok(format!(
        "{}\n\n{}",
        query,
        serde_json::to_string_pretty(&query.params)?
    ))
}
