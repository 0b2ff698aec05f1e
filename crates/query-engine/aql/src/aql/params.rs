//! Read bind parameter names out of AQL text.
//!
//! See <https://docs.arangodb.com/3.11/aql/fundamentals/bind-parameters/#syntax>.

use std::sync::OnceLock;

use regex::Regex;

static PARAM_REGEX: OnceLock<Regex> = OnceLock::new();

fn param_regex() -> &'static Regex {
    PARAM_REGEX.get_or_init(|| Regex::new(r"@(@?[A-Za-z0-9_]+)").expect("Invalid regex"))
}

/// The bind parameters referenced in `input`, in order of appearance.
///
/// One leading `@` is removed from each name, so value parameters come back bare
/// (`@title` is `title`) and collection parameters keep their marker (`@@collection` is
/// `@collection`). These are the keys ArangoDB expects in `bindVars`.
pub fn extract_params(input: &str) -> Vec<String> {
    param_regex()
        .captures_iter(input)
        .map(|captures| captures[1].to_string())
        .collect()
}
