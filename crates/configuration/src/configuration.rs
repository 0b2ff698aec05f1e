//! Configuration for query translation.

use crate::error::MakeRuntimeConfigurationError;
use crate::version1::{ParsedConfiguration, CURRENT_VERSION};

/// The 'Configuration' type collects all the information necessary to translate requests.
///
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration', which is where the parsed values are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub document_variable: String,
    pub default_limit: Option<u64>,
    pub max_limit: Option<u64>,
}

impl Default for Configuration {
    fn default() -> Self {
        let parsed = ParsedConfiguration::initial();
        Configuration {
            document_variable: parsed.document_variable,
            default_limit: parsed.default_limit,
            max_limit: parsed.max_limit,
        }
    }
}

impl Configuration {
    /// The limit to apply for a request asking for `requested` documents, if any.
    pub fn effective_limit(&self, requested: Option<u64>) -> Option<u64> {
        let limit = requested.or(self.default_limit)?;
        Some(match self.max_limit {
            Some(max_limit) => limit.min(max_limit),
            None => limit,
        })
    }
}

/// Check a parsed configuration and turn it into the runtime 'Configuration'.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    if parsed_config.version != CURRENT_VERSION {
        return Err(MakeRuntimeConfigurationError::UnsupportedVersion(
            parsed_config.version,
        ));
    }

    if !is_identifier(&parsed_config.document_variable) {
        return Err(MakeRuntimeConfigurationError::InvalidDocumentVariable(
            parsed_config.document_variable,
        ));
    }

    if let (Some(default_limit), Some(max_limit)) =
        (parsed_config.default_limit, parsed_config.max_limit)
    {
        if default_limit > max_limit {
            return Err(MakeRuntimeConfigurationError::DefaultLimitExceedsMaxLimit {
                default_limit,
                max_limit,
            });
        }
    }

    Ok(Configuration {
        document_variable: parsed_config.document_variable,
        default_limit: parsed_config.default_limit,
        max_limit: parsed_config.max_limit,
    })
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(document_variable: &str) -> ParsedConfiguration {
        ParsedConfiguration {
            document_variable: document_variable.to_string(),
            ..ParsedConfiguration::initial()
        }
    }

    #[test]
    fn initial_configuration_is_valid() {
        assert_eq!(
            make_runtime_configuration(ParsedConfiguration::initial()),
            Ok(Configuration::default())
        );
    }

    #[test]
    fn document_variable_must_be_an_identifier() {
        for name in ["doc", "_d", "d0c_2"] {
            assert!(make_runtime_configuration(parsed(name)).is_ok(), "{name}");
        }
        for name in ["", "0doc", "doc.x", "@doc", "my doc"] {
            assert_eq!(
                make_runtime_configuration(parsed(name)),
                Err(MakeRuntimeConfigurationError::InvalidDocumentVariable(
                    name.to_string()
                ))
            );
        }
    }

    #[test]
    fn unsupported_version() {
        let config = ParsedConfiguration {
            version: 2,
            ..ParsedConfiguration::initial()
        };
        assert_eq!(
            make_runtime_configuration(config),
            Err(MakeRuntimeConfigurationError::UnsupportedVersion(2))
        );
    }

    #[test]
    fn default_limit_within_max_limit() {
        let config = ParsedConfiguration {
            default_limit: Some(100),
            max_limit: Some(50),
            ..ParsedConfiguration::initial()
        };
        assert_eq!(
            make_runtime_configuration(config),
            Err(MakeRuntimeConfigurationError::DefaultLimitExceedsMaxLimit {
                default_limit: 100,
                max_limit: 50
            })
        );
    }

    #[test]
    fn effective_limit() {
        let unlimited = Configuration::default();
        assert_eq!(unlimited.effective_limit(None), None);
        assert_eq!(unlimited.effective_limit(Some(500)), Some(500));

        let limited = Configuration {
            default_limit: Some(20),
            max_limit: Some(100),
            ..Configuration::default()
        };
        assert_eq!(limited.effective_limit(None), Some(20));
        assert_eq!(limited.effective_limit(Some(5)), Some(5));
        assert_eq!(limited.effective_limit(Some(500)), Some(100));
    }
}
