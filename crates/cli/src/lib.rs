//! The command-line interface: set up a configuration directory, translate requests and check
//! operators and sort directions.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tokio::fs;
use tokio::io::AsyncReadExt;

use aql_configuration::version1::CONFIGURATION_FILENAME;
use query_engine_aql::aql::{operators, sort};
use query_engine_translation::translation;

#[derive(Debug, Parser)]
#[command(name = "aql-cli", version, about = "Build AQL queries from filter and sort requests")]
pub struct Args {
    /// The directory holding `configuration.json`.
    #[arg(long, env = "AQL_CONFIGURATION_DIR", default_value = ".")]
    pub context_path: PathBuf,

    #[command(subcommand)]
    pub subcommand: Command,
}

/// The various commands supported by the CLI.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write an initial configuration and its JSON schema.
    Initialize,
    /// Translate a JSON request into a cursor API request body.
    Translate {
        /// The request file. Read from stdin when omitted.
        #[arg(long)]
        request: Option<PathBuf>,
    },
    /// Print the AQL operator for an operator token.
    NormalizeOperator {
        operator: String,
        /// Only accept operators usable with this kind of value.
        #[arg(long, value_enum)]
        value_type: Option<ValueTypeArg>,
    },
    /// Print the AQL keyword for a sort direction token.
    NormalizeDirection { direction: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueTypeArg {
    Array,
    Bool,
    Number,
    String,
}

impl From<ValueTypeArg> for operators::ValueType {
    fn from(value: ValueTypeArg) -> Self {
        match value {
            ValueTypeArg::Array => operators::ValueType::Array,
            ValueTypeArg::Bool => operators::ValueType::Bool,
            ValueTypeArg::Number => operators::ValueType::Number,
            ValueTypeArg::String => operators::ValueType::String,
        }
    }
}

/// Run a command, returning what should be printed on success.
pub async fn run(command: Command, context_path: &Path) -> anyhow::Result<String> {
    match command {
        Command::Initialize => initialize(context_path).await,
        Command::Translate { request } => translate(context_path, request.as_deref()).await,
        Command::NormalizeOperator {
            operator,
            value_type: None,
        } => Ok(operators::normalize(&operator)?.to_string()),
        Command::NormalizeOperator {
            operator,
            value_type: Some(value_type),
        } => Ok(operators::normalize_for(value_type.into(), &operator)?.to_string()),
        Command::NormalizeDirection { direction } => {
            Ok(sort::normalize_direction(&direction)?.to_string())
        }
    }
}

/// Initialize a directory with the default configuration.
///
/// Fails rather than overwrite an existing configuration.
async fn initialize(context_path: &Path) -> anyhow::Result<String> {
    let configuration_file = context_path.join(CONFIGURATION_FILENAME);
    if fs::try_exists(&configuration_file).await? {
        anyhow::bail!(
            "configuration already exists: {}",
            configuration_file.display()
        );
    }

    aql_configuration::write_parsed_configuration(
        &aql_configuration::ParsedConfiguration::initial(),
        context_path,
    )
    .await?;

    tracing::info!(path = %context_path.display(), "initialized configuration");
    Ok(format!("wrote {}", configuration_file.display()))
}

async fn translate(context_path: &Path, request: Option<&Path>) -> anyhow::Result<String> {
    let parsed_configuration = aql_configuration::parse_configuration(context_path).await?;
    let configuration = aql_configuration::make_runtime_configuration(parsed_configuration)?;

    let request_json = match request {
        Some(path) => fs::read_to_string(path)
            .await
            .with_context(|| format!("reading request {}", path.display()))?,
        None => {
            let mut request_json = String::new();
            tokio::io::stdin()
                .read_to_string(&mut request_json)
                .await
                .context("reading request from stdin")?;
            request_json
        }
    };
    let query_request: translation::request::QueryRequest =
        serde_json::from_str(&request_json).context("parsing request")?;

    let query = translation::query::translate(&configuration, &query_request)?;
    Ok(serde_json::to_string_pretty(&query.to_request())?)
}
