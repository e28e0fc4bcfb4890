//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RoutingConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::error::RouteError;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read manifest: {0}")]
    Io(#[source] std::io::Error),

    #[error("invalid manifest syntax: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid manifest: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("cannot install routes: {0}")]
    Route(#[from] RouteError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate a route manifest from a TOML file.
pub fn load_config(path: &Path) -> Result<RoutingConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

/// Parse and validate a route manifest held in memory.
pub fn parse_config(content: &str) -> Result<RoutingConfig, ConfigError> {
    let config: RoutingConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::debug!(
        controllers = config.controllers.len(),
        "Route manifest loaded"
    );
    Ok(config)
}
