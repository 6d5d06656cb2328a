//! Configuration loading from disk and the process environment.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{EnvironmentName, RelayConfig};
use crate::config::validation::{validate_config, ValidationError};

pub const ENV_BASE_URL: &str = "VITE_BASE_DEPLOYED_URL";
pub const ENV_REGISTRATION_ID: &str = "VITE_LANGFLOW_REGISTRATION_ID";
pub const ENV_SCHEDULER_ID: &str = "VITE_LANGFLOW_FLOW_SCHEDULER_ID";
pub const ENV_ADHERENCE_ID: &str = "VITE_LANGFLOW_FLOW_ADHERENCE_ID";
pub const ENV_PORT: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid {var}: {reason}")]
    Env { var: &'static str, reason: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the runtime configuration: defaults, then the optional TOML file,
/// then environment overrides, then validation.
pub fn load(path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    load_with(path, |key| std::env::var(key).ok())
}

fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<RelayConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match path {
        Some(path) => parse_file(path)?,
        None => RelayConfig::default(),
    };
    let config = apply_env(config, lookup)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn parse_file(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Overlay environment variables onto `config`.
///
/// `lookup` abstracts the environment so tests can inject values. Blank values
/// are treated as unset.
pub fn apply_env<F>(mut config: RelayConfig, lookup: F) -> Result<RelayConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| {
        lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    if let Some(url) = get(ENV_BASE_URL) {
        config.upstream.base_url = Some(url);
    }
    if let Some(id) = get(ENV_REGISTRATION_ID) {
        config.flows.registration_id = Some(id);
    }
    if let Some(id) = get(ENV_SCHEDULER_ID) {
        config.flows.scheduler_id = Some(id);
    }
    if let Some(id) = get(ENV_ADHERENCE_ID) {
        config.flows.adherence_id = Some(id);
    }
    if let Some(env) = get("APP_ENV").or_else(|| get("NODE_ENV")) {
        config.environment = EnvironmentName(env);
    }

    if let Some(port) = get(ENV_PORT) {
        let port: u16 = port.parse().map_err(|e: std::num::ParseIntError| ConfigError::Env {
            var: ENV_PORT,
            reason: e.to_string(),
        })?;
        config.listener.bind_address = match config.listener.bind_address.parse::<SocketAddr>() {
            Ok(mut addr) => {
                addr.set_port(port);
                addr.to_string()
            }
            Err(_) => format!("0.0.0.0:{}", port),
        };
    }

    Ok(config)
}
