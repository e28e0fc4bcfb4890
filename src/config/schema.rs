//! Configuration schema definitions.
//!
//! This module defines the route manifest: server settings, logging, and
//! the controllers whose routes are derived at startup. All types derive
//! Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

use crate::annotation::Verb;
use crate::http::DEFAULT_BODY_LIMIT;

/// Root configuration for a route manifest.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RoutingConfig {
    /// Listener and middleware settings.
    pub server: ServerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Controller declarations, in any order.
    pub controllers: Vec<ControllerConfig>,
}

impl RoutingConfig {
    pub fn controller(&self, name: &str) -> Option<&ControllerConfig> {
        self.controllers.iter().find(|c| c.name == name)
    }
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:3000").
    pub bind_address: String,

    /// Total request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            request_timeout_secs: 30,
            max_body_size: DEFAULT_BODY_LIMIT,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter
    /// directive. `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Emit logs as JSON lines.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}

/// A declared controller class.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControllerConfig {
    /// Class name; the default base path is its lowercase form.
    pub name: String,

    /// Base path override.
    #[serde(default)]
    pub base: Option<String>,

    /// Name of the superclass, another controller in the same manifest.
    #[serde(default)]
    pub extends: Option<String>,

    /// Class-level root: every action also routes at the base path.
    #[serde(default)]
    pub root: bool,

    /// Class-level private: no action of this class is routed.
    #[serde(default)]
    pub private: bool,

    /// Declared actions in declaration order.
    #[serde(default)]
    pub actions: Vec<ActionConfig>,
}

/// A declared action.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActionConfig {
    pub name: String,

    /// Parameter names, appended to every path as `:name` segments.
    #[serde(default)]
    pub params: Vec<String>,

    /// HTTP verb; GET when absent.
    #[serde(default)]
    pub method: Option<Verb>,

    /// Extra paths, taken as written (not under the base path).
    #[serde(default)]
    pub alias: Option<Vec<String>>,

    #[serde(default)]
    pub root: bool,

    #[serde(default)]
    pub private: bool,

    /// Suppress the default `<base>/<name>` path.
    #[serde(default)]
    pub special: bool,
}
