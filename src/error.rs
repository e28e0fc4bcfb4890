//! Route derivation errors.

use thiserror::Error;

/// Errors raised while deriving or installing routes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// An action name that no class in the chain declares.
    #[error("controller {controller} has no action named {action}")]
    UnknownAction { controller: String, action: String },

    /// Two patterns bind different parameter names at the same position.
    #[error("route {first} conflicts with {second}: parameter names differ at the same position")]
    ConflictingParams { first: String, second: String },

    /// A pattern the dispatch layer cannot register (e.g. an unnamed parameter).
    #[error("invalid route pattern: {0}")]
    InvalidPattern(String),

    /// A verb outside the supported set.
    #[error("unsupported HTTP verb: {0}")]
    InvalidVerb(String),
}

/// Result type for route derivation.
pub type RouteResult<T> = Result<T, RouteError>;
