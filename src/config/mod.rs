//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route manifest (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RoutingConfig (validated, immutable)
//!     → classes.rs (ActionClass<EchoController> per controller)
//!     → routing::routes → http::RouteTable
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal manifests
//! - Validation separates syntactic (serde) from semantic checks
//! - `extends` may name a controller declared later in the file

pub mod classes;
pub mod loader;
pub mod schema;
pub mod validation;

pub use classes::{build_classes, EchoController};
pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ActionConfig, ControllerConfig, ObservabilityConfig, RoutingConfig, ServerConfig};
pub use validation::{validate_config, ValidationError};
