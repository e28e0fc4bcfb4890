//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!       (route derivation, installation, dispatch, lifecycle)
//!     → logging.rs subscriber (EnvFilter + fmt, text or JSON)
//!     → stdout
//!
//! Per request:
//!     tower_http TraceLayer span → handler events nested inside
//! ```

pub mod logging;

pub use logging::init_logging;
