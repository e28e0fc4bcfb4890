//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Derivation (at startup):
//!     ActionClass
//!     → action_names() (ancestors first)
//!     → per action: synthesizer.rs (0..N paths)
//!                   binder.rs (one handler, shared by its paths)
//!     → emitter.rs: Vec<Route { verb, path, handler }>
//!
//! Request Time:
//!     dispatch layer → BoundHandler(ActionRequest)
//!     → fresh controller → ExecutionContext → action body → Response
//! ```
//!
//! # Design Decisions
//! - Derivation is pure and repeatable; no caching, no shared state
//! - Ambiguous tag combinations resolve to fewer routes, never an error
//! - Only unknown actions are hard failures

pub mod binder;
pub mod emitter;
pub mod synthesizer;

pub use binder::{handle, BoundHandler};
pub use emitter::{routes, Route, RouteSummary};
pub use synthesizer::{make_path_values, make_paths, INDEX_ACTION};
