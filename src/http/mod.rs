//! HTTP integration subsystem.
//!
//! # Data Flow
//! ```text
//! Route derivation output (Vec<Route>)
//!     → table.rs (group by path, convert patterns, install into axum)
//!     → server.rs (middleware, listener, graceful shutdown)
//!
//! Per request:
//!     axum match → table.rs endpoint (path params + bounded body)
//!     → request.rs ActionRequest
//!     → BoundHandler → Response
//! ```

pub mod request;
pub mod server;
pub mod table;

pub use request::ActionRequest;
pub use server::RouteServer;
pub use table::{RouteTable, DEFAULT_BODY_LIMIT};
