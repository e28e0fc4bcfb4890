//! Sodor: declarative route synthesis for controller classes.
//!
//! Controllers declare actions with tags (`method`, `alias`, `root`,
//! `private`, `special`); the routing subsystem derives verb/path/handler
//! triples from those declarations and the http subsystem installs them
//! into an axum router.
//!
//! ```text
//!   ActionClass<C> ──▶ collector ──▶ synthesizer ──▶ emitter ──▶ Vec<Route>
//!        ▲                                  │                       │
//!        │                                  ▼                       ▼
//!   annotation tags                     binder              http::RouteTable
//!                                  (BoundHandler)            → axum Router
//! ```

// Core subsystems
pub mod annotation;
pub mod controller;
pub mod error;
pub mod path;
pub mod routing;

// Integration
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use annotation::{tags, Annotated, Annotations, Tag, TagKind, Verb};
pub use controller::{Action, ActionClass, Args, BasicController, Controller, ExecutionContext};
pub use error::{RouteError, RouteResult};
pub use http::{ActionRequest, RouteServer, RouteTable};
pub use lifecycle::Shutdown;
pub use path::{Path, Segment};
pub use routing::{handle, make_paths, routes, BoundHandler, Route};
