//! Controller subsystem.
//!
//! # Data Flow
//! ```text
//! ActionClass::builder("Users")
//!     → .extends(parent) / .base(..) / .tag(..) / .context(..)
//!     → .action(Action::new(name, params, body).tag(..))
//!     → build() → Arc<ActionClass<C>> (immutable)
//!
//! Per request:
//!     ActionRequest → C::new(request) → ExecutionContext::establish
//!     → Action::call(context, args) → Response
//! ```
//!
//! # Design Decisions
//! - Inheritance is an explicit ancestor chain of `Arc<ActionClass<C>>`
//! - Parameter names are declared with the action, never introspected
//! - One controller instance per request; nothing is pooled

pub mod action;
pub mod class;
pub mod collector;
pub mod context;

pub use action::{Action, ActionFn, Args};
pub use class::{ActionClass, ActionClassBuilder, ContextFactory};
pub use context::ExecutionContext;

use serde_json::{Map, Value};

use crate::http::ActionRequest;

/// A per-request controller instance.
pub trait Controller: Send + Sync + 'static {
    /// Build the instance for one request.
    fn new(request: ActionRequest) -> Self
    where
        Self: Sized;

    /// Fields merged on top of the class context.
    fn fields(&self) -> Map<String, Value> {
        Map::new()
    }
}

/// Controller that only keeps its request.
#[derive(Debug, Clone)]
pub struct BasicController {
    request: ActionRequest,
}

impl BasicController {
    pub fn request(&self) -> &ActionRequest {
        &self.request
    }
}

impl Controller for BasicController {
    fn new(request: ActionRequest) -> Self {
        Self { request }
    }
}
