//! Execution context for action bodies.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use axum::response::Response;
use futures_util::future::BoxFuture;
use serde_json::{Map, Value};

use crate::controller::{ActionClass, Args, Controller};
use crate::error::RouteResult;

/// What an action body runs against: the per-request controller plus the
/// merged locals (class context overlaid by the controller's fields).
pub struct ExecutionContext<C> {
    controller: Arc<C>,
    locals: Arc<Map<String, Value>>,
    class: Arc<ActionClass<C>>,
    action: String,
}

impl<C: Controller> ExecutionContext<C> {
    /// Establish the context for `action`. Controller fields win over keys
    /// supplied by the class context factory.
    pub fn establish(class: Arc<ActionClass<C>>, action: &str, controller: C) -> Self {
        let mut locals = class
            .context_factory()
            .map(|factory| factory(action))
            .unwrap_or_default();
        locals.extend(controller.fields());

        Self {
            controller: Arc::new(controller),
            locals: Arc::new(locals),
            class,
            action: action.to_string(),
        }
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// The action this context was established for.
    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn class(&self) -> &Arc<ActionClass<C>> {
        &self.class
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.locals.get(key)
    }

    pub fn locals(&self) -> &Map<String, Value> {
        &self.locals
    }

    /// Call another action of the same class by name, private ones included.
    /// The callee runs against this same context.
    pub fn invoke(&self, action: &str, args: Args) -> RouteResult<BoxFuture<'static, Response>> {
        let target = self.class.resolve_action(action)?;
        tracing::trace!(
            controller = %self.class.name(),
            from = %self.action,
            to = %target.name(),
            "Invoking action internally"
        );
        Ok(target.call(self.clone(), args))
    }
}

impl<C> Clone for ExecutionContext<C> {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
            locals: Arc::clone(&self.locals),
            class: Arc::clone(&self.class),
            action: self.action.clone(),
        }
    }
}

impl<C> Deref for ExecutionContext<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.controller
    }
}

impl<C> fmt::Debug for ExecutionContext<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("controller", &self.class.name())
            .field("action", &self.action)
            .field("locals", &self.locals)
            .finish()
    }
}
