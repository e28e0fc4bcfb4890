//! Route emission.
//!
//! # Responsibilities
//! - Walk every visible action of a class
//! - Resolve verb, parameters and handler per action
//! - Emit one route per synthesized path
//!
//! # Design Decisions
//! - Order: action order (ancestors first), then default, root, alias paths
//! - Routes are rebuilt on every call; caching belongs to the caller

use std::fmt;
use std::sync::Arc;

use axum::response::Response;
use futures_util::future::BoxFuture;
use serde::Serialize;

use crate::annotation::{Annotated, Verb};
use crate::controller::{ActionClass, Controller};
use crate::error::RouteResult;
use crate::http::ActionRequest;
use crate::routing::binder::{handle, BoundHandler};
use crate::routing::synthesizer::make_paths;

/// A derived route: verb, path pattern and bound handler.
#[derive(Clone)]
pub struct Route {
    pub verb: Verb,
    /// Pattern with `:param` placeholders.
    pub path: String,
    pub controller: String,
    pub action: String,
    pub handler: BoundHandler,
}

impl Route {
    pub fn call(&self, request: ActionRequest) -> BoxFuture<'static, Response> {
        (self.handler)(request)
    }

    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            verb: self.verb,
            path: self.path.clone(),
            controller: self.controller.clone(),
            action: self.action.clone(),
        }
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("verb", &self.verb)
            .field("path", &self.path)
            .field("controller", &self.controller)
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}

/// Handler-free view of a route, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub verb: Verb,
    pub path: String,
    pub controller: String,
    pub action: String,
}

/// Derive every route of `class`.
pub fn routes<C: Controller>(class: &Arc<ActionClass<C>>) -> RouteResult<Vec<Route>> {
    let mut routes = Vec::new();

    for name in class.action_names() {
        let action = class.resolve_action(&name)?;
        let params = action.params();
        let handler = handle(class, &name, params)?;
        let verb = action.annotations().verb().unwrap_or_default();

        for path in make_paths(class.as_ref(), &name, params)? {
            tracing::debug!(
                controller = %class.name(),
                action = %name,
                verb = %verb,
                path = %path,
                "Route derived"
            );
            routes.push(Route {
                verb,
                path,
                controller: class.name().to_string(),
                action: name.clone(),
                handler: Arc::clone(&handler),
            });
        }
    }

    tracing::info!(
        controller = %class.name(),
        routes = routes.len(),
        "Routes derived"
    );
    Ok(routes)
}
