//! Installing derived routes into axum.
//!
//! # Responsibilities
//! - Collect routes from one or more controller classes
//! - Group verbs per path into one method router
//! - Convert `:param` patterns to axum's `{param}` syntax
//! - Adapt axum requests into `ActionRequest`s for bound handlers
//!
//! # Design Decisions
//! - An exact (verb, path) repeat is installed once and logged, not rejected
//! - Parameter-name clashes are reported as errors before axum sees them
//! - Request bodies are read fully, bounded by `body_limit`

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::RawPathParams,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::MethodRouter,
    Router,
};
use futures_util::future::{BoxFuture, FutureExt};

use crate::annotation::Verb;
use crate::controller::{ActionClass, Controller};
use crate::error::{RouteError, RouteResult};
use crate::http::ActionRequest;
use crate::path::{Path, Segment};
use crate::routing::{self, BoundHandler, Route};

/// Default request body limit (2MB).
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// An ordered set of routes waiting to be installed.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    body_limit: usize,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

/// Routes sharing one axum path.
struct PathEntry<S> {
    path: Path,
    pattern: String,
    verbs: Vec<Verb>,
    router: MethodRouter<S>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }

    /// Derive and add every route of `class`.
    pub fn mount<C: Controller>(mut self, class: &Arc<ActionClass<C>>) -> RouteResult<Self> {
        self.routes.extend(routing::routes(class)?);
        Ok(self)
    }

    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Build the axum router.
    pub fn into_router<S>(self) -> RouteResult<Router<S>>
    where
        S: Clone + Send + Sync + 'static,
    {
        let mut entries: Vec<PathEntry<S>> = Vec::new();

        for route in &self.routes {
            let path = Path::parse(&route.path);
            if !dispatchable(&path) {
                return Err(RouteError::InvalidPattern(route.path.clone()));
            }
            let pattern = path.to_axum();

            let index = match entries.iter().position(|entry| entry.pattern == pattern) {
                Some(index) => index,
                None => {
                    if let Some(other) = entries.iter().find(|entry| params_clash(&entry.path, &path)) {
                        return Err(RouteError::ConflictingParams {
                            first: other.path.to_string(),
                            second: path.to_string(),
                        });
                    }
                    entries.push(PathEntry {
                        path,
                        pattern,
                        verbs: Vec::new(),
                        router: MethodRouter::new(),
                    });
                    entries.len() - 1
                }
            };

            let entry = &mut entries[index];
            if entry.verbs.contains(&route.verb) {
                tracing::debug!(
                    verb = %route.verb,
                    path = %route.path,
                    action = %route.action,
                    "Duplicate route skipped"
                );
                continue;
            }

            entry.verbs.push(route.verb);
            let router = std::mem::replace(&mut entry.router, MethodRouter::new());
            entry.router = router.on(
                route.verb.method_filter(),
                endpoint(Arc::clone(&route.handler), self.body_limit),
            );
        }

        let installed = entries.len();
        let router = entries
            .into_iter()
            .fold(Router::new(), |router, entry| router.route(&entry.pattern, entry.router));

        tracing::info!(
            routes = self.routes.len(),
            paths = installed,
            "Route table installed"
        );
        Ok(router)
    }
}

/// Characters axum reads as placeholder or wildcard syntax.
const RESERVED: [char; 3] = ['*', '{', '}'];

/// Whether axum can register `path` with the meaning it has here: every
/// parameter named and matching exactly one segment, and no literal that
/// axum would take for a wildcard.
fn dispatchable(path: &Path) -> bool {
    path.segments().iter().all(|segment| match segment {
        Segment::Param(name) => !name.is_empty() && !name.contains(RESERVED),
        Segment::Literal(text) => !text.starts_with('*'),
    })
}

/// True when both paths share a literal prefix and then bind differently
/// named parameters at the same position.
fn params_clash(a: &Path, b: &Path) -> bool {
    for (left, right) in a.segments().iter().zip(b.segments()) {
        match (left, right) {
            (Segment::Literal(l), Segment::Literal(r)) if l == r => continue,
            (Segment::Param(l), Segment::Param(r)) if l == r => continue,
            (Segment::Param(_), Segment::Param(_)) => return true,
            _ => return false,
        }
    }
    false
}

/// Wrap a bound handler as an axum handler.
fn endpoint(
    handler: BoundHandler,
    body_limit: usize,
) -> impl Fn(RawPathParams, Request<Body>) -> BoxFuture<'static, Response> + Clone + Send + Sync + 'static
{
    move |params: RawPathParams, request: Request<Body>| {
        let handler = Arc::clone(&handler);
        let params: HashMap<String, String> = params
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        async move {
            let (parts, body) = request.into_parts();
            let body = match axum::body::to_bytes(body, body_limit).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!(path = %parts.uri.path(), error = %e, "Failed to read request body");
                    return (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response();
                }
            };

            handler(ActionRequest::from_parts(&parts, params, body)).await
        }
        .boxed()
    }
}
