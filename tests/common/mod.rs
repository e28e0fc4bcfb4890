//! Shared controllers and helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::{json, Map, Value};
use tower::ServiceExt;

use sodor::controller::{Action, ActionClass, Args, Controller, ExecutionContext};
use sodor::http::ActionRequest;
use sodor::tags;

/// Controller exposing the `x-user` header as a context field.
#[derive(Debug)]
pub struct Session {
    pub request: ActionRequest,
}

impl Controller for Session {
    fn new(request: ActionRequest) -> Self {
        Self { request }
    }

    fn fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        if let Some(user) = self.request.header("x-user") {
            fields.insert("user".into(), Value::String(user.to_string()));
        }
        fields
    }
}

/// Echoes the action name, its arguments and the merged context.
pub fn echo(name: &str, params: &[&str]) -> Action<Session> {
    Action::new(name, params.to_vec(), |cx: ExecutionContext<Session>, args: Args| async move {
        Json(json!({
            "action": cx.action(),
            "args": args.iter().collect::<Vec<_>>(),
            "user": cx.get("user"),
            "app": cx.get("app"),
            "verb": cx.request.verb,
        }))
    })
}

/// Base class shared by the test controllers.
pub fn base_class() -> Arc<ActionClass<Session>> {
    ActionClass::builder("Base")
        .context(|_action| {
            let mut context = Map::new();
            context.insert("app".into(), json!("sodor"));
            context.insert("user".into(), json!("anonymous"));
            context
        })
        .action(echo("status", &[]))
        .action(echo("audit", &[]).tag(tags::private()))
        .build()
}

/// The `Users` controller:
///
/// - `show(id)` untagged
/// - `list()` root
/// - `create(id)` post, aliased `u/new`
/// - `secret()` private, reachable through `summary`
/// - `summary()` special, aliased `users/summary/all`
/// - `index()`
pub fn users_class() -> Arc<ActionClass<Session>> {
    ActionClass::builder("Users")
        .extends(base_class())
        .action(echo("show", &["id"]))
        .action(echo("list", &[]).tag(tags::root()))
        .action(
            echo("create", &["id"])
                .tag(tags::post())
                .tag(tags::alias(["u/new"])),
        )
        .action(
            Action::new(
                "secret",
                Vec::<String>::new(),
                |cx: ExecutionContext<Session>, _args: Args| async move {
                    Json(json!({ "secret": true, "via": cx.action() }))
                },
            )
            .tag(tags::private()),
        )
        .action(
            Action::new(
                "summary",
                Vec::<String>::new(),
                |cx: ExecutionContext<Session>, _args: Args| async move {
                    match cx.invoke("secret", Args::default()) {
                        Ok(secret) => secret.await,
                        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
                    }
                },
            )
            .tag(tags::special())
            .tag(tags::alias(["users/summary/all"])),
        )
        .action(echo("index", &[]))
        .build()
}

/// Send one request through `router`, returning status and JSON body.
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
