//! Handler binding.
//!
//! # Responsibilities
//! - Capture action and parameter names at route-table construction
//! - Per request: pick parameter values by name, build a fresh controller,
//!   establish the execution context, call the action
//!
//! # Design Decisions
//! - A missing parameter is passed as `None`; the action decides what to do
//! - The action's response is returned untouched

use std::sync::Arc;

use axum::response::Response;
use futures_util::future::BoxFuture;

use crate::controller::{ActionClass, Args, Controller, ExecutionContext};
use crate::error::RouteResult;
use crate::http::ActionRequest;

/// A handler ready to be installed in the dispatch layer.
pub type BoundHandler = Arc<dyn Fn(ActionRequest) -> BoxFuture<'static, Response> + Send + Sync>;

/// Bind `action` of `class`, extracting `params` from each request.
pub fn handle<C: Controller>(
    class: &Arc<ActionClass<C>>,
    action: &str,
    params: &[String],
) -> RouteResult<BoundHandler> {
    let target = class.resolve_action(action)?.clone();
    let class = Arc::clone(class);
    let params = params.to_vec();

    Ok(Arc::new(move |request: ActionRequest| {
        let args: Args = params
            .iter()
            .map(|name| request.params.get(name).cloned())
            .collect();

        tracing::debug!(
            controller = %class.name(),
            action = %target.name(),
            path = %request.path,
            missing = ?params
                .iter()
                .filter(|name| !request.params.contains_key(name.as_str()))
                .collect::<Vec<_>>(),
            "Dispatching action"
        );

        let controller = C::new(request);
        let context = ExecutionContext::establish(Arc::clone(&class), target.name(), controller);
        target.call(context, args)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{Action, BasicController};
    use serde_json::{json, Map, Value};

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_params_passed_in_declared_order() {
        let class = ActionClass::<BasicController>::builder("Posts")
            .action(Action::new("show", ["post", "user"], |_, args: Args| async move {
                format!("{}|{}", args.get(0).unwrap_or("-"), args.get(1).unwrap_or("-"))
            }))
            .build();

        let handler = handle(&class, "show", &["post".into(), "user".into()]).unwrap();
        let request = ActionRequest::default()
            .with_param("user", "u1")
            .with_param("post", "p9");
        assert_eq!(body_text(handler(request).await).await, "p9|u1");
    }

    #[tokio::test]
    async fn test_missing_param_is_none() {
        let class = ActionClass::<BasicController>::builder("Posts")
            .action(Action::new("show", ["id"], |_, args: Args| async move {
                match args.get(0) {
                    Some(id) => id.to_string(),
                    None => "none".to_string(),
                }
            }))
            .build();

        let handler = handle(&class, "show", &["id".into()]).unwrap();
        assert_eq!(body_text(handler(ActionRequest::default()).await).await, "none");
    }

    #[tokio::test]
    async fn test_fresh_controller_per_request() {
        let class = ActionClass::<BasicController>::builder("Echo")
            .context(|action| {
                let mut locals = Map::new();
                locals.insert("action".into(), Value::from(action));
                locals
            })
            .action(Action::new(
                "path",
                Vec::<String>::new(),
                |ctx: ExecutionContext<BasicController>, _| async move {
                    let action = ctx.get("action").cloned().unwrap_or(json!(null));
                    format!("{} {}", ctx.request().path, action)
                },
            ))
            .build();

        let handler = handle(&class, "path", &[]).unwrap();
        let first = body_text(handler(ActionRequest::new(Default::default(), "/a")).await).await;
        let second = body_text(handler(ActionRequest::new(Default::default(), "/b")).await).await;
        assert_eq!(first, "/a \"path\"");
        assert_eq!(second, "/b \"path\"");
    }

    #[test]
    fn test_bind_unknown_action_fails() {
        let class = ActionClass::<BasicController>::builder("Posts").build();
        assert!(handle(&class, "show", &[]).is_err());
    }
}
