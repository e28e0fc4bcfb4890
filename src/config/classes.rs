//! Controller classes built from a route manifest.
//!
//! Every manifest action gets an echo body: it answers with the serving
//! class, the action name and the values bound to its parameters.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use serde_json::{json, Map, Value};

use crate::annotation::tags;
use crate::config::loader::ConfigError;
use crate::config::schema::{ActionConfig, ControllerConfig, RoutingConfig};
use crate::config::validation::{validate_config, ValidationError};
use crate::controller::{Action, ActionClass, Args, Controller, ExecutionContext};
use crate::http::ActionRequest;

/// Controller behind manifest-declared classes.
#[derive(Debug, Clone)]
pub struct EchoController {
    request: ActionRequest,
}

impl EchoController {
    pub fn request(&self) -> &ActionRequest {
        &self.request
    }
}

impl Controller for EchoController {
    fn new(request: ActionRequest) -> Self {
        Self { request }
    }

    fn fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("path".into(), Value::String(self.request.path.clone()));
        fields
    }
}

/// Build one class per manifest controller, in manifest order.
///
/// Superclasses are built before their subclasses and shared between
/// them, so a class extended twice exists once.
pub fn build_classes(
    config: &RoutingConfig,
) -> Result<Vec<Arc<ActionClass<EchoController>>>, ConfigError> {
    validate_config(config).map_err(ConfigError::Validation)?;

    let mut built = HashMap::new();
    config
        .controllers
        .iter()
        .map(|controller| build_class(config, controller, &mut built))
        .collect()
}

fn build_class<'a>(
    config: &'a RoutingConfig,
    controller: &'a ControllerConfig,
    built: &mut HashMap<&'a str, Arc<ActionClass<EchoController>>>,
) -> Result<Arc<ActionClass<EchoController>>, ConfigError> {
    if let Some(class) = built.get(controller.name.as_str()) {
        return Ok(Arc::clone(class));
    }

    let mut builder = ActionClass::builder(controller.name.clone());
    if let Some(parent) = &controller.extends {
        let parent_config = config.controller(parent).ok_or_else(|| {
            ConfigError::Validation(vec![ValidationError::UnknownParent {
                controller: controller.name.clone(),
                parent: parent.clone(),
            }])
        })?;
        builder = builder.extends(build_class(config, parent_config, built)?);
    }
    if let Some(base) = &controller.base {
        builder = builder.base(base.clone());
    }
    if controller.root {
        builder = builder.tag(tags::root());
    }
    if controller.private {
        builder = builder.tag(tags::private());
    }
    for action in &controller.actions {
        builder = builder.action(echo_action(action));
    }

    let class = builder.build();
    tracing::debug!(
        controller = %controller.name,
        extends = ?controller.extends,
        actions = controller.actions.len(),
        "Controller class built"
    );
    built.insert(controller.name.as_str(), Arc::clone(&class));
    Ok(class)
}

fn echo_action(config: &ActionConfig) -> Action<EchoController> {
    let names = config.params.clone();
    let mut action = Action::new(
        config.name.clone(),
        config.params.clone(),
        move |cx: ExecutionContext<EchoController>, args: Args| {
            let params: Map<String, Value> = names
                .iter()
                .zip(args.iter())
                .map(|(name, value)| {
                    let value = value.map_or(Value::Null, |v| Value::String(v.to_string()));
                    (name.clone(), value)
                })
                .collect();
            let body = json!({
                "controller": cx.class().name(),
                "action": cx.action(),
                "verb": cx.request().verb,
                "params": params,
            });
            async move { Json(body) }
        },
    );

    if let Some(verb) = config.method {
        action = action.tag(tags::method(verb));
    }
    if let Some(paths) = &config.alias {
        action = action.tag(tags::alias(paths.iter().cloned()));
    }
    if config.root {
        action = action.tag(tags::root());
    }
    if config.private {
        action = action.tag(tags::private());
    }
    if config.special {
        action = action.tag(tags::special());
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::parse_config;
    use crate::routing::routes;

    const MANIFEST: &str = r#"
        [[controllers]]
        name = "Base"

        [[controllers.actions]]
        name = "status"

        [[controllers]]
        name = "Users"
        extends = "Base"

        [[controllers.actions]]
        name = "create"
        params = ["id"]
        method = "post"
        alias = ["u/new"]

        [[controllers.actions]]
        name = "index"

        [[controllers.actions]]
        name = "secret"
        private = true

        [[controllers]]
        name = "Admins"
        extends = "Base"
        base = "admin"
    "#;

    #[test]
    fn test_builds_in_manifest_order_with_shared_parent() {
        let config = parse_config(MANIFEST).unwrap();
        let classes = build_classes(&config).unwrap();

        let names: Vec<_> = classes.iter().map(|c| c.name().to_string()).collect();
        assert_eq!(names, ["Base", "Users", "Admins"]);
        assert!(Arc::ptr_eq(classes[1].superclass().unwrap(), &classes[0]));
        assert!(Arc::ptr_eq(classes[2].superclass().unwrap(), &classes[0]));
    }

    #[test]
    fn test_manifest_routes() {
        let config = parse_config(MANIFEST).unwrap();
        let classes = build_classes(&config).unwrap();

        let users: Vec<_> = routes(&classes[1])
            .unwrap()
            .iter()
            .map(|r| format!("{} {} {}", r.verb, r.path, r.action))
            .collect();
        assert_eq!(
            users,
            [
                "get /users/status status",
                "post /users/create/:id create",
                "post /u/new/:id create",
                "get /users/index index",
                "get /users index",
            ]
        );

        let admins: Vec<_> = routes(&classes[2])
            .unwrap()
            .iter()
            .map(|r| r.path.clone())
            .collect();
        assert_eq!(admins, ["/admin/status"]);
    }

    #[test]
    fn test_subclass_declared_before_parent() {
        let config = parse_config(
            r#"
            [[controllers]]
            name = "Child"
            extends = "Parent"

            [[controllers]]
            name = "Parent"
            base = "p"
            "#,
        )
        .unwrap();
        let classes = build_classes(&config).unwrap();
        assert_eq!(classes[0].base_path(), "p");
        assert!(Arc::ptr_eq(classes[0].superclass().unwrap(), &classes[1]));
    }

    #[test]
    fn test_invalid_manifest_is_rejected() {
        let config: RoutingConfig = toml::from_str(
            r#"
            [[controllers]]
            name = "A"
            extends = "A"
            "#,
        )
        .unwrap();
        assert!(matches!(
            build_classes(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_echo_body() {
        let config = parse_config(MANIFEST).unwrap();
        let classes = build_classes(&config).unwrap();
        let route = routes(&classes[1])
            .unwrap()
            .into_iter()
            .find(|r| r.action == "create")
            .unwrap();

        let request = ActionRequest::new(crate::annotation::Verb::Post, "/users/create/7")
            .with_param("id", "7");
        let response = route.call(request).await;
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            body,
            json!({
                "controller": "Users",
                "action": "create",
                "verb": "post",
                "params": { "id": "7" },
            })
        );
    }
}
