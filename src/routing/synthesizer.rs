//! Path synthesis for one action.
//!
//! # Rules
//! 1. `private` on the action or its class: no paths at all
//! 2. Otherwise, each applicable rule adds a path:
//!    - `/base/action` unless the action is `special`
//!    - `/base` if the action or class is `root`, or the action is `index`
//!    - every `alias` pattern, in declaration order
//! 3. Declared parameters are appended to every path, in order
//!
//! # Design Decisions
//! - Nothing is deduplicated; two rules yielding the same text give two paths
//! - Alias parameter segments are not checked against the declared parameters

use crate::annotation::{Annotated, Tag, TagKind};
use crate::controller::{ActionClass, Controller};
use crate::error::RouteResult;
use crate::path::Path;

/// An action with this name is routed at the base path without a `root` tag.
pub const INDEX_ACTION: &str = "index";

/// Path patterns, rendered, that should dispatch to `action`.
pub fn make_paths<C: Controller>(
    class: &ActionClass<C>,
    action: &str,
    params: &[String],
) -> RouteResult<Vec<String>> {
    Ok(make_path_values(class, action, params)?
        .iter()
        .map(ToString::to_string)
        .collect())
}

/// Same as [`make_paths`], keeping the typed paths.
pub fn make_path_values<C: Controller>(
    class: &ActionClass<C>,
    action: &str,
    params: &[String],
) -> RouteResult<Vec<Path>> {
    let target = class.resolve_action(action)?;

    if target.has_tag(TagKind::Private).is_some() || class.class_tag(TagKind::Private).is_some() {
        return Ok(Vec::new());
    }

    let base = class.base_path();
    let special = target.has_tag(TagKind::Special).is_some();
    let mut paths = Vec::new();

    if !special {
        paths.push(Path::from_parts(&base, action));
    }

    if target.has_tag(TagKind::Root).is_some()
        || class.class_tag(TagKind::Root).is_some()
        || action == INDEX_ACTION
    {
        paths.push(Path::from_base(&base));
    }

    if let Some(Tag::Alias(aliases)) = target.has_tag(TagKind::Alias) {
        paths.extend(aliases.iter().map(|alias| Path::parse(alias)));
    }

    if special && paths.is_empty() {
        tracing::warn!(
            controller = %class.name(),
            action = %action,
            "Special action has no root or alias path; it is only reachable internally"
        );
    }

    Ok(paths.iter().map(|path| path.concat(params)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::tags;
    use crate::controller::{Action, BasicController};
    use crate::error::RouteError;
    use std::sync::Arc;

    fn action(name: &str, params: &[&str]) -> Action<BasicController> {
        Action::new(name, params.to_vec(), |_, _| async { "ok" })
    }

    fn class_with(action: Action<BasicController>) -> Arc<ActionClass<BasicController>> {
        ActionClass::builder("Users").action(action).build()
    }

    fn paths(class: &ActionClass<BasicController>, name: &str) -> Vec<String> {
        let params = class.resolve_action(name).unwrap().params().to_vec();
        make_paths(class, name, &params).unwrap()
    }

    #[test]
    fn test_untagged_action() {
        let class = class_with(action("show", &["id", "tab"]));
        assert_eq!(paths(&class, "show"), vec!["/users/show/:id/:tab"]);
    }

    #[test]
    fn test_root_action_adds_base_path() {
        let class = class_with(action("list", &[]).tag(tags::root()));
        assert_eq!(paths(&class, "list"), vec!["/users/list", "/users"]);
    }

    #[test]
    fn test_index_behaves_like_root() {
        let index = class_with(action("index", &["page"]));
        let rooted = class_with(action("index", &["page"]).tag(tags::root()));
        assert_eq!(paths(&index, "index"), vec!["/users/index/:page", "/users/:page"]);
        assert_eq!(paths(&index, "index"), paths(&rooted, "index"));
    }

    #[test]
    fn test_class_level_root() {
        let class = ActionClass::builder("Home")
            .tag(tags::root())
            .action(action("welcome", &[]))
            .build();
        assert_eq!(paths(&class, "welcome"), vec!["/home/welcome", "/home"]);
    }

    #[test]
    fn test_alias_paths_get_params() {
        let class = class_with(action("create", &["id"]).tag(tags::alias(["u/new", "/add"])));
        assert_eq!(
            paths(&class, "create"),
            vec!["/users/create/:id", "/u/new/:id", "/add/:id"]
        );
    }

    #[test]
    fn test_private_yields_nothing() {
        let class = class_with(
            action("secret", &["id"])
                .tag(tags::root())
                .tag(tags::alias(["s"]))
                .tag(tags::private()),
        );
        assert!(paths(&class, "secret").is_empty());
    }

    #[test]
    fn test_class_level_private() {
        let class = ActionClass::builder("Internal")
            .tag(tags::private())
            .action(action("index", &[]))
            .build();
        assert!(paths(&class, "index").is_empty());
    }

    #[test]
    fn test_special_suppresses_default_only() {
        let bare = class_with(action("hidden", &[]).tag(tags::special()));
        assert!(paths(&bare, "hidden").is_empty());

        let rooted = class_with(action("home", &["id"]).tag(tags::special()).tag(tags::root()));
        assert_eq!(paths(&rooted, "home"), vec!["/users/:id"]);

        let aliased = class_with(action("go", &[]).tag(tags::special()).tag(tags::alias(["go"])));
        assert_eq!(paths(&aliased, "go"), vec!["/go"]);
    }

    #[test]
    fn test_duplicate_sources_are_kept() {
        let class = class_with(action("index", &[]).tag(tags::alias(["users"])));
        assert_eq!(paths(&class, "index"), vec!["/users/index", "/users", "/users"]);
    }

    #[test]
    fn test_base_override() {
        let class = ActionClass::builder("Users")
            .base("api/people")
            .action(action("show", &["id"]))
            .build();
        assert_eq!(paths(&class, "show"), vec!["/api/people/show/:id"]);
    }

    #[test]
    fn test_unknown_action_fails() {
        let class = class_with(action("show", &[]));
        assert!(matches!(
            make_paths(class.as_ref(), "nope", &[]),
            Err(RouteError::UnknownAction { .. })
        ));
    }
}
