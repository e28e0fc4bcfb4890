//! Route derivation over the shared test controllers.

use std::sync::Arc;

use sodor::controller::{Action, ActionClass, BasicController};
use sodor::routing::routes;
use sodor::{tags, Verb};

mod common;

fn listing<C: sodor::Controller>(class: &Arc<ActionClass<C>>) -> Vec<String> {
    routes(class)
        .unwrap()
        .iter()
        .map(|route| format!("{} {}", route.verb, route.path))
        .collect()
}

fn noop(name: &str, params: &[&str]) -> Action<BasicController> {
    Action::new(name, params.to_vec(), |_, _| async { "ok" })
}

#[test]
fn test_users_route_table() {
    let users = common::users_class();
    assert_eq!(
        listing(&users),
        [
            "get /users/status",
            "get /users/show/:id",
            "get /users/list",
            "get /users",
            "post /users/create/:id",
            "post /u/new/:id",
            "get /users/summary/all",
            "get /users/index",
            "get /users",
        ]
    );
}

#[test]
fn test_route_metadata() {
    let users = common::users_class();
    let derived = routes(&users).unwrap();

    let status = &derived[0];
    assert_eq!(status.controller, "Users");
    assert_eq!(status.action, "status");

    let summaries: Vec<_> = derived.iter().map(|r| r.summary()).collect();
    assert!(summaries
        .iter()
        .all(|s| s.controller == "Users" && !s.action.is_empty()));
}

#[test]
fn test_action_names_cover_ancestors() {
    let base = common::base_class();
    let users = common::users_class();

    let names = users.action_names();
    assert!(names.len() >= users.own_actions().len());
    for inherited in base.action_names() {
        assert!(names.contains(&inherited), "missing {inherited}");
    }
}

#[test]
fn test_private_actions_never_route() {
    let users = common::users_class();
    let derived = routes(&users).unwrap();
    assert!(derived
        .iter()
        .all(|route| route.action != "secret" && route.action != "audit"));
}

#[test]
fn test_special_without_root_or_alias_has_no_routes() {
    let class = ActionClass::builder("Jobs")
        .action(noop("run", &["id"]).tag(tags::special()))
        .action(noop("list", &[]))
        .build();
    assert_eq!(listing(&class), ["get /jobs/list"]);
}

#[test]
fn test_untagged_action_single_get_route() {
    let class = ActionClass::builder("Reports")
        .action(noop("daily", &["year", "month", "day"]))
        .build();
    assert_eq!(listing(&class), ["get /reports/daily/:year/:month/:day"]);
}

#[test]
fn test_index_behaves_like_root() {
    let named = ActionClass::builder("Docs")
        .action(noop("index", &["page"]))
        .build();
    let tagged = ActionClass::builder("Docs")
        .action(noop("index", &["page"]).tag(tags::root()))
        .build();
    assert_eq!(listing(&named), listing(&tagged));
    assert_eq!(listing(&named), ["get /docs/index/:page", "get /docs/:page"]);
}

#[test]
fn test_alias_gets_params() {
    let class = ActionClass::builder("Things")
        .action(noop("make", &["id"]).tag(tags::alias(["foo/bar"])))
        .build();
    assert!(listing(&class).contains(&"get /foo/bar/:id".to_string()));
}

#[test]
fn test_every_verb_decorator() {
    let decorators = [
        (tags::get(), Verb::Get),
        (tags::post(), Verb::Post),
        (tags::put(), Verb::Put),
        (tags::delete(), Verb::Delete),
        (tags::patch(), Verb::Patch),
        (tags::options(), Verb::Options),
        (tags::head(), Verb::Head),
        (tags::trace(), Verb::Trace),
        (tags::connect(), Verb::Connect),
    ];
    for (tag, verb) in decorators {
        assert_eq!(tag, tags::method(verb));
        let class = ActionClass::builder("V").action(noop("go", &[]).tag(tag)).build();
        assert_eq!(routes(&class).unwrap()[0].verb, verb);
    }
}

#[test]
fn test_class_level_tags_are_inherited() {
    let hidden = ActionClass::builder("Hidden")
        .tag(tags::private())
        .action(noop("a", &[]))
        .build();
    let child = ActionClass::builder("Child")
        .extends(hidden)
        .action(noop("b", &[]))
        .build();
    assert!(routes(&child).unwrap().is_empty());

    let rooted = ActionClass::builder("Pages")
        .tag(tags::root())
        .action(noop("about", &[]))
        .build();
    assert_eq!(listing(&rooted), ["get /pages/about", "get /pages"]);
}

#[test]
fn test_override_uses_subclass_tags_and_base() {
    let parent = ActionClass::builder("Parent")
        .action(noop("save", &["id"]).tag(tags::post()))
        .build();
    let child = ActionClass::builder("Child")
        .extends(parent)
        .base("kids")
        .action(noop("save", &[]).tag(tags::put()))
        .build();
    assert_eq!(listing(&child), ["put /kids/save"]);
}

#[test]
fn test_derivation_is_repeatable() {
    let users = common::users_class();
    let first: Vec<_> = routes(&users).unwrap().iter().map(|r| r.summary()).collect();
    let second: Vec<_> = routes(&users).unwrap().iter().map(|r| r.summary()).collect();
    assert_eq!(first, second);
}
