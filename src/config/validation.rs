//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (`extends` names an existing controller)
//! - Reject inheritance cycles
//! - Validate value ranges (timeout > 0, bind address parses)
//! - Reject parameter names the router would read as wildcards
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RoutingConfig → Result<(), Vec<ValidationError>>
//! - Runs before any controller class is built

use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::{ActionConfig, RoutingConfig};
use crate::path::PARAM_MARKER;

/// A single semantic problem in a route manifest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("controller #{index} has an empty name")]
    EmptyControllerName { index: usize },

    #[error("controller `{0}` is declared more than once")]
    DuplicateController(String),

    #[error("controller `{controller}` extends unknown controller `{parent}`")]
    UnknownParent { controller: String, parent: String },

    #[error("controller `{0}` is part of an inheritance cycle")]
    InheritanceCycle(String),

    #[error("controller `{controller}` has an action with an empty name")]
    EmptyActionName { controller: String },

    #[error("action `{action}` is declared more than once in `{controller}`")]
    DuplicateAction { controller: String, action: String },

    #[error("action `{controller}.{action}` has an empty alias list")]
    EmptyAlias { controller: String, action: String },

    #[error("action `{controller}.{action}` has invalid parameter name `{param}`")]
    InvalidParam {
        controller: String,
        action: String,
        param: String,
    },

    #[error("invalid bind address `{0}`")]
    InvalidBindAddress(String),

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Check a parsed manifest, collecting every problem found.
pub fn validate_config(config: &RoutingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.server.bind_address.clone(),
        ));
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let mut seen = HashSet::new();
    for (index, controller) in config.controllers.iter().enumerate() {
        if controller.name.is_empty() {
            errors.push(ValidationError::EmptyControllerName { index });
        } else if !seen.insert(controller.name.as_str()) {
            errors.push(ValidationError::DuplicateController(controller.name.clone()));
        }

        if let Some(parent) = &controller.extends {
            if config.controller(parent).is_none() {
                errors.push(ValidationError::UnknownParent {
                    controller: controller.name.clone(),
                    parent: parent.clone(),
                });
            }
        }

        validate_actions(&controller.name, &controller.actions, &mut errors);
    }

    errors.extend(
        find_cycles(config)
            .into_iter()
            .map(ValidationError::InheritanceCycle),
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_actions(controller: &str, actions: &[ActionConfig], errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for action in actions {
        if action.name.is_empty() {
            errors.push(ValidationError::EmptyActionName {
                controller: controller.to_string(),
            });
            continue;
        }
        if !seen.insert(action.name.as_str()) {
            errors.push(ValidationError::DuplicateAction {
                controller: controller.to_string(),
                action: action.name.clone(),
            });
        }
        if matches!(&action.alias, Some(paths) if paths.is_empty()) {
            errors.push(ValidationError::EmptyAlias {
                controller: controller.to_string(),
                action: action.name.clone(),
            });
        }
        for param in &action.params {
            if !valid_param_name(param) {
                errors.push(ValidationError::InvalidParam {
                    controller: controller.to_string(),
                    action: action.name.clone(),
                    param: param.clone(),
                });
            }
        }
    }
}

/// Characters with routing meaning; none may appear in a parameter name.
const RESERVED_PARAM_CHARS: [char; 5] = ['/', PARAM_MARKER, '*', '{', '}'];

fn valid_param_name(param: &str) -> bool {
    !param.is_empty() && !param.contains(RESERVED_PARAM_CHARS)
}

/// Names of controllers whose `extends` chain loops back on itself.
fn find_cycles(config: &RoutingConfig) -> Vec<String> {
    let parents: HashMap<&str, &str> = config
        .controllers
        .iter()
        .filter_map(|c| c.extends.as_deref().map(|p| (c.name.as_str(), p)))
        .collect();

    let mut cyclic = Vec::new();
    for controller in &config.controllers {
        let start = controller.name.as_str();
        let mut visited = HashSet::from([start]);
        let mut current = start;
        while let Some(&parent) = parents.get(current) {
            if parent == start {
                cyclic.push(start.to_string());
                break;
            }
            if !visited.insert(parent) {
                // Loops above this controller, reported for its members.
                break;
            }
            current = parent;
        }
    }
    cyclic
}
