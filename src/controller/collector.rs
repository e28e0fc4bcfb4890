//! Action name collection along the inheritance chain.

use crate::controller::{ActionClass, Controller};

impl<C: Controller> ActionClass<C> {
    /// Own and inherited action names: ancestors first, then this class's
    /// declarations in order. A name already present keeps its first position.
    pub fn action_names(&self) -> Vec<String> {
        let mut names = match self.superclass() {
            Some(superclass) => superclass.action_names(),
            None => Vec::new(),
        };

        for action in self.own_actions() {
            if !names.iter().any(|name| name == action.name()) {
                names.push(action.name().to_string());
            }
        }
        names
    }
}
