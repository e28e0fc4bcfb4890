//! Controller class descriptions.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::annotation::{Annotated, Annotations, Tag, TagKind};
use crate::controller::{Action, Controller};
use crate::error::{RouteError, RouteResult};

/// Builds the shared context for an action. Called with the action name.
pub type ContextFactory = Arc<dyn Fn(&str) -> Map<String, Value> + Send + Sync>;

/// An immutable description of a controller class.
///
/// `superclass == None` is the root of the chain. Base path, context factory
/// and class-level tags are inherited: the most-derived definition wins.
pub struct ActionClass<C> {
    name: String,
    base: Option<String>,
    superclass: Option<Arc<ActionClass<C>>>,
    annotations: Annotations,
    actions: Vec<Action<C>>,
    context: Option<ContextFactory>,
}

impl<C> ActionClass<C> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn superclass(&self) -> Option<&Arc<ActionClass<C>>> {
        self.superclass.as_ref()
    }

    /// Actions declared by this class itself, in declaration order.
    pub fn own_actions(&self) -> &[Action<C>] {
        &self.actions
    }

    /// This class followed by its ancestors.
    pub fn ancestry(&self) -> impl Iterator<Item = &ActionClass<C>> {
        std::iter::successors(Some(self), |class| class.superclass.as_deref())
    }
}

impl<C: Controller> ActionClass<C> {
    pub fn builder(name: impl Into<String>) -> ActionClassBuilder<C> {
        ActionClassBuilder {
            name: name.into(),
            base: None,
            superclass: None,
            annotations: Annotations::new(),
            actions: Vec::new(),
            context: None,
        }
    }

    /// First path segment(s) for this class's routes: the nearest declared
    /// base override, else the class name in lowercase.
    pub fn base_path(&self) -> String {
        self.ancestry()
            .find_map(|class| class.base.clone())
            .unwrap_or_else(|| self.name.to_lowercase())
    }

    pub fn context_factory(&self) -> Option<&ContextFactory> {
        self.ancestry().find_map(|class| class.context.as_ref())
    }

    /// A class-level tag from this class or the nearest ancestor carrying it.
    pub fn class_tag(&self, kind: TagKind) -> Option<&Tag> {
        self.ancestry().find_map(|class| class.annotations.has(kind))
    }

    /// The most-derived declaration of `name`.
    pub fn find_action(&self, name: &str) -> Option<&Action<C>> {
        self.ancestry()
            .find_map(|class| class.actions.iter().find(|action| action.name() == name))
    }

    pub fn resolve_action(&self, name: &str) -> RouteResult<&Action<C>> {
        self.find_action(name).ok_or_else(|| RouteError::UnknownAction {
            controller: self.name.clone(),
            action: name.to_string(),
        })
    }
}

impl<C> Annotated for ActionClass<C> {
    fn annotations(&self) -> &Annotations {
        &self.annotations
    }
}

impl<C> fmt::Debug for ActionClass<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionClass")
            .field("name", &self.name)
            .field("base", &self.base)
            .field(
                "superclass",
                &self.superclass.as_ref().map(|class| class.name.as_str()),
            )
            .field("annotations", &self.annotations)
            .field("actions", &self.actions)
            .field("has_context", &self.context.is_some())
            .finish()
    }
}

/// Builder for [`ActionClass`].
pub struct ActionClassBuilder<C> {
    name: String,
    base: Option<String>,
    superclass: Option<Arc<ActionClass<C>>>,
    annotations: Annotations,
    actions: Vec<Action<C>>,
    context: Option<ContextFactory>,
}

impl<C: Controller> ActionClassBuilder<C> {
    /// Override the base path (default: lowercased class name).
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn extends(mut self, superclass: Arc<ActionClass<C>>) -> Self {
        self.superclass = Some(superclass);
        self
    }

    /// Apply a class-level tag. Only `root` and `private` affect routing.
    pub fn tag(mut self, tag: Tag) -> Self {
        self.annotations.push(tag);
        self
    }

    pub fn context<F>(mut self, factory: F) -> Self
    where
        F: Fn(&str) -> Map<String, Value> + Send + Sync + 'static,
    {
        self.context = Some(Arc::new(factory));
        self
    }

    /// Declare an action. Re-declaring a name replaces the earlier one in place.
    pub fn action(mut self, action: Action<C>) -> Self {
        match self.actions.iter_mut().find(|a| a.name() == action.name()) {
            Some(existing) => *existing = action,
            None => self.actions.push(action),
        }
        self
    }

    pub fn build(self) -> Arc<ActionClass<C>> {
        Arc::new(ActionClass {
            name: self.name,
            base: self.base,
            superclass: self.superclass,
            annotations: self.annotations,
            actions: self.actions,
            context: self.context,
        })
    }
}
