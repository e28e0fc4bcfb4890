//! Action declarations and positional arguments.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use futures_util::future::{BoxFuture, FutureExt};

use crate::annotation::{Annotated, Annotations, Tag};
use crate::controller::{Controller, ExecutionContext};

/// Type-erased action body.
pub type ActionFn<C> =
    Arc<dyn Fn(ExecutionContext<C>, Args) -> BoxFuture<'static, Response> + Send + Sync>;

/// One action: a name, its declared parameters, its tags and its body.
pub struct Action<C> {
    name: String,
    params: Vec<String>,
    annotations: Annotations,
    body: ActionFn<C>,
}

impl<C: Controller> Action<C> {
    /// Declare an action. `params` are matched by name against the request's
    /// path parameters and passed to `body` in this order.
    pub fn new<P, S, F, Fut, R>(name: impl Into<String>, params: P, body: F) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(ExecutionContext<C>, Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse,
    {
        let body: ActionFn<C> = Arc::new(move |context, args| {
            let fut = body(context, args);
            async move { fut.await.into_response() }.boxed()
        });

        Self {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            annotations: Annotations::new(),
            body,
        }
    }

    /// Apply a tag.
    pub fn tag(mut self, tag: Tag) -> Self {
        self.annotations.push(tag);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Run the body against `context`.
    pub fn call(&self, context: ExecutionContext<C>, args: Args) -> BoxFuture<'static, Response> {
        (self.body)(context, args)
    }
}

impl<C> Annotated for Action<C> {
    fn annotations(&self) -> &Annotations {
        &self.annotations
    }
}

impl<C> Clone for Action<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            params: self.params.clone(),
            annotations: self.annotations.clone(),
            body: Arc::clone(&self.body),
        }
    }
}

impl<C> fmt::Debug for Action<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("annotations", &self.annotations)
            .finish_non_exhaustive()
    }
}

/// Positional argument values. `None` marks a declared parameter the request
/// did not carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args(Vec<Option<String>>);

impl Args {
    pub fn new(values: Vec<Option<String>>) -> Self {
        Self(values)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).and_then(|value| value.as_deref())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
        self.0.iter().map(|value| value.as_deref())
    }

    pub fn into_inner(self) -> Vec<Option<String>> {
        self.0
    }
}

impl FromIterator<Option<String>> for Args {
    fn from_iter<I: IntoIterator<Item = Option<String>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[&str; N]> for Args {
    fn from(values: [&str; N]) -> Self {
        values.iter().map(|value| Some(value.to_string())).collect()
    }
}
