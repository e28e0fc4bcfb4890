//! Action and controller tags.
//!
//! # Data Flow
//! ```text
//! Class definition (builder or route manifest)
//!     → tags.rs constructors (get(), alias(..), root(), ...)
//!     → Annotations stored on the action / class
//!     → routing queries `has(kind)` while synthesizing paths
//! ```
//!
//! # Design Decisions
//! - Tags live on the value they describe, no global side table
//! - Re-applying a tag kind overrides the earlier one (last wins)
//! - One constructor per HTTP verb, each a plain `method(verb)`

pub mod tag;
pub mod verb;

pub use tag::{Annotated, Annotations, Tag, TagKind};
pub use verb::Verb;

/// Tag constructors.
pub mod tags {
    use super::{Tag, Verb};

    pub fn method(verb: Verb) -> Tag {
        Tag::Method(verb)
    }

    pub fn get() -> Tag {
        method(Verb::Get)
    }

    pub fn post() -> Tag {
        method(Verb::Post)
    }

    pub fn put() -> Tag {
        method(Verb::Put)
    }

    pub fn delete() -> Tag {
        method(Verb::Delete)
    }

    pub fn patch() -> Tag {
        method(Verb::Patch)
    }

    pub fn options() -> Tag {
        method(Verb::Options)
    }

    pub fn head() -> Tag {
        method(Verb::Head)
    }

    pub fn trace() -> Tag {
        method(Verb::Trace)
    }

    pub fn connect() -> Tag {
        method(Verb::Connect)
    }

    /// Extra paths for the action. Parameter segments are appended to each.
    pub fn alias<I, S>(paths: I) -> Tag
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Tag::Alias(paths.into_iter().map(Into::into).collect())
    }

    pub fn root() -> Tag {
        Tag::Root
    }

    pub fn private() -> Tag {
        Tag::Private
    }

    pub fn special() -> Tag {
        Tag::Special
    }
}
