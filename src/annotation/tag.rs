//! Tags and tag sets.

use crate::annotation::Verb;

/// The kinds of tag that can be applied to an action or a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Method,
    Alias,
    Root,
    Private,
    Special,
}

/// A tag with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// Verb the action's routes are registered under.
    Method(Verb),
    /// Extra path patterns, in declaration order.
    Alias(Vec<String>),
    /// Route the action at the bare base path.
    Root,
    /// No routes; callable only from other actions.
    Private,
    /// Suppress the default `/base/action` route.
    Special,
}

impl Tag {
    pub fn kind(&self) -> TagKind {
        match self {
            Tag::Method(_) => TagKind::Method,
            Tag::Alias(_) => TagKind::Alias,
            Tag::Root => TagKind::Root,
            Tag::Private => TagKind::Private,
            Tag::Special => TagKind::Special,
        }
    }
}

/// Tags applied to one target, in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    tags: Vec<Tag>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// The tag of the given kind, if applied. Later applications win.
    pub fn has(&self, kind: TagKind) -> Option<&Tag> {
        self.tags.iter().rev().find(|tag| tag.kind() == kind)
    }

    pub fn is(&self, kind: TagKind) -> bool {
        self.has(kind).is_some()
    }

    /// The verb from a `method` tag.
    pub fn verb(&self) -> Option<Verb> {
        match self.has(TagKind::Method) {
            Some(Tag::Method(verb)) => Some(*verb),
            _ => None,
        }
    }

    /// The paths from an `alias` tag.
    pub fn aliases(&self) -> Option<&[String]> {
        match self.has(TagKind::Alias) {
            Some(Tag::Alias(paths)) => Some(paths.as_slice()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }
}

impl FromIterator<Tag> for Annotations {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().collect(),
        }
    }
}

/// Anything tags can be queried on.
pub trait Annotated {
    fn annotations(&self) -> &Annotations;

    fn has_tag(&self, kind: TagKind) -> Option<&Tag> {
        self.annotations().has(kind)
    }
}
