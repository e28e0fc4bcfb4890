//! Path patterns.
//!
//! # Responsibilities
//! - Parse pattern strings (`users/:id`) into typed segments
//! - Build controller paths from a base path and an action name
//! - Append parameter segments
//! - Render back to the pattern string and to the dispatch layer's syntax
//!
//! # Design Decisions
//! - Paths are immutable values; `concat` returns a new path
//! - Equality is structural (segment by segment)
//! - Empty pieces are dropped, so `/a//b/` and `a/b` parse to the same path

use std::fmt;

/// Marker that introduces a parameter segment in a pattern string.
pub const PARAM_MARKER: char = ':';

/// A single path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Matched verbatim.
    Literal(String),
    /// Named placeholder, captured at request time.
    Param(String),
}

impl Segment {
    /// Classify one piece of a pattern string.
    fn classify(piece: &str) -> Self {
        match piece.strip_prefix(PARAM_MARKER) {
            Some(name) => Segment::Param(name.to_string()),
            None => Segment::Literal(piece.to_string()),
        }
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Segment::Param(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Param(name) => write!(f, "{}{}", PARAM_MARKER, name),
        }
    }
}

/// An ordered sequence of path segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Parse a pattern string such as `/foo/bar/:id`.
    pub fn parse(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|piece| !piece.is_empty())
            .map(Segment::classify)
            .collect();
        Self { segments }
    }

    /// The path made of the base path alone.
    pub fn from_base(base: &str) -> Self {
        Self::parse(base)
    }

    /// The default controller path: base path followed by the action name.
    pub fn from_parts(base: &str, action: &str) -> Self {
        let mut path = Self::parse(base);
        path.segments.push(Segment::Literal(action.to_string()));
        path
    }

    /// Append one parameter segment per name, in order.
    pub fn concat<S: AsRef<str>>(&self, params: &[S]) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(
            params
                .iter()
                .map(|name| Segment::Param(name.as_ref().to_string())),
        );
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the parameter segments, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Render using axum's `{param}` placeholders.
    ///
    /// Braces inside literal segments are doubled so axum treats them as text.
    pub fn to_axum(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }

        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(text) => {
                    out.push_str(&text.replace('{', "{{").replace('}', "}}"))
                }
                Segment::Param(name) => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            }
        }
        out
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}
