//! Incoming request as seen by controllers.
//!
//! # Responsibilities
//! - Carry verb, path, query, headers and body of one request
//! - Carry the named path parameters captured by the dispatch layer
//! - Build from an axum request once its body has been read
//!
//! # Design Decisions
//! - Body is read up front (bounded), so handlers are plain values
//! - Parameters are percent-decoded by axum before they reach here

use std::collections::HashMap;

use axum::body::Bytes;
use axum::http::{request::Parts, HeaderMap};

use crate::annotation::Verb;

/// One incoming request.
#[derive(Debug, Clone, Default)]
pub struct ActionRequest {
    pub verb: Verb,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    /// Named path parameters.
    pub params: HashMap<String, String>,
    pub body: Bytes,
}

impl ActionRequest {
    pub fn new(verb: Verb, path: impl Into<String>) -> Self {
        Self {
            verb,
            path: path.into(),
            ..Self::default()
        }
    }

    /// Build from request parts, captured parameters and the collected body.
    ///
    /// Verbs outside the supported set fall back to `get`; the dispatch layer
    /// only routes supported verbs here.
    pub fn from_parts(parts: &Parts, params: HashMap<String, String>, body: Bytes) -> Self {
        Self {
            verb: Verb::try_from(&parts.method).unwrap_or_default(),
            path: parts.uri.path().to_string(),
            query: parts.uri.query().map(str::to_string),
            headers: parts.headers.clone(),
            params,
            body,
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}
