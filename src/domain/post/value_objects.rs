// src/domain/post/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

// Presence only: whitespace counts as content, matching how the edit form
// treats its inputs.
fn require_present(value: String, what: &str) -> DomainResult<String> {
    if value.is_empty() {
        return Err(DomainError::Validation(format!("{what} cannot be empty")));
    }
    Ok(value)
}

/// Natural key of a post; also the last segment of its admin URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostSlug(String);

impl PostSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        require_present(value.into(), "slug").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        require_present(value.into(), "title").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw markdown source. Never rendered by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMarkdown(String);

impl PostMarkdown {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        require_present(value.into(), "markdown").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
