// src/application/dto/posts.rs
use crate::domain::post::Post;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const SLUG_REQUIRED: &str = "Slug is required";
pub const MARKDOWN_REQUIRED: &str = "Markdown is required";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDto {
    pub slug: String,
    pub title: String,
    pub markdown: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            slug: post.slug.into_inner(),
            title: post.title.into_inner(),
            markdown: post.markdown.into_inner(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Per-field presence errors of a post form. `None` means the field was
/// supplied; serializes with explicit nulls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PostFormErrors {
    pub title: Option<&'static str>,
    pub slug: Option<&'static str>,
    pub markdown: Option<&'static str>,
}

impl PostFormErrors {
    pub fn check(title: Option<&str>, slug: Option<&str>, markdown: Option<&str>) -> Self {
        fn missing(value: Option<&str>, message: &'static str) -> Option<&'static str> {
            match value {
                Some(v) if !v.is_empty() => None,
                _ => Some(message),
            }
        }

        Self {
            title: missing(title, TITLE_REQUIRED),
            slug: missing(slug, SLUG_REQUIRED),
            markdown: missing(markdown, MARKDOWN_REQUIRED),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.title.is_some() || self.slug.is_some() || self.markdown.is_some()
    }
}

/// Result of a form submission that got past request decoding.
#[derive(Debug, Clone)]
pub enum PostFormOutcome {
    Saved(PostDto),
    Invalid(PostFormErrors),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn all_present_yields_no_errors() {
        let errors = PostFormErrors::check(Some("Hi"), Some("x"), Some("body"));
        assert!(!errors.has_errors());
        assert_eq!(errors, PostFormErrors::default());
    }

    #[test]
    fn empty_title_only_flags_title() {
        let errors = PostFormErrors::check(Some(""), Some("x"), Some("body"));
        assert!(errors.has_errors());
        assert_eq!(
            serde_json::to_value(errors).unwrap(),
            json!({ "title": "Title is required", "slug": null, "markdown": null })
        );
    }

    #[test]
    fn absent_fields_are_flagged_like_empty_ones() {
        let errors = PostFormErrors::check(None, None, Some(""));
        assert_eq!(errors.title, Some(TITLE_REQUIRED));
        assert_eq!(errors.slug, Some(SLUG_REQUIRED));
        assert_eq!(errors.markdown, Some(MARKDOWN_REQUIRED));
    }
}
