// src/application/commands/posts/fields.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::post::{PostMarkdown, PostSlug, PostTitle},
};

/// Typed form fields. Built only after presence checks passed, so a failure
/// here is a malformed request rather than a user-facing validation message.
pub(super) struct PostFields {
    pub slug: PostSlug,
    pub title: PostTitle,
    pub markdown: PostMarkdown,
}

impl PostFields {
    pub fn from_parts(
        slug: Option<String>,
        title: Option<String>,
        markdown: Option<String>,
    ) -> ApplicationResult<Self> {
        let slug = slug.ok_or_else(|| ApplicationError::validation("slug must be a string"))?;
        let title = title.ok_or_else(|| ApplicationError::validation("title must be a string"))?;
        let markdown =
            markdown.ok_or_else(|| ApplicationError::validation("markdown must be a string"))?;

        Ok(Self {
            slug: PostSlug::new(slug)?,
            title: PostTitle::new(title)?,
            markdown: PostMarkdown::new(markdown)?,
        })
    }
}
