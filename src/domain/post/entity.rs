// src/domain/post/entity.rs
use crate::domain::post::value_objects::{PostMarkdown, PostSlug, PostTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub slug: PostSlug,
    pub title: PostTitle,
    pub markdown: PostMarkdown,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub slug: PostSlug,
    pub title: PostTitle,
    pub markdown: PostMarkdown,
    pub created_at: DateTime<Utc>,
}

/// Overwrites title and markdown of the post keyed by `slug`. The slug
/// itself is never rewritten.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub slug: PostSlug,
    pub title: PostTitle,
    pub markdown: PostMarkdown,
    pub updated_at: DateTime<Utc>,
}

impl NewPost {
    pub fn new(
        slug: PostSlug,
        title: PostTitle,
        markdown: PostMarkdown,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            slug,
            title,
            markdown,
            created_at,
        }
    }
}

impl PostUpdate {
    pub fn new(
        slug: PostSlug,
        title: PostTitle,
        markdown: PostMarkdown,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            slug,
            title,
            markdown,
            updated_at,
        }
    }
}

impl Post {
    pub fn apply(&mut self, update: PostUpdate) {
        debug_assert_eq!(self.slug, update.slug);
        self.title = update.title;
        self.markdown = update.markdown;
        self.updated_at = update.updated_at;
    }
}

impl From<NewPost> for Post {
    fn from(new: NewPost) -> Self {
        Self {
            slug: new.slug,
            title: new.title,
            markdown: new.markdown,
            created_at: new.created_at,
            updated_at: new.created_at,
        }
    }
}
