// src/infrastructure/repositories/sqlite_post.rs
use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostMarkdown, PostRepository, PostSlug, PostTitle, PostUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const POST_COLUMNS: &str = "slug, title, markdown, created_at, updated_at";

#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    slug: String,
    title: String,
    markdown: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            slug: PostSlug::new(row.slug)?,
            title: PostTitle::new(row.title)?,
            markdown: PostMarkdown::new(row.markdown)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn list(&self) -> DomainResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY rowid"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            slug,
            title,
            markdown,
            created_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (slug, title, markdown, created_at, updated_at) VALUES (?, ?, ?, ?, ?) RETURNING {POST_COLUMNS}"
        ))
        .bind(slug.as_str())
        .bind(title.as_str())
        .bind(markdown.as_str())
        .bind(created_at)
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            slug,
            title,
            markdown,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "UPDATE posts SET title = ?, markdown = ?, updated_at = ? WHERE slug = ? RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(markdown.as_str())
        .bind(updated_at)
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::Persistence(format!("no post to update: {slug}")))?;

        Post::try_from(row)
    }
}
