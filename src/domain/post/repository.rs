// src/domain/post/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::PostSlug;
use async_trait::async_trait;

/// Storage capability for posts. Each operation is a single atomic statement.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in insertion order.
    async fn list(&self) -> DomainResult<Vec<Post>>;
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>>;
    /// Fails with `DomainError::Conflict` when the slug is taken.
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    /// Fails with `DomainError::Persistence` when no post has the slug; the
    /// edit flow does not treat a vanished row as a missing resource.
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
}
