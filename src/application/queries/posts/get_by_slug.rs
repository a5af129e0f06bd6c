// src/application/queries/posts/get_by_slug.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostSlug,
};

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    /// A missing slug and an unknown slug are both reported as not found.
    pub async fn get_post_by_slug(&self, query: GetPostBySlugQuery) -> ApplicationResult<PostDto> {
        let slug = PostSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("slug is required"))?;
        let post = self
            .repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("post not found: {slug}")))?;

        Ok(post.into())
    }
}
