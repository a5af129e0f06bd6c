// src/application/queries/posts/list.rs
use super::PostQueryService;
use crate::application::{dto::PostDto, error::ApplicationResult};

impl PostQueryService {
    pub async fn list_posts(&self) -> ApplicationResult<Vec<PostDto>> {
        let posts = self.repo.list().await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }
}
