// src/application/commands/posts/create.rs
use super::{PostCommandService, fields::PostFields};
use crate::{
    application::{
        dto::{PostFormErrors, PostFormOutcome},
        error::ApplicationResult,
    },
    domain::post::NewPost,
};

#[derive(Debug, Clone, Default)]
pub struct CreatePostCommand {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub markdown: Option<String>,
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostFormOutcome> {
        let errors = PostFormErrors::check(
            command.title.as_deref(),
            command.slug.as_deref(),
            command.markdown.as_deref(),
        );
        if errors.has_errors() {
            return Ok(PostFormOutcome::Invalid(errors));
        }

        let CreatePostCommand {
            slug,
            title,
            markdown,
        } = command;
        let fields = PostFields::from_parts(slug, title, markdown)?;

        let post = self
            .repo
            .insert(NewPost::new(
                fields.slug,
                fields.title,
                fields.markdown,
                self.clock.now(),
            ))
            .await?;
        Ok(PostFormOutcome::Saved(post.into()))
    }
}
