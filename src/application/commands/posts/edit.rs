// src/application/commands/posts/edit.rs
use super::{PostCommandService, fields::PostFields};
use crate::{
    application::{
        dto::{PostFormErrors, PostFormOutcome},
        error::ApplicationResult,
    },
    domain::post::PostUpdate,
};

/// Fields of a submitted edit form. `None` means the field was absent.
#[derive(Debug, Clone, Default)]
pub struct EditPostCommand {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub markdown: Option<String>,
}

impl PostCommandService {
    pub async fn edit_post(&self, command: EditPostCommand) -> ApplicationResult<PostFormOutcome> {
        let errors = PostFormErrors::check(
            command.title.as_deref(),
            command.slug.as_deref(),
            command.markdown.as_deref(),
        );
        if errors.has_errors() {
            return Ok(PostFormOutcome::Invalid(errors));
        }

        let EditPostCommand {
            slug,
            title,
            markdown,
        } = command;
        let fields = PostFields::from_parts(slug, title, markdown)?;

        let update = PostUpdate::new(fields.slug, fields.title, fields.markdown, self.clock.now());
        let updated = self.repo.update(update).await?;
        Ok(PostFormOutcome::Saved(updated.into()))
    }
}
