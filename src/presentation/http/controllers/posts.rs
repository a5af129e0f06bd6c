// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, EditPostCommand},
    dto::{PostFormErrors, PostFormOutcome},
    queries::posts::GetPostBySlugQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::{
    EditPostTemplate, NewPostTemplate, PostFormView, PostLinkView, PostListTemplate,
    render_template_response,
};
use axum::{
    Extension,
    body::Bytes,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

pub const ADMIN_LISTING_PATH: &str = "/posts/admin";
pub const NEW_POST_PATH: &str = "/posts/admin/new";

/// Raw fields of a submitted post form. Absent keys stay `None`; when a key
/// repeats, its first value is kept.
#[derive(Debug, Default)]
pub struct PostFormPayload {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub markdown: Option<String>,
}

impl PostFormPayload {
    fn decode(body: &[u8]) -> HttpResult<Self> {
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_bytes(body).map_err(HttpError::malformed_form)?;

        let mut payload = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "slug" => &mut payload.slug,
                "title" => &mut payload.title,
                "markdown" => &mut payload.markdown,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        Ok(payload)
    }

    fn into_view(self, errors: PostFormErrors) -> PostFormView {
        PostFormView {
            slug: self.slug.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            markdown: self.markdown.unwrap_or_default(),
            errors,
        }
    }
}

async fn pause_before_submit(state: &HttpState) {
    if !state.submit_delay.is_zero() {
        tokio::time::sleep(state.submit_delay).await;
    }
}

pub async fn list_posts(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let posts = state.services.post_queries.list_posts().await.into_http()?;

    let template = PostListTemplate {
        posts: posts.into_iter().map(PostLinkView::from).collect(),
        new_post_href: NEW_POST_PATH,
    };
    Ok(render_template_response(template, StatusCode::OK))
}

pub async fn edit_post_form(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Response> {
    let post = state
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery { slug: slug.clone() })
        .await
        .into_http()?;

    let template = EditPostTemplate::new(&slug, PostFormView::from(post));
    Ok(render_template_response(template, StatusCode::OK))
}

pub async fn submit_edit_post(
    Extension(state): Extension<HttpState>,
    Path(path_slug): Path<String>,
    body: Bytes,
) -> HttpResult<Response> {
    pause_before_submit(&state).await;
    let payload = PostFormPayload::decode(&body)?;

    let command = EditPostCommand {
        slug: payload.slug.clone(),
        title: payload.title.clone(),
        markdown: payload.markdown.clone(),
    };

    match state
        .services
        .post_commands
        .edit_post(command)
        .await
        .into_http()?
    {
        PostFormOutcome::Saved(post) => {
            tracing::info!(slug = %post.slug, "post updated");
            Ok(Redirect::to(ADMIN_LISTING_PATH).into_response())
        }
        PostFormOutcome::Invalid(errors) => {
            tracing::debug!(slug = %path_slug, ?errors, "post edit rejected");
            let mut form = payload.into_view(errors);
            if form.slug.is_empty() {
                form.slug.clone_from(&path_slug);
            }
            let template = EditPostTemplate::new(&path_slug, form);
            Ok(render_template_response(template, StatusCode::OK))
        }
    }
}

pub async fn new_post_form() -> Response {
    let template = NewPostTemplate {
        form_action: NEW_POST_PATH,
        form: PostFormView::default(),
    };
    render_template_response(template, StatusCode::OK)
}

pub async fn submit_new_post(
    Extension(state): Extension<HttpState>,
    body: Bytes,
) -> HttpResult<Response> {
    pause_before_submit(&state).await;
    let payload = PostFormPayload::decode(&body)?;

    let command = CreatePostCommand {
        slug: payload.slug.clone(),
        title: payload.title.clone(),
        markdown: payload.markdown.clone(),
    };

    match state
        .services
        .post_commands
        .create_post(command)
        .await
        .into_http()?
    {
        PostFormOutcome::Saved(post) => {
            tracing::info!(slug = %post.slug, "post created");
            Ok(Redirect::to(ADMIN_LISTING_PATH).into_response())
        }
        PostFormOutcome::Invalid(errors) => {
            tracing::debug!(?errors, "post creation rejected");
            let template = NewPostTemplate {
                form_action: NEW_POST_PATH,
                form: payload.into_view(errors),
            };
            Ok(render_template_response(template, StatusCode::OK))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_keeps_empty_and_absent_fields_apart() {
        let payload = PostFormPayload::decode(b"title=&slug=x").unwrap();
        assert_eq!(payload.title.as_deref(), Some(""));
        assert_eq!(payload.slug.as_deref(), Some("x"));
        assert!(payload.markdown.is_none());
    }

    #[test]
    fn payload_decodes_percent_encoding() {
        let payload =
            PostFormPayload::decode(b"title=Hello+World&slug=hello&markdown=%23+Heading%0Abody")
                .unwrap();
        assert_eq!(payload.title.as_deref(), Some("Hello World"));
        assert_eq!(payload.markdown.as_deref(), Some("# Heading\nbody"));
    }

    #[test]
    fn repeated_field_keeps_first_value() {
        let payload = PostFormPayload::decode(b"title=a&title=b&slug=x&markdown=m").unwrap();
        assert_eq!(payload.title.as_deref(), Some("a"));
        assert_eq!(payload.slug.as_deref(), Some("x"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let payload = PostFormPayload::decode(b"intent=save&slug=x").unwrap();
        assert_eq!(payload.slug.as_deref(), Some("x"));
        assert!(payload.title.is_none());
    }
}
