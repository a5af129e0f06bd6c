// src/presentation/http/views.rs
use crate::application::dto::{PostDto, PostFormErrors};
use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

pub fn render_template_response<T: Template>(template: T, status: StatusCode) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "template rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "template rendering failed").into_response()
        }
    }
}

/// Values and inline errors shown in a post form.
#[derive(Debug, Clone, Default)]
pub struct PostFormView {
    pub slug: String,
    pub title: String,
    pub markdown: String,
    pub errors: PostFormErrors,
}

impl From<PostDto> for PostFormView {
    fn from(post: PostDto) -> Self {
        Self {
            slug: post.slug,
            title: post.title,
            markdown: post.markdown,
            errors: PostFormErrors::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostLinkView {
    pub title: String,
    pub edit_href: String,
}

impl From<PostDto> for PostLinkView {
    fn from(post: PostDto) -> Self {
        Self {
            edit_href: format!("/posts/admin/{}", post.slug),
            title: post.title,
        }
    }
}

#[derive(Template)]
#[template(path = "posts/list.html")]
pub struct PostListTemplate {
    pub posts: Vec<PostLinkView>,
    pub new_post_href: &'static str,
}

#[derive(Template)]
#[template(path = "posts/edit.html")]
pub struct EditPostTemplate {
    /// Slug from the request path; the form posts back to it.
    pub heading_slug: String,
    pub form_action: String,
    pub form: PostFormView,
}

impl EditPostTemplate {
    pub fn new(path_slug: &str, form: PostFormView) -> Self {
        Self {
            heading_slug: path_slug.to_string(),
            form_action: format!("/posts/admin/{path_slug}"),
            form,
        }
    }
}

#[derive(Template)]
#[template(path = "posts/new.html")]
pub struct NewPostTemplate {
    pub form_action: &'static str,
    pub form: PostFormView,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status_code: u16,
    pub reason: &'static str,
    pub message: String,
}
