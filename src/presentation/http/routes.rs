// src/presentation/http/routes.rs
use crate::presentation::http::controllers::posts;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, Router, routing::get};
use serde::Serialize;
use tower_http::trace::TraceLayer;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// `/posts/admin/new` is matched before the slug route, so a post with the
/// slug `new` is not reachable through the edit form.
pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/posts/admin", get(posts::list_posts))
        .route(
            "/posts/admin/new",
            get(posts::new_post_form).post(posts::submit_new_post),
        )
        .route(
            "/posts/admin/{slug}",
            get(posts::edit_post_form).post(posts::submit_edit_post),
        )
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
