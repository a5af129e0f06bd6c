// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::body::{self, Body};
use axum::http::{Method, Request, header::CONTENT_TYPE};

use post_editor::application::ports::time::Clock;
use post_editor::application::services::ApplicationServices;
use post_editor::domain::post::PostRepository;
use post_editor::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::FixedClock;

pub fn build_services(repo: Arc<dyn PostRepository>) -> ApplicationServices {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::default());
    ApplicationServices::new(repo, clock)
}

/// Router over the given repository with the submit delay disabled.
pub fn make_test_router(repo: Arc<dyn PostRepository>) -> axum::Router {
    make_test_router_with_delay(repo, Duration::ZERO)
}

pub fn make_test_router_with_delay(repo: Arc<dyn PostRepository>, delay: Duration) -> axum::Router {
    let state = HttpState {
        services: Arc::new(build_services(repo)),
        submit_delay: delay,
    };
    build_router(state)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &[(&str, &str)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(form).unwrap();
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_string(resp: axum::response::Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
