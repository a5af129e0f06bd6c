// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Applied to every post form submission before the body is decoded.
    pub submit_delay: Duration,
}
