// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::post::PostRepository};

pub struct PostCommandService {
    pub(super) repo: Arc<dyn PostRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(repo: Arc<dyn PostRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}
