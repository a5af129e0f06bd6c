// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::posts::PostCommandService, ports::time::Clock,
        queries::posts::PostQueryService,
    },
    domain::post::PostRepository,
};

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
}

impl ApplicationServices {
    pub fn new(post_repo: Arc<dyn PostRepository>, clock: Arc<dyn Clock>) -> Self {
        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_repo),
            Arc::clone(&clock),
        ));
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_repo)));

        Self {
            post_commands,
            post_queries,
        }
    }
}
