// src/application/queries/posts/mod.rs
mod get_by_slug;
mod list;
mod service;

pub use get_by_slug::GetPostBySlugQuery;
pub use service::PostQueryService;
