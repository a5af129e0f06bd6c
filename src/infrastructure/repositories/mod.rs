// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_post;

pub use sqlite_post::SqlitePostRepository;
