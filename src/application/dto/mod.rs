// src/application/dto/mod.rs
pub mod posts;

pub use posts::{PostDto, PostFormErrors, PostFormOutcome};
