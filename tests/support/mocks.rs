// tests/support/mocks.rs
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use post_editor::application::ports::time::Clock;
use post_editor::domain::errors::{DomainError, DomainResult};
use post_editor::domain::post::{
    NewPost, Post, PostMarkdown, PostRepository, PostSlug, PostTitle, PostUpdate,
};

/* -------------------------------- PostRepository -------------------------------- */

/// Vec-backed repository that keeps insertion order and counts writes.
#[derive(Default)]
pub struct InMemoryPostRepo {
    posts: Mutex<Vec<Post>>,
    writes: AtomicUsize,
}

impl InMemoryPostRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_post(self, slug: &str, title: &str, markdown: &str) -> Self {
        self.posts.lock().unwrap().push(Post::from(NewPost::new(
            PostSlug::new(slug).unwrap(),
            PostTitle::new(title).unwrap(),
            PostMarkdown::new(markdown).unwrap(),
            fixed_time(),
        )));
        self
    }

    pub fn get(&self, slug: &str) -> Option<Post> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug.as_str() == slug)
            .cloned()
    }

    /// Number of successful inserts and updates.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepo {
    async fn list(&self) -> DomainResult<Vec<Post>> {
        Ok(self.posts.lock().unwrap().clone())
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        Ok(self.get(slug.as_str()))
    }

    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        if posts.iter().any(|p| p.slug == post.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let post = Post::from(post);
        posts.push(post.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(post)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|p| p.slug == update.slug)
            .ok_or_else(|| {
                DomainError::Persistence(format!("no post to update: {}", update.slug))
            })?;
        post.apply(update);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(post.clone())
    }
}

/// Repository whose store is always unreachable.
pub struct UnreachablePostRepo;

#[async_trait]
impl PostRepository for UnreachablePostRepo {
    async fn list(&self) -> DomainResult<Vec<Post>> {
        Err(DomainError::Persistence("database unreachable".into()))
    }

    async fn find_by_slug(&self, _slug: &PostSlug) -> DomainResult<Option<Post>> {
        Err(DomainError::Persistence("database unreachable".into()))
    }

    async fn insert(&self, _post: NewPost) -> DomainResult<Post> {
        Err(DomainError::Persistence("database unreachable".into()))
    }

    async fn update(&self, _update: PostUpdate) -> DomainResult<Post> {
        Err(DomainError::Persistence("database unreachable".into()))
    }
}

/* -------------------------------- Clock -------------------------------- */

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(fixed_time())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
