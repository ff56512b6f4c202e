#![allow(dead_code)]

use filterhook::{HookRegistryBuilder, Next, Plugin, RegistryError, filter_fn};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use thiserror::Error;

// ============================================================================
// Marker filters (extension point convention: Vec<u32> in, Vec<u32> out)
// ============================================================================

pub const ACTION: u32 = 0;
pub const FIRST_FILTER: u32 = 1;
pub const SECOND_FILTER: u32 = 2;

pub fn action(mut data: Vec<u32>) -> Vec<u32> {
    data.push(ACTION);
    data
}

pub fn first_filter(next: Next<'_, Vec<u32>, Vec<u32>>, data: Vec<u32>) -> Vec<u32> {
    let mut data = next.run(data);
    data.push(FIRST_FILTER);
    data
}

pub fn second_filter(next: Next<'_, Vec<u32>, Vec<u32>>, data: Vec<u32>) -> Vec<u32> {
    let mut data = next.run(data);
    data.push(SECOND_FILTER);
    data
}

// ============================================================================
// Forum extension point: create_post
// ============================================================================

pub const CREATE_POST: &str = "create_post";

#[derive(Clone, Debug, PartialEq)]
pub struct NewPost {
    pub author: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    pub id: usize,
    pub author: String,
    pub body: String,
}

pub type CreatePostResult = Result<Post, PostError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PostError {
    #[error("rejected as spam: {0}")]
    Spam(String),

    #[error("storage failure: {0}")]
    Storage(String),
}

/// In-memory stand-in for the ORM-backed action.
pub struct PostStore {
    pub next_id: AtomicUsize,
    pub saved: Mutex<Vec<Post>>,
}

impl PostStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicUsize::new(1),
            saved: Mutex::new(Vec::new()),
        })
    }

    pub fn save(&self, post: NewPost) -> CreatePostResult {
        let saved = Post {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            author: post.author,
            body: post.body,
        };
        self.saved.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    pub fn count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }
}

/// Rejects posts containing links before they reach the store.
pub struct SpamGuard;

impl Plugin for SpamGuard {
    fn name(&self) -> &str {
        "spam-guard"
    }

    fn register(&self, hooks: &mut HookRegistryBuilder) -> Result<(), RegistryError> {
        hooks.append_filter(
            CREATE_POST,
            filter_fn(|next: Next<'_, NewPost, CreatePostResult>, post: NewPost| {
                if post.body.contains("http://") {
                    return Err(PostError::Spam("links are not allowed".into()));
                }
                next.run(post)
            }),
        )?;
        Ok(())
    }
}

/// Appends the author's signature to the stored post.
pub struct Signature;

impl Plugin for Signature {
    fn name(&self) -> &str {
        "signature"
    }

    fn register(&self, hooks: &mut HookRegistryBuilder) -> Result<(), RegistryError> {
        hooks.append_filter(
            CREATE_POST,
            filter_fn(|next: Next<'_, NewPost, CreatePostResult>, mut post: NewPost| {
                post.body = format!("{}\n-- {}", post.body, post.author);
                next.run(post)
            }),
        )?;
        Ok(())
    }
}
