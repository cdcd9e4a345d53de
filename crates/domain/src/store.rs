use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Comment, CommentUpdate, Identity, NewComment, ResourceKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("comment not found: {0}")]
    NotFound(String),

    #[error("persistence failure: {0}")]
    Persistence(String),
}

/// Persistence operations the comment facade depends on.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Assigns the id and timestamps.
    async fn create(&self, comment: NewComment) -> Result<Comment, StoreError>;

    async fn get(&self, id: &str) -> Result<Comment, StoreError>;

    async fn update(&self, id: &str, update: CommentUpdate) -> Result<Comment, StoreError>;

    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Read-only listing of a post's comments in creation order.
#[async_trait]
pub trait CommentListing: Send + Sync {
    /// Returns one page and the total number of comments on the post.
    async fn list_for_post(
        &self,
        post_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Comment>, i64), StoreError>;
}

/// Ownership gate consulted before every mutating store call.
///
/// Implementations never surface lookup errors: an unresolvable owner is
/// simply "not authorized".
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn is_authorized(&self, identity: &Identity, resource_id: &str, kind: ResourceKind)
        -> bool;
}
