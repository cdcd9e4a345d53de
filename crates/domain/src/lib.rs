mod models;
mod store;

pub use models::{Comment, CommentUpdate, Identity, NewComment, ResourceKind};
pub use store::{Authorizer, CommentListing, CommentStore, StoreError};
