use std::sync::Arc;

use axum::extract::FromRef;
use storage::{Db, OwnershipAuthorizer};

use crate::{auth::TokenSigner, service::CommentService};

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub comments: CommentService,
    pub tokens: TokenSigner,
}

impl AppState {
    /// Wires the comment service to the database store and ownership gate.
    pub fn new(db: Db, tokens: TokenSigner) -> Self {
        let store = Arc::new(db.clone());
        let comments = CommentService::new(
            store.clone(),
            store,
            Arc::new(OwnershipAuthorizer::new(db.clone())),
        );
        Self {
            db,
            comments,
            tokens,
        }
    }
}

impl FromRef<AppState> for Db {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for TokenSigner {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
