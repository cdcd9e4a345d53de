use std::sync::Arc;

use domain::{Authorizer, Comment, CommentListing, CommentStore, Identity, ResourceKind};
use tracing::{info, warn};

use crate::{
    dto::{
        decode_json, require_id, CommentPage, CreateCommentRequest, ListParams,
        UpdateCommentRequest,
    },
    error::ApiError,
};

/// Runs each comment operation through validation, authorization and the store.
///
/// Mutating operations take the caller's identity explicitly. Authorization is
/// always decided before the store is touched, so a rejected request has no
/// side effect.
#[derive(Clone)]
pub struct CommentService {
    store: Arc<dyn CommentStore>,
    listing: Arc<dyn CommentListing>,
    authz: Arc<dyn Authorizer>,
}

impl CommentService {
    pub fn new(
        store: Arc<dyn CommentStore>,
        listing: Arc<dyn CommentListing>,
        authz: Arc<dyn Authorizer>,
    ) -> Self {
        Self {
            store,
            listing,
            authz,
        }
    }

    pub async fn create(
        &self,
        identity: Option<&Identity>,
        post_id: &str,
        body: &[u8],
    ) -> Result<Comment, ApiError> {
        let identity = identity.ok_or(ApiError::Unauthenticated)?;
        let request: CreateCommentRequest = decode_json(body)?;
        let new = request.into_new_comment(post_id, identity)?;

        let comment = self.store.create(new).await?;
        info!("Comment {} created on post {} by {}", comment.id, comment.post_id, identity);
        Ok(comment)
    }

    pub async fn get(&self, id: &str) -> Result<Comment, ApiError> {
        let id = require_id(id)?;
        Ok(self.store.get(id).await?)
    }

    pub async fn list(&self, post_id: &str, params: &ListParams) -> Result<CommentPage, ApiError> {
        let (comments, total) = self
            .listing
            .list_for_post(post_id, params.limit(), params.offset())
            .await?;
        Ok(CommentPage { comments, total })
    }

    pub async fn update(
        &self,
        identity: Option<&Identity>,
        id: &str,
        body: &[u8],
    ) -> Result<Comment, ApiError> {
        let identity = identity.ok_or(ApiError::Unauthenticated)?;
        let id = require_id(id)?;
        let request: UpdateCommentRequest = decode_json(body)?;
        let update = request.into_update(identity)?;

        self.authorize(identity, id).await?;

        let comment = self.store.update(id, update).await?;
        info!("Comment {} updated by {}", id, identity);
        Ok(comment)
    }

    pub async fn delete(&self, identity: Option<&Identity>, id: &str) -> Result<(), ApiError> {
        let identity = identity.ok_or(ApiError::Unauthenticated)?;
        let id = require_id(id)?;

        self.authorize(identity, id).await?;

        self.store.delete(id).await?;
        info!("Comment {} deleted by {}", id, identity);
        Ok(())
    }

    async fn authorize(&self, identity: &Identity, id: &str) -> Result<(), ApiError> {
        if self
            .authz
            .is_authorized(identity, id, ResourceKind::Comment)
            .await
        {
            Ok(())
        } else {
            warn!("{} is not allowed to modify comment {}", identity, id);
            Err(ApiError::Forbidden)
        }
    }
}
