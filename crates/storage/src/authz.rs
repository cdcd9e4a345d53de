use async_trait::async_trait;
use domain::{Authorizer, Identity, ResourceKind};
use tracing::{debug, warn};

use crate::Db;

/// Grants mutation rights to the user recorded as the resource's owner.
#[derive(Clone)]
pub struct OwnershipAuthorizer {
    db: Db,
}

impl OwnershipAuthorizer {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Authorizer for OwnershipAuthorizer {
    async fn is_authorized(
        &self,
        identity: &Identity,
        resource_id: &str,
        kind: ResourceKind,
    ) -> bool {
        let owner = match kind {
            ResourceKind::Comment => self.db.comment_owner(resource_id).await,
            ResourceKind::Post => self.db.post_owner(resource_id).await,
        };

        match owner {
            Ok(Some(owner)) => owner == identity.as_str(),
            Ok(None) => {
                debug!("No {} {} to authorize against", kind, resource_id);
                false
            }
            Err(e) => {
                warn!("Ownership lookup failed for {} {}: {:?}", kind, resource_id, e);
                false
            }
        }
    }
}
