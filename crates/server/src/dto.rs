use domain::{Comment, CommentUpdate, Identity, NewComment};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::ApiError;

pub const DEFAULT_PAGE_SIZE: i64 = 50;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Wire shape of a new comment. `post_id` and `user_id` may be absent or
/// `null`; whatever the client sends there is replaced.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub post_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl CreateCommentRequest {
    /// Path post id and authenticated identity always win over the payload.
    pub fn into_new_comment(
        self,
        post_id: &str,
        identity: &Identity,
    ) -> Result<NewComment, ApiError> {
        let content = self.content.unwrap_or_default();

        if post_id.trim().is_empty() {
            return Err(ApiError::Validation("post_id"));
        }
        if content.trim().is_empty() {
            return Err(ApiError::Validation("content"));
        }

        Ok(NewComment {
            post_id: post_id.to_string(),
            user_id: identity.as_str().to_string(),
            content,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCommentRequest {
    #[serde(default)]
    pub content: Option<String>,
    // Accepted for compatibility, never trusted.
    #[serde(default)]
    pub user_id: Option<String>,
}

impl UpdateCommentRequest {
    pub fn into_update(self, identity: &Identity) -> Result<CommentUpdate, ApiError> {
        let content = self.content.unwrap_or_default();
        if content.trim().is_empty() {
            return Err(ApiError::Validation("content"));
        }
        Ok(CommentUpdate {
            user_id: identity.as_str().to_string(),
            content,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListParams {
    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentPage {
    pub comments: Vec<Comment>,
    pub total: i64,
}

pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

/// Blank ids are rejected; any other id is passed on exactly as received.
pub fn require_id(id: &str) -> Result<&str, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::MissingId);
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u1() -> Identity {
        Identity::new("u1").unwrap()
    }

    #[test]
    fn create_overrides_client_supplied_owner_and_post() {
        let req: CreateCommentRequest =
            decode_json(br#"{"post_id":"p9","user_id":"mallory","content":"hi"}"#).unwrap();

        let new = req.into_new_comment("p1", &u1()).unwrap();
        assert_eq!(
            new,
            NewComment {
                post_id: "p1".into(),
                user_id: "u1".into(),
                content: "hi".into(),
            }
        );
    }

    #[test]
    fn create_accepts_null_owner_and_post() {
        let req: CreateCommentRequest =
            decode_json(br#"{"content":"hello","user_id":null,"post_id":null}"#).unwrap();

        let new = req.into_new_comment("p1", &u1()).unwrap();
        assert_eq!(new.user_id, "u1");
        assert_eq!(new.post_id, "p1");
    }

    #[test]
    fn null_content_is_a_validation_error() {
        let req: CreateCommentRequest = decode_json(br#"{"content":null}"#).unwrap();
        let err = req.into_new_comment("p1", &u1()).unwrap_err();
        assert!(matches!(err, ApiError::Validation("content")));
    }

    #[test]
    fn create_requires_content() {
        let req: CreateCommentRequest = decode_json(br#"{"content":"   "}"#).unwrap();
        let err = req.into_new_comment("p1", &u1()).unwrap_err();
        assert!(matches!(err, ApiError::Validation("content")));
    }

    #[test]
    fn create_requires_post_id() {
        let req: CreateCommentRequest = decode_json(br#"{"content":"hi"}"#).unwrap();
        let err = req.into_new_comment("", &u1()).unwrap_err();
        assert!(matches!(err, ApiError::Validation("post_id")));
    }

    #[test]
    fn update_ignores_client_user_id() {
        let req: UpdateCommentRequest =
            decode_json(br#"{"content":"new","user_id":"mallory"}"#).unwrap();
        let update = req.into_update(&u1()).unwrap();
        assert_eq!(update.user_id, "u1");
        assert_eq!(update.content, "new");
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = decode_json::<CreateCommentRequest>(b"{not json").unwrap_err();
        assert!(matches!(err, ApiError::MalformedBody(_)));
    }

    #[test]
    fn blank_id_is_missing() {
        assert!(matches!(require_id("  "), Err(ApiError::MissingId)));
        assert_eq!(require_id("c1").unwrap(), "c1");
    }

    #[test]
    fn padded_id_is_not_trimmed() {
        assert_eq!(require_id(" c1 ").unwrap(), " c1 ");
    }

    #[test]
    fn list_params_are_clamped() {
        let params = ListParams {
            limit: Some(1000),
            offset: Some(-5),
        };
        assert_eq!(params.limit(), MAX_PAGE_SIZE);
        assert_eq!(params.offset(), 0);

        let defaults = ListParams {
            limit: None,
            offset: None,
        };
        assert_eq!(defaults.limit(), DEFAULT_PAGE_SIZE);
    }
}
