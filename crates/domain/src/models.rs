use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Authenticated user id, resolved before any comment operation runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(s: impl Into<String>) -> Result<Self, String> {
        let s = s.into();
        if s.is_empty() {
            return Err("Identity cannot be empty.".to_string());
        }
        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err("Identity contains whitespace or control characters.".to_string());
        }
        if s.chars().count() > 128 {
            return Err("Identity is too long (max 128 chars).".to_string());
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Comment,
    Post,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Comment => "comment",
            ResourceKind::Post => "post",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// A validated comment that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: String,
    pub user_id: String,
    pub content: String,
}

/// Replacement content and owner for an existing comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentUpdate {
    pub user_id: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_rejects_empty_and_whitespace() {
        assert!(Identity::new("").is_err());
        assert!(Identity::new("u 1").is_err());
        assert!(Identity::new("u1\n").is_err());
        assert!(Identity::new("x".repeat(129)).is_err());
        assert!(Identity::new("é".repeat(128)).is_ok());
        assert_eq!(Identity::new("u1").unwrap().as_str(), "u1");
    }

    #[test]
    fn comment_serializes_with_snake_case_fields() {
        let created_at = chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let comment = Comment {
            id: "c1".into(),
            post_id: "p1".into(),
            user_id: "u1".into(),
            content: "hello".into(),
            created_at,
            updated_at: None,
        };

        let value = serde_json::to_value(&comment).unwrap();
        assert_eq!(value["post_id"], "p1");
        assert_eq!(value["user_id"], "u1");
        assert_eq!(value["content"], "hello");
        assert!(value["updated_at"].is_null());
    }

    #[test]
    fn resource_kind_uses_lowercase_names() {
        assert_eq!(ResourceKind::Comment.to_string(), "comment");
        assert_eq!(
            serde_json::to_string(&ResourceKind::Post).unwrap(),
            "\"post\""
        );
    }
}
