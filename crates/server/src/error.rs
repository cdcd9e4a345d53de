use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no authenticated identity")]
    Unauthenticated,

    #[error("missing resource id")]
    MissingId,

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("invalid query parameters: {0}")]
    InvalidQuery(String),

    #[error("missing required field: {0}")]
    Validation(&'static str),

    #[error("identity does not own the resource")]
    Forbidden,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::MissingId
            | ApiError::MalformedBody(_)
            | ApiError::InvalidQuery(_)
            | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing text. Store failures are never described to the caller.
    fn public_message(&self) -> &'static str {
        match self {
            ApiError::Unauthenticated => "Not Authorized",
            ApiError::MissingId => "missing id",
            ApiError::MalformedBody(_) => "malformed request body",
            ApiError::InvalidQuery(_) => "invalid query parameters",
            ApiError::Validation(_) => "not a valid comment",
            ApiError::Forbidden => "Forbidden",
            ApiError::Store(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Store(e) => tracing::error!("Comment store error: {}", e),
            other => tracing::debug!("Rejected request: {}", other),
        }
        let body = MessageResponse::new(self.public_message());
        (self.status(), Json(body)).into_response()
    }
}
