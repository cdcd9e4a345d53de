use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::Comment;

use crate::{
    auth::MaybeIdentity,
    dto::{CommentPage, ListParams},
    error::{ApiError, MessageResponse},
    state::AppState,
};

pub async fn create_comment(
    State(state): State<AppState>,
    identity: MaybeIdentity,
    Path(post_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    let comment = state
        .comments
        .create(identity.identity(), &post_id, &body)
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Comment>, ApiError> {
    Ok(Json(state.comments.get(&id).await?))
}

pub async fn update_comment(
    State(state): State<AppState>,
    identity: MaybeIdentity,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Comment>, ApiError> {
    let comment = state
        .comments
        .update(identity.identity(), &id, &body)
        .await?;
    Ok(Json(comment))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    identity: MaybeIdentity,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.comments.delete(identity.identity(), &id).await?;
    Ok(Json(MessageResponse::new("Successfully deleted")))
}

pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<CommentPage>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;

    Ok(Json(state.comments.list(&post_id, &params).await?))
}
