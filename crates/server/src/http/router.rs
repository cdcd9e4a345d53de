use super::handlers::comments;
use crate::state::AppState;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
];

fn cors_layer(allowed_origins: &str) -> CorsLayer {
    let any = || {
        CorsLayer::new()
            .allow_methods(ALLOWED_METHODS)
            .allow_origin(Any)
            .allow_headers(Any)
    };

    if allowed_origins == "*" {
        return any();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<HeaderValue>().ok())
        .collect();

    if origins.is_empty() {
        tracing::warn!("CORS config is invalid or empty, falling back to allow ANY.");
        any()
    } else {
        tracing::info!("CORS enabled for origins: {:?}", origins);
        CorsLayer::new()
            .allow_methods(ALLOWED_METHODS)
            .allow_origin(origins)
            .allow_headers(Any)
    }
}

pub fn build_router(state: AppState, allowed_origins: &str) -> Router {
    Router::new()
        .route(
            "/api/posts/:post_id/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/api/comments/:id",
            get(comments::get_comment)
                .put(comments::update_comment)
                .patch(comments::update_comment)
                .delete(comments::delete_comment),
        )
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
