pub mod auth;
pub mod blobs;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::constants::MAX_DOCUMENT_SIZE_BYTES;
use crate::AppState;

pub use auth::{current_user, login_user, register_user};
pub use blobs::{get_navigation, get_progress, save_navigation, save_progress};
pub use health::health_check;

/// Build the full application router
///
/// CORS is wide open (any origin, method and header) for the browser client
/// served from arbitrary dev hosts.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/auth/register", post(register_user))
        .route("/auth/login", post(login_user))
        .route("/me", get(current_user))
        .route("/progress", get(get_progress).post(save_progress))
        .route("/navigation-state", get(get_navigation).post(save_navigation))
        .layer(DefaultBodyLimit::max(MAX_DOCUMENT_SIZE_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
