//! Route configuration.

use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{health_routes, user_handler, user_routes};
use crate::openapi::openapi_routes;
use crate::state::AppState;

/// Create the main router with all routes.
///
/// Unknown paths fall through to axum's 404 and known paths with the wrong
/// method to its 405. Registration is served with and without a trailing
/// slash.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .nest("/health", health_routes())
        // OpenAPI document
        .nest("/api-docs", openapi_routes())
        // User routes
        .nest("/users", user_routes())
        .route("/users/", post(user_handler::create_user))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
