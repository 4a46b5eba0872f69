//! OpenAPI documentation.

use axum::{response::Json, routing::get, Router};
use utoipa::OpenApi;

use crate::state::AppState;
use domain::{CreateUser, UserResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::get_user,
    ),
    components(
        schemas(
            CreateUser,
            UserResponse,
        )
    ),
    tags(
        (name = "Users", description = "User registration endpoints"),
    )
)]
pub struct ApiDoc;

/// Serve the generated document as JSON.
pub fn openapi_routes() -> Router<AppState> {
    Router::new().route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}
