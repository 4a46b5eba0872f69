//! API Gateway Library
//!
//! HTTP adapter for the registration backend: decodes requests, calls the
//! user service and maps its errors to status codes.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the service graph and run the HTTP server until it stops.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Create the user service with its in-memory store
    let user_service = user_service_lib::build_user_service(&config.user_service)?;

    // Create app state
    let state = AppState::new(user_service);

    // Build router
    let app = create_router(state);

    // Build address
    let addr: SocketAddr = config.bind_address().parse()?;
    info!("{} listening on {}", config.server.service_name, addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
