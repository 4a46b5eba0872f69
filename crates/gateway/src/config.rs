//! Gateway configuration.

use std::env;

use common::{env_or, ServiceConfig};
use user_service_lib::config::UserServiceConfig;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bind address, port and log level
    pub server: ServiceConfig,
    /// Settings handed to the user service
    pub user_service: UserServiceConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = ServiceConfig::default();
        Self {
            server: ServiceConfig {
                service_name: "gateway".to_string(),
                host: env::var("GATEWAY_HOST").unwrap_or(defaults.host),
                port: env_or("GATEWAY_PORT", defaults.port),
                log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            },
            user_service: UserServiceConfig::from_env(),
        }
    }

    /// Socket address string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServiceConfig {
                service_name: "gateway".to_string(),
                ..ServiceConfig::default()
            },
            user_service: UserServiceConfig::default(),
        }
    }
}
