/*
 * Responsibility
 * - Environment-based configuration (listen address, upstream endpoints)
 * - Validation at startup; the process refuses to boot on bad values
 */
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    // Upstream gRPC endpoints
    pub auth_service_addr: String,
    pub product_service_addr: String,

    // Connect and per-call deadline for both upstreams
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let auth_service_addr = std::env::var("AUTH_SERVICE_ADDR")
            .unwrap_or_else(|_| "http://localhost:50051".to_string());

        let product_service_addr = std::env::var("PRODUCT_SERVICE_ADDR")
            .unwrap_or_else(|_| "http://localhost:50052".to_string());

        let upstream_timeout = std::env::var("UPSTREAM_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(5));

        Ok(Self {
            addr,
            app_env,
            auth_service_addr,
            product_service_addr,
            upstream_timeout,
        })
    }
}
