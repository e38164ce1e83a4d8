//! Configuration management for Bookshelf Core

use anyhow::{Context, Result};
use std::env;

/// Shared secret used to sign protected requests when none is configured.
pub const DEFAULT_HMAC_SECRET: &str = "bookshelf-shared-secret";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server host
    pub http_host: String,
    /// HTTP server port
    pub http_port: u16,
    /// Request signing configuration
    pub auth: AuthConfig,
    /// Logging and metrics configuration
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 key shared with clients of protected routes.
    /// Read once at startup and fixed for the life of the process.
    pub hmac_secret: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            hmac_secret: DEFAULT_HMAC_SECRET.to_string(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Log output format: "text" or "json"
    pub log_format: String,
    /// Whether to install the Prometheus recorder and serve /metrics
    pub metrics_enabled: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
            metrics_enabled: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_host: "0.0.0.0".to_string(),
            http_port: 3000,
            auth: AuthConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source shaped like the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            http_host: lookup("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            http_port: lookup("HTTP_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("Invalid HTTP_PORT")?,
            auth: AuthConfig {
                hmac_secret: lookup("BOOKSHELF_HMAC_SECRET")
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| DEFAULT_HMAC_SECRET.to_string()),
            },
            telemetry: TelemetryConfig {
                log_format: lookup("LOG_FORMAT")
                    .map(|s| s.to_lowercase())
                    .unwrap_or_else(|| "text".to_string()),
                metrics_enabled: lookup("METRICS_ENABLED")
                    .map(|s| s.eq_ignore_ascii_case("true"))
                    .unwrap_or(false),
            },
        })
    }

    /// Get HTTP server address
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}
