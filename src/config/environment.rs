// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses bind address, environment, CORS origins, request timeout, and database hints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use anyhow::{Context, Result};
use protein_core::constants::defaults;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// `*` or a comma-separated origin list
    pub allowed_origins: String,
}

/// HTTP behaviour settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Database hints reported by the diagnostics endpoint.
///
/// The service never connects to a database; these only record whether the
/// deployment supplied connection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseHints {
    /// `DATABASE_URL` was set
    pub url_configured: bool,
    /// `DATABASE_NAME` was set
    pub name_configured: bool,
}

/// Server configuration loaded from environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// CORS configuration
    pub cors: CorsConfig,
    /// HTTP behaviour
    pub http: HttpConfig,
    /// Database hints for diagnostics
    pub database: DatabaseHints,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            cors: CorsConfig {
                allowed_origins: "*".to_owned(),
            },
            http: HttpConfig {
                request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            },
            database: DatabaseHints::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed or a value
    /// fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or("HOST", defaults::HOST),
            http_port: env_var_or("PORT", &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
            http: HttpConfig {
                request_timeout_secs: env_var_or(
                    "REQUEST_TIMEOUT_SECS",
                    &defaults::REQUEST_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid REQUEST_TIMEOUT_SECS value")?,
            },
            database: DatabaseHints {
                url_configured: env_is_set("DATABASE_URL"),
                name_configured: env_is_set("DATABASE_NAME"),
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the host is empty or the timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(anyhow::anyhow!("HOST cannot be empty"));
        }
        if self.http.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!(
                "REQUEST_TIMEOUT_SECS must be greater than 0"
            ));
        }
        Ok(())
    }

    /// Socket address string for the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Protein Planner API Configuration:\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - CORS Origins: {}\n\
             - Request Timeout: {}s\n\
             - Database URL: {}",
            self.bind_address(),
            self.environment,
            self.cors.allowed_origins,
            self.http.request_timeout_secs,
            if self.database.url_configured {
                "Set"
            } else {
                "Not Set"
            },
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Whether an environment variable is present and non-empty
fn env_is_set(key: &str) -> bool {
    env::var(key).is_ok_and(|value| !value.trim().is_empty())
}
