//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. `main.rs` loads a `.env` file first (via `dotenvy`) and lets
//! command-line flags override individual values.
//!
//! ## Required Variables
//!
//! - `API_TOKEN` - Shared bearer secret accepted by the authentication stage
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SEED_USERS` - Start with the two demo users (default: `true`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Bearer secret. Loaded from `API_TOKEN`. Must be non-empty.
    pub api_token: String,
    pub log_level: String,
    pub log_format: String,
    /// Whether the store starts with John Doe (id 1) and Jane Smith (id 2).
    pub seed_users: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_TOKEN` is not set.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let api_token = env::var("API_TOKEN").context("API_TOKEN must be set")?;
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let seed_users = env::var("SEED_USERS")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(true);

        Ok(Self {
            listen_addr,
            api_token,
            log_level,
            log_format,
            seed_users,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_token` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    pub fn validate(&self) -> Result<()> {
        if self.api_token.trim().is_empty() {
            anyhow::bail!("API_TOKEN must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  API token: {}", mask_secret(&self.api_token));
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Seed users: {}", self.seed_users);
    }
}

/// Masks a secret for logging, keeping only its length visible.
///
/// `give-me-access` → `****** (14 chars)`
fn mask_secret(secret: &str) -> String {
    format!("****** ({} chars)", secret.chars().count())
}
