//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `PORT` - Listen port (default: `8080`)
//! - `LISTEN` - Full bind address, overrides `PORT` (default: `0.0.0.0:$PORT`)
//! - `BASE_URL` - Prefix for generated short URLs (default: `http://localhost:$PORT`)
//! - `CODE_LENGTH` - Short code length (default: 8, range: 4-43)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! ```bash
//! export PORT=9000
//! export BASE_URL="https://sho.rt"
//! cargo run
//! ```

use anyhow::{Context, Result};
use std::env;

use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH};

/// Shortest code length accepted from configuration.
pub const MIN_CODE_LENGTH: usize = 4;

const DEFAULT_PORT: &str = "8080";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Prefix for short URLs. Stored as given; trailing slashes are trimmed
    /// when the application state is built.
    pub base_url: String,
    pub code_length: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `CODE_LENGTH` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let port = non_empty_var("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
        port.parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got '{}'", port))?;

        let listen_addr = non_empty_var("LISTEN").unwrap_or_else(|| format!("0.0.0.0:{}", port));
        let base_url =
            non_empty_var("BASE_URL").unwrap_or_else(|| format!("http://localhost:{}", port));

        let code_length = match env::var("CODE_LENGTH") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("CODE_LENGTH must be a number, got '{}'", v))?,
            Err(_) => DEFAULT_CODE_LENGTH,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            base_url,
            code_length,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code_length` is outside `MIN_CODE_LENGTH..=MAX_CODE_LENGTH`
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `base_url` is not an HTTP(S) URL
    pub fn validate(&self) -> Result<()> {
        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between {} and {}, got {}",
                MIN_CODE_LENGTH,
                MAX_CODE_LENGTH,
                self.code_length
            );
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

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        Ok(())
    }

    /// Returns whether logs are emitted as JSON lines.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Code length: {}", self.code_length);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads a variable, treating an empty value as unset.
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
