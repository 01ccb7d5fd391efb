//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! ```bash
//! export XF_API_URL="https://forum.example.com/api"
//! export XF_API_KEY="<superuser api key>"
//! export RETURN_URL="https://www.example.com/"
//! ```
//!
//! ## Optional Variables
//!
//! - `COOKIE_PREFIX` - Forum cookie prefix (default: `xf_`); the session
//!   cookie read per request is `<prefix>session`
//! - `FORUM_URL` - Base path/URL for forum links in the widget (default: `/forums`)
//! - `SITE_HOST` - Host named in diagnostic reports (default: `localhost`)
//! - `REPORT_WEBHOOK_URL` - Operator webhook for API error reports (disabled if unset)
//! - `CHECK_ENVIRONMENT` - `true`/`1` to target the check install (default: false)
//! - `CHECK_CREDENTIALS` - `user:password` for the check install's basic-auth gate
//! - `UPSTREAM_TIMEOUT_SECS` - Forum API call timeout (default: 10)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the forum's REST API.
    pub api_base_url: String,
    /// Superuser API key sent as `XF-Api-Key` on every upstream call.
    pub api_key: String,
    /// Where the forum sends a visitor after completing a login.
    pub return_url: String,
    /// Base path/URL used for forum links in the rendered widget.
    pub forum_url: String,
    /// Forum cookie prefix; the session cookie is `<prefix>session`.
    pub cookie_prefix: String,
    /// Host named as the caller in diagnostic reports.
    pub site_host: String,
    /// Operator webhook receiving API error reports. `None` disables delivery.
    pub report_webhook_url: Option<String>,
    /// When true, upstream calls target the check install and carry its
    /// basic-auth gate; reports are labelled "Check" instead of "Live".
    pub check_environment: bool,
    /// `user:password` for the check install's basic-auth gate.
    pub check_credentials: Option<String>,
    /// Timeout for each upstream call in seconds (`UPSTREAM_TIMEOUT_SECS`, default: 10).
    pub upstream_timeout_secs: u64,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing.
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("XF_API_URL").context("XF_API_URL must be set")?;
        let api_key = env::var("XF_API_KEY").context("XF_API_KEY must be set")?;
        let return_url = env::var("RETURN_URL").context("RETURN_URL must be set")?;

        let forum_url = env::var("FORUM_URL").unwrap_or_else(|_| "/forums".to_string());
        let cookie_prefix = env::var("COOKIE_PREFIX").unwrap_or_else(|_| "xf_".to_string());
        let site_host = env::var("SITE_HOST").unwrap_or_else(|_| "localhost".to_string());

        let report_webhook_url = env::var("REPORT_WEBHOOK_URL").ok().filter(|v| !v.is_empty());

        let check_environment = env::var("CHECK_ENVIRONMENT")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let check_credentials = env::var("CHECK_CREDENTIALS").ok().filter(|v| !v.is_empty());

        let upstream_timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            api_base_url,
            api_key,
            return_url,
            forum_url,
            cookie_prefix,
            site_host,
            report_webhook_url,
            check_environment,
            check_credentials,
            upstream_timeout_secs,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `XF_API_URL`, `RETURN_URL`, or `REPORT_WEBHOOK_URL` is not a valid http(s) URL
    /// - `XF_API_KEY` is empty
    /// - `CHECK_ENVIRONMENT` is set without usable `CHECK_CREDENTIALS`
    /// - `UPSTREAM_TIMEOUT_SECS` is 0 or over 300
    /// - `LOG_FORMAT` is not `text` or `json`
    /// - `LISTEN` is not in `host:port` form
    pub fn validate(&self) -> Result<()> {
        validate_http_url("XF_API_URL", &self.api_base_url)?;
        validate_http_url("RETURN_URL", &self.return_url)?;

        if let Some(webhook_url) = &self.report_webhook_url {
            validate_http_url("REPORT_WEBHOOK_URL", webhook_url)?;
        }

        if self.api_key.is_empty() {
            anyhow::bail!("XF_API_KEY must not be empty");
        }

        if self.check_environment {
            match &self.check_credentials {
                Some(credentials) if credentials.contains(':') => {}
                Some(_) => {
                    anyhow::bail!("CHECK_CREDENTIALS must be in 'user:password' form")
                }
                None => {
                    anyhow::bail!("CHECK_CREDENTIALS must be set when CHECK_ENVIRONMENT is enabled")
                }
            }
        }

        if self.upstream_timeout_secs == 0 || self.upstream_timeout_secs > 300 {
            anyhow::bail!(
                "UPSTREAM_TIMEOUT_SECS must be between 1 and 300, got {}",
                self.upstream_timeout_secs
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

        Ok(())
    }

    /// Returns whether diagnostic report delivery is enabled.
    pub fn is_reporting_enabled(&self) -> bool {
        self.report_webhook_url.is_some()
    }

    /// The environment label used in diagnostic reports.
    pub fn environment_label(&self) -> &'static str {
        if self.check_environment { "Check" } else { "Live" }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Forum API: {}", self.api_base_url);
        tracing::info!("  API key: {}", mask_secret(&self.api_key));
        tracing::info!("  Environment: {}", self.environment_label());
        tracing::info!("  Return URL: {}", self.return_url);
        tracing::info!("  Cookie prefix: {}", self.cookie_prefix);

        if let Some(webhook_url) = &self.report_webhook_url {
            tracing::info!("  Error reports: {} (enabled)", webhook_url);
        } else {
            tracing::info!("  Error reports: disabled");
        }

        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Checks that a configured URL parses and uses an http(s) scheme.
fn validate_http_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{name} is not a valid URL: '{value}'"))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("{name} must use http or https, got '{value}'");
    }

    Ok(())
}

/// Masks a secret for logging, keeping only a short identifying prefix.
fn mask_secret(secret: &str) -> String {
    if secret.len() <= 4 {
        "***".to_string()
    } else {
        format!("{}***", &secret[..4])
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
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
