//! Site configuration
//!
//! Loaded from environment variables with defaults from `utils::constants`.
//! Railway-style `PORT` wins over `PORTFOLIO_PORT` so the same binary runs
//! locally and on a PaaS.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use super::errors::{AppError, AppResult};
use crate::utils::constants::{
    DEFAULT_ASSETS_DIR, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_RATE_LIMIT_PER_MINUTE,
    SITE_TITLE, SUBMIT_DELAY_MS,
};

/// Runtime configuration for the portfolio server
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Directory served under `/assets`
    pub assets_dir: PathBuf,
    /// Simulated delivery delay for the contact form
    pub submit_delay: Duration,
    /// Document title
    pub title: String,
    /// Contact submissions allowed per client per minute
    pub contact_rate_limit: u32,
    /// Key the rate limiter on `X-Forwarded-For` / `X-Real-IP` instead of the
    /// peer address. Only safe behind a proxy that overwrites those headers.
    pub trust_proxy: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            submit_delay: Duration::from_millis(SUBMIT_DELAY_MS),
            title: SITE_TITLE.to_string(),
            contact_rate_limit: DEFAULT_RATE_LIMIT_PER_MINUTE,
            trust_proxy: false,
        }
    }
}

impl SiteConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("PORTFOLIO_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT").or_else(|| lookup("PORTFOLIO_PORT")) {
            config.port = parse_value("PORTFOLIO_PORT", &port)?;
        }
        if let Some(dir) = lookup("PORTFOLIO_ASSETS") {
            config.assets_dir = PathBuf::from(dir);
        }
        if let Some(delay) = lookup("PORTFOLIO_SUBMIT_DELAY_MS") {
            config.submit_delay = Duration::from_millis(parse_value(
                "PORTFOLIO_SUBMIT_DELAY_MS",
                &delay,
            )?);
        }
        if let Some(title) = lookup("PORTFOLIO_TITLE") {
            if !title.trim().is_empty() {
                config.title = title;
            }
        }
        if let Some(limit) = lookup("PORTFOLIO_RATE_LIMIT") {
            let limit: u32 = parse_value("PORTFOLIO_RATE_LIMIT", &limit)?;
            if limit == 0 {
                return Err(AppError::invalid_config("PORTFOLIO_RATE_LIMIT", "0"));
            }
            config.contact_rate_limit = limit;
        }
        if let Some(trust) = lookup("PORTFOLIO_TRUST_PROXY") {
            config.trust_proxy = parse_value("PORTFOLIO_TRUST_PROXY", &trust)?;
        }

        info!(
            host = %config.host,
            port = config.port,
            assets = %config.assets_dir.display(),
            submit_delay_ms = config.submit_delay.as_millis() as u64,
            trust_proxy = config.trust_proxy,
            "⚙️ Site configuration loaded"
        );

        Ok(config)
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> AppResult<SocketAddr> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .map_err(|_| AppError::invalid_config("PORTFOLIO_HOST", &raw))
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, raw: &str) -> AppResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::invalid_config(key, raw))
}
