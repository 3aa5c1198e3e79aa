//! API Middleware (Rate Limiting, Logging)

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use dashmap::DashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::handlers::AppState;
use super::types::reject;
use crate::models::errors::AppError;
use crate::utils::constants::{DEFAULT_RATE_LIMIT_PER_MINUTE, RATE_LIMIT_WINDOW_SECS};
use crate::utils::telemetry::SiteEvent;

/// Rate limiter configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Requests per window
    pub requests_per_window: u32,
    /// Window duration
    pub window_duration: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_window: DEFAULT_RATE_LIMIT_PER_MINUTE,
            window_duration: Duration::from_secs(RATE_LIMIT_WINDOW_SECS),
        }
    }
}

/// In-memory fixed-window limiter keyed by client
pub struct RateLimiter {
    /// Request count and window start per client
    requests: DashMap<String, (u32, Instant)>,
    config: RateLimitConfig,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            requests: DashMap::new(),
            config,
        }
    }

    /// Check if request is allowed, returns (allowed, remaining, reset_seconds)
    pub fn check(&self, key: &str) -> (bool, u32, u64) {
        let now = Instant::now();

        let mut entry = self.requests.entry(key.to_string()).or_insert((0, now));

        // Reset window if expired
        if now.duration_since(entry.1) > self.config.window_duration {
            entry.0 = 0;
            entry.1 = now;
        }

        let reset_secs = self
            .config
            .window_duration
            .saturating_sub(now.duration_since(entry.1))
            .as_secs();

        if entry.0 >= self.config.requests_per_window {
            return (false, 0, reset_secs);
        }

        entry.0 += 1;
        let remaining = self.config.requests_per_window - entry.0;
        (true, remaining, reset_secs)
    }

    /// Drop clients whose window ended long ago, returns how many were removed
    pub fn cleanup(&self) -> usize {
        let now = Instant::now();
        let before = self.requests.len();
        self.requests.retain(|_, (_, started)| {
            now.duration_since(*started) < self.config.window_duration * 2
        });
        before.saturating_sub(self.requests.len())
    }

    pub fn tracked_clients(&self) -> usize {
        self.requests.len()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

/// Background task: forget idle clients once per window
pub fn start_cleanup_task(limiter: Arc<RateLimiter>) -> tokio::task::JoinHandle<()> {
    let period = limiter.config.window_duration.max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            let removed = limiter.cleanup();
            if removed > 0 {
                debug!("🧹 Rate limiter cleanup: {} idle clients removed", removed);
            }
        }
    })
}

/// Client identity for rate limiting.
///
/// Proxy headers are only honoured when `trust_proxy` is set; otherwise the
/// peer address decides. Requests with neither share one bucket.
pub(crate) fn client_key(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    trust_proxy: bool,
) -> String {
    let forwarded = trust_proxy
        .then(|| headers.get("x-forwarded-for").or_else(|| headers.get("x-real-ip")))
        .flatten()
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    forwarded
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "anonymous".to_string())
}

/// Count one contact submission against the client's window.
///
/// Returns `(remaining, reset_seconds)` when admitted, or the seconds until
/// the window resets when the client is over its limit.
pub(crate) fn admit_contact(
    state: &AppState,
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
) -> Result<(u32, u64), u64> {
    let rate_key = client_key(headers, peer, state.config.trust_proxy);
    let (allowed, remaining, reset) = state.limiter.check(&rate_key);

    if !allowed {
        warn!(key = %rate_key, "🚫 Contact rate limit exceeded");
        state.telemetry.record(SiteEvent::SubmissionRejected);
        return Err(reset);
    }
    Ok((remaining, reset))
}

/// Attach `X-RateLimit-*` headers to an admitted response
pub(crate) fn apply_quota(response: &mut Response, remaining: u32, reset: u64) {
    let headers = response.headers_mut();
    headers.insert("X-RateLimit-Remaining", HeaderValue::from(remaining));
    headers.insert("X-RateLimit-Reset", HeaderValue::from(reset));
}

/// Attach `Retry-After` to a limited response
pub(crate) fn apply_retry_after(response: &mut Response, reset: u64) {
    response
        .headers_mut()
        .insert(header::RETRY_AFTER, HeaderValue::from(reset));
}

/// Rate limiting middleware for the JSON contact endpoint
pub async fn rate_limit_middleware(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    let (remaining, reset) = match admit_contact(&state, &headers, peer) {
        Ok(quota) => quota,
        Err(reset) => {
            let mut response = reject(AppError::rate_limited(reset), 0.0).into_response();
            apply_retry_after(&mut response, reset);
            return response;
        }
    };

    let mut response = next.run(request).await;
    apply_quota(&mut response, remaining, reset);
    response
}

/// Request logging middleware
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        status = %status.as_u16(),
        latency_ms = %latency.as_millis(),
        "Request completed"
    );

    response
}
