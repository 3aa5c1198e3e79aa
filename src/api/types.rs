//! API Request/Response Types

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::core::{
    ElementRect, Notification, ParallaxFrame, PointerSample, Spin, Tilt, TiltEffect,
};
use crate::models::errors::AppError;
use crate::models::types::{
    Achievement, ContactChannel, GalleryImage, HeroCopy, NavItem, Project, Service, SocialLink,
};
use crate::utils::telemetry::SiteStats;

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub latency_ms: f64,
    pub timestamp: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, latency_ms: f64) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(error: ApiError, latency_ms: f64) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// API Error
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&AppError> for ApiError {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code_str().to_string(),
            message: err.message.clone(),
            details: err.code.is_retryable().then(|| "retryable".to_string()),
        }
    }
}

/// Error half of every JSON handler
pub type ApiRejection = (StatusCode, Json<ApiResponse<()>>);

/// Result type of JSON handlers
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiRejection>;

/// Map an [`AppError`] to its status and envelope
pub fn reject(err: AppError, latency_ms: f64) -> ApiRejection {
    let status =
        StatusCode::from_u16(err.code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ApiResponse::error(ApiError::from(&err), latency_ms)))
}

// ============================================
// Page
// ============================================

/// Query string of `GET /`. Everything is optional and parsed leniently so a
/// mangled link still renders the page.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub category: Option<String>,
    pub image: Option<String>,
    pub sent: Option<String>,
}

impl PageQuery {
    pub fn image_id(&self) -> Option<u32> {
        self.image.as_deref().and_then(|raw| raw.trim().parse().ok())
    }

    pub fn was_sent(&self) -> bool {
        self.sent.as_deref() == Some("1")
    }
}

// ============================================
// Content
// ============================================

#[derive(Debug, Serialize)]
pub struct ContentData {
    pub hero: &'static HeroCopy,
    pub navigation: &'static [NavItem],
    pub about_roles: &'static [&'static str],
    pub about: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
    pub achievements: &'static [Achievement],
    pub projects: &'static [Project],
    pub gallery: &'static [GalleryImage],
    pub services: &'static [Service],
    pub contact_channels: &'static [ContactChannel],
    pub social_links: &'static [SocialLink],
}

// ============================================
// Gallery
// ============================================

#[derive(Debug, Default, Deserialize)]
pub struct GalleryQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GalleryData {
    pub categories: Vec<&'static str>,
    pub active: String,
    pub items: Vec<&'static GalleryImage>,
}

// ============================================
// Contact
// ============================================

#[derive(Debug, Serialize)]
pub struct ContactData {
    pub id: String,
    pub received_at: String,
    pub notification: Notification,
}

// ============================================
// Effects
// ============================================

#[derive(Debug, Deserialize)]
pub struct TiltRequest {
    /// `achievement_card`, `project_card` or `gallery_item`
    pub preset: String,
    /// Latest pointer position; absent means the pointer left
    #[serde(default)]
    pub pointer: Option<PointerSample>,
    pub rect: ElementRect,
}

#[derive(Debug, Serialize)]
pub struct TiltData {
    pub preset: String,
    pub tilt: Tilt,
    pub transform: String,
    pub effect: TiltEffect,
}

#[derive(Debug, Deserialize)]
pub struct ParallaxRequest {
    pub element_top: f64,
    pub viewport_height: f64,
    #[serde(default = "default_parallax_items")]
    pub items: usize,
}

fn default_parallax_items() -> usize {
    1
}

#[derive(Debug, Serialize)]
pub struct ParallaxData {
    pub progress: f64,
    pub frames: Vec<ParallaxFrame>,
    pub styles: Vec<String>,
}

/// Page scroll offset plus the spinning element's viewport box
#[derive(Debug, Deserialize)]
pub struct ScrollRequest {
    pub scroll_y: f64,
    pub rect_top: f64,
    pub rect_bottom: f64,
    pub viewport_height: f64,
    /// Rotation from the previous sample, kept while the element is off screen
    #[serde(default)]
    pub previous: Option<Spin>,
}

#[derive(Debug, Serialize)]
pub struct ScrollData {
    pub navbar_condensed: bool,
    pub spin: Spin,
    pub transform: String,
}

// ============================================
// Stats / Health
// ============================================

#[derive(Debug, Serialize)]
pub struct StatsData {
    #[serde(flatten)]
    pub stats: SiteStats,
    pub inbox_size: usize,
    pub api_version: String,
}

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}
