//! API Request Handlers

use axum::{
    extract::{ConnectInfo, Form, Json, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Datelike;
use maud::Markup;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

use super::middleware::{
    admit_contact, apply_quota, apply_retry_after, RateLimitConfig, RateLimiter,
};
use super::types::*;
use crate::core::{
    navbar_condensed, ContactDesk, ContactFields, ContactForm, GalleryState, LoggingInbox,
    Notification, ParallaxEffect, ScrollSample, ScrollSpin, TiltEffect, TiltTracker,
};
use crate::models::config::SiteConfig;
use crate::models::errors::AppError;
use crate::render::{render_page, ContactView, PageView};
use crate::utils::constants::{INBOX_CAPACITY, MAX_PARALLAX_ITEMS, RATE_LIMIT_WINDOW_SECS};
use crate::utils::content::{
    ABOUT_PARAGRAPHS, ABOUT_ROLES, ACHIEVEMENTS, CONTACT_CHANNELS, GALLERY, HERO, NAV_ITEMS,
    PROJECTS, SERVICES, SOCIAL_LINKS, TECH_STACK,
};
use crate::utils::telemetry::{SiteEvent, TelemetryCollector};

/// Shared application state
pub struct AppState {
    pub config: SiteConfig,
    pub telemetry: Arc<TelemetryCollector>,
    pub inbox: Arc<LoggingInbox>,
    pub desk: ContactDesk,
    pub limiter: Arc<RateLimiter>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: SiteConfig, telemetry: Arc<TelemetryCollector>) -> Self {
        let inbox = Arc::new(LoggingInbox::new(INBOX_CAPACITY));
        let desk = ContactDesk::new(config.submit_delay, inbox.clone());
        let limiter = Arc::new(RateLimiter::new(RateLimitConfig {
            requests_per_window: config.contact_rate_limit,
            window_duration: std::time::Duration::from_secs(RATE_LIMIT_WINDOW_SECS),
        }));

        Self {
            config,
            telemetry,
            inbox,
            desk,
            limiter,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    fn render(&self, gallery: GalleryState<'static>, contact: ContactView) -> Markup {
        render_page(&PageView {
            title: &self.config.title,
            gallery,
            contact,
            year: chrono::Utc::now().year(),
        })
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn status_of(err: &AppError) -> StatusCode {
    StatusCode::from_u16(err.code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

// ============================================
// Page
// ============================================

/// `GET /`: the whole page, with gallery filter / modal and the post-send
/// toast driven by the query string
pub async fn index(State(state): State<Arc<AppState>>, Query(query): Query<PageQuery>) -> Markup {
    state.telemetry.record(SiteEvent::PageView);

    let mut gallery = GalleryState::new(GALLERY);
    if let Some(category) = query.category.as_deref() {
        if let Err(err) = gallery.set_category(category) {
            debug!(code = err.code_str(), category, "Unknown gallery category, showing all");
        }
    }
    if let Some(id) = query.image_id() {
        if let Err(err) = gallery.select(id) {
            debug!(code = err.code_str(), id, "Gallery image not shown, ignoring");
        }
    }

    let contact = ContactView {
        notification: query.was_sent().then(Notification::message_sent),
        ..Default::default()
    };

    state.render(gallery, contact)
}

/// `POST /contact`: simulated delivery, then back to the page with a toast.
/// A missing field or an exhausted rate limit re-renders the page with the
/// typed values kept.
pub async fn submit_contact_form(
    State(state): State<Arc<AppState>>,
    connect: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    Form(fields): Form<ContactFields>,
) -> Response {
    let peer = connect.map(|ConnectInfo(addr)| addr);
    let (remaining, reset) = match admit_contact(&state, &headers, peer) {
        Ok(quota) => quota,
        Err(reset) => {
            let err = AppError::rate_limited(reset);
            let mut response = rerender_form(&state, status_of(&err), err, fields);
            apply_retry_after(&mut response, reset);
            return response;
        }
    };

    let form = ContactForm::with_fields(fields);
    let mut response = match state.desk.begin(form) {
        Ok(submission) => match state.desk.finish(submission).await {
            Ok(_) => {
                state.telemetry.record(SiteEvent::MessageDelivered);
                Redirect::to("/?sent=1#contact").into_response()
            }
            Err(err) => {
                error!(code = err.code_str(), "❌ Contact delivery failed: {}", err);
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                rerender_form(&state, status, err, ContactFields::default())
            }
        },
        Err((form, err)) => {
            state.telemetry.record(SiteEvent::SubmissionRejected);
            warn!(code = err.code_str(), "⚠️ Contact form rejected: {}", err.message);
            rerender_form(&state, status_of(&err), err, form.fields().clone())
        }
    };

    apply_quota(&mut response, remaining, reset);
    response
}

/// Page with the contact form refilled and the error shown above it
fn rerender_form(
    state: &AppState,
    status: StatusCode,
    err: AppError,
    fields: ContactFields,
) -> Response {
    let contact = ContactView {
        fields,
        error: Some(err.message),
        ..Default::default()
    };
    (status, state.render(GalleryState::new(GALLERY), contact)).into_response()
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthData>> {
    let start = Instant::now();

    let data = HealthData {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    };

    Json(ApiResponse::success(data, elapsed_ms(start)))
}

// ============================================
// Content
// ============================================

pub async fn get_content() -> Json<ApiResponse<ContentData>> {
    let start = Instant::now();

    let data = ContentData {
        hero: &HERO,
        navigation: NAV_ITEMS,
        about_roles: ABOUT_ROLES,
        about: ABOUT_PARAGRAPHS,
        tech_stack: TECH_STACK,
        achievements: ACHIEVEMENTS,
        projects: PROJECTS,
        gallery: GALLERY,
        services: SERVICES,
        contact_channels: CONTACT_CHANNELS,
        social_links: SOCIAL_LINKS,
    };

    Json(ApiResponse::success(data, elapsed_ms(start)))
}

// ============================================
// Gallery
// ============================================

pub async fn get_gallery(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GalleryQuery>,
) -> ApiResult<GalleryData> {
    let start = Instant::now();
    state.telemetry.record(SiteEvent::GalleryQuery);

    let mut gallery = GalleryState::new(GALLERY);
    if let Some(category) = query.category.as_deref() {
        gallery
            .set_category(category)
            .map_err(|err| reject(err, elapsed_ms(start)))?;
    }

    let data = GalleryData {
        categories: gallery.categories(),
        active: gallery.filter().as_str().to_string(),
        items: gallery.visible(),
    };

    Ok(Json(ApiResponse::success(data, elapsed_ms(start))))
}

// ============================================
// Contact (JSON)
// ============================================

pub async fn api_contact(
    State(state): State<Arc<AppState>>,
    Json(fields): Json<ContactFields>,
) -> ApiResult<ContactData> {
    let start = Instant::now();

    let submission = state.desk.begin(ContactForm::with_fields(fields)).map_err(|(_, err)| {
        state.telemetry.record(SiteEvent::SubmissionRejected);
        warn!(code = err.code_str(), "⚠️ Contact request rejected: {}", err.message);
        reject(err, elapsed_ms(start))
    })?;
    let id = submission.message().id.to_string();
    let received_at = submission.message().received_at.to_rfc3339();

    let (_, notification) = state
        .desk
        .finish(submission)
        .await
        .map_err(|err| reject(err, elapsed_ms(start)))?;
    state.telemetry.record(SiteEvent::MessageDelivered);

    info!(id = %id, latency_ms = elapsed_ms(start), "✅ Contact request delivered");

    Ok(Json(ApiResponse::success(
        ContactData {
            id,
            received_at,
            notification,
        },
        elapsed_ms(start),
    )))
}

// ============================================
// Effects
// ============================================

pub async fn compute_tilt(Json(req): Json<TiltRequest>) -> ApiResult<TiltData> {
    let start = Instant::now();

    let effect = TiltEffect::preset(&req.preset).ok_or_else(|| {
        reject(
            AppError::bad_request(format!("Unknown tilt preset: {}", req.preset)),
            elapsed_ms(start),
        )
    })?;

    let mut tracker = TiltTracker::new(effect);
    let tilt = match req.pointer {
        Some(pointer) => tracker.on_move(pointer, req.rect),
        None => tracker.on_leave(),
    };

    let data = TiltData {
        preset: req.preset,
        tilt,
        transform: tracker.style().to_string(),
        effect,
    };

    Ok(Json(ApiResponse::success(data, elapsed_ms(start))))
}

pub async fn compute_parallax(Json(req): Json<ParallaxRequest>) -> ApiResult<ParallaxData> {
    let start = Instant::now();

    if req.items > MAX_PARALLAX_ITEMS {
        return Err(reject(
            AppError::bad_request(format!("At most {} items per request", MAX_PARALLAX_ITEMS)),
            elapsed_ms(start),
        ));
    }

    let effect = ParallaxEffect::default();
    let sample = ScrollSample {
        element_top: req.element_top,
        viewport_height: req.viewport_height,
    };
    let frames = effect.frames(sample, req.items);

    let data = ParallaxData {
        progress: effect.progress(sample),
        styles: frames.iter().map(|frame| frame.style()).collect(),
        frames,
    };

    Ok(Json(ApiResponse::success(data, elapsed_ms(start))))
}

pub async fn compute_scroll(Json(req): Json<ScrollRequest>) -> Json<ApiResponse<ScrollData>> {
    let start = Instant::now();

    let mut spin = req.previous.map(ScrollSpin::resume).unwrap_or_default();
    let current = spin.on_scroll(
        req.scroll_y,
        req.rect_top,
        req.rect_bottom,
        req.viewport_height,
    );

    let data = ScrollData {
        navbar_condensed: navbar_condensed(req.scroll_y),
        spin: current,
        transform: current.transform(),
    };

    Json(ApiResponse::success(data, elapsed_ms(start)))
}

// ============================================
// Stats / Telemetry
// ============================================

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<ApiResponse<StatsData>> {
    let start = Instant::now();

    let data = StatsData {
        stats: state.telemetry.get_stats(),
        inbox_size: state.inbox.len(),
        api_version: env!("CARGO_PKG_VERSION").to_string(),
    };

    Json(ApiResponse::success(data, elapsed_ms(start)))
}
