//! Portfolio Site Library
//!
//! Server-rendered single-page developer portfolio:
//! - Hero, about, achievements, projects, gallery, services and contact sections
//! - Pointer tilt and scroll parallax computed as pure style descriptors
//! - Category-filtered gallery with a modal viewer
//! - Contact form with a simulated, cancellable delivery delay

pub mod api;
pub mod core;
pub mod models;
pub mod render;
pub mod utils;

pub use crate::core::{
    ContactDesk, ContactForm, GalleryState, LoggingInbox, ParallaxEffect, TiltEffect,
    TiltTracker,
};
pub use models::{AppError, AppResult, ErrorCode, SiteConfig};
pub use render::{render_page, ContactView, PageView};
pub use utils::telemetry::{SiteStats, TelemetryCollector};
