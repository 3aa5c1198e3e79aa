//! Static Export
//!
//! Renders the page once and writes it to `dist/index.html` (or the path
//! given as the first argument) for hosting without the server. Forms and
//! query-driven gallery state need the server; everything else works as a
//! static file.
//!
//! Usage:
//!   cargo run --bin portfolio_export [-- <output path>]

use chrono::Datelike;
use eyre::WrapErr;
use portfolio_site::models::errors::AppError;
use portfolio_site::utils::content::GALLERY;
use portfolio_site::{render_page, ContactView, GalleryState, PageView, SiteConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

const DEFAULT_OUTPUT: &str = "dist/index.html";

fn main() -> eyre::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .compact()
        .init();

    let config = SiteConfig::from_env()?;
    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let html = render_page(&PageView {
        title: &config.title,
        gallery: GalleryState::new(GALLERY),
        contact: ContactView::default(),
        year: chrono::Utc::now().year(),
    })
    .into_string();

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(AppError::from)
            .wrap_err_with(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&output, &html)
        .map_err(AppError::from)
        .wrap_err_with(|| format!("writing {}", output.display()))?;

    info!("📦 Exported {} bytes to {}", html.len(), output.display());
    Ok(())
}
