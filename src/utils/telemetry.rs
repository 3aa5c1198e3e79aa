//! Site Telemetry
//!
//! In-process counters for page views, gallery queries and contact
//! submissions. Nothing is persisted; the final snapshot is logged on
//! shutdown.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Visitor interaction kinds that are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteEvent {
    PageView,
    GalleryQuery,
    MessageDelivered,
    SubmissionRejected,
}

impl SiteEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteEvent::PageView => "page_view",
            SiteEvent::GalleryQuery => "gallery_query",
            SiteEvent::MessageDelivered => "message_delivered",
            SiteEvent::SubmissionRejected => "submission_rejected",
        }
    }
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct SiteStats {
    pub page_views: u64,
    pub gallery_queries: u64,
    pub messages_delivered: u64,
    pub submissions_rejected: u64,
    pub uptime_seconds: u64,
}

impl SiteStats {
    /// One-line summary for the shutdown log
    pub fn summary(&self) -> String {
        format!(
            "views={} gallery={} delivered={} rejected={} uptime={}s",
            self.page_views,
            self.gallery_queries,
            self.messages_delivered,
            self.submissions_rejected,
            self.uptime_seconds
        )
    }
}

/// Lock-free counter set shared by all handlers
pub struct TelemetryCollector {
    page_views: AtomicU64,
    gallery_queries: AtomicU64,
    messages_delivered: AtomicU64,
    submissions_rejected: AtomicU64,
    started_at: Instant,
}

impl Default for TelemetryCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryCollector {
    pub fn new() -> Self {
        Self {
            page_views: AtomicU64::new(0),
            gallery_queries: AtomicU64::new(0),
            messages_delivered: AtomicU64::new(0),
            submissions_rejected: AtomicU64::new(0),
            started_at: Instant::now(),
        }
    }

    /// Count one event
    pub fn record(&self, event: SiteEvent) {
        let counter = match event {
            SiteEvent::PageView => &self.page_views,
            SiteEvent::GalleryQuery => &self.gallery_queries,
            SiteEvent::MessageDelivered => &self.messages_delivered,
            SiteEvent::SubmissionRejected => &self.submissions_rejected,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(event = event.as_str(), "📈 Telemetry event recorded");
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Get current statistics
    pub fn get_stats(&self) -> SiteStats {
        SiteStats {
            page_views: self.page_views.load(Ordering::Relaxed),
            gallery_queries: self.gallery_queries.load(Ordering::Relaxed),
            messages_delivered: self.messages_delivered.load(Ordering::Relaxed),
            submissions_rejected: self.submissions_rejected.load(Ordering::Relaxed),
            uptime_seconds: self.uptime_seconds(),
        }
    }
}
