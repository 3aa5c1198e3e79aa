//! Constants Module - Single Source of Truth
//!
//! Every tunable number the page, the effects and the server rely on is
//! defined here. Other modules import these instead of repeating literals.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "Portfolio Site";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Document title assigned once when the page is composed
pub const SITE_TITLE: &str = "Praveen M Sadalgi - Full Stack Developer Portfolio";

/// Navbar brand (`Praveen` + accent `.dev`)
pub const BRAND_NAME: &str = "Praveen";
pub const BRAND_ACCENT: &str = ".dev";

/// URL prefix under which static files are served
pub const ASSET_PREFIX: &str = "/assets";

// ============================================
// SERVER DEFAULTS
// ============================================

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ASSETS_DIR: &str = "./assets";

/// Contact submissions per client per window
pub const DEFAULT_RATE_LIMIT_PER_MINUTE: u32 = 10;
pub const RATE_LIMIT_WINDOW_SECS: u64 = 60;

/// Maximum number of delivered messages kept in memory
pub const INBOX_CAPACITY: usize = 100;

/// Upper bound on parallax frames computed per API request
pub const MAX_PARALLAX_ITEMS: usize = 64;

/// Requests handled at once; the rest wait
pub const MAX_CONCURRENT_REQUESTS: usize = 256;

// ============================================
// SECTION ANCHORS
// ============================================

pub const ANCHOR_HOME: &str = "home";
pub const ANCHOR_ABOUT: &str = "about";
pub const ANCHOR_ACHIEVEMENTS: &str = "achievements";
pub const ANCHOR_PROJECTS: &str = "projects";
pub const ANCHOR_GALLERY: &str = "gallery";
pub const ANCHOR_SERVICES: &str = "services";
pub const ANCHOR_CONTACT: &str = "contact";

/// Page order, top to bottom
pub const SECTION_ORDER: [&str; 7] = [
    ANCHOR_HOME,
    ANCHOR_ABOUT,
    ANCHOR_ACHIEVEMENTS,
    ANCHOR_PROJECTS,
    ANCHOR_GALLERY,
    ANCHOR_SERVICES,
    ANCHOR_CONTACT,
];

// ============================================
// GALLERY
// ============================================

/// Category value meaning "no filter applied"
pub const WILDCARD_CATEGORY: &str = "all";

// ============================================
// CONTACT FORM
// ============================================

/// Simulated delivery delay (ms)
pub const SUBMIT_DELAY_MS: u64 = 1500;

pub const NOTICE_SENT_TITLE: &str = "Message Sent!";
pub const NOTICE_SENT_BODY: &str = "Thanks for reaching out. I'll get back to you soon.";

// ============================================
// EFFECTS
// ============================================

/// Tilt: normalized mapping used by achievement cards
pub const ACHIEVEMENT_TILT_GAIN_DEG: f64 = 10.0;
pub const ACHIEVEMENT_TILT_DEPTH_PX: f64 = 10.0;
pub const ACHIEVEMENT_PERSPECTIVE_PX: f64 = 800.0;

/// Tilt: pixel-range mapping used by project cards and gallery tiles
pub const CARD_TILT_RANGE_PX: f64 = 100.0;
pub const CARD_TILT_MAX_DEG: f64 = 30.0;
pub const PROJECT_PERSPECTIVE_PX: f64 = 1000.0;
pub const GALLERY_PERSPECTIVE_PX: f64 = 1200.0;

/// Parallax: progress = 1 - top / viewport * ENTRY_FACTOR
pub const PARALLAX_ENTRY_FACTOR: f64 = 0.8;
/// Parallax: per-item lag
pub const PARALLAX_STAGGER: f64 = 0.1;
/// Parallax: starting vertical offset (px)
pub const PARALLAX_BASE_OFFSET_PX: f64 = 50.0;
/// Parallax: offset removed per unit of progress (px)
pub const PARALLAX_TRAVEL_PX: f64 = 100.0;
/// Parallax: opacity reaches 1 at half progress
pub const PARALLAX_OPACITY_GAIN: f64 = 2.0;

/// About cube: degrees of spin per scrolled pixel
pub const SCROLL_SPIN_DEG_PER_PX: f64 = 0.1;

/// Navbar switches to its condensed style past this scroll offset (px)
pub const NAVBAR_CONDENSE_THRESHOLD_PX: f64 = 50.0;

/// Hero typing animation: one character per interval
pub const TYPED_TEXT_INTERVAL_MS: u64 = 100;
