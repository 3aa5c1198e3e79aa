//! Staggered reveal transitions and the hero typing animation

use crate::utils::constants::TYPED_TEXT_INTERVAL_MS;

/// Entry transition for a group of sibling items: item `i` starts
/// `base_delay + i * stagger` seconds after the group becomes visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSchedule {
    pub base_delay_s: f64,
    pub stagger_s: f64,
    pub duration_s: f64,
    /// Vertical offset the item rises from (px)
    pub offset_y_px: f64,
}

impl RevealSchedule {
    pub const SECTION_HEADER: RevealSchedule = RevealSchedule {
        base_delay_s: 0.0,
        stagger_s: 0.0,
        duration_s: 0.6,
        offset_y_px: 20.0,
    };

    pub const ACHIEVEMENT_GRID: RevealSchedule = RevealSchedule {
        base_delay_s: 0.0,
        stagger_s: 0.1,
        duration_s: 0.6,
        offset_y_px: 20.0,
    };

    pub const PROJECT_GRID: RevealSchedule = RevealSchedule {
        base_delay_s: 0.0,
        stagger_s: 0.15,
        duration_s: 0.6,
        offset_y_px: 30.0,
    };

    pub const GALLERY_GRID: RevealSchedule = RevealSchedule {
        base_delay_s: 0.0,
        stagger_s: 0.1,
        duration_s: 0.5,
        offset_y_px: 0.0,
    };

    pub const SERVICE_GRID: RevealSchedule = RevealSchedule {
        base_delay_s: 0.0,
        stagger_s: 0.1,
        duration_s: 0.5,
        offset_y_px: 20.0,
    };

    pub const TECH_BADGES: RevealSchedule = RevealSchedule {
        base_delay_s: 0.0,
        stagger_s: 0.1,
        duration_s: 0.3,
        offset_y_px: 10.0,
    };

    /// Project card badges start after the card itself
    pub const PROJECT_BADGES: RevealSchedule = RevealSchedule {
        base_delay_s: 0.2,
        stagger_s: 0.1,
        duration_s: 0.3,
        offset_y_px: 0.0,
    };

    pub const NAV_LINKS: RevealSchedule = RevealSchedule {
        base_delay_s: 0.0,
        stagger_s: 0.1,
        duration_s: 0.3,
        offset_y_px: -10.0,
    };

    pub fn delay_s(&self, index: usize) -> f64 {
        self.base_delay_s + index as f64 * self.stagger_s
    }

    /// Inline custom properties consumed by the `.reveal` CSS animation
    pub fn style(&self, index: usize) -> String {
        format!(
            "--reveal-delay:{:.2}s;--reveal-duration:{:.2}s;--reveal-offset:{}px",
            self.delay_s(index),
            self.duration_s,
            self.offset_y_px
        )
    }
}

/// Text revealed one character per interval
#[derive(Debug, Clone, Copy)]
pub struct TypedText<'a> {
    text: &'a str,
    interval_ms: u64,
}

impl<'a> TypedText<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::with_interval(text, TYPED_TEXT_INTERVAL_MS)
    }

    pub fn with_interval(text: &'a str, interval_ms: u64) -> Self {
        Self {
            text,
            interval_ms: interval_ms.max(1),
        }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Time until the last character appears
    pub fn total_ms(&self) -> u64 {
        self.char_count() as u64 * self.interval_ms
    }

    /// Custom properties for the CSS `steps()` animation
    pub fn style(&self) -> String {
        format!(
            "--typed-chars:{};--typed-duration:{}ms",
            self.char_count(),
            self.total_ms()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        let schedule = RevealSchedule::PROJECT_GRID;
        assert_eq!(schedule.delay_s(0), 0.0);
        assert!((schedule.delay_s(2) - 0.3).abs() < 1e-9);
        assert!(RevealSchedule::PROJECT_BADGES.delay_s(0) > 0.0);
    }

    #[test]
    fn test_style_properties() {
        let style = RevealSchedule::ACHIEVEMENT_GRID.style(3);
        assert_eq!(
            style,
            "--reveal-delay:0.30s;--reveal-duration:0.60s;--reveal-offset:20px"
        );
    }

    #[test]
    fn test_typed_text_style() {
        let typed = TypedText::new("Hello, I'm");
        assert_eq!(typed.total_ms(), 1000);
        assert_eq!(typed.style(), "--typed-chars:10;--typed-duration:1000ms");
    }

    #[test]
    fn test_typed_text_counts_chars_not_bytes() {
        let typed = TypedText::with_interval("héllo", 10);
        assert_eq!(typed.char_count(), 5);
        assert_eq!(typed.total_ms(), 50);
    }
}
