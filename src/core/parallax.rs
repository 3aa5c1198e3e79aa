//! Scroll-linked effects
//!
//! - [`ParallaxEffect`]: entry progress of a section and the staggered
//!   opacity / vertical offset of its items.
//! - [`ScrollSpin`]: rotation proportional to the page scroll offset, only
//!   updated while the element is on screen.
//! - [`navbar_condensed`]: navbar style switch.
//!
//! All functions are pure; nothing reads ambient scroll state.

use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    NAVBAR_CONDENSE_THRESHOLD_PX, PARALLAX_BASE_OFFSET_PX, PARALLAX_ENTRY_FACTOR,
    PARALLAX_OPACITY_GAIN, PARALLAX_STAGGER, PARALLAX_TRAVEL_PX, SCROLL_SPIN_DEG_PER_PX,
};

/// Position of a section relative to the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollSample {
    /// Section top relative to the viewport top (px, negative once scrolled past)
    pub element_top: f64,
    pub viewport_height: f64,
}

impl ScrollSample {
    /// Frame used on mount before any scroll event arrives: section below the fold
    pub fn below_fold(viewport_height: f64) -> Self {
        Self {
            element_top: viewport_height,
            viewport_height,
        }
    }
}

/// Opacity and vertical offset for one item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParallaxFrame {
    pub opacity: f64,
    pub translate_y_px: f64,
}

impl ParallaxFrame {
    pub const SETTLED: ParallaxFrame = ParallaxFrame {
        opacity: 1.0,
        translate_y_px: 0.0,
    };

    /// Inline CSS declarations
    pub fn style(&self) -> String {
        format!(
            "opacity:{:.3};transform:translateY({:.1}px)",
            self.opacity, self.translate_y_px
        )
    }

    /// Same frame as custom properties, applied by the stylesheet once
    /// scripting is available
    pub fn css_vars(&self) -> String {
        format!(
            "--px-opacity:{:.3};--px-shift:{:.1}px",
            self.opacity, self.translate_y_px
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParallaxEffect {
    pub entry_factor: f64,
    pub stagger: f64,
    pub base_offset_px: f64,
    pub travel_px: f64,
    pub opacity_gain: f64,
}

impl Default for ParallaxEffect {
    fn default() -> Self {
        Self {
            entry_factor: PARALLAX_ENTRY_FACTOR,
            stagger: PARALLAX_STAGGER,
            base_offset_px: PARALLAX_BASE_OFFSET_PX,
            travel_px: PARALLAX_TRAVEL_PX,
            opacity_gain: PARALLAX_OPACITY_GAIN,
        }
    }
}

impl ParallaxEffect {
    /// How far the section has entered the viewport, in [0, 1]
    pub fn progress(&self, sample: ScrollSample) -> f64 {
        if !(sample.viewport_height.is_finite() && sample.viewport_height > 0.0) {
            return 0.0;
        }
        let raw = 1.0 - sample.element_top / sample.viewport_height * self.entry_factor;
        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, 1.0)
    }

    /// Frame for item `index` at `progress`
    pub fn frame(&self, progress: f64, index: usize) -> ParallaxFrame {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let delay = index as f64 * self.stagger;

        let opacity = (progress * self.opacity_gain - delay).clamp(0.0, 1.0);
        let translate_y_px =
            (self.base_offset_px - progress * self.travel_px - delay * self.travel_px).max(0.0);

        ParallaxFrame {
            opacity,
            translate_y_px,
        }
    }

    /// Frames for `count` sibling items
    pub fn frames(&self, sample: ScrollSample, count: usize) -> Vec<ParallaxFrame> {
        let progress = self.progress(sample);
        (0..count).map(|i| self.frame(progress, i)).collect()
    }
}

/// Scroll-proportional rotation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spin {
    pub rotate_y_deg: f64,
    pub rotate_x_deg: f64,
}

impl Spin {
    pub fn transform(&self) -> String {
        format!(
            "rotateY({:.1}deg) rotateX({:.1}deg)",
            self.rotate_y_deg, self.rotate_x_deg
        )
    }
}

/// Spins an element with the page scroll while it is visible; keeps the
/// last rotation when it is off screen.
#[derive(Debug, Clone)]
pub struct ScrollSpin {
    deg_per_px: f64,
    last: Spin,
}

impl Default for ScrollSpin {
    fn default() -> Self {
        Self::new(SCROLL_SPIN_DEG_PER_PX)
    }
}

impl ScrollSpin {
    pub fn new(deg_per_px: f64) -> Self {
        Self {
            deg_per_px,
            last: Spin {
                rotate_y_deg: 0.0,
                rotate_x_deg: 0.0,
            },
        }
    }

    /// Continue from a rotation computed earlier
    pub fn resume(last: Spin) -> Self {
        Self {
            last,
            ..Self::default()
        }
    }

    pub fn on_scroll(
        &mut self,
        scroll_y: f64,
        rect_top: f64,
        rect_bottom: f64,
        viewport_height: f64,
    ) -> Spin {
        let visible = rect_top < viewport_height && rect_bottom > 0.0;
        if visible && scroll_y.is_finite() {
            let rotation = scroll_y * self.deg_per_px;
            self.last = Spin {
                rotate_y_deg: rotation,
                rotate_x_deg: rotation / 2.0,
            };
        }
        self.last
    }

    pub fn current(&self) -> Spin {
        self.last
    }
}

/// Navbar uses its condensed style once the page has scrolled past the threshold
pub fn navbar_condensed(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_CONDENSE_THRESHOLD_PX
}
