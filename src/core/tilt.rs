//! Pointer-Tilt Effect
//!
//! Maps a pointer sample inside an element's bounding box to a 2-axis
//! rotation. The mapping is linear and stateless: the result depends only on
//! the latest sample. [`TiltTracker`] holds the last value for one element.
//!
//! Two mappings are in use on the page:
//! - `Normalized`: offset from center as a fraction of the element size
//!   (-0.5..0.5) times a gain. Achievement cards, ±5° at the edges.
//! - `PixelRange`: offset from center in pixels, clamped to ±range and scaled
//!   to ±max. Project cards and gallery tiles, ±30° at 100px.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::constants::{
    ACHIEVEMENT_PERSPECTIVE_PX, ACHIEVEMENT_TILT_DEPTH_PX, ACHIEVEMENT_TILT_GAIN_DEG,
    CARD_TILT_MAX_DEG, CARD_TILT_RANGE_PX, GALLERY_PERSPECTIVE_PX, PROJECT_PERSPECTIVE_PX,
};

/// Pointer position in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

/// Bounding rectangle of the tilted element in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> PointerSample {
        PointerSample {
            x: self.left + self.width / 2.0,
            y: self.top + self.height / 2.0,
        }
    }

    /// Zero, negative or non-finite size
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || !(self.left.is_finite() && self.top.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Inclusive bounds check
    pub fn contains(&self, sample: PointerSample) -> bool {
        sample.x >= self.left
            && sample.x <= self.left + self.width
            && sample.y >= self.top
            && sample.y <= self.top + self.height
    }
}

/// How pointer offset becomes rotation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TiltMapping {
    Normalized { gain_deg: f64 },
    PixelRange { range_px: f64, max_deg: f64 },
}

/// Rotation applied to an element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub translate_z_px: f64,
}

impl Tilt {
    pub const REST: Tilt = Tilt {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        translate_z_px: 0.0,
    };

    pub fn is_rest(&self) -> bool {
        self.rotate_x_deg == 0.0 && self.rotate_y_deg == 0.0 && self.translate_z_px == 0.0
    }
}

impl Default for Tilt {
    fn default() -> Self {
        Self::REST
    }
}

/// Tilt parameters for one kind of element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TiltEffect {
    pub mapping: TiltMapping,
    pub perspective_px: f64,
    /// Depth offset while the pointer is over the element
    pub depth_px: f64,
}

impl TiltEffect {
    pub const ACHIEVEMENT_CARD: TiltEffect = TiltEffect {
        mapping: TiltMapping::Normalized {
            gain_deg: ACHIEVEMENT_TILT_GAIN_DEG,
        },
        perspective_px: ACHIEVEMENT_PERSPECTIVE_PX,
        depth_px: ACHIEVEMENT_TILT_DEPTH_PX,
    };

    pub const PROJECT_CARD: TiltEffect = TiltEffect {
        mapping: TiltMapping::PixelRange {
            range_px: CARD_TILT_RANGE_PX,
            max_deg: CARD_TILT_MAX_DEG,
        },
        perspective_px: PROJECT_PERSPECTIVE_PX,
        depth_px: 0.0,
    };

    pub const GALLERY_ITEM: TiltEffect = TiltEffect {
        mapping: TiltMapping::PixelRange {
            range_px: CARD_TILT_RANGE_PX,
            max_deg: CARD_TILT_MAX_DEG,
        },
        perspective_px: GALLERY_PERSPECTIVE_PX,
        depth_px: 0.0,
    };

    /// Look up a preset by its API name
    pub fn preset(name: &str) -> Option<TiltEffect> {
        match name {
            "achievement_card" => Some(Self::ACHIEVEMENT_CARD),
            "project_card" => Some(Self::PROJECT_CARD),
            "gallery_item" => Some(Self::GALLERY_ITEM),
            _ => None,
        }
    }

    /// Rotation for a pointer sample over `rect`.
    ///
    /// Samples outside the rect and degenerate rects yield [`Tilt::REST`].
    pub fn compute(&self, sample: PointerSample, rect: ElementRect) -> Tilt {
        if rect.is_degenerate()
            || !(sample.x.is_finite() && sample.y.is_finite())
            || !rect.contains(sample)
        {
            return Tilt::REST;
        }

        let (rotate_x_deg, rotate_y_deg) = match self.mapping {
            TiltMapping::Normalized { gain_deg } => {
                let x = (sample.x - rect.left) / rect.width - 0.5;
                let y = (sample.y - rect.top) / rect.height - 0.5;
                (-y * gain_deg, x * gain_deg)
            }
            TiltMapping::PixelRange { range_px, max_deg } => {
                if range_px <= 0.0 {
                    return Tilt::REST;
                }
                let center = rect.center();
                let dx = (sample.x - center.x).clamp(-range_px, range_px);
                let dy = (sample.y - center.y).clamp(-range_px, range_px);
                (-dy / range_px * max_deg, dx / range_px * max_deg)
            }
        };

        Tilt {
            rotate_x_deg: unsigned_zero(rotate_x_deg),
            rotate_y_deg: unsigned_zero(rotate_y_deg),
            translate_z_px: self.depth_px,
        }
    }

    pub fn style(&self, tilt: Tilt) -> TiltStyle {
        TiltStyle {
            perspective_px: self.perspective_px,
            tilt,
        }
    }
}

// -0.0 would print as "-0.00deg"
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Style descriptor rendered as a CSS `transform` value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltStyle {
    pub perspective_px: f64,
    pub tilt: Tilt,
}

impl fmt::Display for TiltStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) translateZ({}px)",
            self.perspective_px,
            self.tilt.rotate_x_deg,
            self.tilt.rotate_y_deg,
            self.tilt.translate_z_px
        )
    }
}

/// Last computed tilt for one element. Last write wins.
#[derive(Debug, Clone)]
pub struct TiltTracker {
    effect: TiltEffect,
    current: Tilt,
}

impl TiltTracker {
    pub fn new(effect: TiltEffect) -> Self {
        Self {
            effect,
            current: Tilt::REST,
        }
    }

    pub fn on_move(&mut self, sample: PointerSample, rect: ElementRect) -> Tilt {
        self.current = self.effect.compute(sample, rect);
        self.current
    }

    pub fn on_leave(&mut self) -> Tilt {
        self.current = Tilt::REST;
        self.current
    }

    pub fn current(&self) -> Tilt {
        self.current
    }

    pub fn style(&self) -> TiltStyle {
        self.effect.style(self.current)
    }
}
