//! # badgesmith-layout
//!
//! **Tier 2 (Geometry)**
//!
//! Computes segment widths, label anchors and segment outlines for a badge.
//! Text is measured with a monospace estimate (`font_size * 0.6` per
//! character); no glyph metrics are involved.
//!
//! ## What belongs here
//! * Layout constants and the width formula
//! * Path command strings for the rounded segments
//!
//! ## What does NOT belong here
//! * Colors, fonts, icons (see `badgesmith-compose`)
//! * Markup serialization

mod path;

pub use path::{PathData, Rounding, rounded_rect_path};

use badgesmith_types::BadgeSpec;

/// Badge height, shared by both segments.
pub const HEIGHT: f64 = 20.0;
pub const CORNER_RADIUS: f64 = 4.0;
pub const FONT_SIZE: f64 = 12.0;
/// Horizontal padding on each side of a label.
pub const PADDING: f64 = 10.0;
pub const CHAR_WIDTH_RATIO: f64 = 0.6;
/// Extra width segment 1 reserves when an icon is drawn.
pub const ICON_RESERVED_WIDTH: f64 = 20.0;
/// How far label 1 moves right to clear the icon.
pub const ICON_TEXT_SHIFT: f64 = 8.0;
/// Where the icon's top-left corner sits inside segment 1.
pub const ICON_OFFSET: (f64, f64) = (5.0, 4.0);

/// Estimated advance of one character.
pub fn char_width() -> f64 {
    FONT_SIZE * CHAR_WIDTH_RATIO
}

/// Estimated width of `text`, counted in characters rather than bytes.
pub fn text_width(text: &str) -> f64 {
    text.chars().count() as f64 * char_width()
}

/// Geometry of one colored segment, in the segment's own coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentGeometry {
    /// Horizontal offset of the segment within the badge.
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub rounding: Rounding,
    pub path: String,
}

impl SegmentGeometry {
    fn new(x: f64, width: f64, rounding: Rounding) -> Self {
        Self {
            x,
            width,
            height: HEIGHT,
            radius: CORNER_RADIUS,
            rounding,
            path: rounded_rect_path(width, HEIGHT, CORNER_RADIUS, rounding),
        }
    }
}

/// Center point of a label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextAnchor {
    pub x: f64,
    pub y: f64,
}

/// Full badge geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeLayout {
    pub width: f64,
    pub height: f64,
    pub icon_width: f64,
    pub primary: SegmentGeometry,
    pub secondary: Option<SegmentGeometry>,
    pub primary_label: TextAnchor,
    pub secondary_label: Option<TextAnchor>,
}

impl BadgeLayout {
    pub fn is_single(&self) -> bool {
        self.secondary.is_none()
    }

    /// Width of segment 2, or zero when there is none.
    pub fn secondary_width(&self) -> f64 {
        self.secondary.as_ref().map_or(0.0, |s| s.width)
    }
}

/// Lay out a badge.
///
/// Segment 1 is fully rounded when it stands alone and has a flat right
/// edge when segment 2 follows; segment 2 has a flat left edge and starts at
/// `x = segment1.width`.
pub fn layout(spec: &BadgeSpec) -> BadgeLayout {
    let icon_width = if spec.icon().is_some() {
        ICON_RESERVED_WIDTH
    } else {
        0.0
    };
    let primary_width = text_width(&spec.primary_text) + 2.0 * PADDING + icon_width;

    let secondary = spec.has_secondary().then(|| {
        let width = text_width(&spec.secondary_text) + 2.0 * PADDING;
        SegmentGeometry::new(primary_width, width, Rounding::RIGHT)
    });
    let primary_rounding = if secondary.is_some() {
        Rounding::LEFT
    } else {
        Rounding::ALL
    };
    let primary = SegmentGeometry::new(0.0, primary_width, primary_rounding);

    let mid_y = HEIGHT / 2.0;
    let label_x = if icon_width > 0.0 {
        primary_width / 2.0 + ICON_TEXT_SHIFT
    } else {
        primary_width / 2.0
    };
    let secondary_label = secondary.as_ref().map(|s| TextAnchor {
        x: primary_width + s.width / 2.0,
        y: mid_y,
    });
    let width = primary_width + secondary.as_ref().map_or(0.0, |s| s.width);

    BadgeLayout {
        width,
        height: HEIGHT,
        icon_width,
        primary,
        secondary,
        primary_label: TextAnchor {
            x: label_x,
            y: mid_y,
        },
        secondary_label,
    }
}
