//! # badgesmith-types
//!
//! **Tier 0 (Core Types)**
//!
//! Value objects shared by every badgesmith crate. Everything here is built
//! fresh per render call; nothing is cached or mutated after construction.
//!
//! ## What belongs here
//! * `BadgeSpec` (the render input) and `IconAsset` (a resolved icon)
//! * Fixed constants shared between layout and composition
//!
//! ## What does NOT belong here
//! * File or network I/O
//! * CLI argument parsing
//! * Geometry (see `badgesmith-layout`)

use serde::{Deserialize, Serialize};

/// Font family declared by the embedded `@font-face` rule.
pub const DEFAULT_FONT_FAMILY: &str = "Roboto Mono";

/// Display size, in user units, that icons are normalized to.
pub const ICON_SIZE: u32 = 12;

/// Maximum number of free-form modifiers a badge carries.
pub const MAX_MODIFIERS: usize = 3;

/// Default colors of the stock badge.
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";
pub const DEFAULT_PRIMARY_COLOR: &str = "#8855ff";
pub const DEFAULT_SECONDARY_COLOR: &str = "#aa77aa";

/// Input for a single badge render.
///
/// When `secondary_text` is empty the badge is drawn as a single segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeSpec {
    pub primary_text: String,
    pub primary_text_color: String,
    pub primary_color: String,

    #[serde(default)]
    pub secondary_text: String,
    pub secondary_text_color: String,
    pub secondary_color: String,

    /// Free-form modifiers. Carried through but not used by layout.
    #[serde(default)]
    pub modifiers: Vec<String>,

    /// Icon name within the icon set (e.g. `python`, `github`).
    #[serde(default)]
    pub icon: Option<String>,
}

impl BadgeSpec {
    /// A badge with the stock colors and no second segment.
    pub fn new(primary_text: impl Into<String>) -> Self {
        Self {
            primary_text: primary_text.into(),
            primary_text_color: DEFAULT_TEXT_COLOR.to_string(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_text: String::new(),
            secondary_text_color: DEFAULT_TEXT_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            modifiers: Vec::new(),
            icon: None,
        }
    }

    pub fn with_secondary(mut self, text: impl Into<String>) -> Self {
        self.secondary_text = text.into();
        self
    }

    pub fn with_icon(mut self, name: impl Into<String>) -> Self {
        self.icon = Some(name.into());
        self
    }

    pub fn with_primary_colors(mut self, text: impl Into<String>, fill: impl Into<String>) -> Self {
        self.primary_text_color = text.into();
        self.primary_color = fill.into();
        self
    }

    pub fn with_secondary_colors(
        mut self,
        text: impl Into<String>,
        fill: impl Into<String>,
    ) -> Self {
        self.secondary_text_color = text.into();
        self.secondary_color = fill.into();
        self
    }

    /// Attach modifiers, keeping at most [`MAX_MODIFIERS`].
    pub fn with_modifiers<I, S>(mut self, modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modifiers = modifiers
            .into_iter()
            .take(MAX_MODIFIERS)
            .map(Into::into)
            .collect();
        self
    }

    /// Whether a second segment is drawn.
    pub fn has_secondary(&self) -> bool {
        !self.secondary_text.is_empty()
    }

    /// The icon name, treating blank names as absent.
    pub fn icon(&self) -> Option<&str> {
        self.icon
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Style folder an icon was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    Solid,
    Regular,
    Brands,
}

impl IconStyle {
    /// Lookup order used when resolving an icon by name.
    pub const FALLBACK_ORDER: [IconStyle; 3] =
        [IconStyle::Solid, IconStyle::Regular, IconStyle::Brands];

    /// Folder name under the icon set root.
    pub fn folder(self) -> &'static str {
        match self {
            IconStyle::Solid => "solid",
            IconStyle::Regular => "regular",
            IconStyle::Brands => "brands",
        }
    }
}

impl std::fmt::Display for IconStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.folder())
    }
}

/// A resolved icon, already resized and recolored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconAsset {
    pub name: String,
    pub style: IconStyle,
    /// Serialized `<svg>` element.
    pub markup: String,
    pub color: String,
    pub size: u32,
}
