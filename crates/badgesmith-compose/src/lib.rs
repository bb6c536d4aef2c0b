//! # badgesmith-compose
//!
//! **Tier 3 (Composition)**
//!
//! Turns a [`BadgeSpec`] into a finished SVG document: layout geometry,
//! an inline `@font-face`, the segment paths, the optional icon and the
//! labels. The icon is resolved before anything is assembled, so a failed
//! lookup never yields a partial document.
//!
//! ## What does NOT belong here
//! * Reading the font file or writing the output (see the `badgesmith` CLI)
//! * Network access (delegated to a [`ResolveIcon`])

mod font;

pub use font::{FONT_FORMAT, FONT_MIME, FontFace};

use badgesmith_icons::{IconError, NoIcons, ResolveIcon};
use badgesmith_layout::{BadgeLayout, FONT_SIZE, ICON_OFFSET, TextAnchor, layout};
use badgesmith_markup::{Element, SVG_NS, number};
use badgesmith_types::{BadgeSpec, IconAsset};
use thiserror::Error;
use tracing::debug;

/// Errors from badge composition.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error(transparent)]
    Icon(#[from] IconError),
}

/// A composed badge, ready to serialize.
#[derive(Debug, Clone)]
pub struct BadgeDocument {
    pub layout: BadgeLayout,
    pub icon: Option<IconAsset>,
    root: Element,
}

impl BadgeDocument {
    pub fn width(&self) -> f64 {
        self.layout.width
    }

    pub fn height(&self) -> f64 {
        self.layout.height
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn to_svg(&self) -> String {
        self.root.to_markup()
    }
}

/// Builds badge documents, resolving icons through `R`.
#[derive(Debug, Clone)]
pub struct Composer<R> {
    resolver: R,
}

impl Composer<NoIcons> {
    /// A composer for badges without icons; any icon name fails with
    /// `IconError::NotFound`.
    pub fn offline() -> Self {
        Self { resolver: NoIcons }
    }
}

impl<R: ResolveIcon> Composer<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Compose and serialize in one step.
    pub fn compose(&self, spec: &BadgeSpec, font: &FontFace) -> Result<String, ComposeError> {
        self.build(spec, font).map(|doc| doc.to_svg())
    }

    pub fn build(&self, spec: &BadgeSpec, font: &FontFace) -> Result<BadgeDocument, ComposeError> {
        self.build_with_layout(spec, layout(spec), font)
    }

    /// Compose against geometry the caller already computed for `spec`.
    pub fn compose_with_layout(
        &self,
        spec: &BadgeSpec,
        geometry: BadgeLayout,
        font: &FontFace,
    ) -> Result<String, ComposeError> {
        self.build_with_layout(spec, geometry, font)
            .map(|doc| doc.to_svg())
    }

    pub fn build_with_layout(
        &self,
        spec: &BadgeSpec,
        geometry: BadgeLayout,
        font: &FontFace,
    ) -> Result<BadgeDocument, ComposeError> {
        let icon = match spec.icon() {
            Some(name) => Some(self.resolver.resolve(name, &spec.primary_text_color)?),
            None => None,
        };
        Ok(assemble(spec, font, geometry, icon))
    }
}

fn assemble(
    spec: &BadgeSpec,
    font: &FontFace,
    geometry: BadgeLayout,
    icon: Option<IconAsset>,
) -> BadgeDocument {
    let width = number(geometry.width);
    let height = number(geometry.height);
    let mut root = Element::new("svg")
        .with_attr("xmlns", SVG_NS)
        .with_attr("width", width.as_str())
        .with_attr("height", height.as_str())
        .with_attr("viewBox", format!("0 0 {width} {height}"));

    root.push(Element::new("defs").child(Element::new("style").text(font.css())));

    root.push(
        Element::new("path")
            .with_attr("d", geometry.primary.path.as_str())
            .with_attr("fill", spec.primary_color.as_str()),
    );
    if let Some(segment) = &geometry.secondary {
        root.push(
            Element::new("path")
                .with_attr("d", segment.path.as_str())
                .with_attr("fill", spec.secondary_color.as_str())
                .with_attr("transform", format!("translate({},0)", number(segment.x))),
        );
    }

    if let Some(icon) = &icon {
        let (dx, dy) = ICON_OFFSET;
        root.push(
            Element::new("g")
                .with_attr("transform", format!("translate({},{})", number(dx), number(dy)))
                .raw(icon.markup.as_str()),
        );
    }

    root.push(label(
        &spec.primary_text,
        &spec.primary_text_color,
        geometry.primary_label,
        font,
    ));
    if let Some(anchor) = geometry.secondary_label {
        root.push(label(
            &spec.secondary_text,
            &spec.secondary_text_color,
            anchor,
            font,
        ));
    }

    let segments = if geometry.is_single() { 1 } else { 2 };
    debug!(
        width = geometry.width,
        segments,
        icon = icon.is_some(),
        "composed badge"
    );
    BadgeDocument {
        layout: geometry,
        icon,
        root,
    }
}

fn label(text: &str, color: &str, anchor: TextAnchor, font: &FontFace) -> Element {
    Element::new("text")
        .with_attr("x", number(anchor.x))
        .with_attr("y", number(anchor.y))
        .with_attr("font-family", font.family())
        .with_attr("font-size", number(FONT_SIZE))
        .with_attr("fill", color)
        .with_attr("text-anchor", "middle")
        .with_attr("dominant-baseline", "central")
        .text(text)
}
