//! # badgesmith-markup
//!
//! **Tier 1 (Markup)**
//!
//! A deliberately small SVG element tree: parse with `roxmltree`, address
//! elements by tag name, mutate attributes, serialize back with escaping.
//! It is not a DOM; there are no parent links, no selectors and no styling.
//!
//! The icon normalizer lives here because it is the only consumer of
//! parsing; badge composition only ever builds trees and serializes them.

mod element;
mod normalize;

pub use element::{Attribute, Element, Node};
pub use normalize::{DEFAULT_ICON_COLOR, DEFAULT_ICON_SIZE, normalize_icon};

use thiserror::Error;

/// SVG namespace URI.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Errors raised while reading vector markup.
#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("malformed SVG markup: {0}")]
    Malformed(#[from] roxmltree::Error),

    #[error("no <svg> root element found")]
    MissingRoot,
}

/// Format a coordinate for markup output.
///
/// Values are rounded to three decimals and trailing zeros are dropped, so
/// `83.2` never prints as `83.20000000000002`.
pub fn number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    if rounded.fract() == 0.0 {
        return format!("{}", rounded as i64);
    }
    let s = format!("{rounded:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
