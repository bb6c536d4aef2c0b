//! # badgesmith-icons
//!
//! **Tier 2 (Icon Resolution)**
//!
//! Looks an icon up by name in a Font Awesome style layout
//! (`{root}/{solid|regular|brands}/{name}.svg`), trying the style folders in
//! a fixed order and normalizing the first hit.
//!
//! ## What belongs here
//! * The fallback chain and its error type
//! * The `IconFetcher` seam plus the HTTP and directory implementations
//!
//! ## What does NOT belong here
//! * Markup rewriting (see `badgesmith-markup`)
//! * Caching; every render fetches again

mod fetch;
mod resolve;

pub use fetch::{DEFAULT_BASE_URL, DirFetcher, FetchOutcome, HttpFetcher, IconFetcher, icon_url};
pub use resolve::{IconResolver, NoIcons, ResolveIcon};

use badgesmith_markup::MarkupError;
use thiserror::Error;

/// Errors from icon resolution.
#[derive(Debug, Error)]
pub enum IconError {
    #[error(
        "icon '{name}' not found in the solid, regular or brands sets; check the icon name"
    )]
    NotFound { name: String },

    #[error("icon '{name}' is not usable SVG")]
    Markup {
        name: String,
        #[source]
        source: MarkupError,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl IconError {
    /// Name of the icon the error refers to, when there is one.
    pub fn icon_name(&self) -> Option<&str> {
        match self {
            IconError::NotFound { name } | IconError::Markup { name, .. } => Some(name),
            IconError::Client(_) => None,
        }
    }
}
