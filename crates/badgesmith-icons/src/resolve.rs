use badgesmith_markup::normalize_icon;
use badgesmith_types::{ICON_SIZE, IconAsset, IconStyle};
use tracing::{debug, info};

use crate::{FetchOutcome, IconError, IconFetcher};

/// Anything that can turn an icon name into a recolored icon.
pub trait ResolveIcon {
    fn resolve(&self, name: &str, color: &str) -> Result<IconAsset, IconError>;
}

/// Walks the style fallback chain over an [`IconFetcher`].
#[derive(Debug, Clone)]
pub struct IconResolver<F> {
    fetcher: F,
}

impl<F: IconFetcher> IconResolver<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Resolve and return only the normalized markup.
    pub fn resolve_markup(&self, name: &str, color: &str) -> Result<String, IconError> {
        self.resolve(name, color).map(|asset| asset.markup)
    }
}

impl<F: IconFetcher> ResolveIcon for IconResolver<F> {
    /// Try `solid`, then `regular`, then `brands`; the first hit is
    /// normalized to [`ICON_SIZE`] and `color`.
    fn resolve(&self, name: &str, color: &str) -> Result<IconAsset, IconError> {
        for style in IconStyle::FALLBACK_ORDER {
            let body = match self.fetcher.fetch(style, name) {
                FetchOutcome::Found(body) => body,
                FetchOutcome::Missing => {
                    debug!(icon = name, %style, "icon missing, trying next style");
                    continue;
                }
            };
            let markup =
                normalize_icon(&body, ICON_SIZE, color).map_err(|source| IconError::Markup {
                    name: name.to_string(),
                    source,
                })?;
            info!(icon = name, %style, "resolved icon");
            return Ok(IconAsset {
                name: name.to_string(),
                style,
                markup,
                color: color.to_string(),
                size: ICON_SIZE,
            });
        }
        Err(IconError::NotFound {
            name: name.to_string(),
        })
    }
}

/// Resolver for renders that must not touch any icon source.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIcons;

impl ResolveIcon for NoIcons {
    fn resolve(&self, name: &str, _color: &str) -> Result<IconAsset, IconError> {
        Err(IconError::NotFound {
            name: name.to_string(),
        })
    }
}

impl<T: ResolveIcon + ?Sized> ResolveIcon for &T {
    fn resolve(&self, name: &str, color: &str) -> Result<IconAsset, IconError> {
        (**self).resolve(name, color)
    }
}

impl<T: ResolveIcon + ?Sized> ResolveIcon for Box<T> {
    fn resolve(&self, name: &str, color: &str) -> Result<IconAsset, IconError> {
        (**self).resolve(name, color)
    }
}
