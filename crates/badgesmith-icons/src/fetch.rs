use std::path::{Path, PathBuf};
use std::time::Duration;

use badgesmith_types::IconStyle;
use reqwest::StatusCode;
use tracing::debug;

use crate::IconError;

/// Font Awesome SVG tree on GitHub.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/FortAwesome/Font-Awesome/master/svgs";

/// Result of one lookup at one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Found(String),
    Missing,
}

/// A source of raw icon markup, addressed by style folder and name.
///
/// Implementations never fail: anything short of a usable body is
/// `Missing`, so the resolver can move on to the next style.
pub trait IconFetcher {
    fn fetch(&self, style: IconStyle, name: &str) -> FetchOutcome;
}

impl<T: IconFetcher + ?Sized> IconFetcher for &T {
    fn fetch(&self, style: IconStyle, name: &str) -> FetchOutcome {
        (**self).fetch(style, name)
    }
}

impl<T: IconFetcher + ?Sized> IconFetcher for Box<T> {
    fn fetch(&self, style: IconStyle, name: &str) -> FetchOutcome {
        (**self).fetch(style, name)
    }
}

/// `{base}/{style}/{name}.svg`
pub fn icon_url(base: &str, style: IconStyle, name: &str) -> String {
    format!("{}/{}/{}.svg", base.trim_end_matches('/'), style.folder(), name)
}

/// Fetches icons over HTTP. Only a `200 OK` counts as found.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Result<Self, IconError> {
        Self::with_timeout(base_url, None)
    }

    /// Like [`HttpFetcher::new`], with an overall per-request timeout.
    /// `None` keeps the client default.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, IconError> {
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(concat!("badgesmith/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl IconFetcher for HttpFetcher {
    fn fetch(&self, style: IconStyle, name: &str) -> FetchOutcome {
        let url = icon_url(&self.base_url, style, name);
        debug!(%url, "fetching icon");

        let resp = match self.client.get(&url).send() {
            Ok(resp) => resp,
            Err(err) => {
                debug!(%url, error = %err, "icon request failed");
                return FetchOutcome::Missing;
            }
        };
        if resp.status() != StatusCode::OK {
            debug!(%url, status = %resp.status(), "icon not available");
            return FetchOutcome::Missing;
        }
        match resp.text() {
            Ok(body) => FetchOutcome::Found(body),
            Err(err) => {
                debug!(%url, error = %err, "failed to read icon body");
                FetchOutcome::Missing
            }
        }
    }
}

/// Reads icons from a local copy of the icon tree.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, style: IconStyle, name: &str) -> Option<PathBuf> {
        // Names are single path components.
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return None;
        }
        Some(self.root.join(style.folder()).join(format!("{name}.svg")))
    }
}

impl IconFetcher for DirFetcher {
    fn fetch(&self, style: IconStyle, name: &str) -> FetchOutcome {
        let Some(path) = self.path_for(style, name) else {
            debug!(icon = name, "rejected icon name");
            return FetchOutcome::Missing;
        };
        match std::fs::read_to_string(&path) {
            Ok(body) => FetchOutcome::Found(body),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "icon file not readable");
                FetchOutcome::Missing
            }
        }
    }
}
