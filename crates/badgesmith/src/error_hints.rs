use std::fmt::Write as _;
use std::io;

use anyhow::Error;
use badgesmith_compose::ComposeError;
use badgesmith_icons::IconError;

use crate::error::Failure;

/// `Error: <chain>` followed by a `Hints:` list when any apply.
pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            let _ = writeln!(out, "- {hint}");
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<&'static str> {
    let mut out = Vec::new();

    if let Some(failure) = err.downcast_ref::<Failure>() {
        out.extend(failure_hints(failure, io_kind(err)));
    }
    if let Some(icon) = icon_error(err) {
        out.extend(icon_hints(icon));
    }

    out.dedup();
    out
}

fn failure_hints(failure: &Failure, kind: Option<io::ErrorKind>) -> &'static [&'static str] {
    match (failure, kind) {
        (Failure::ReadFont(_), _) => &[
            "Pass a WOFF2 font with `--font <path>` or set `[font] path` in `badgesmith.toml`.",
        ],
        (Failure::LoadConfig(_), Some(io::ErrorKind::NotFound)) => {
            &["Verify the `--config` path exists, or pass `--no-config`."]
        }
        (Failure::LoadConfig(_), _) => {
            &["Check `badgesmith.toml` syntax and key names, or pass `--no-config`."]
        }
        (Failure::TooManyModifiers { .. }, _) => &["Pass `--modifier` at most 3 times."],
    }
}

fn icon_hints(err: &IconError) -> &'static [&'static str] {
    match err {
        IconError::NotFound { .. } => &[
            "Search https://fontawesome.com/icons for the exact icon name (e.g. `python`, `github`).",
            "Point `--icon-dir` at a local `solid/regular/brands` tree to work offline.",
        ],
        IconError::Markup { .. } => &[
            "The icon source returned something other than an `<svg>` document; check `--icon-base-url` or `--icon-dir`.",
        ],
        IconError::Client(_) => &["Use `--icon-dir` to resolve icons without network access."],
    }
}

/// The icon failure in the chain, whether raised directly or through composition.
fn icon_error(err: &Error) -> Option<&IconError> {
    err.chain().find_map(|cause| {
        cause.downcast_ref::<IconError>().or_else(|| {
            cause
                .downcast_ref::<ComposeError>()
                .map(|ComposeError::Icon(inner)| inner)
        })
    })
}

fn io_kind(err: &Error) -> Option<io::ErrorKind> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<io::Error>())
        .map(io::Error::kind)
}
