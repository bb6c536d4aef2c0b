//! The side-effecting half of a render: font in, document out.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use badgesmith_compose::{Composer, FontFace};
use badgesmith_icons::{DirFetcher, HttpFetcher, IconResolver, ResolveIcon};
use tracing::{debug, info};

use crate::config::{IconSource, Output, Settings};
use crate::error::Failure;

/// Compose the badge described by `settings` and return the SVG text.
///
/// Nothing is written here, so a failed icon lookup leaves any existing
/// output untouched.
pub fn render(settings: &Settings) -> Result<String> {
    let data = fs::read(&settings.font_path)
        .with_context(|| Failure::ReadFont(settings.font_path.clone()))?;
    debug!(path = %settings.font_path.display(), bytes = data.len(), "loaded font");
    let font = FontFace::woff2(data).with_family(settings.font_family.as_str());

    let svg = match settings.spec.icon() {
        None => Composer::offline().compose(&settings.spec, &font)?,
        Some(_) => Composer::new(resolver(&settings.icons)?).compose(&settings.spec, &font)?,
    };
    Ok(svg)
}

fn resolver(source: &IconSource) -> Result<Box<dyn ResolveIcon>> {
    Ok(match source {
        IconSource::Dir(root) => {
            debug!(root = %root.display(), "resolving icons from directory");
            Box::new(IconResolver::new(DirFetcher::new(root.clone())))
        }
        IconSource::Http { base_url, timeout } => {
            debug!(base_url = %base_url, "resolving icons over HTTP");
            Box::new(IconResolver::new(HttpFetcher::with_timeout(
                base_url.as_str(),
                *timeout,
            )?))
        }
    })
}

/// Write a rendered document to its destination.
pub fn write_output(output: &Output, svg: &str) -> Result<()> {
    match output {
        Output::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(svg.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write badge to stdout")?;
        }
        Output::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(path, svg)
                .with_context(|| format!("failed to write badge to {}", path.display()))?;
            info!(path = %path.display(), bytes = svg.len(), "wrote badge");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use badgesmith_types::BadgeSpec;
    use std::path::PathBuf;

    fn settings(font_path: PathBuf, output: Output) -> Settings {
        Settings {
            spec: BadgeSpec::new("Carlos"),
            font_path,
            font_family: "Roboto Mono".to_string(),
            icons: IconSource::Dir(PathBuf::from("unused")),
            output,
        }
    }

    #[test]
    fn missing_font_names_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let font = dir.path().join("missing.woff2");
        let err = render(&settings(font, Output::Stdout)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read font file"));
        assert!(format!("{err:#}").contains("missing.woff2"));
    }

    #[test]
    fn renders_without_touching_icon_source() {
        let dir = tempfile::tempdir().expect("tempdir");
        let font = dir.path().join("font.woff2");
        fs::write(&font, b"wOF2").expect("font");
        let svg = render(&settings(font, Output::Stdout)).expect("render");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Carlos"));
        assert!(svg.contains("base64,d09GMg=="));
    }

    #[test]
    fn write_output_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/out/badge.svg");
        write_output(&Output::File(path.clone()), "<svg/>").expect("write");
        assert_eq!(fs::read_to_string(path).expect("read"), "<svg/>");
    }
}
