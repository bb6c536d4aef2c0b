//! Merge CLI flags, `badgesmith.toml` and built-in defaults.
//!
//! Precedence is always CLI flag, then config file, then default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use badgesmith_config::{
    CONFIG_FILE_NAME, Cli, DEFAULT_FONT_PATH, DEFAULT_OUTPUT_PATH, STDOUT_MARKER, TomlConfig,
};
use badgesmith_icons::DEFAULT_BASE_URL;
use badgesmith_types::{
    BadgeSpec, DEFAULT_FONT_FAMILY, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR,
    DEFAULT_TEXT_COLOR, MAX_MODIFIERS,
};
use tracing::debug;

use crate::error::Failure;

/// Where the finished document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    fn from_path(path: PathBuf) -> Self {
        if path.as_os_str() == STDOUT_MARKER {
            Output::Stdout
        } else {
            Output::File(path)
        }
    }
}

/// Where icons are looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    Http {
        base_url: String,
        timeout: Option<Duration>,
    },
    Dir(PathBuf),
}

/// Everything one render needs, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub spec: BadgeSpec,
    pub font_path: PathBuf,
    pub font_family: String,
    pub icons: IconSource,
    pub output: Output,
}

/// Find and parse the configuration file, if any.
///
/// An explicit `--config` must exist. Otherwise `./badgesmith.toml` is tried,
/// then `<config dir>/badgesmith/badgesmith.toml`.
pub fn load_config(cli: &Cli) -> Result<Option<TomlConfig>> {
    if cli.no_config {
        return Ok(None);
    }
    if let Some(path) = &cli.config {
        return read_config(path).map(Some);
    }
    let candidates = [
        Some(PathBuf::from(CONFIG_FILE_NAME)),
        dirs::config_dir().map(|dir| dir.join("badgesmith").join(CONFIG_FILE_NAME)),
    ];
    for path in candidates.into_iter().flatten() {
        if path.is_file() {
            return read_config(&path).map(Some);
        }
    }
    Ok(None)
}

fn read_config(path: &Path) -> Result<TomlConfig> {
    debug!(path = %path.display(), "loading config");
    TomlConfig::from_file(path).with_context(|| Failure::LoadConfig(path.to_path_buf()))
}

/// Resolve the final render settings.
pub fn resolve(cli: &Cli, file: Option<&TomlConfig>) -> Result<Settings> {
    let default_file = TomlConfig::default();
    let file = file.unwrap_or(&default_file);

    let modifiers = if cli.modifiers.is_empty() {
        file.badge.modifiers.clone().unwrap_or_default()
    } else {
        cli.modifiers.clone()
    };
    if modifiers.len() > MAX_MODIFIERS {
        bail!(Failure::TooManyModifiers {
            max: MAX_MODIFIERS,
            got: modifiers.len(),
        });
    }

    let pick = |flag: &Option<String>, from_file: &Option<String>, default: &str| {
        flag.clone()
            .or_else(|| from_file.clone())
            .unwrap_or_else(|| default.to_string())
    };

    let spec = BadgeSpec {
        primary_text: cli.text1.clone(),
        primary_text_color: pick(&cli.text1_color, &file.badge.text1_color, DEFAULT_TEXT_COLOR),
        primary_color: pick(&cli.color1, &file.badge.color1, DEFAULT_PRIMARY_COLOR),
        secondary_text: cli.text2.clone().unwrap_or_default(),
        secondary_text_color: pick(&cli.text2_color, &file.badge.text2_color, DEFAULT_TEXT_COLOR),
        secondary_color: pick(&cli.color2, &file.badge.color2, DEFAULT_SECONDARY_COLOR),
        modifiers,
        icon: cli.icon.clone(),
    };

    // A CLI base URL beats a directory from the config file.
    let icons = if let Some(dir) = &cli.icon_dir {
        IconSource::Dir(dir.clone())
    } else if let Some(base_url) = &cli.icon_base_url {
        IconSource::Http {
            base_url: base_url.clone(),
            timeout: file.icons.timeout_secs.map(Duration::from_secs),
        }
    } else if let Some(dir) = &file.icons.dir {
        IconSource::Dir(PathBuf::from(dir))
    } else {
        IconSource::Http {
            base_url: file
                .icons
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: file.icons.timeout_secs.map(Duration::from_secs),
        }
    };

    let font_path = cli
        .font
        .clone()
        .or_else(|| file.font.path.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FONT_PATH));
    let font_family = pick(&cli.font_family, &file.font.family, DEFAULT_FONT_FAMILY);

    let output = cli
        .out
        .clone()
        .or_else(|| file.output.path.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

    Ok(Settings {
        spec,
        font_path,
        font_family,
        icons,
        output: Output::from_path(output),
    })
}
