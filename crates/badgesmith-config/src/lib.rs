//! # badgesmith-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI arguments and the `badgesmith.toml` schema.
//!
//! ## What belongs here
//! * Clap `Parser` structs
//! * Configuration file struct definitions (Serde)
//! * Default values
//!
//! ## What does NOT belong here
//! * Business logic
//! * I/O operations (except config file parsing)
//! * Merging CLI and file values (done by the `badgesmith` crate)

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

/// Name of the per-project configuration file.
pub const CONFIG_FILE_NAME: &str = "badgesmith.toml";

/// Font read when neither the CLI nor the config names one.
pub const DEFAULT_FONT_PATH: &str = "assets/robotomono.woff2";

/// Output written when neither the CLI nor the config names one.
pub const DEFAULT_OUTPUT_PATH: &str = "badge.svg";

/// Output path meaning "write to stdout".
pub const STDOUT_MARKER: &str = "-";

/// `badgesmith` renders a one- or two-segment SVG badge with an optional
/// Font Awesome icon and an embedded monospace font.
#[derive(Parser, Debug, Clone)]
#[command(name = "badgesmith", version, about, long_about = None)]
pub struct Cli {
    /// Text of the first segment.
    #[arg(value_name = "TEXT1")]
    pub text1: String,

    /// Text of the second segment. Omit (or pass "") for a single segment.
    #[arg(value_name = "TEXT2")]
    pub text2: Option<String>,

    /// Label color of the first segment.
    #[arg(long, value_name = "COLOR")]
    pub text1_color: Option<String>,

    /// Background color of the first segment.
    #[arg(long, value_name = "COLOR")]
    pub color1: Option<String>,

    /// Label color of the second segment.
    #[arg(long, value_name = "COLOR")]
    pub text2_color: Option<String>,

    /// Background color of the second segment.
    #[arg(long, value_name = "COLOR")]
    pub color2: Option<String>,

    /// Free-form modifier carried with the badge. Repeatable, at most 3.
    #[arg(long = "modifier", value_name = "STR")]
    pub modifiers: Vec<String>,

    /// Icon to draw in the first segment (e.g. `python`, `github`).
    #[arg(long, value_name = "NAME")]
    pub icon: Option<String>,

    /// Read icons from a local `{solid,regular,brands}/<name>.svg` tree.
    #[arg(long, value_name = "DIR", conflicts_with = "icon_base_url")]
    pub icon_dir: Option<PathBuf>,

    /// Base URL of the remote icon tree.
    #[arg(long, value_name = "URL")]
    pub icon_base_url: Option<String>,

    /// WOFF2 font to embed.
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Font family name declared for the embedded font.
    #[arg(long, value_name = "FAMILY")]
    pub font_family: Option<String>,

    /// Output file; `-` writes to stdout.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Configuration file (defaults to ./badgesmith.toml, then the user config dir).
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore configuration files.
    #[arg(long)]
    pub no_config: bool,

    /// Verbose output (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

// ============================================================
// badgesmith.toml
// ============================================================

/// Root of `badgesmith.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    /// Badge color and modifier defaults.
    pub badge: BadgeConfig,

    /// Icon source settings.
    pub icons: IconsConfig,

    /// Embedded font settings.
    pub font: FontConfig,

    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeConfig {
    pub text1_color: Option<String>,
    pub color1: Option<String>,
    pub text2_color: Option<String>,
    pub color2: Option<String>,
    pub modifiers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    /// Remote icon tree; `{base_url}/{style}/{name}.svg`.
    pub base_url: Option<String>,

    /// Local icon tree. Takes precedence over `base_url`.
    pub dir: Option<String>,

    /// Per-request HTTP timeout.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub path: Option<String>,
    pub family: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: Option<String>,
}

impl TomlConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
