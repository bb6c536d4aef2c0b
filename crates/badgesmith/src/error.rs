use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the CLI itself rather than the library crates.
///
/// Attached as `anyhow` context so `error_hints` can recover them by type.
#[derive(Debug, Error)]
pub(crate) enum Failure {
    #[error("failed to read font file {}", .0.display())]
    ReadFont(PathBuf),

    #[error("failed to load config {}", .0.display())]
    LoadConfig(PathBuf),

    #[error("at most {max} modifiers are supported, got {got}")]
    TooManyModifiers { max: usize, got: usize },
}
