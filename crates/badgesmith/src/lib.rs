//! # badgesmith
//!
//! **CLI Binary**
//!
//! Entry point for the `badgesmith` command-line application. It wires the
//! other crates together and owns every side effect of a render.
//!
//! ## Responsibilities
//! * Parse command line arguments and load `badgesmith.toml`
//! * Initialize logging
//! * Read the font, pick an icon source, compose, write the output
//! * Format errors with hints
//!
//! This crate should contain minimal business logic.

pub mod config;
mod error;
mod error_hints;
mod logging;
pub mod render;

use anyhow::Result;
use badgesmith_config::Cli;
use clap::Parser;

pub use config::{IconSource, Output, Settings};
pub use render::{render, write_output};

/// Run the CLI with the process arguments.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let file_config = config::load_config(&cli)?;
    let settings = config::resolve(&cli, file_config.as_ref())?;
    let svg = render(&settings)?;
    write_output(&settings.output, &svg)
}

/// Render an error chain plus any hints for the terminal.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
