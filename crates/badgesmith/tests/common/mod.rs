#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Bytes standing in for a WOFF2 font; only the base64 text is checked.
pub const FONT_BYTES: &[u8] = b"wOF2fixture";

pub const PYTHON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 448 512"><path d="M439.8 200.5"/><path d="M252.1 21"/></svg>"#;

/// A scratch working directory holding a font and a small icon tree.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("assets")).expect("assets dir");
        fs::write(dir.path().join("assets/robotomono.woff2"), FONT_BYTES).expect("font");
        for style in ["solid", "regular", "brands"] {
            fs::create_dir_all(dir.path().join("icons").join(style)).expect("icon dir");
        }
        fs::write(dir.path().join("icons/brands/python.svg"), PYTHON_SVG).expect("icon");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn icons(&self) -> PathBuf {
        self.dir.path().join("icons")
    }

    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    /// `badgesmith` running inside the fixture, with logging quiet.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_badgesmith"));
        cmd.current_dir(self.dir.path()).env_remove("RUST_LOG");
        cmd
    }
}
