//! Test fixture helpers for creating build output directories
//!
//! A [`BuildOutput`] is a temporary project root holding a `dist/` directory
//! that tests fill with bundler-style files.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// Temporary project root with a `dist/` build output directory
pub struct BuildOutput {
    root: TempDir,
    dist: PathBuf,
}

impl BuildOutput {
    /// Create an empty project with an empty `dist/`
    pub fn new() -> anyhow::Result<Self> {
        let root = TempDir::new()?;
        let dist = root.path().join("dist");
        fs::create_dir_all(&dist)?;
        Ok(Self { root, dist })
    }

    /// Create a project with a typical hashed web bundle
    pub fn with_web_bundle() -> anyhow::Result<Self> {
        let build = Self::new()?;
        build.write("main.3f2a9c1.js", &script(400))?;
        build.write("vendor.8d1e0b7.js", &script(2_000))?;
        build.write("css/main.a1b2c3d.css", &stylesheet(200))?;
        build.write("index.html", "<!doctype html><title>app</title>")?;
        build.write("logo.png", "\u{89}PNG not measured")?;
        Ok(build)
    }

    /// Project root (working directory for the CLI)
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Build output directory
    pub fn dist(&self) -> &Path {
        &self.dist
    }

    /// Default snapshot location under the project root
    pub fn snapshot_path(&self) -> PathBuf {
        self.root.path().join(".size-report/sizes.json")
    }

    /// Write a file relative to `dist/`, creating parent directories
    pub fn write(&self, name: &str, contents: &str) -> anyhow::Result<PathBuf> {
        let path = self.dist.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Remove a file relative to `dist/`
    pub fn remove(&self, name: &str) -> anyhow::Result<()> {
        fs::remove_file(self.dist.join(name))?;
        Ok(())
    }

    /// Write `.size-report.toml` at the project root
    pub fn write_config(&self, contents: &str) -> anyhow::Result<()> {
        fs::write(self.root.path().join(".size-report.toml"), contents)?;
        Ok(())
    }
}

/// JavaScript-looking content with `lines` distinct statements
pub fn script(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("export const value{} = compute({}, \"{}\");\n", i, i * 7, i))
        .collect()
}

/// CSS-looking content with `rules` distinct rules
pub fn stylesheet(rules: usize) -> String {
    (0..rules)
        .map(|i| format!(".c{} {{ margin: {}px; color: #{:06x}; }}\n", i, i % 17, i * 991))
        .collect()
}
