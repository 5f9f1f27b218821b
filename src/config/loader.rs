//! Configuration file loading and saving

use super::file::{ReportConfig, CONFIG_FILE_NAME};
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::Path;

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .size-report.toml in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use size_report::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Measuring assets matching {}", config.pattern);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ReportConfig> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<ReportConfig> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ReportConfig::default());
            }
            Err(e) => {
                return Err(e).context("Failed to read .size-report.toml");
            }
        };

        let config: ReportConfig =
            toml_edit::de::from_str(&contents).context("Failed to parse .size-report.toml")?;

        config
            .validate()
            .context("Invalid .size-report.toml configuration")?;

        Ok(config)
    }
}
