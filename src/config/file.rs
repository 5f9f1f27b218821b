//! Configuration file data structures

use anyhow::Result;
use regex::Regex;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".size-report.toml";

/// Assets measured when no pattern is configured
pub const DEFAULT_PATTERN: &str = r"\.(mjs|js|css|html)$";

/// Snapshot location when none is configured
pub const DEFAULT_JSON_FILE: &str = ".size-report/sizes.json";

/// size-report configuration file structure
///
/// # Examples
///
/// ```
/// use size_report::config::ReportConfig;
///
/// let config = ReportConfig {
///     strip_hash: Some("[0-9a-f]{8}".to_string()),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
///
/// let broken = ReportConfig {
///     pattern: "(".to_string(),
///     ..Default::default()
/// };
/// assert!(broken.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ReportConfig {
    /// Regex selecting which asset names are measured
    pub pattern: String,

    /// Snapshot file from the previous build
    pub json_file: PathBuf,

    /// Regex whose matches are replaced by placeholders (overrides the
    /// default trailing-hash rule)
    pub strip_hash: Option<String>,

    /// gzip level used to estimate transfer size (0-9)
    pub compression_level: u32,
}

impl ReportConfig {
    /// Validate patterns and compression level
    pub fn validate(&self) -> Result<()> {
        if let Err(e) = Regex::new(&self.pattern) {
            anyhow::bail!("Invalid asset pattern '{}': {}", self.pattern, e);
        }

        if let Some(ref strip_hash) = self.strip_hash {
            if let Err(e) = Regex::new(strip_hash) {
                anyhow::bail!("Invalid strip-hash pattern '{}': {}", strip_hash, e);
            }
        }

        if self.compression_level > 9 {
            anyhow::bail!(
                "Compression level {} is out of range (0-9)",
                self.compression_level
            );
        }

        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            json_file: PathBuf::from(DEFAULT_JSON_FILE),
            strip_hash: None,
            compression_level: 9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ReportConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pattern, DEFAULT_PATTERN);
        assert_eq!(config.json_file, PathBuf::from(".size-report/sizes.json"));
        assert_eq!(config.compression_level, 9);
        assert!(config.strip_hash.is_none());
    }

    #[test]
    fn test_default_pattern_matches_web_assets() {
        let re = Regex::new(DEFAULT_PATTERN).unwrap();
        for name in ["app.js", "mod.mjs", "main.css", "index.html", "a/b.3f2a.js"] {
            assert!(re.is_match(name), "{} should match", name);
        }
        for name in ["app.js.map", "logo.png", "app.json", "README.md"] {
            assert!(!re.is_match(name), "{} should not match", name);
        }
    }

    #[test]
    fn test_validate_rejects_bad_strip_hash() {
        let config = ReportConfig {
            strip_hash: Some("[".to_string()),
            ..Default::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("strip-hash"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_level() {
        let config = ReportConfig {
            compression_level: 10,
            ..Default::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("out of range"));
    }

    #[test]
    fn test_config_parses_kebab_case_keys() {
        let toml = r#"
pattern = '\.js$'
json-file = "build/sizes.json"
strip-hash = '[0-9a-f]{8}'
compression-level = 6
"#;
        let config: ReportConfig = toml_edit::de::from_str(toml).unwrap();
        assert_eq!(config.pattern, r"\.js$");
        assert_eq!(config.json_file, PathBuf::from("build/sizes.json"));
        assert_eq!(config.strip_hash.as_deref(), Some("[0-9a-f]{8}"));
        assert_eq!(config.compression_level, 6);
    }
}
