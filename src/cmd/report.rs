//! Report command implementation
//!
//! Handles the `size-report report` command: collects a build output
//! directory, runs one round and prints the result.

use anyhow::Result;
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::asset::collect_assets;
use crate::config::{ConfigLoader, ReportConfig};
use crate::output::JsonOutput;
use crate::report::ReportFormatter;
use crate::reporter::SizeReporter;

/// Command-line settings for one report run
///
/// `None` fields fall back to `.size-report.toml`, then to defaults.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Build output directory
    pub dir: PathBuf,
    /// Asset filter pattern override
    pub pattern: Option<String>,
    /// Snapshot path override
    pub json_file: Option<PathBuf>,
    /// Hash-strip pattern override
    pub strip_hash: Option<String>,
    /// gzip level override
    pub compression_level: Option<u32>,
    /// Print JSON instead of the text report
    pub json: bool,
    /// Disable ANSI styling
    pub no_color: bool,
}

impl ReportOptions {
    /// Merge these options over a loaded configuration
    pub fn apply_to(&self, mut config: ReportConfig) -> ReportConfig {
        if let Some(ref pattern) = self.pattern {
            config.pattern = pattern.clone();
        }
        if let Some(ref json_file) = self.json_file {
            config.json_file = json_file.clone();
        }
        if let Some(ref strip_hash) = self.strip_hash {
            config.strip_hash = Some(strip_hash.clone());
        }
        if let Some(level) = self.compression_level {
            config.compression_level = level;
        }
        config
    }
}

/// Report sizes for a build output directory
///
/// # Examples
///
/// ```no_run
/// use size_report::cmd::report::{cmd_report, ReportOptions};
///
/// cmd_report(&ReportOptions {
///     dir: "dist".into(),
///     ..Default::default()
/// })?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The output directory doesn't exist or can't be read
/// - The configuration is invalid
/// - An asset can't be measured
/// - The new snapshot can't be written (after the report is printed)
pub fn cmd_report(options: &ReportOptions) -> Result<()> {
    let project_root = env::current_dir()?;
    let stdout = std::io::stdout();
    cmd_report_impl(options, &project_root, &mut stdout.lock())
}

/// Implementation writing to an arbitrary sink, resolving config from `project_root`
fn cmd_report_impl(
    options: &ReportOptions,
    project_root: &Path,
    out: &mut impl Write,
) -> Result<()> {
    if !options.dir.is_dir() {
        anyhow::bail!(
            "Build output directory not found: {}",
            options.dir.display()
        );
    }

    let mut config = options.apply_to(ConfigLoader::load(project_root)?);
    config.validate()?;

    if config.json_file.is_relative() {
        config.json_file = project_root.join(&config.json_file);
    }

    let formatter = if options.no_color {
        ReportFormatter::plain()
    } else {
        ReportFormatter::for_terminal()
    };
    let reporter = SizeReporter::from_config(&config)?.with_formatter(formatter);

    let assets = collect_assets(&options.dir)?;
    log::debug!("Collected {} files from {}", assets.len(), options.dir.display());

    let round = reporter.run(&assets)?;

    if options.json {
        writeln!(out, "{}", JsonOutput::from_round(&round).to_json()?)?;
    } else if let Some(text) = round.output() {
        write!(out, "\n{}", text)?;
    }

    match round.persist_error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let dist = temp.path().join("dist");
        fs::create_dir_all(&dist).unwrap();
        fs::write(dist.join("app.3f2a9c1.js"), "console.log('x');".repeat(40)).unwrap();
        fs::write(dist.join("logo.png"), [0u8; 64]).unwrap();
        (temp, dist)
    }

    fn options(dist: &Path) -> ReportOptions {
        ReportOptions {
            dir: dist.to_path_buf(),
            no_color: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_report_with_missing_directory() {
        let temp = TempDir::new().unwrap();
        let mut out = Vec::new();
        let result = cmd_report_impl(
            &options(&temp.path().join("nope")),
            temp.path(),
            &mut out,
        );

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Build output directory not found"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_report_prints_text_and_writes_default_snapshot() {
        let (temp, dist) = setup();
        let mut out = Vec::new();

        cmd_report_impl(&options(&dist), temp.path(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with('\n'));
        assert!(text.contains("app.*******.js"));
        assert!(!text.contains("logo.png"));
        assert!(temp.path().join(".size-report/sizes.json").exists());
    }

    #[test]
    fn test_report_with_no_matches_prints_nothing() {
        let (temp, dist) = setup();
        let mut out = Vec::new();
        let opts = ReportOptions {
            pattern: Some(r"\.wasm$".to_string()),
            ..options(&dist)
        };

        cmd_report_impl(&opts, temp.path(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_report_json_output() {
        let (temp, dist) = setup();
        let mut out = Vec::new();
        let opts = ReportOptions {
            json: true,
            ..options(&dist)
        };

        cmd_report_impl(&opts, temp.path(), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["entries"][0]["name"], "app.*******.js");
        assert_eq!(value["entries"][0]["size_before"], 0);
    }

    #[test]
    fn test_report_uses_config_file_and_cli_overrides() {
        let (temp, dist) = setup();
        fs::write(
            temp.path().join(".size-report.toml"),
            "json-file = \"stats/sizes.json\"\npattern = '\\.png$'\n",
        )
        .unwrap();

        let mut out = Vec::new();
        let opts = ReportOptions {
            pattern: Some(r"\.js$".to_string()),
            ..options(&dist)
        };
        cmd_report_impl(&opts, temp.path(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("app.*******.js"));
        assert!(temp.path().join("stats/sizes.json").exists());
    }

    #[test]
    fn test_report_rejects_invalid_override() {
        let (temp, dist) = setup();
        let opts = ReportOptions {
            compression_level: Some(12),
            ..options(&dist)
        };
        assert!(cmd_report_impl(&opts, temp.path(), &mut Vec::new()).is_err());
    }

    #[test]
    fn test_apply_to_keeps_unset_fields() {
        let config = ReportConfig {
            strip_hash: Some("x".to_string()),
            ..Default::default()
        };
        let merged = ReportOptions::default().apply_to(config.clone());
        assert_eq!(merged, config);
    }
}
