#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! size-report library
//!
//! This library measures the gzip-compressed size of build outputs, compares
//! them with the previous build's snapshot and renders an aligned,
//! color-coded report. It can be used programmatically in addition to the
//! CLI interface.
//!
//! # Basic Example
//!
//! Normalizing content-hashed names so they compare across builds:
//!
//! ```
//! use size_report::normalize::AssetNormalizer;
//!
//! let normalizer = AssetNormalizer::new();
//! assert_eq!(normalizer.normalize("main.3f2a9c1.js"), "main.*******.js");
//! assert_eq!(normalizer.normalize("3f2a9c1.js"), "3f2a9c1.js");
//! ```
//!
//! # Advanced Example: Comparing Two Builds
//!
//! ```
//! use size_report::diff::{diff, DeltaEmphasis, SeverityTier};
//! use size_report::snapshot::SizeTable;
//!
//! let previous: SizeTable = [("app.js", 20_000u64)].into_iter().collect();
//! let current: SizeTable = [("app.js", 25_000u64), ("vendor.js", 150_000)]
//!     .into_iter()
//!     .collect();
//!
//! let entries = diff(&current, &previous);
//! assert_eq!(entries[0].delta, 5_000);
//! assert_eq!(entries[0].emphasis(), DeltaEmphasis::Increase);
//! assert_eq!(entries[1].size_before, 0);
//! assert_eq!(entries[1].tier, SeverityTier::Critical);
//! ```
//!
//! # Advanced Example: A Full Round
//!
//! ```
//! use size_report::asset::AssetMap;
//! use size_report::normalize::AssetNormalizer;
//! use size_report::report::ReportFormatter;
//! use size_report::reporter::SizeReporter;
//! use size_report::snapshot::SnapshotStore;
//!
//! let dir = tempfile::tempdir()?;
//! let store = SnapshotStore::new(dir.path().join("sizes.json"))?;
//! let reporter = SizeReporter::new(r"\.css$", AssetNormalizer::new(), store)?
//!     .with_formatter(ReportFormatter::plain());
//!
//! let mut assets = AssetMap::new();
//! assets.insert("main.css".to_string(), "body { margin: 0 }".to_string());
//!
//! let first = reporter.run(&assets)?;
//! assert!(first.persisted());
//!
//! // Unchanged content produces no delta on the next build
//! let second = reporter.run(&assets)?;
//! assert_eq!(second.entries[0].delta, 0);
//! assert!(!second.text.contains('('));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Build output discovery and asset sources
pub mod asset;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Size comparison and severity classification
pub mod diff;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Compressed size estimation
pub mod estimate;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Asset name normalization
pub mod normalize;
/// JSON output for CI/CD integration
pub mod output;
/// Text report rendering
pub mod report;
/// Reporting round orchestration
pub mod reporter;
/// Size snapshot persistence
pub mod snapshot;
