//! One reporting round: measure, compare, render, persist
//!
//! [`SizeReporter`] owns the configured pieces (asset filter, normalizer,
//! estimator, snapshot store, formatter) and runs them in order for a single
//! build. The round either produces a [`RoundReport`] or fails as a whole;
//! there is no partial report when an asset cannot be measured.

use crate::asset::{AssetMap, AssetSource};
use crate::config::ReportConfig;
use crate::diff::{diff, DiffEntry, DiffSummary};
use crate::error::SizeReportError;
use crate::estimate::SizeEstimator;
use crate::infra::{FileSystem, RealFileSystem};
use crate::normalize::AssetNormalizer;
use crate::report::ReportFormatter;
use crate::snapshot::{SizeTable, SnapshotStore};
use rayon::prelude::*;
use regex::Regex;

/// Outcome of a completed round
#[derive(Debug)]
pub struct RoundReport {
    /// Per-asset comparison, in discovery order
    pub entries: Vec<DiffEntry>,
    /// Rendered report, empty when nothing matched
    pub text: String,
    /// Set when the new snapshot could not be written
    pub persist_error: Option<SizeReportError>,
}

impl RoundReport {
    /// Text to display, or `None` when display should be suppressed
    pub fn output(&self) -> Option<&str> {
        if self.text.is_empty() {
            None
        } else {
            Some(&self.text)
        }
    }

    /// Totals over the entries
    pub fn summary(&self) -> DiffSummary {
        DiffSummary::from_entries(&self.entries)
    }

    /// True when the snapshot was written
    pub fn persisted(&self) -> bool {
        self.persist_error.is_none()
    }
}

/// Runs size-reporting rounds against one snapshot file
///
/// # Examples
///
/// ```
/// use size_report::asset::AssetMap;
/// use size_report::normalize::AssetNormalizer;
/// use size_report::report::ReportFormatter;
/// use size_report::reporter::SizeReporter;
/// use size_report::snapshot::SnapshotStore;
///
/// let dir = tempfile::tempdir()?;
/// let store = SnapshotStore::new(dir.path().join("sizes.json"))?;
/// let reporter = SizeReporter::new(r"\.js$", AssetNormalizer::new(), store)?
///     .with_formatter(ReportFormatter::plain());
///
/// let mut assets = AssetMap::new();
/// assets.insert("app.3f2a9c1.js".to_string(), "console.log('hi')".repeat(100));
/// assets.insert("logo.png".to_string(), "not measured".to_string());
///
/// let round = reporter.run(&assets)?;
/// assert_eq!(round.entries.len(), 1);
/// assert_eq!(round.entries[0].name, "app.*******.js");
/// assert!(round.output().unwrap().contains("app.*******.js"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct SizeReporter<FS: FileSystem = RealFileSystem> {
    filter: Regex,
    normalizer: AssetNormalizer,
    estimator: SizeEstimator,
    store: SnapshotStore<FS>,
    formatter: ReportFormatter,
}

impl SizeReporter<RealFileSystem> {
    /// Build a reporter from configuration
    ///
    /// Creates the snapshot directory as a side effect.
    pub fn from_config(config: &ReportConfig) -> Result<Self, SizeReportError> {
        let normalizer = AssetNormalizer::from_pattern(config.strip_hash.as_deref())?;
        let store = SnapshotStore::new(&config.json_file)?;
        Ok(Self::new(&config.pattern, normalizer, store)?
            .with_estimator(SizeEstimator::new(config.compression_level)))
    }
}

impl<FS: FileSystem> SizeReporter<FS> {
    /// Create a reporter measuring assets whose name matches `pattern`
    pub fn new(
        pattern: &str,
        normalizer: AssetNormalizer,
        store: SnapshotStore<FS>,
    ) -> Result<Self, SizeReportError> {
        let filter = Regex::new(pattern).map_err(|e| SizeReportError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            filter,
            normalizer,
            estimator: SizeEstimator::default(),
            store,
            formatter: ReportFormatter::default(),
        })
    }

    /// Replace the size estimator
    pub fn with_estimator(mut self, estimator: SizeEstimator) -> Self {
        self.estimator = estimator;
        self
    }

    /// Replace the report formatter
    pub fn with_formatter(mut self, formatter: ReportFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Snapshot store used by this reporter
    pub fn store(&self) -> &SnapshotStore<FS> {
        &self.store
    }

    /// Measure every asset matching the filter, keyed by normalized name
    ///
    /// Estimates run in parallel; the table keeps the order of `assets`.
    /// If any asset cannot be read or compressed the call fails with that
    /// asset's error; which one is reported when several fail is unspecified.
    pub fn measure<S: AssetSource>(
        &self,
        assets: &AssetMap<S>,
    ) -> Result<SizeTable, SizeReportError> {
        let matched: Vec<(&String, &S)> = assets
            .iter()
            .filter(|(name, _)| self.filter.is_match(name))
            .collect();

        log::debug!(
            "Measuring {} of {} assets",
            matched.len(),
            assets.len()
        );

        let estimator = self.estimator;
        let sizes = matched
            .par_iter()
            .map(|(name, source)| {
                let measure_err = |err| SizeReportError::Measure {
                    name: name.to_string(),
                    source: err,
                };
                let bytes = source.source().map_err(measure_err)?;
                estimator.estimate(&bytes).map_err(measure_err)
            })
            .collect::<Result<Vec<u64>, SizeReportError>>()?;

        Ok(matched
            .iter()
            .zip(sizes)
            .map(|((name, _), size)| (self.normalizer.normalize(name), size))
            .collect())
    }

    /// Run one full round
    ///
    /// The previous snapshot is read first and the new one written last,
    /// after the report is rendered. A write failure does not discard the
    /// report; it is returned in [`RoundReport::persist_error`].
    pub fn run<S: AssetSource>(
        &self,
        assets: &AssetMap<S>,
    ) -> Result<RoundReport, SizeReportError> {
        let prior = self.store.load();
        let current = self.measure(assets)?;

        let entries = diff(&current, &prior);
        let text = self.formatter.format(&entries);

        let persist_error = self.store.save(&current).err();
        if let Some(ref e) = persist_error {
            log::warn!("{}", e);
        }

        Ok(RoundReport {
            entries,
            text,
            persist_error,
        })
    }
}
