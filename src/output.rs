//! JSON output formatting for CI/CD integration

use crate::diff::{DeltaEmphasis, DiffEntry, DiffSummary, SeverityTier};
use crate::error::SizeReportError;
use crate::reporter::RoundReport;
use serde::Serialize;

/// JSON output structure for CI/CD tools
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// One record per measured asset
    pub entries: Vec<JsonEntry>,
    /// Totals across entries
    pub summary: DiffSummary,
}

/// A diff entry with its presentation class spelled out
#[derive(Debug, Clone, Serialize)]
pub struct JsonEntry {
    /// Normalized asset name
    pub name: String,
    /// Previous size in bytes (0 for new assets)
    pub size_before: u64,
    /// Current compressed size in bytes
    pub size: u64,
    /// Size difference in bytes (negative = reduction)
    pub delta: i64,
    /// Severity tier of the current size
    pub tier: SeverityTier,
    /// Whether the delta is above the noise floor
    pub delta_significant: bool,
    /// How the delta is emphasized in text output
    pub emphasis: DeltaEmphasis,
}

impl From<&DiffEntry> for JsonEntry {
    fn from(entry: &DiffEntry) -> Self {
        Self {
            name: entry.name.clone(),
            size_before: entry.size_before,
            size: entry.size,
            delta: entry.delta,
            tier: entry.tier,
            delta_significant: entry.delta_significant,
            emphasis: entry.emphasis(),
        }
    }
}

impl JsonOutput {
    /// Create JSON output from diff entries
    pub fn new(entries: &[DiffEntry]) -> Self {
        Self {
            entries: entries.iter().map(JsonEntry::from).collect(),
            summary: DiffSummary::from_entries(entries),
        }
    }

    /// Create JSON output from a finished round
    pub fn from_round(round: &RoundReport) -> Self {
        Self::new(&round.entries)
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, SizeReportError> {
        serde_json::to_string_pretty(self).map_err(|source| SizeReportError::Serialize {
            what: "JSON report".to_string(),
            source,
        })
    }
}
