//! Size diffing and severity classification
//!
//! Joins the current round's sizes against the previous snapshot by
//! normalized name. Classification is data only; colors are chosen by the
//! report formatter.

use crate::snapshot::SizeTable;
use serde::Serialize;

const KIB: u64 = 1024;

/// Sizes above this are critical
pub const CRITICAL_THRESHOLD: u64 = 100 * KIB;
/// Sizes above this are high
pub const HIGH_THRESHOLD: u64 = 40 * KIB;
/// Sizes above this are medium
pub const MEDIUM_THRESHOLD: u64 = 20 * KIB;

/// Deltas whose magnitude is at most this are measurement noise
pub const NOISE_BYTES: u64 = 1;
/// Deltas above this are emphasized as an increase
pub const INCREASE_BYTES: i64 = 1024;
/// Deltas below this are emphasized as a decrease
pub const DECREASE_BYTES: i64 = -10;

/// Absolute size bucket of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    /// Up to 20 KiB
    Low,
    /// Above 20 KiB
    Medium,
    /// Above 40 KiB
    High,
    /// Above 100 KiB
    Critical,
}

impl SeverityTier {
    /// Classify a compressed size
    ///
    /// Thresholds are exclusive: exactly 20 KiB is still low.
    ///
    /// # Examples
    ///
    /// ```
    /// use size_report::diff::SeverityTier;
    ///
    /// assert_eq!(SeverityTier::from_size(20 * 1024), SeverityTier::Low);
    /// assert_eq!(SeverityTier::from_size(20 * 1024 + 1), SeverityTier::Medium);
    /// assert_eq!(SeverityTier::from_size(200 * 1024), SeverityTier::Critical);
    /// ```
    pub fn from_size(size: u64) -> Self {
        if size > CRITICAL_THRESHOLD {
            Self::Critical
        } else if size > HIGH_THRESHOLD {
            Self::High
        } else if size > MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// How a delta should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaEmphasis {
    /// Delta is noise and is not shown
    None,
    /// Shown without emphasis
    Plain,
    /// Grew by more than 1 KiB
    Increase,
    /// Shrank by more than 10 bytes
    Decrease,
}

impl DeltaEmphasis {
    /// Classify a signed delta
    pub fn from_delta(delta: i64) -> Self {
        if delta.unsigned_abs() <= NOISE_BYTES {
            Self::None
        } else if delta > INCREASE_BYTES {
            Self::Increase
        } else if delta < DECREASE_BYTES {
            Self::Decrease
        } else {
            Self::Plain
        }
    }
}

/// One asset's comparison against the previous build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffEntry {
    /// Normalized asset name
    pub name: String,
    /// Previous size, 0 when the asset is new
    pub size_before: u64,
    /// Current compressed size
    pub size: u64,
    /// `size - size_before`
    pub delta: i64,
    /// Bucket of `size`
    pub tier: SeverityTier,
    /// True when `|delta| > 1`
    pub delta_significant: bool,
}

impl DiffEntry {
    /// Build an entry, deriving delta and classification
    pub fn new(name: impl Into<String>, size_before: u64, size: u64) -> Self {
        let delta = signed_delta(size, size_before);
        Self {
            name: name.into(),
            size_before,
            size,
            delta,
            tier: SeverityTier::from_size(size),
            delta_significant: delta.unsigned_abs() > NOISE_BYTES,
        }
    }

    /// Presentation class of this entry's delta
    pub fn emphasis(&self) -> DeltaEmphasis {
        DeltaEmphasis::from_delta(self.delta)
    }
}

fn signed_delta(size: u64, size_before: u64) -> i64 {
    if size >= size_before {
        i64::try_from(size - size_before).unwrap_or(i64::MAX)
    } else {
        i64::try_from(size_before - size).map_or(i64::MIN, |d| -d)
    }
}

/// Compare `current` against `prior`
///
/// Entries follow `current`'s insertion order. Names only in `prior` are
/// dropped.
///
/// # Examples
///
/// ```
/// use size_report::diff::{diff, SeverityTier};
/// use size_report::snapshot::SizeTable;
///
/// let current: SizeTable = [("app.js", 25_000u64)].into_iter().collect();
/// let entries = diff(&current, &SizeTable::new());
///
/// assert_eq!(entries[0].size_before, 0);
/// assert_eq!(entries[0].delta, 25_000);
/// assert_eq!(entries[0].tier, SeverityTier::Medium);
/// ```
pub fn diff(current: &SizeTable, prior: &SizeTable) -> Vec<DiffEntry> {
    current
        .iter()
        .map(|(name, size)| DiffEntry::new(name, prior.get(name).unwrap_or(0), size))
        .collect()
}

/// Totals over a set of entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    /// Sum of current sizes
    pub total_size: u64,
    /// Sum of previous sizes of the current assets
    pub total_size_before: u64,
    /// `total_size - total_size_before`
    pub total_delta: i64,
}

impl DiffSummary {
    /// Summarize `entries`
    pub fn from_entries(entries: &[DiffEntry]) -> Self {
        let total_size = entries
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.size));
        let total_size_before = entries
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.size_before));
        Self {
            total_size,
            total_size_before,
            total_delta: signed_delta(total_size, total_size_before),
        }
    }
}
