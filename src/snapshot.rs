//! Size snapshot persistence
//!
//! The snapshot is a flat JSON object of normalized name to gzip size,
//! written at the end of every round and read back at the start of the next.
//! A missing or unreadable snapshot is an empty table: the first build after
//! a fresh checkout simply reports every asset as new.

use crate::error::SizeReportError;
use crate::infra::{FileSystem, RealFileSystem};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Normalized name to byte count, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeTable(IndexMap<String, u64>);

impl SizeTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Record a size; an existing key keeps its position and takes the new value
    pub fn insert(&mut self, name: impl Into<String>, size: u64) {
        self.0.insert(name.into(), size);
    }

    /// Size recorded for `name`
    pub fn get(&self, name: &str) -> Option<u64> {
        self.0.get(name).copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the table has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.0.iter().map(|(name, size)| (name.as_str(), *size))
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for SizeTable {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut table = SizeTable::new();
        for (name, size) in iter {
            table.insert(name, size);
        }
        table
    }
}

/// Reads and writes the snapshot file at one path
///
/// # Examples
///
/// ```
/// use size_report::snapshot::{SizeTable, SnapshotStore};
///
/// let dir = tempfile::tempdir()?;
/// let store = SnapshotStore::new(dir.path().join("sizes/app.json"))?;
/// assert!(store.load().is_empty());
///
/// let table: SizeTable = [("app.*******.js", 25_000u64)].into_iter().collect();
/// store.save(&table)?;
/// assert_eq!(store.load(), table);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct SnapshotStore<FS: FileSystem = RealFileSystem> {
    path: PathBuf,
    fs: FS,
}

impl SnapshotStore<RealFileSystem> {
    /// Create a store for `path`, creating its parent directory
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, SizeReportError> {
        Self::with_fs(path, RealFileSystem)
    }
}

impl<FS: FileSystem> SnapshotStore<FS> {
    /// Create a store with a custom filesystem implementation
    ///
    /// The parent directory is created here.
    pub fn with_fs(path: impl Into<PathBuf>, fs: FS) -> Result<Self, SizeReportError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs.create_dir_all(parent)
                .map_err(|source| SizeReportError::StoreInit {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        Ok(Self { path, fs })
    }

    /// Snapshot file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the previous table, or an empty one if it is missing or corrupt
    pub fn load(&self) -> SizeTable {
        let contents = match self.fs.read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                log::debug!(
                    "No usable size snapshot at {}: {}",
                    self.path.display(),
                    e
                );
                return SizeTable::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(table) => table,
            Err(e) => {
                log::debug!(
                    "Ignoring unparsable size snapshot {}: {}",
                    self.path.display(),
                    e
                );
                SizeTable::new()
            }
        }
    }

    /// Overwrite the snapshot with `table`
    pub fn save(&self, table: &SizeTable) -> Result<(), SizeReportError> {
        let contents =
            serde_json::to_string_pretty(table).map_err(|source| SizeReportError::Serialize {
                what: "size snapshot".to_string(),
                source,
            })?;

        self.fs
            .write(&self.path, contents)
            .map_err(|source| SizeReportError::Persist {
                path: self.path.clone(),
                source,
            })?;

        log::debug!(
            "Saved {} sizes to {}",
            table.len(),
            self.path.display()
        );
        Ok(())
    }
}
