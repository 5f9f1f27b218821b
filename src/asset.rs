//! Build outputs handed to a reporting round
//!
//! A round receives an insertion-ordered map of raw asset name to an
//! [`AssetSource`]. Sources are only read if their name passes the filter,
//! so file-backed assets that are filtered out are never opened.

use crate::error::SizeReportError;
use crate::infra::{FileSystem, RealFileSystem};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};

/// Raw asset name to its bytes accessor
pub type AssetMap<S> = IndexMap<String, S>;

/// Accessor for an asset's bytes
pub trait AssetSource: Sync {
    /// Current contents of the asset
    fn source(&self) -> io::Result<Cow<'_, [u8]>>;
}

impl AssetSource for Vec<u8> {
    fn source(&self) -> io::Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl AssetSource for &[u8] {
    fn source(&self) -> io::Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self))
    }
}

impl AssetSource for String {
    fn source(&self) -> io::Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_bytes()))
    }
}

impl AssetSource for &str {
    fn source(&self) -> io::Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_bytes()))
    }
}

/// Asset backed by a file, read lazily
#[derive(Debug, Clone)]
pub struct FileAsset<FS: FileSystem = RealFileSystem> {
    path: PathBuf,
    fs: FS,
}

impl FileAsset<RealFileSystem> {
    /// Asset for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(path, RealFileSystem)
    }
}

impl<FS: FileSystem> FileAsset<FS> {
    /// Asset read through a custom filesystem implementation
    pub fn with_fs(path: impl Into<PathBuf>, fs: FS) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    /// File location
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<FS: FileSystem + Sync> AssetSource for FileAsset<FS> {
    fn source(&self) -> io::Result<Cow<'_, [u8]>> {
        self.fs.read(&self.path).map(Cow::Owned)
    }
}

/// Collect every file under `root` as a file-backed asset
///
/// Names are paths relative to `root` joined with `/`, sorted so repeated
/// runs see the same order. Symlinked files are included; symlinked
/// directories are not descended into.
///
/// # Examples
///
/// ```
/// use size_report::asset::collect_assets;
///
/// let dir = tempfile::tempdir()?;
/// std::fs::create_dir(dir.path().join("js"))?;
/// std::fs::write(dir.path().join("js/app.3f2a.js"), "console.log(1)")?;
/// std::fs::write(dir.path().join("index.html"), "<html></html>")?;
///
/// let assets = collect_assets(dir.path())?;
/// let names: Vec<_> = assets.keys().cloned().collect();
/// assert_eq!(names, vec!["index.html", "js/app.3f2a.js"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn collect_assets(root: &Path) -> Result<AssetMap<FileAsset>, SizeReportError> {
    collect_assets_with_fs(root, RealFileSystem)
}

/// Collect assets with a custom filesystem implementation
pub fn collect_assets_with_fs<FS: FileSystem + Clone>(
    root: &Path,
    fs: FS,
) -> Result<AssetMap<FileAsset<FS>>, SizeReportError> {
    let mut files = Vec::new();
    walk(root, &fs, &mut files).map_err(|source| SizeReportError::Io {
        context: root.display().to_string(),
        source,
    })?;

    let mut named: Vec<(String, PathBuf)> = files
        .into_iter()
        .filter_map(|path| {
            let relative = path.strip_prefix(root).ok()?;
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            Some((name, path))
        })
        .collect();
    named.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(named
        .into_iter()
        .map(|(name, path)| (name, FileAsset::with_fs(path, fs.clone())))
        .collect())
}

fn walk<FS: FileSystem>(dir: &Path, fs: &FS, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs.read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            walk(&path, fs, files)?;
        } else if file_type.is_symlink() {
            // follow links to files only, so link cycles cannot recurse
            if fs.metadata(&path).is_ok_and(|m| m.is_file()) {
                files.push(path);
            }
        } else {
            files.push(path);
        }
    }
    Ok(())
}
