//! Content-hash normalization for asset names
//!
//! Build tools embed a content hash in emitted filenames (`app.3f2a9c1.js`).
//! The hash changes on every content change, so sizes are keyed by a
//! normalized name where the hash is replaced by a same-length run of `*`
//! (`app.*******.js`). That key is what joins two builds together.
//!
//! The rewrite rule is a strategy ([`HashStripper`]) chosen once when the
//! [`AssetNormalizer`] is built: the default rule, a regex from
//! configuration, or any closure supplied by a library user.

use crate::error::SizeReportError;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Placeholder character substituted for every hash character
pub const PLACEHOLDER: char = '*';

/// Trailing lowercase-alphanumeric run followed by the final extension.
/// `\w` is spelled out so the extension stays ASCII-only.
static TRAILING_HASH_RE: OnceLock<Regex> = OnceLock::new();

fn trailing_hash_re() -> &'static Regex {
    TRAILING_HASH_RE.get_or_init(|| {
        Regex::new(r"([a-z0-9]+)(\.[A-Za-z0-9_]+)$").expect("trailing hash regex is valid")
    })
}

fn placeholder(len: usize) -> String {
    std::iter::repeat_n(PLACEHOLDER, len).collect()
}

/// Strategy that rewrites an asset name into its normalized form
pub trait HashStripper: Send + Sync {
    /// Return the normalized name for `name`
    fn strip(&self, name: &str) -> String;
}

/// Default rule: replace the trailing alphanumeric run before the extension
///
/// A name that is nothing but `hash + extension` is left alone, so bare
/// names such as `deadbeef.js` or `app.js` are never stripped to `****.js`.
///
/// # Examples
///
/// ```
/// use size_report::normalize::{DefaultHashStripper, HashStripper};
///
/// let stripper = DefaultHashStripper;
/// assert_eq!(stripper.strip("app.3f2a9c1.js"), "app.*******.js");
/// assert_eq!(stripper.strip("main-abc123.css"), "main-******.css");
/// assert_eq!(stripper.strip("deadbeef.js"), "deadbeef.js");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHashStripper;

impl HashStripper for DefaultHashStripper {
    fn strip(&self, name: &str) -> String {
        let Some(caps) = trailing_hash_re().captures(name) else {
            return name.to_string();
        };
        let (Some(hash), Some(ext)) = (caps.get(1), caps.get(2)) else {
            return name.to_string();
        };

        // whole name is hash + extension: nothing stable to keep
        if hash.start() == 0 {
            return name.to_string();
        }

        let mut out = String::with_capacity(name.len());
        out.push_str(&name[..hash.start()]);
        out.push_str(&placeholder(hash.len()));
        out.push_str(ext.as_str());
        out
    }
}

/// Rule from configuration: every match of a user regex becomes placeholders
///
/// The placeholder run has the same character count as the match, so name
/// length is preserved.
///
/// # Examples
///
/// ```
/// use size_report::normalize::{HashStripper, RegexHashStripper};
///
/// let stripper = RegexHashStripper::new("[0-9a-f]{8}")?;
/// assert_eq!(stripper.strip("chunk-0a1b2c3d.js"), "chunk-********.js");
/// # Ok::<(), size_report::error::SizeReportError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RegexHashStripper {
    re: Regex,
}

impl RegexHashStripper {
    /// Compile a stripper from a regex pattern
    pub fn new(pattern: &str) -> Result<Self, SizeReportError> {
        let re = Regex::new(pattern).map_err(|e| SizeReportError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { re })
    }
}

impl HashStripper for RegexHashStripper {
    fn strip(&self, name: &str) -> String {
        self.re
            .replace_all(name, |caps: &regex::Captures<'_>| {
                placeholder(caps[0].chars().count())
            })
            .into_owned()
    }
}

/// Closure-backed stripper for library users
pub struct FnHashStripper<F>(pub F);

impl<F> HashStripper for FnHashStripper<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn strip(&self, name: &str) -> String {
        (self.0)(name)
    }
}

impl<F> fmt::Debug for FnHashStripper<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnHashStripper(..)")
    }
}

/// Normalizes asset names through the configured [`HashStripper`]
pub struct AssetNormalizer {
    stripper: Box<dyn HashStripper>,
}

impl AssetNormalizer {
    /// Normalizer using the default trailing-hash rule
    pub fn new() -> Self {
        Self::with_stripper(DefaultHashStripper)
    }

    /// Normalizer delegating entirely to `stripper`
    pub fn with_stripper(stripper: impl HashStripper + 'static) -> Self {
        Self {
            stripper: Box::new(stripper),
        }
    }

    /// Normalizer from an optional configured pattern
    ///
    /// `None` selects the default rule.
    pub fn from_pattern(pattern: Option<&str>) -> Result<Self, SizeReportError> {
        match pattern {
            Some(p) => Ok(Self::with_stripper(RegexHashStripper::new(p)?)),
            None => Ok(Self::new()),
        }
    }

    /// Normalize a raw asset name
    pub fn normalize(&self, name: &str) -> String {
        self.stripper.strip(name)
    }
}

impl Default for AssetNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AssetNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetNormalizer").finish_non_exhaustive()
    }
}
