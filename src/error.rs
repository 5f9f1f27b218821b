//! Error types with contextual suggestions
//!
//! Round-level failures are reported through [`SizeReportError`]; each variant
//! carries an actionable suggestion and a sysexits-style exit code for the
//! host binary.
//!
//! # Examples
//!
//! ```
//! use size_report::error::SizeReportError;
//!
//! let err = SizeReportError::InvalidPattern {
//!     pattern: "(".to_string(),
//!     reason: "unclosed group".to_string(),
//! };
//! assert_eq!(err.exit_code(), 65);
//! assert!(err.suggestion().is_some());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a reporting round
#[derive(Error, Debug)]
pub enum SizeReportError {
    /// Asset filter or hash-strip pattern does not compile
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Compiler message
        reason: String,
    },

    /// Asset bytes could not be read or compressed
    #[error("Failed to measure asset '{name}'")]
    Measure {
        /// Raw asset name
        name: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Snapshot directory could not be created
    #[error("Failed to prepare snapshot directory: {path}")]
    StoreInit {
        /// Directory that could not be created
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Snapshot could not be written
    #[error("Failed to write size snapshot: {path}")]
    Persist {
        /// Snapshot path
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Snapshot or report could not be serialized
    #[error("Failed to serialize {what}")]
    Serialize {
        /// What was being serialized
        what: String,
        #[source]
        /// serde_json error source
        source: serde_json::Error,
    },

    /// Build output could not be listed
    #[error("Failed to read {context}")]
    Io {
        /// Path being read
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl SizeReportError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use size_report::error::SizeReportError;
    /// use std::path::PathBuf;
    ///
    /// let error = SizeReportError::Persist {
    ///     path: PathBuf::from(".size-report/sizes.json"),
    ///     source: std::io::Error::other("read-only filesystem"),
    /// };
    ///
    /// assert!(error.suggestion().unwrap().contains("sizes.json"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InvalidPattern { .. } => Some(
                "Patterns use Rust regex syntax, e.g. '\\.(mjs|js|css|html)$'".to_string(),
            ),
            Self::Measure { name, .. } => Some(format!(
                "Ensure '{}' is readable; the round was aborted without a partial report",
                name
            )),
            Self::StoreInit { path, .. } => Some(format!(
                "Check that {} can be created or choose another --json-file",
                path.display()
            )),
            Self::Persist { path, .. } => Some(format!(
                "Check write permissions for {}; the next build will compare against the old snapshot",
                path.display()
            )),
            Self::Serialize { .. } => None,
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Follows sysexits.h conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidPattern { .. } => 65, // EX_DATAERR
            Self::Measure { .. } => 66,        // EX_NOINPUT
            Self::StoreInit { .. } => 73,      // EX_CANTCREAT
            Self::Persist { .. } => 74,        // EX_IOERR
            Self::Serialize { .. } => 70,      // EX_SOFTWARE
            Self::Io { .. } => 74,             // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestions
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(sr_error) = error.downcast_ref::<SizeReportError>() {
            if let Some(suggestion) = sr_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(sr_error) = error.downcast_ref::<SizeReportError>() {
            sr_error.exit_code()
        } else {
            1
        }
    }
}
