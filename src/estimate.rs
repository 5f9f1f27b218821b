//! Transfer-size estimation via gzip
//!
//! The reported size of an asset is the length of its gzip stream, which is
//! what a compression-aware server would deliver. Output is discarded as it
//! is produced; only its length is kept.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, Write};

/// Sink that counts bytes and drops them
#[derive(Debug, Default)]
struct CountingWriter {
    count: u64,
}

impl Write for CountingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.count += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Estimates delivered size with a fixed gzip configuration
///
/// # Examples
///
/// ```
/// use size_report::estimate::SizeEstimator;
///
/// let estimator = SizeEstimator::default();
/// let text = "body { color: red; }\n".repeat(500);
/// let size = estimator.estimate(text.as_bytes())?;
/// assert!(size < text.len() as u64);
/// assert_eq!(size, estimator.estimate(text.as_bytes())?);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SizeEstimator {
    level: Compression,
}

impl SizeEstimator {
    /// Highest gzip level, the level size reports conventionally use
    pub const DEFAULT_LEVEL: u32 = 9;

    /// Create an estimator for a gzip level (clamped to 0..=9)
    pub fn new(level: u32) -> Self {
        Self {
            level: Compression::new(level.min(9)),
        }
    }

    /// Configured gzip level
    pub fn level(&self) -> u32 {
        self.level.level()
    }

    /// Gzip-compressed length of `bytes`
    pub fn estimate(&self, bytes: &[u8]) -> io::Result<u64> {
        let mut encoder = GzEncoder::new(CountingWriter::default(), self.level);
        encoder.write_all(bytes)?;
        let sink = encoder.finish()?;
        Ok(sink.count)
    }
}

impl Default for SizeEstimator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use proptest::prelude::*;
    use std::io::Read;

    #[test]
    fn test_estimate_matches_buffered_gzip_length() {
        let estimator = SizeEstimator::default();
        let payload = b"function add(a, b) { return a + b; }\n".repeat(64);

        let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(&payload).unwrap();
        let compressed = encoder.finish().unwrap();

        assert_eq!(
            estimator.estimate(&payload).unwrap(),
            compressed.len() as u64
        );

        let mut decoded = Vec::new();
        GzDecoder::new(compressed.as_slice())
            .read_to_end(&mut decoded)
            .unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_estimate_empty_buffer_is_gzip_overhead() {
        let size = SizeEstimator::default().estimate(&[]).unwrap();
        // 10-byte header, empty deflate block, 8-byte trailer
        assert!((18..=25).contains(&size), "unexpected empty size {}", size);
    }

    #[test]
    fn test_estimate_compresses_repetitive_input() {
        let payload = vec![b'a'; 100_000];
        let size = SizeEstimator::default().estimate(&payload).unwrap();
        assert!(size < 1_000);
    }

    #[test]
    fn test_level_is_clamped() {
        assert_eq!(SizeEstimator::new(42).level(), 9);
        assert_eq!(SizeEstimator::new(0).level(), 0);
        assert_eq!(SizeEstimator::default().level(), 9);
    }

    #[test]
    fn test_store_level_is_never_smaller_than_best() {
        let payload = b"<div class=\"row\"></div>".repeat(200);
        let stored = SizeEstimator::new(0).estimate(&payload).unwrap();
        let best = SizeEstimator::new(9).estimate(&payload).unwrap();
        assert!(stored >= payload.len() as u64);
        assert!(best < stored);
    }

    proptest! {
        /// Property: identical input always yields the identical estimate
        #[test]
        fn prop_estimate_deterministic(bytes in prop::collection::vec(any::<u8>(), 0..4096)) {
            let estimator = SizeEstimator::default();
            let first = estimator.estimate(&bytes).unwrap();
            let second = estimator.estimate(&bytes.clone()).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
