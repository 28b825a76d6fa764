//! Shared constants and summary types for data generation.

/// Shortest match length emitted by the generator.
pub const MIN_LEN: usize = 3;

/// Longest match length emitted by the generator.
///
/// This is also the size of the match buffer that match runs are copied from.
pub const MAX_LEN: usize = 258;

/// Number of distinct match lengths, i.e. the size of the length frequency table.
pub const NUM_LEN: usize = MAX_LEN - MIN_LEN + 1;

/// Number of match lengths drawn each time the length frequency table is regenerated.
pub const LEN_PER_CHUNK: usize = 512;

/// Number of literals in a sample pool. Must be a power of two.
pub const SAMPLE_SIZE: usize = 16 * 1024;

/// Block size used by the bulk driver and the streaming pipeline.
pub const BLOCK_SIZE: usize = 1024 * 1024;

/// PCG stream selector used when the caller only supplies a seed.
pub const DEFAULT_STREAM: u64 = 0xC0_FFEE;

const _: () = assert!(SAMPLE_SIZE.is_power_of_two());

/// Statistical summary of a completed streaming generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationSummary {
    /// Total number of bytes written to the output destination.
    pub bytes_written: u64,

    /// Number of chunks handed to the writer.
    pub chunks: u64,
}

impl GenerationSummary {
    /// Creates a new summary with the specified counts.
    ///
    /// # Parameters
    ///
    /// * `bytes_written` - Total bytes produced to the output stream
    /// * `chunks` - Number of `write_all` calls issued
    pub(crate) const fn new(bytes_written: u64, chunks: u64) -> Self {
        Self {
            bytes_written,
            chunks,
        }
    }

    /// Average chunk size in bytes, or `0.0` when nothing was written.
    #[allow(clippy::cast_precision_loss)]
    pub fn average_chunk(&self) -> f64 {
        if self.chunks == 0 {
            0.0
        } else {
            self.bytes_written as f64 / self.chunks as f64
        }
    }
}
