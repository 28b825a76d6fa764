//! Configuration types and constants for the `lzdgen` front end.

use lzdg_core::GenerationOptions;

/// Default buffer size for the stdout writer
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// Number of bytes generated when no size is given
pub const DEFAULT_SIZE: u64 = 1024 * 1024;

/// Output name that selects standard output
pub const STDOUT_PATH: &str = "-";

/// Configuration for a single generation run
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Output file path, or [`STDOUT_PATH`]
    pub output: String,
    /// Truncate an existing output file instead of refusing
    pub force: bool,
    /// Number of bytes to generate
    pub size: u64,
    /// PRNG seed; derived from the clock and process id when absent
    pub seed: Option<u64>,
    /// Ratio and exponents handed to the generator
    pub options: GenerationOptions,
    /// Verbosity level (number of `-v` flags)
    pub verbose: u8,
}

impl CliConfig {
    /// Returns `true` when output goes to standard output.
    pub fn writes_to_stdout(&self) -> bool {
        self.output == STDOUT_PATH
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output: STDOUT_PATH.to_string(),
            force: false,
            size: DEFAULT_SIZE,
            seed: None,
            options: GenerationOptions::default(),
            verbose: 0,
        }
    }
}
