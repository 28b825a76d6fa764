//! Generation run orchestration.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use log::info;

use lzdg_core::pipeline::write_generated;
use lzdg_core::random::seeded;
use lzdg_core::GenerationSummary;

use crate::config::CliConfig;
use crate::error::Result;
use crate::io::open_output;
use crate::utils::format_size;

/// Derives a seed from the wall clock and the process id.
pub fn default_seed() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    now.as_secs() ^ (u64::from(now.subsec_nanos()) << 32) ^ u64::from(std::process::id())
}

/// Generates the configured amount of data into the configured output.
///
/// The workflow is:
///
/// 1. Opens the output destination (file or stdout)
/// 2. Seeds a PCG32 generator with the configured seed on the default stream
/// 3. Streams generated data into the output in block-sized chunks
///
/// # Parameters
///
/// * `config` - CLI configuration with output, size, seed and generation options
///
/// # Returns
///
/// A [`GenerationSummary`] describing what was written.
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - The output file exists and `force` is not set, or cannot be created
/// - The chunk buffer cannot be allocated
/// - Writing to the output fails; already written data is left in place
pub fn generate_output(config: &CliConfig) -> Result<GenerationSummary> {
    let writer = open_output(&config.output, config.force)?;

    let seed = config.seed.unwrap_or_else(default_seed);
    let mut rng = seeded(seed);
    info!("seed 0x{seed:016X}");

    let summary = write_generated(&mut rng, writer, config.size, &config.options)?;
    info!(
        "wrote {} ({} bytes) to {}",
        format_size(summary.bytes_written),
        summary.bytes_written,
        if config.writes_to_stdout() {
            "(stdout)"
        } else {
            config.output.as_str()
        }
    );

    Ok(summary)
}

/// Runs one `lzdgen` invocation, converting failures into [`io::Error`].
///
/// # Errors
///
/// Returns the error of [`generate_output`] wrapped in an [`io::Error`] that
/// keeps the original kind; use
/// [`format_error_for_stderr`](crate::format_error_for_stderr) to render it.
pub fn run_cli(config: &CliConfig) -> io::Result<GenerationSummary> {
    generate_output(config).map_err(io::Error::from)
}
