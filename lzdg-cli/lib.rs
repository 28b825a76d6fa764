//! Shared functionality for the `lzdgen` command-line tool.
//!
//! This crate turns parsed command-line options into a [`CliConfig`], opens
//! the output destination and streams data produced by [`lzdg_core`] into it.

mod config;
mod error;
mod io;
mod logging;
mod process;
mod utils;


pub use config::{CliConfig, DEFAULT_BUFFER_SIZE, DEFAULT_SIZE, STDOUT_PATH};
pub use error::{format_error_for_stderr, Error, Result};
pub use io::open_output;
pub use logging::{init_logging, level_for_verbosity};
pub use process::{default_seed, generate_output, run_cli};
pub use utils::{
    format_size, parse_exponent, parse_ratio, parse_seed, parse_size, LITERAL_EXPONENT,
    MATCH_EXPONENT,
};
