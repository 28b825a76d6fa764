//! Compressible test data generator
//!
//! Writes reproducible pseudo-random data with a tunable amount of LZ-style
//! redundancy, for benchmarking and fuzzing compressors.

use std::process;

mod opts;

use opts::LzdgenOpts;

use lzdg_cli::{format_error_for_stderr, init_logging, run_cli};

const PROGRAM_NAME: &str = "lzdgen";

fn main() -> std::io::Result<()> {
    let opts = LzdgenOpts::parse();

    let config = match opts.config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{PROGRAM_NAME}: {err}");
            process::exit(1);
        }
    };
    init_logging(PROGRAM_NAME, config.verbose);

    if let Err(err) = run_cli(&config) {
        eprintln!("{}", format_error_for_stderr(PROGRAM_NAME, &err));
        process::exit(1);
    }

    Ok(())
}
