//! Logger setup for the command-line binaries.

use std::io::Write;

use log::LevelFilter;

/// Maps the number of `-v` flags to a log level.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs an `env_logger` writing `program: message` lines to stderr.
///
/// `RUST_LOG` overrides the level derived from `verbose`. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init_logging(program: &'static str, verbose: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for_verbosity(verbose))
        .parse_default_env()
        .format(move |buf, record| writeln!(buf, "{program}: {}", record.args()))
        .try_init();
}
