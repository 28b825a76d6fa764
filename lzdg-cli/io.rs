//! Output handling for `lzdgen`.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use crate::config::{DEFAULT_BUFFER_SIZE, STDOUT_PATH};
use crate::error::{Error, Result};

/// Permission bits for newly created output files.
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o644;

/// Opens an output writer for the given path or stdout.
///
/// # Parameters
///
/// * `path` - Path to the output file, or `-` for stdout
/// * `force` - Truncate an existing file instead of failing
///
/// # Returns
///
/// A trait object implementing [`io::Write`]. Stdout is buffered; files are
/// written unbuffered since the generator already hands over large chunks.
///
/// # Errors
///
/// Returns an error in the following cases:
///
/// - The output file already exists and `force` is `false`
/// - The file cannot be created due to permissions, missing directories, etc.
pub fn open_output(path: &str, force: bool) -> Result<Box<dyn io::Write>> {
    if path == STDOUT_PATH {
        return Ok(Box::new(io::BufWriter::with_capacity(
            DEFAULT_BUFFER_SIZE,
            io::stdout(),
        )));
    }

    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_MODE);
    }

    let file = options.open(path).map_err(|source| {
        let path = Path::new(path).to_path_buf();
        if source.kind() == io::ErrorKind::AlreadyExists && !force {
            Error::OutputExists { path }
        } else {
            Error::CreateOutput { path, source }
        }
    })?;

    Ok(Box::new(file))
}
