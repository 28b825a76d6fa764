//! Synchronous generation pipeline.

use std::io::Write;

use log::trace;

use crate::buffer::Buffer;
use crate::config::GenerationSummary;
use crate::error::Result;
use crate::generate::generate_bulk;
use crate::options::GenerationOptions;
use crate::random::UniformSource;

use super::{chunk_capacity, next_chunk};

/// Generates `size` bytes and writes them into `writer`.
///
/// # Parameters
///
/// * `rng` - Random source, already seeded by the caller
/// * `writer` - Output destination implementing [`Write`] trait
/// * `size` - Number of bytes to produce
/// * `options` - Generation parameters [`GenerationOptions`]
///
/// # Returns
///
/// Returns a [`GenerationSummary`] with the number of bytes and chunks written.
///
/// # Errors
///
/// This function will return an error if:
///
/// - The chunk buffer cannot be allocated
/// - Writing to or flushing `writer` fails; anything already written is left in place
pub fn write_generated<R, W>(
    rng: &mut R,
    mut writer: W,
    size: u64,
    options: &GenerationOptions,
) -> Result<GenerationSummary>
where
    R: UniformSource + ?Sized,
    W: Write,
{
    let capacity = chunk_capacity(size);
    let mut buffer = Buffer::new(capacity)?;
    let mut total_out = 0u64;
    let mut chunks = 0u64;

    while total_out < size {
        let num = next_chunk(size - total_out, capacity);
        let chunk = &mut buffer[..num];

        generate_bulk(rng, chunk, options);
        writer.write_all(chunk)?;

        total_out += num as u64;
        chunks += 1;
        trace!("wrote chunk {chunks} ({total_out}/{size} bytes)");
    }

    writer.flush()?;
    Ok(GenerationSummary::new(total_out, chunks))
}
