//! Asynchronous generation pipeline.

use log::trace;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::buffer::Buffer;
use crate::config::GenerationSummary;
use crate::error::Result;
use crate::generate::generate_bulk;
use crate::options::GenerationOptions;
use crate::random::UniformSource;

use super::{chunk_capacity, next_chunk};

/// Generates `size` bytes and writes them asynchronously into `writer`.
///
/// Generation of each chunk runs to completion before the chunk is written,
/// so the output is identical to [`write_generated`](super::write_generated).
///
/// # Parameters
///
/// * `rng` - Random source, already seeded by the caller
/// * `writer` - Output destination implementing [`AsyncWrite`] + [`Unpin`] traits
/// * `size` - Number of bytes to produce
/// * `options` - Generation parameters [`GenerationOptions`]
///
/// # Errors
///
/// This function will return an error if:
///
/// - The chunk buffer cannot be allocated
/// - Async writes or the final flush fail
pub async fn write_generated_async<R, W>(
    rng: &mut R,
    mut writer: W,
    size: u64,
    options: &GenerationOptions,
) -> Result<GenerationSummary>
where
    R: UniformSource + ?Sized,
    W: AsyncWrite + Unpin,
{
    let capacity = chunk_capacity(size);
    let mut buffer = Buffer::new(capacity)?;
    let mut total_out = 0u64;
    let mut chunks = 0u64;

    while total_out < size {
        let num = next_chunk(size - total_out, capacity);
        let chunk = &mut buffer[..num];

        generate_bulk(rng, chunk, options);
        writer.write_all(chunk).await?;

        total_out += num as u64;
        chunks += 1;
        trace!("wrote chunk {chunks} ({total_out}/{size} bytes)");
    }

    writer.flush().await?;
    Ok(GenerationSummary::new(total_out, chunks))
}
