//! Pipeline module streaming generated data into writers.
//!
//! Data is produced with [`generate_bulk`](crate::generate_bulk) one
//! [`BLOCK_SIZE`](crate::config::BLOCK_SIZE) chunk at a time, so the output is
//! byte-identical to a single `generate_bulk` call over the whole size while
//! memory use stays bounded.

#[cfg(feature = "async")]
mod r#async;
mod sync;

#[cfg(feature = "async")]
pub use r#async::write_generated_async;
pub use sync::write_generated;

/// Chunk capacity for a stream of `size` bytes.
fn chunk_capacity(size: u64) -> usize {
    usize::try_from(size).map_or(crate::config::BLOCK_SIZE, |size| {
        size.min(crate::config::BLOCK_SIZE)
    })
}

/// Number of bytes to produce next, given how many remain.
fn next_chunk(remaining: u64, capacity: usize) -> usize {
    usize::try_from(remaining).map_or(capacity, |remaining| remaining.min(capacity))
}
