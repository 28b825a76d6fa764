//! Generation entry points: single-pass and block-wise.

use log::debug;

use crate::assembler::Assembler;
use crate::config::BLOCK_SIZE;
use crate::literals::SamplePool;
use crate::options::GenerationOptions;
use crate::random::UniformSource;

/// Fills `out` block by block, drawing a fresh sample pool for every block.
///
/// Each block of at most [`BLOCK_SIZE`] bytes gets its own pool and its own
/// assembler state, so working memory stays constant no matter how large
/// `out` is, and the literal population is re-randomized periodically.
pub fn generate_bulk<R>(rng: &mut R, out: &mut [u8], options: &GenerationOptions)
where
    R: UniformSource + ?Sized,
{
    for (index, block) in out.chunks_mut(BLOCK_SIZE).enumerate() {
        let pool = SamplePool::generate(rng, options.literal_exponent());
        let mut assembler = Assembler::with_pool(*options, &pool);
        assembler.fill(rng, block);
        debug!(
            "block {index}: {} bytes, {} refills",
            block.len(),
            assembler.refills()
        );
    }
}

/// Fills `out` in a single pass, evaluating the literal distribution per byte.
///
/// Intended for modest sizes; see [`generate_bulk`] for large outputs.
pub fn generate<R>(rng: &mut R, out: &mut [u8], options: &GenerationOptions)
where
    R: UniformSource + ?Sized,
{
    Assembler::new(*options).fill(rng, out);
}
