//! Uniform random source used by the samplers.
//!
//! Generation only needs a stream of independent uniform 32-bit integers.
//! Any [`RngCore`] provides one; [`Pcg32`] is the default generator because
//! it takes an explicit stream selector alongside the seed.

use rand::RngCore;
use rand_pcg::Pcg32;

use crate::config::DEFAULT_STREAM;

/// Scale factor mapping a `u32` onto `[0, 1)`.
const UNIT_SCALE: f64 = 1.0 / (u32::MAX as f64 + 1.0);

/// A source of uniform 32-bit integers.
///
/// The source carries state that advances on every draw, so one instance
/// must serve one generation at a time. Borrowing it mutably for the
/// duration of a call is what the generation entry points do.
pub trait UniformSource {
    /// Draws the next uniform 32-bit integer.
    fn draw_u32(&mut self) -> u32;

    /// Draws a uniform double in `[0, 1)`.
    ///
    /// Only 32 bits of randomness go into the result, which is plenty for
    /// shaping distributions over 256 buckets.
    fn draw_unit(&mut self) -> f64 {
        f64::from(self.draw_u32()) * UNIT_SCALE
    }
}

impl<R: RngCore + ?Sized> UniformSource for R {
    fn draw_u32(&mut self) -> u32 {
        self.next_u32()
    }
}

/// Generators that can be initialized from a 64-bit seed and stream selector.
pub trait SeedStream: Sized {
    /// Creates a generator positioned at the start of `stream` for `seed`.
    fn from_seed_stream(seed: u64, stream: u64) -> Self;
}

impl SeedStream for Pcg32 {
    fn from_seed_stream(seed: u64, stream: u64) -> Self {
        Pcg32::new(seed, stream)
    }
}

/// Creates the default generator for `seed` on [`DEFAULT_STREAM`].
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::from_seed_stream(seed, DEFAULT_STREAM)
}
