//! Literal sampling.
//!
//! Literals follow a power distribution: a byte is `floor(256 * u^e)` for a
//! uniform `u` in `[0, 1)`. With `e = 1.0` every byte value is equally likely;
//! as `e` grows, small values dominate, which makes the literals look more
//! like text and compress better under entropy coding.

use crate::config::SAMPLE_SIZE;
use crate::random::UniformSource;

/// Maps a uniform draw onto `[0, buckets)` following `u^exponent`.
///
/// The power is evaluated in single precision so that streams stay
/// byte-compatible with the recorded fixture streams. A draw that rounds up to
/// `1.0` in `f32` lands in the top bucket.
#[inline]
pub(crate) fn power_bucket(unit: f64, exponent: f64, buckets: usize) -> usize {
    let scaled = buckets as f32 * (unit as f32).powf(exponent as f32);
    // `as` saturates: NaN maps to 0 and anything at or above `buckets` is clamped below.
    (scaled as usize).min(buckets - 1)
}

/// A fixed set of literals drawn once from the literal distribution.
///
/// Resampling from the pool is cheaper than evaluating the distribution per
/// byte and still reproduces its shape.
#[derive(Clone)]
pub struct SamplePool {
    samples: Box<[u8; SAMPLE_SIZE]>,
}

impl SamplePool {
    /// Draws a fresh pool from the distribution with the given exponent.
    pub fn generate<R>(rng: &mut R, exponent: f64) -> Self
    where
        R: UniformSource + ?Sized,
    {
        let mut samples = Box::new([0u8; SAMPLE_SIZE]);
        fill_from_distribution(rng, &mut samples[..], exponent);
        Self { samples }
    }

    /// Returns the pooled literals.
    pub fn as_slice(&self) -> &[u8] {
        &self.samples[..]
    }

    #[inline]
    fn pick<R>(&self, rng: &mut R) -> u8
    where
        R: UniformSource + ?Sized,
    {
        // SAMPLE_SIZE is a power of two, so the modulo is unbiased.
        self.samples[rng.draw_u32() as usize % SAMPLE_SIZE]
    }
}

impl std::fmt::Debug for SamplePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SamplePool")
            .field("len", &SAMPLE_SIZE)
            .finish_non_exhaustive()
    }
}

/// Where literal bytes come from.
#[derive(Debug, Clone, Copy)]
pub enum LiteralSource<'a> {
    /// Evaluate the power distribution for every byte.
    Distribution {
        /// Distribution exponent
        exponent: f64,
    },
    /// Pick uniformly from a previously drawn pool.
    Pool(&'a SamplePool),
}

impl LiteralSource<'_> {
    /// Fills `out` with literals, consuming one draw per byte.
    pub fn fill<R>(&self, rng: &mut R, out: &mut [u8])
    where
        R: UniformSource + ?Sized,
    {
        match self {
            LiteralSource::Distribution { exponent } => fill_from_distribution(rng, out, *exponent),
            LiteralSource::Pool(pool) => {
                for byte in out {
                    *byte = pool.pick(rng);
                }
            }
        }
    }
}

fn fill_from_distribution<R>(rng: &mut R, out: &mut [u8], exponent: f64)
where
    R: UniformSource + ?Sized,
{
    for byte in out {
        // power_bucket never exceeds 255 here.
        *byte = power_bucket(rng.draw_unit(), exponent, 256) as u8;
    }
}
