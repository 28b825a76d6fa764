//! Stream assembly: alternating literal and match runs.
//!
//! Each run takes its length from a [`LengthTable`], scanning from the longest
//! length down. When the table runs dry, both the table and the match buffer
//! are regenerated, so the cost of the samplers is amortized over many runs.
//! Whether a run is fresh literals or a copy of the match buffer is decided by
//! a coin weighted with `1 / ratio`.

use log::{debug, trace};

use crate::config::{LEN_PER_CHUNK, MAX_LEN, NUM_LEN};
use crate::lengths::LengthTable;
use crate::literals::{LiteralSource, SamplePool};
use crate::options::GenerationOptions;
use crate::random::UniformSource;

/// A run emitted by the assembler, as reported to [`Assembler::fill_observed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Run {
    /// Fresh literals of the given length.
    Literal(usize),
    /// The single literal inserted between two consecutive matches.
    Break,
    /// A copy of the first `n` bytes of the match buffer.
    Match(usize),
}

impl Run {
    /// Number of output bytes covered by the run.
    pub fn len(&self) -> usize {
        match *self {
            Run::Literal(n) | Run::Match(n) => n,
            Run::Break => 1,
        }
    }

    /// Returns `true` for a zero-length run. Never reported by the assembler.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Length cursor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Scanning,
    Exhausted,
}

/// Generation state for one output region.
///
/// Owns the length table, the match buffer and the cursor. Nothing here is
/// shared between assemblers, so independent generations never interfere.
pub struct Assembler<'a> {
    options: GenerationOptions,
    literals: LiteralSource<'a>,
    lengths: LengthTable,
    match_buffer: [u8; MAX_LEN],
    cursor: usize,
    last_was_match: bool,
    refills: u64,
}

impl Assembler<'static> {
    /// Creates an assembler drawing every literal from the distribution.
    pub fn new(options: GenerationOptions) -> Self {
        Self::with_source(
            options,
            LiteralSource::Distribution {
                exponent: options.literal_exponent(),
            },
        )
    }
}

impl<'a> Assembler<'a> {
    /// Creates an assembler resampling literals from `pool`.
    pub fn with_pool(options: GenerationOptions, pool: &'a SamplePool) -> Self {
        Self::with_source(options, LiteralSource::Pool(pool))
    }

    fn with_source(options: GenerationOptions, literals: LiteralSource<'a>) -> Self {
        // An empty table with the cursor at zero forces a refill on the first run.
        Self {
            options,
            literals,
            lengths: LengthTable::default(),
            match_buffer: [0; MAX_LEN],
            cursor: 0,
            last_was_match: false,
            refills: 0,
        }
    }

    /// Number of times the length table and match buffer have been regenerated.
    pub fn refills(&self) -> u64 {
        self.refills
    }

    /// Fills `out` completely.
    pub fn fill<R>(&mut self, rng: &mut R, out: &mut [u8])
    where
        R: UniformSource + ?Sized,
    {
        self.fill_observed(rng, out, |_| {});
    }

    /// Fills `out` completely, reporting every emitted run to `observe`.
    ///
    /// Runs are reported in output order and their lengths add up to
    /// `out.len()`. Consecutive [`Run::Match`] values are always separated by
    /// a [`Run::Break`].
    pub fn fill_observed<R, F>(&mut self, rng: &mut R, out: &mut [u8], mut observe: F)
    where
        R: UniformSource + ?Sized,
        F: FnMut(Run),
    {
        let size = out.len();
        let literal_probability = self.options.literal_probability();
        let refills_before = self.refills;
        let mut pos = 0;

        while pos < size {
            let mut len = self.next_length(rng).min(size - pos);

            if rng.draw_unit() < literal_probability {
                self.literals.fill(rng, &mut out[pos..pos + len]);
                self.last_was_match = false;
                observe(Run::Literal(len));
            } else {
                if self.last_was_match {
                    self.literals.fill(rng, &mut out[pos..=pos]);
                    pos += 1;
                    len = len.min(size - pos);
                    observe(Run::Break);
                }

                // The break literal may have used up the last byte.
                if len > 0 {
                    out[pos..pos + len].copy_from_slice(&self.match_buffer[..len]);
                    observe(Run::Match(len));
                }
                self.last_was_match = true;
            }

            pos += len;
        }

        debug!(
            "assembled {size} bytes with {} length table refills",
            self.refills - refills_before
        );
    }

    /// Picks the next length, regenerating the table when it is used up.
    fn next_length<R>(&mut self, rng: &mut R) -> usize
    where
        R: UniformSource + ?Sized,
    {
        let mut state = Scan::Scanning;
        loop {
            state = match state {
                Scan::Scanning if self.lengths.count(self.cursor) > 0 => break,
                Scan::Scanning if self.cursor == 0 => Scan::Exhausted,
                Scan::Scanning => {
                    self.cursor -= 1;
                    Scan::Scanning
                }
                Scan::Exhausted => {
                    self.refill(rng);
                    self.cursor = NUM_LEN - 1;
                    Scan::Scanning
                }
            };
        }

        self.lengths.take(self.cursor)
    }

    /// Draws a new match buffer and then a new length table, in that order.
    fn refill<R>(&mut self, rng: &mut R)
    where
        R: UniformSource + ?Sized,
    {
        self.literals.fill(rng, &mut self.match_buffer);
        self.lengths
            .regenerate(rng, LEN_PER_CHUNK, self.options.length_exponent());
        self.refills += 1;
        trace!("regenerated match buffer and length table (refill {})", self.refills);
    }
}
