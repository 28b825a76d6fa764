//! Generation parameters.

/// Default compression ratio target.
pub const DEFAULT_RATIO: f64 = 3.0;

/// Default exponent for both the literal and the match length distribution.
pub const DEFAULT_EXPONENT: f64 = 3.0;

/// Configuration builder for data generation.
///
/// Values are taken as given. A ratio below `1.0` or a non-positive exponent
/// is not rejected here; it simply produces a statistically extreme stream
/// (for example, a ratio below `1.0` makes match runs vanishingly rare).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    ratio: f64,
    length_exponent: f64,
    literal_exponent: f64,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_RATIO,
            length_exponent: DEFAULT_EXPONENT,
            literal_exponent: DEFAULT_EXPONENT,
        }
    }
}

impl GenerationOptions {
    /// Sets the compression ratio target.
    ///
    /// A run is emitted as fresh literals with probability `1 / ratio` and as
    /// a match otherwise, so roughly `1 / ratio` of the output is new content.
    #[must_use]
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Sets the exponent of the match length distribution.
    ///
    /// `1.0` draws lengths uniformly from `MIN_LEN..=MAX_LEN`; larger values
    /// favour short matches.
    #[must_use]
    pub fn with_length_exponent(mut self, exponent: f64) -> Self {
        self.length_exponent = exponent;
        self
    }

    /// Sets the exponent of the literal distribution.
    ///
    /// `1.0` draws bytes uniformly; larger values favour small byte values.
    #[must_use]
    pub fn with_literal_exponent(mut self, exponent: f64) -> Self {
        self.literal_exponent = exponent;
        self
    }

    /// Returns the compression ratio target.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Returns the match length distribution exponent.
    pub fn length_exponent(&self) -> f64 {
        self.length_exponent
    }

    /// Returns the literal distribution exponent.
    pub fn literal_exponent(&self) -> f64 {
        self.literal_exponent
    }

    /// Probability of emitting a literal run instead of a match.
    pub(crate) fn literal_probability(&self) -> f64 {
        1.0 / self.ratio
    }
}
