//! # lzdg-core
//!
//! Generator of compressible test data.
//!
//! The output is a sequence of literal runs (fresh bytes drawn from a power
//! distribution) interleaved with match runs (copies of a recently generated
//! buffer), so an LZ-style compressor finds a controllable amount of
//! redundancy. Output is fully determined by the random source, which makes
//! generated corpora reproducible from a seed.
//!
//! ```
//! use lzdg_core::{generate, random, GenerationOptions};
//!
//! let options = GenerationOptions::default().with_ratio(4.0);
//! let mut rng = random::seeded(42);
//! let mut data = vec![0u8; 64 * 1024];
//! generate(&mut rng, &mut data, &options);
//! ```

pub mod assembler;
pub mod buffer;
pub mod config;
pub mod error;
pub mod lengths;
pub mod literals;
pub mod options;
pub mod pipeline;
pub mod random;

mod generate;

pub use assembler::{Assembler, Run};
pub use config::GenerationSummary;
pub use error::{Error, Result};
pub use generate::{generate, generate_bulk};
pub use options::GenerationOptions;
pub use random::{SeedStream, UniformSource};
