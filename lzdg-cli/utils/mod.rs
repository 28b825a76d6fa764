//! Small parsing and formatting helpers for the CLI.

pub(crate) mod bytes;
pub(crate) mod number;
pub(crate) mod size;

pub use bytes::format_size;
pub use number::{parse_exponent, parse_ratio, parse_seed, LITERAL_EXPONENT, MATCH_EXPONENT};
pub use size::parse_size;
