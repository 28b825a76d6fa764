//! Command line argument parsing for lzdgen

use clap::{ArgAction, Parser};

use lzdg_cli::{
    parse_exponent, parse_ratio, parse_seed, parse_size, CliConfig, Error, Result,
    DEFAULT_SIZE, LITERAL_EXPONENT, MATCH_EXPONENT,
};
use lzdg_core::GenerationOptions;

/// Compressible test data generator
///
/// Writes a stream of literal and match runs whose redundancy is controlled by
/// a target compression ratio, reproducible from a seed.
#[derive(Parser, Debug)]
#[command(
    name = "lzdgen",
    version,
    about = "Generate compressible test data",
    long_about = "lzdgen writes pseudo-random data with LZ-style redundancy. The ratio \
                 controls how often runs repeat earlier data; the exponents skew literal \
                 values and match lengths towards small values.",
    after_help = "If OUTFILE is `-', write to standard output."
)]
pub struct LzdgenOpts {
    /// Output file
    #[arg(value_name = "OUTFILE")]
    pub files: Vec<String>,

    /// Write output to OUTFILE
    #[arg(short = 'o', long = "output", value_name = "OUTFILE")]
    pub output: Option<String>,

    /// Overwrite output file
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Literal distribution exponent [3.0]
    #[arg(
        short = 'l',
        long = "literal-exp",
        value_name = "EXP",
        allow_negative_numbers = true
    )]
    pub literal_exp: Option<String>,

    /// Match length distribution exponent [3.0]
    #[arg(
        short = 'm',
        long = "match-exp",
        value_name = "EXP",
        allow_negative_numbers = true
    )]
    pub match_exp: Option<String>,

    /// Compression ratio target [3.0]
    #[arg(short = 'r', long = "ratio", value_name = "RATIO", allow_negative_numbers = true)]
    pub ratio: Option<String>,

    /// Use 64-bit SEED to seed PRNG
    #[arg(short = 'S', long = "seed", value_name = "SEED")]
    pub seed: Option<String>,

    /// Size with optional k/m/g/t suffix [1m]
    #[arg(short = 's', long = "size", value_name = "SIZE")]
    pub size: Option<String>,

    /// Verbose mode (repeat for more detail)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl LzdgenOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Resolve the single output name from the positional and `-o` arguments
    pub fn output_path(&self) -> Result<String> {
        let mut outputs = self.files.iter().chain(self.output.iter());
        match (outputs.next(), outputs.next()) {
            (Some(output), None) => Ok(output.clone()),
            (None, _) => Err(Error::MissingOutput),
            (Some(_), Some(_)) => Err(Error::TooManyOutputs),
        }
    }

    /// Build generation options from the ratio and exponent arguments
    pub fn generation_options(&self) -> Result<GenerationOptions> {
        let mut options = GenerationOptions::default();
        if let Some(exp) = &self.literal_exp {
            options = options.with_literal_exponent(parse_exponent(exp, LITERAL_EXPONENT)?);
        }
        if let Some(exp) = &self.match_exp {
            options = options.with_length_exponent(parse_exponent(exp, MATCH_EXPONENT)?);
        }
        if let Some(ratio) = &self.ratio {
            options = options.with_ratio(parse_ratio(ratio)?);
        }
        Ok(options)
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> Result<CliConfig> {
        let options = self.generation_options()?;
        let seed = self.seed.as_deref().map(parse_seed).transpose()?;
        let size = self
            .size
            .as_deref()
            .map(parse_size)
            .transpose()?
            .unwrap_or(DEFAULT_SIZE);

        Ok(CliConfig {
            output: self.output_path()?,
            force: self.force,
            size,
            seed,
            options,
            verbose: self.verbose,
        })
    }
}
