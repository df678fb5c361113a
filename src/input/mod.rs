//! Command-line arguments and their validation into a run request.

use clap::{ArgAction, Parser};
use log::LevelFilter;
use thiserror::Error;

use crate::domain::{Algorithm, Pattern, presets};
use crate::rendering::Glyphs;

/// Fixed message printed whenever the arguments cannot be turned into a run
pub const USAGE: &str = "Usage: life_cli <PATTERN> <ITERATIONS>  (e.g. life_cli rpentomino 50)";

/// Simulate Conway's Game of Life from a named seed pattern.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of the seed pattern (see --list).
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,
    /// Number of generations to compute after the seed.
    #[arg(value_name = "ITERATIONS", allow_negative_numbers = true)]
    pub iterations: Option<String>,
    /// Spread each step's cell scan over all cores.
    #[arg(long)]
    pub parallel: bool,
    /// Glyph drawn for live cells.
    #[arg(long, value_name = "CHAR", default_value_t = Glyphs::default().live)]
    pub live: char,
    /// Glyph drawn for dead cells.
    #[arg(long, value_name = "CHAR", default_value_t = Glyphs::default().dead)]
    pub dead: char,
    /// Print the available patterns and exit.
    #[arg(long)]
    pub list: bool,
    /// Increase log verbosity (repeat for more).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Why the arguments do not describe a simulation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("no pattern given")]
    MissingPattern,
    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),
    #[error("no iteration count given")]
    MissingIterations,
    #[error("iteration count `{0}` is not an integer")]
    InvalidIterations(String),
    #[error("iteration count {0} is negative")]
    NegativeIterations(i64),
}

/// A validated simulation run
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub pattern: Pattern,
    pub iterations: usize,
    pub algorithm: Algorithm,
    pub glyphs: Glyphs,
}

impl Args {
    /// Validate the positional arguments against the pattern catalog
    pub fn request(&self) -> Result<RunRequest, RequestError> {
        let name = self.pattern.as_deref().ok_or(RequestError::MissingPattern)?;
        let pattern = presets::find(name).ok_or_else(|| RequestError::UnknownPattern(name.to_owned()))?;
        let count = self.iterations.as_deref().ok_or(RequestError::MissingIterations)?;

        Ok(RunRequest {
            pattern,
            iterations: parse_iterations(count)?,
            algorithm: self.algorithm(),
            glyphs: Glyphs::new(self.live, self.dead),
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        if self.parallel {
            Algorithm::Parallel
        } else {
            Algorithm::Serial
        }
    }

    /// Log level selected by the number of `-v` flags
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Parse a non-negative iteration count; negative counts are rejected
pub fn parse_iterations(text: &str) -> Result<usize, RequestError> {
    let count: i64 = text
        .trim()
        .parse()
        .map_err(|_| RequestError::InvalidIterations(text.to_owned()))?;
    if count < 0 {
        return Err(RequestError::NegativeIterations(count));
    }
    usize::try_from(count).map_err(|_| RequestError::InvalidIterations(text.to_owned()))
}

/// One line per catalog entry, in catalog order
pub fn pattern_listing() -> String {
    presets::all_patterns()
        .iter()
        .map(|pattern| format!("{:<12} {}\n", pattern.name, pattern.description))
        .collect()
}
