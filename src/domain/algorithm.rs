//! Algorithm enum for selecting the stepping implementation.
//!
//! Both variants scan the same candidate region and yield identical
//! generations; they differ only in how the per-cell work is scheduled.

use super::Generation;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell scan on the calling thread
    #[default]
    Serial,
    /// Rows of the scan spread over the rayon thread pool
    Parallel,
}

impl Algorithm {
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "serial",
            Algorithm::Parallel => "parallel",
        }
    }

    /// Compute the generation after `generation`
    pub fn step(self, generation: &Generation) -> Generation {
        match self {
            Algorithm::Serial => generation.evolve(),
            Algorithm::Parallel => generation.evolve_parallel(),
        }
    }
}
