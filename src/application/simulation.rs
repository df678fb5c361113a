use log::{debug, info};

use crate::domain::{Algorithm, Generation};

/// Simulation orchestrates repeated stepping from a seed.
/// This is the application layer that coordinates domain logic.
#[derive(Clone, Debug, Default)]
pub struct Simulation {
    current: Generation,
    algorithm: Algorithm,
    generation: u64,
}

impl Simulation {
    pub fn new(seed: Generation) -> Self {
        Self {
            current: seed,
            algorithm: Algorithm::default(),
            generation: 0,
        }
    }

    /// Select the stepping algorithm (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn current(&self) -> &Generation {
        &self.current
    }

    /// Number of steps taken since the seed
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation
    pub fn tick(mut self) -> Self {
        self.current = self.algorithm.step(&self.current);
        self.generation += 1;

        let bounds = self.current.bounds();
        debug!(
            "generation {}: population {}, bounds {}..{}",
            self.generation,
            self.current.population(),
            bounds.bottom_left,
            bounds.top_right
        );
        self
    }

    /// Lazy sequence starting with the current generation
    pub fn generations(self) -> Generations {
        Generations {
            simulation: self,
            started: false,
        }
    }
}

/// Iterator over successive generations; the first item is the seed.
/// Each step is fully computed before the next one starts.
pub struct Generations {
    simulation: Simulation,
    started: bool,
}

impl Iterator for Generations {
    type Item = Generation;

    fn next(&mut self) -> Option<Generation> {
        if self.started {
            let simulation = std::mem::take(&mut self.simulation);
            self.simulation = simulation.tick();
        }
        self.started = true;
        Some(self.simulation.current().clone())
    }
}

/// Seed followed by `iterations` successive generations (`iterations + 1` in total)
pub fn iterate(seed: &Generation, iterations: usize) -> Vec<Generation> {
    iterate_with(seed, iterations, Algorithm::default())
}

/// Like `iterate`, stepping with the given algorithm
pub fn iterate_with(seed: &Generation, iterations: usize, algorithm: Algorithm) -> Vec<Generation> {
    info!(
        "simulating {} generations from {} live cells ({})",
        iterations,
        seed.population(),
        algorithm.name()
    );

    let sequence: Vec<Generation> = Simulation::new(seed.clone())
        .with_algorithm(algorithm)
        .generations()
        .take(iterations.saturating_add(1))
        .collect();

    if let Some(last) = sequence.last() {
        info!("finished with {} live cells", last.population());
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    #[test]
    fn test_zero_iterations_returns_seed() {
        let seed = presets::r_pentomino().seed();
        let sequence = iterate(&seed, 0);
        assert_eq!(sequence, vec![seed]);
    }

    #[test]
    fn test_sequence_is_chained() {
        let seed = presets::glider().seed();
        let sequence = iterate(&seed, 6);

        assert_eq!(sequence.len(), 7);
        assert_eq!(sequence[0], seed);
        for window in sequence.windows(2) {
            assert_eq!(window[1], window[0].evolve());
        }
    }

    #[test]
    fn test_seed_is_not_mutated() {
        let seed = presets::acorn().seed();
        let snapshot = seed.clone();
        let _ = iterate(&seed, 3);
        assert_eq!(seed, snapshot);
    }

    #[test]
    fn test_parallel_sequence_matches_serial() {
        let seed = presets::r_pentomino().seed();
        assert_eq!(
            iterate_with(&seed, 20, Algorithm::Parallel),
            iterate_with(&seed, 20, Algorithm::Serial)
        );
    }

    #[test]
    fn test_tick_counts_generations() {
        let simulation = Simulation::new(presets::square().seed()).tick().tick();
        assert_eq!(simulation.generation(), 2);
        assert_eq!(simulation.current(), &presets::square().seed());
    }

    #[test]
    fn test_empty_seed_stays_empty() {
        let sequence = iterate(&Generation::default(), 3);
        assert_eq!(sequence.len(), 4);
        assert!(sequence.iter().all(Generation::is_empty));
    }
}
