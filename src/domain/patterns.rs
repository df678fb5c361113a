use std::collections::HashMap;

use super::Generation;

/// Represents a named seed pattern
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: &'static [(i32, i32)], // Absolute coordinates of live cells
}

impl Pattern {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        cells: &'static [(i32, i32)],
    ) -> Self {
        Self { name, description, cells }
    }

    /// Initial generation for this pattern
    pub fn seed(&self) -> Generation {
        Generation::seed(self.cells.iter().copied())
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "rpentomino",
            "Methuselah - stabilizes at gen 1103",
            &[
                (3, 2),
                (2, 3), (3, 3),
                (3, 4), (4, 4),
            ],
        )
    }

    /// Glider next to a block; the glider drifts away from the block
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Glider beside a block (period 4)",
            &[
                (-2, -2), (-1, -2),
                (-2, -1), (-1, -1),
                (1, 1), (2, 1), (3, 1),
                (3, 2),
                (2, 3),
            ],
        )
    }

    /// Square (block) - simple still life
    pub fn square() -> Pattern {
        Pattern::new(
            "square",
            "Still life",
            &[
                (1, 1), (2, 1),
                (1, 2), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "blinker",
            "Oscillator (period 2)",
            &[(0, 1), (1, 1), (2, 1)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "toad",
            "Oscillator (period 2)",
            &[
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "beacon",
            "Oscillator (period 2)",
            &[
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "lwss",
            "Lightweight Spaceship (period 4)",
            &[
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "acorn",
            "Methuselah - stabilizes at gen 5206",
            &[
                (1, 0),
                (3, 1),
                (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            r_pentomino(),
            glider(),
            square(),
            blinker(),
            toad(),
            beacon(),
            lwss(),
            acorn(),
        ]
    }

    /// Patterns keyed by name
    pub fn catalog() -> HashMap<&'static str, Pattern> {
        all_patterns()
            .into_iter()
            .map(|pattern| (pattern.name, pattern))
            .collect()
    }

    /// Look up a pattern by its exact name
    pub fn find(name: &str) -> Option<Pattern> {
        catalog().remove(name)
    }
}
