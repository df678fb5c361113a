use std::collections::HashSet;

use rand::Rng;
use rayon::prelude::*;

use super::{BoundingBox, Cell, rules::will_be_alive};

/// Generation is the set of live cells at one step of the simulation.
/// Stepping never mutates a generation; it always produces a new one.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Generation {
    cells: HashSet<Cell>,
}

impl Generation {
    /// Build a generation from any number of `(x, y)` pairs.
    /// Repeated coordinates collapse to a single live cell.
    pub fn seed<I>(coords: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        coords.into_iter().map(Into::into).collect()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Live cells in row-major order, lowest y first
    pub fn sorted(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.iter().collect();
        cells.sort_by_key(|cell| (cell.y, cell.x));
        cells
    }

    /// Minimal box around the live cells; the origin box when empty
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::enclosing(&self.cells)
    }

    /// Copy of this generation shifted by `(dx, dy)`
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        self.iter().map(|cell| cell.offset(dx, dy)).collect()
    }

    /// Region that can hold live cells next generation: every birth happens
    /// next to a current live cell, so one cell of margin is enough.
    fn candidates(&self) -> BoundingBox {
        self.bounds().expanded(1)
    }

    /// Next generation, scanning the candidate region cell by cell (serial)
    pub fn evolve(&self) -> Self {
        self.candidates()
            .cells()
            .filter(move |&cell| will_be_alive(cell, self))
            .collect()
    }

    /// Parallel evolution using rayon, one task per candidate row.
    /// Produces exactly the same generation as `evolve`.
    pub fn evolve_parallel(&self) -> Self {
        let region = self.candidates();
        let cells: HashSet<Cell> = (region.bottom_left.y..=region.top_right.y)
            .into_par_iter()
            .flat_map_iter(|y| {
                (region.bottom_left.x..=region.top_right.x)
                    .map(move |x| Cell::new(x, y))
                    .filter(move |&cell| will_be_alive(cell, self))
            })
            .collect();

        Self { cells }
    }

    /// Random soup inside a `width` x `height` box anchored at the origin.
    /// Each cell is live with probability `density`.
    pub fn random<R: Rng>(width: u32, height: u32, density: f64, rng: &mut R) -> Self {
        let density = density.clamp(0.0, 1.0);
        let mut cells = HashSet::new();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                if rng.random_bool(density) {
                    cells.insert(Cell::new(x, y));
                }
            }
        }
        Self { cells }
    }
}

impl FromIterator<Cell> for Generation {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Generation {
    type Item = &'a Cell;
    type IntoIter = std::collections::hash_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
