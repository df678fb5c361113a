use super::{Cell, Generation};

/// Whether a cell is currently part of the population.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    Dead,
    Alive,
}

impl Status {
    pub const fn is_alive(self) -> bool {
        matches!(self, Status::Alive)
    }

    /// Conway's rule (B3/S23):
    /// 1. Exactly 3 live neighbors gives a live cell, born or surviving
    /// 2. A live cell with exactly 2 neighbors survives
    /// 3. Everything else is dead next generation
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (_, 3) => Status::Alive,
            (Status::Alive, 2) => Status::Alive,
            _ => Status::Dead,
        }
    }
}

impl From<bool> for Status {
    fn from(alive: bool) -> Self {
        if alive { Status::Alive } else { Status::Dead }
    }
}

/// Neighbors of `cell` that are live in `generation`
pub fn living_neighbors(cell: Cell, generation: &Generation) -> impl Iterator<Item = Cell> + '_ {
    cell.neighbors()
        .into_iter()
        .filter(move |neighbor| generation.contains(*neighbor))
}

/// Count live neighbors; at most 8
pub fn count_living_neighbors(cell: Cell, generation: &Generation) -> u8 {
    living_neighbors(cell, generation).count() as u8
}

/// Decide whether `cell` is live in the generation after `generation`
pub fn will_be_alive(cell: Cell, generation: &Generation) -> bool {
    Status::from(generation.contains(cell))
        .evolve(count_living_neighbors(cell, generation))
        .is_alive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Status::Alive.evolve(0), Status::Dead);
        assert_eq!(Status::Alive.evolve(1), Status::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Status::Alive.evolve(2), Status::Alive);
        assert_eq!(Status::Alive.evolve(3), Status::Alive);
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert_eq!(Status::Alive.evolve(n), Status::Dead);
        }
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Status::Dead.evolve(3), Status::Alive);
        assert_eq!(Status::Dead.evolve(2), Status::Dead);
    }

    #[test]
    fn test_living_neighbors() {
        let generation = Generation::seed([(0, 0), (1, 0), (5, 5)]);
        let found: Vec<Cell> = living_neighbors(Cell::new(0, 1), &generation).collect();
        assert_eq!(found.len(), 2);
        assert!(found.contains(&Cell::new(0, 0)));
        assert!(found.contains(&Cell::new(1, 0)));
    }

    #[test]
    fn test_will_be_alive() {
        // Horizontal blinker
        let blinker = Generation::seed([(0, 0), (1, 0), (2, 0)]);

        assert!(will_be_alive(Cell::new(1, 0), &blinker)); // survives with 2
        assert!(will_be_alive(Cell::new(1, 1), &blinker)); // born with 3
        assert!(will_be_alive(Cell::new(1, -1), &blinker));
        assert!(!will_be_alive(Cell::new(0, 0), &blinker)); // only 1 neighbor
        assert!(!will_be_alive(Cell::new(0, 1), &blinker)); // dead with 2
    }

    #[test]
    fn test_empty_generation_stays_dead() {
        let empty = Generation::default();
        assert!(!will_be_alive(Cell::ORIGIN, &empty));
    }
}
