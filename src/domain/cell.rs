use std::fmt;

/// Cell is a single position on the unbounded grid.
/// A cell is "live" when it belongs to a `Generation`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

/// Offsets of the 8 cells surrounding a center cell
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Every cell at Chebyshev distance 1, excluding `self`
    pub fn neighbors(self) -> [Cell; 8] {
        NEIGHBOR_OFFSETS.map(|(dx, dy)| self.offset(dx, dy))
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev distance between two cells
    pub fn distance(self, other: Cell) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_cell() {
        assert_eq!(Cell::new(3, -4), Cell::from((3, -4)));
        assert_ne!(Cell::new(3, -4), Cell::new(-4, 3));
        assert_ne!(Cell::new(1, 1), Cell::new(1, 2));
    }

    #[test]
    fn test_neighbors_of_origin() {
        let neighbors: HashSet<Cell> = Cell::ORIGIN.neighbors().into_iter().collect();
        let expected: HashSet<Cell> = [
            (-1, -1), (1, 1), (0, 1), (1, 0),
            (-1, 0), (0, -1), (-1, 1), (1, -1),
        ]
        .into_iter()
        .map(Cell::from)
        .collect();
        assert_eq!(neighbors, expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::new(-2, 7).to_string(), "(-2, 7)");
    }

    proptest! {
        #[test]
        fn test_neighbors_are_eight_distinct_adjacent_cells(
            x in -10_000..=10_000_i32,
            y in -10_000..=10_000_i32,
        ) {
            let center = Cell::new(x, y);
            let neighbors = center.neighbors();
            let unique: HashSet<Cell> = neighbors.iter().copied().collect();

            prop_assert_eq!(unique.len(), 8);
            prop_assert!(!unique.contains(&center));
            for n in neighbors {
                prop_assert_eq!(center.distance(n), 1);
            }
        }
    }
}
