//! Axis-aligned bounding rectangles over cells.

use super::Cell;

/// Minimal rectangle enclosing a set of cells, both corners inclusive.
/// An empty set is boxed as the single origin cell by convention.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoundingBox {
    pub bottom_left: Cell,
    pub top_right: Cell,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            bottom_left: Cell::ORIGIN,
            top_right: Cell::ORIGIN,
        }
    }
}

impl BoundingBox {
    pub const fn new(bottom_left: Cell, top_right: Cell) -> Self {
        Self { bottom_left, top_right }
    }

    /// Smallest box containing every cell, or the origin box when `cells` is empty
    pub fn enclosing<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> Self {
        cells
            .into_iter()
            .fold(None, |acc: Option<Self>, &cell| {
                Some(match acc {
                    None => Self::new(cell, cell),
                    Some(b) => Self::new(
                        Cell::new(b.bottom_left.x.min(cell.x), b.bottom_left.y.min(cell.y)),
                        Cell::new(b.top_right.x.max(cell.x), b.top_right.y.max(cell.y)),
                    ),
                })
            })
            .unwrap_or_default()
    }

    /// Grow every edge outward by `margin` cells
    pub const fn expanded(self, margin: i32) -> Self {
        Self {
            bottom_left: self.bottom_left.offset(-margin, -margin),
            top_right: self.top_right.offset(margin, margin),
        }
    }

    pub const fn width(&self) -> usize {
        (self.top_right.x - self.bottom_left.x + 1) as usize
    }

    pub const fn height(&self) -> usize {
        (self.top_right.y - self.bottom_left.y + 1) as usize
    }

    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.bottom_left.x
            && cell.x <= self.top_right.x
            && cell.y >= self.bottom_left.y
            && cell.y <= self.top_right.y
    }

    /// Every cell in the box, bottom row first, left to right
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (self.bottom_left.y..=self.top_right.y).flat_map(move |y| {
            (self.bottom_left.x..=self.top_right.x).map(move |x| Cell::new(x, y))
        })
    }
}
