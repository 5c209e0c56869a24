//! Grid coordinates and orthogonal steps.

use std::fmt;

/// A `(row, col)` position on the grid, 0-indexed from the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// The neighbour one step in `dir`, or `None` if it falls outside a
    /// `size`x`size` grid.
    pub fn step(self, dir: Direction, size: usize) -> Option<Coord> {
        let (dr, dc) = dir.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(Coord { row, col })
    }

    pub fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orthogonal direction. Declaration order is the neighbour probe order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Above,
    Right,
    Below,
    Left,
}

impl Direction {
    /// Probe order: above, right, below, left.
    pub const ALL: [Direction; 4] = [
        Direction::Above,
        Direction::Right,
        Direction::Below,
        Direction::Left,
    ];

    /// `(row, col)` offset of one step in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Above => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Below => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}
