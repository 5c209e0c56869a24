//! The square grid of colored cells.
//!
//! A [`Grid`] owns `size * size` [`Cell`]s stored row-major in a flat `Vec`.
//! Every accessor is bounds-checked and reports [`GridError::OutOfBounds`]
//! instead of indexing past the end.

use std::fmt;

use log::{debug, trace};

use crate::color::Color;
use crate::constants::{MAX_SIZE, MIN_SIZE};
use crate::coord::Coord;

/// A single grid square.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// True iff the cell belongs to the flooded region.
    pub member: bool,
    pub color: Color,
}

/// Errors raised by grid construction and access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Requested side is outside `MIN_SIZE..=MAX_SIZE`
    InvalidSize(usize),
    /// Coordinate does not address a cell of the grid
    OutOfBounds { coord: Coord, size: usize },
    /// Rows handed to `Grid::from_colors` are not all `size` long
    Ragged { row: usize, len: usize, size: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidSize(size) => write!(
                f,
                "invalid grid size {size}: must be between {MIN_SIZE} and {MAX_SIZE}"
            ),
            GridError::OutOfBounds { coord, size } => {
                write!(f, "coordinate {coord} is outside the {size}x{size} grid")
            }
            GridError::Ragged { row, len, size } => {
                write!(f, "row {row} has {len} cells, expected {size}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A square grid of cells, `size` in `MIN_SIZE..=MAX_SIZE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

fn check_size(size: usize) -> Result<(), GridError> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(GridError::InvalidSize(size))
    }
}

impl Grid {
    /// Allocate a `size`x`size` grid with no flooded cells.
    ///
    /// Every cell gets the default color; callers are expected to paint it.
    pub fn initialize(size: usize) -> Result<Self, GridError> {
        check_size(size)?;
        debug!("initializing {size}x{size} grid");
        Ok(Grid {
            size,
            cells: vec![Cell::default(); size * size],
        })
    }

    /// Allocate a grid with every cell colored uniformly at random.
    pub fn random(size: usize) -> Result<Self, GridError> {
        Self::random_with(size, &mut fastrand::Rng::new())
    }

    /// Like [`Grid::random`], drawing colors from the given generator so a
    /// seeded `Rng` reproduces the same grid.
    pub fn random_with(size: usize, rng: &mut fastrand::Rng) -> Result<Self, GridError> {
        let mut grid = Self::initialize(size)?;
        for cell in &mut grid.cells {
            cell.color = Color::random(rng);
        }
        Ok(grid)
    }

    /// Build a grid from explicit rows of colors. No cell starts flooded.
    pub fn from_colors<R: AsRef<[Color]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = rows.len();
        let mut grid = Self::initialize(size)?;
        for (row, colors) in rows.iter().enumerate() {
            let colors = colors.as_ref();
            if colors.len() != size {
                return Err(GridError::Ragged {
                    row,
                    len: colors.len(),
                    size,
                });
            }
            for (col, &color) in colors.iter().enumerate() {
                grid.cells[row * size + col].color = color;
            }
        }
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, coord: Coord) -> Result<usize, GridError> {
        if coord.in_bounds(self.size) {
            Ok(coord.row * self.size + coord.col)
        } else {
            Err(GridError::OutOfBounds {
                coord,
                size: self.size,
            })
        }
    }

    pub fn cell(&self, coord: Coord) -> Result<Cell, GridError> {
        Ok(self.cells[self.idx(coord)?])
    }

    pub fn color_at(&self, coord: Coord) -> Result<Color, GridError> {
        self.cell(coord).map(|c| c.color)
    }

    pub fn is_member(&self, coord: Coord) -> Result<bool, GridError> {
        self.cell(coord).map(|c| c.member)
    }

    /// Mark the cell at `coord` as part of the flooded region.
    pub(crate) fn set_member(&mut self, coord: Coord) -> Result<(), GridError> {
        let i = self.idx(coord)?;
        self.cells[i].member = true;
        Ok(())
    }

    /// Recolor the single cell at `coord`.
    pub fn change_color(&mut self, coord: Coord, color: Color) -> Result<&mut Self, GridError> {
        let i = self.idx(coord)?;
        trace!("cell {coord}: {} -> {color}", self.cells[i].color);
        self.cells[i].color = color;
        Ok(self)
    }

    /// Repaint every flooded cell with `color`; other cells keep theirs.
    pub fn modif_color(&mut self, color: Color) {
        for cell in self.cells.iter_mut().filter(|c| c.member) {
            cell.color = color;
        }
    }

    /// True iff every cell belongs to the flooded region.
    pub fn if_flood(&self) -> bool {
        self.cells.iter().all(|c| c.member)
    }

    /// Number of flooded cells.
    pub fn member_count(&self) -> usize {
        self.cells.iter().filter(|c| c.member).count()
    }

    /// Iterate over every coordinate with its cell, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Coord::new(i / size, i % size), cell))
    }

    /// Release the grid's storage. The grid cannot be used afterwards.
    pub fn free_space(self) {
        debug!("releasing {}x{} grid", self.size, self.size);
        drop(self);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.color)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
