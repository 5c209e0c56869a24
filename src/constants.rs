//! Constants for grid dimensions and game parameters.
//!
//! Grids are always square. Cells are addressed by `(row, col)` with the
//! origin in the top-left corner.

use crate::coord::Coord;

// =============================================================================
// Grid Geometry
// =============================================================================

/// Smallest accepted grid side.
pub const MIN_SIZE: usize = 8;

/// Largest accepted grid side.
pub const MAX_SIZE: usize = 24;

/// Grid side used when none is requested.
pub const DEFAULT_SIZE: usize = 14;

/// The anchor cell the flooded region grows from.
pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

// =============================================================================
// Move Allowance
// =============================================================================

/// Moves allowed on a `REFERENCE_SIZE` grid.
pub const REFERENCE_MOVES: usize = 25;

/// Grid side the move allowance is scaled from.
pub const REFERENCE_SIZE: usize = 14;

/// Number of moves a player gets on a grid of the given side.
///
/// Scales the classic 25 moves on a 14x14 grid linearly, rounding up.
pub const fn default_moves(size: usize) -> usize {
    (size * REFERENCE_MOVES).div_ceil(REFERENCE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_moves_reference() {
        assert_eq!(default_moves(REFERENCE_SIZE), REFERENCE_MOVES);
    }

    #[test]
    fn test_default_moves_bounds() {
        assert_eq!(default_moves(MIN_SIZE), 15);
        assert_eq!(default_moves(MAX_SIZE), 43);
    }
}
