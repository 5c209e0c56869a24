//! Region growth from the anchor cell.
//!
//! The flooded region is the set of cells connected to the anchor through
//! orthogonally adjacent cells of the anchor's color. [`deep`] grows it with
//! an explicit depth-first worklist; [`play_move`] chains a full move.

use log::{debug, trace};

use crate::color::Color;
use crate::constants::ORIGIN;
use crate::coord::{Coord, Direction};
use crate::grid::{Grid, GridError};
use crate::stack::Stack;

/// Result of a neighbour probe: the first direction whose neighbour matches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Neighbour {
    None,
    Above,
    Right,
    Below,
    Left,
}

impl Neighbour {
    /// Numeric code: 0 for no match, then 1..=4 for above, right, below, left.
    pub fn code(self) -> u8 {
        match self {
            Neighbour::None => 0,
            Neighbour::Above => 1,
            Neighbour::Right => 2,
            Neighbour::Below => 3,
            Neighbour::Left => 4,
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Neighbour::None => None,
            Neighbour::Above => Some(Direction::Above),
            Neighbour::Right => Some(Direction::Right),
            Neighbour::Below => Some(Direction::Below),
            Neighbour::Left => Some(Direction::Left),
        }
    }
}

impl From<Direction> for Neighbour {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Above => Neighbour::Above,
            Direction::Right => Neighbour::Right,
            Direction::Below => Neighbour::Below,
            Direction::Left => Neighbour::Left,
        }
    }
}

/// First in-bounds neighbour of `coord`, probing above, right, below, left,
/// whose color is `color` and which `accept` lets through.
fn probe<F>(grid: &Grid, coord: Coord, color: Color, accept: F) -> Result<Neighbour, GridError>
where
    F: Fn(Coord) -> bool,
{
    let size = grid.size();
    // Validates `coord` even when it has no in-bounds neighbour.
    grid.cell(coord)?;
    for dir in Direction::ALL {
        if let Some(n) = coord.step(dir, size) {
            if grid.color_at(n)? == color && accept(n) {
                return Ok(dir.into());
            }
        }
    }
    Ok(Neighbour::None)
}

/// Report the first orthogonal neighbour of `coord` that has `color`.
///
/// Neighbours are checked above, right, below, then left; off-grid
/// neighbours never match. Only the first match is reported.
pub fn test_neighbour(grid: &Grid, coord: Coord, color: Color) -> Result<Neighbour, GridError> {
    probe(grid, coord, color, |_| true)
}

/// Grow the flooded region from `from` into every cell of color `target`
/// reachable through orthogonal adjacency.
///
/// `from` is always marked as flooded. Each newly flooded coordinate is
/// pushed onto `trail` in visit order and `trail` is handed back. Cells are
/// never expanded twice in one pass, so cyclic regions terminate.
pub fn deep(
    target: Color,
    grid: &mut Grid,
    from: Coord,
    mut trail: Stack,
) -> Result<Stack, GridError> {
    let size = grid.size();
    let mut visited = vec![false; size * size];
    let at = |c: Coord| c.row * size + c.col;

    if !grid.is_member(from)? {
        grid.set_member(from)?;
        trail.push(from);
    }
    visited[at(from)] = true;

    let mut path = Stack::with_capacity(size * size);
    path.push(from);
    let mut added = 0;

    while let Some(current) = path.peek() {
        let next = probe(grid, current, target, |n| !visited[at(n)])?;
        match next.direction().and_then(|d| current.step(d, size)) {
            Some(n) => {
                visited[at(n)] = true;
                if !grid.is_member(n)? {
                    grid.set_member(n)?;
                    trail.push(n);
                    added += 1;
                    trace!("flooded {n}");
                }
                path.push(n);
            }
            None => {
                path.pop();
            }
        }
    }

    debug!(
        "flood pass from {from} with {target}: {added} new cells, {} flooded",
        grid.member_count()
    );
    Ok(trail)
}

/// Play one move: repaint the flooded region and the anchor with `color`,
/// then regrow the region from the anchor.
///
/// Returns the coordinates absorbed by this move.
pub fn play_move(grid: &mut Grid, color: Color) -> Result<Stack, GridError> {
    grid.modif_color(color);
    grid.change_color(ORIGIN, color)?;
    deep(color, grid, ORIGIN, Stack::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color::{Blue as B, Green as G, Red as R};

    fn uniform(size: usize, color: Color) -> Grid {
        Grid::from_colors(&vec![vec![color; size]; size]).unwrap()
    }

    #[test]
    fn test_neighbour_corner_prefers_right() {
        let mut grid = uniform(8, B);
        grid.change_color(Coord::new(0, 1), R).unwrap();
        grid.change_color(Coord::new(1, 0), G).unwrap();
        let n = test_neighbour(&grid, ORIGIN, R).unwrap();
        assert_eq!(n, Neighbour::Right);
        assert_eq!(n.code(), 2);
    }

    #[test]
    fn test_neighbour_priority_order() {
        let grid = uniform(8, R);
        let mid = Coord::new(4, 4);
        assert_eq!(test_neighbour(&grid, mid, R), Ok(Neighbour::Above));
        assert_eq!(test_neighbour(&grid, mid, G), Ok(Neighbour::None));

        let mut grid = uniform(8, B);
        grid.change_color(Coord::new(4, 3), G).unwrap();
        grid.change_color(Coord::new(5, 4), G).unwrap();
        assert_eq!(test_neighbour(&grid, mid, G).map(Neighbour::code), Ok(3));

        let mut grid = uniform(8, B);
        grid.change_color(Coord::new(4, 3), G).unwrap();
        assert_eq!(test_neighbour(&grid, mid, G).map(Neighbour::code), Ok(4));
    }

    #[test]
    fn test_neighbour_out_of_bounds() {
        let grid = uniform(8, B);
        assert!(test_neighbour(&grid, Coord::new(0, 8), B).is_err());
    }

    #[test]
    fn test_deep_marks_component_only() {
        // A ring of red around a blue center, plus a detached red cell.
        let mut rows = vec![vec![B; 8]; 8];
        for i in 0..4 {
            rows[0][i] = R;
            rows[3][i] = R;
            rows[i][0] = R;
            rows[i][3] = R;
        }
        rows[7][7] = R;
        let mut grid = Grid::from_colors(&rows).unwrap();

        let trail = deep(R, &mut grid, ORIGIN, Stack::new()).unwrap();
        assert_eq!(trail.len(), 12);
        assert_eq!(grid.member_count(), 12);
        for (coord, cell) in grid.iter() {
            let on_ring = coord.row < 4
                && coord.col < 4
                && (coord.row % 3 == 0 || coord.col % 3 == 0);
            assert_eq!(cell.member, on_ring, "at {coord}");
        }
    }

    #[test]
    fn test_deep_never_revisits() {
        let mut grid = uniform(24, G);
        let trail = deep(G, &mut grid, ORIGIN, Stack::new()).unwrap();
        assert_eq!(trail.len(), 24 * 24);
        let mut seen: Vec<_> = trail.iter().collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 24 * 24);
        assert!(grid.if_flood());
    }

    #[test]
    fn test_deep_is_idempotent() {
        let mut grid = Grid::random_with(12, &mut fastrand::Rng::with_seed(11)).unwrap();
        let color = grid.color_at(ORIGIN).unwrap();
        deep(color, &mut grid, ORIGIN, Stack::new()).unwrap();
        let once = grid.clone();
        let again = deep(color, &mut grid, ORIGIN, Stack::new()).unwrap();
        assert!(again.is_empty());
        assert_eq!(grid, once);
    }

    #[test]
    fn test_deep_extends_trail() {
        let mut grid = uniform(8, B);
        let mut trail = Stack::new();
        trail.push(Coord::new(7, 7));
        let trail = deep(B, &mut grid, ORIGIN, trail).unwrap();
        assert_eq!(trail.as_slice()[0], Coord::new(7, 7));
        assert_eq!(trail.as_slice()[1], ORIGIN);
        assert_eq!(trail.len(), 65);
    }

    #[test]
    fn test_play_move_absorbs_new_color() {
        // Left two columns blue, rest green.
        let rows: Vec<Vec<Color>> = (0..8)
            .map(|_| (0..8).map(|c| if c < 2 { B } else { G }).collect())
            .collect();
        let mut grid = Grid::from_colors(&rows).unwrap();
        deep(B, &mut grid, ORIGIN, Stack::new()).unwrap();
        assert_eq!(grid.member_count(), 16);

        let absorbed = play_move(&mut grid, G).unwrap();
        assert_eq!(absorbed.len(), 48);
        assert!(grid.if_flood());
        assert!(grid.iter().all(|(_, c)| c.color == G));
    }
}
