//! Flood-It: grow a colored region until it covers the whole grid.
//!
//! A square grid of colored cells is flooded from its top-left corner. Each
//! move repaints the flooded region with a new color, which absorbs every
//! adjacent cell of that color. The game is won once every cell is flooded.
//!
//! ## Modules
//!
//! - [`constants`] - Grid size bounds and the move allowance
//! - [`color`] - The six-color palette
//! - [`coord`] - Coordinates and orthogonal directions
//! - [`stack`] - Coordinate stack used by the flood traversal
//! - [`grid`] - Grid storage, recoloring and the win check
//! - [`flood`] - Neighbour probe and region growth
//! - [`game`] - Move counting and game outcome
//! - [`session`] - Text command driver
//!
//! ## Example
//!
//! ```
//! use flood_it::color::Color;
//! use flood_it::game::{Game, Outcome};
//! use flood_it::grid::Grid;
//!
//! let grid = Grid::random(8).unwrap();
//! let mut game = Game::new(grid).unwrap();
//! while game.outcome() == Outcome::InProgress {
//!     let color = game.greedy_choice().unwrap();
//!     game.play(color).unwrap();
//! }
//! println!("{}", game.grid());
//! ```

pub mod color;
pub mod constants;
pub mod coord;
pub mod flood;
pub mod game;
pub mod grid;
pub mod session;
pub mod stack;
