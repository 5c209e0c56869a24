//! A single game: grid, move counter and outcome.

use std::fmt;

use log::info;

use crate::color::Color;
use crate::constants::{ORIGIN, default_moves};
use crate::flood::{deep, play_move};
use crate::grid::{Grid, GridError};
use crate::stack::Stack;

/// State of a game after the last move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    /// Move allowance used up without flooding the grid
    Lost,
}

/// Errors from playing a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game is already won or lost
    Finished(Outcome),
    Grid(GridError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Finished(Outcome::Won) => write!(f, "game over: grid already flooded"),
            GameError::Finished(_) => write!(f, "game over: no moves left"),
            GameError::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Grid(e) => Some(e),
            GameError::Finished(_) => None,
        }
    }
}

impl From<GridError> for GameError {
    fn from(e: GridError) -> Self {
        GameError::Grid(e)
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    /// Moves played so far
    moves: usize,
    /// Moves allowed before the game is lost
    max_moves: usize,
}

impl Game {
    /// Start a game on `grid` with the default move allowance for its size.
    pub fn new(grid: Grid) -> Result<Self, GridError> {
        let max_moves = default_moves(grid.size());
        Self::with_max_moves(grid, max_moves)
    }

    /// Start a game on `grid`, flooding the anchor's initial region.
    pub fn with_max_moves(mut grid: Grid, max_moves: usize) -> Result<Self, GridError> {
        let color = grid.color_at(ORIGIN)?;
        deep(color, &mut grid, ORIGIN, Stack::new())?;
        info!(
            "new {0}x{0} game, {1} moves allowed, {2} cells flooded",
            grid.size(),
            max_moves,
            grid.member_count()
        );
        Ok(Game {
            grid,
            moves: 0,
            max_moves,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn max_moves(&self) -> usize {
        self.max_moves
    }

    pub fn moves_left(&self) -> usize {
        self.max_moves.saturating_sub(self.moves)
    }

    /// Color of the anchor, i.e. of the whole flooded region.
    pub fn current_color(&self) -> Color {
        // The anchor was validated when the game started.
        self.grid.color_at(ORIGIN).unwrap_or_default()
    }

    pub fn outcome(&self) -> Outcome {
        if self.grid.if_flood() {
            Outcome::Won
        } else if self.moves >= self.max_moves {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }

    /// Flood with `color` and return the resulting outcome.
    ///
    /// Choosing the region's current color changes nothing and does not
    /// count as a move.
    pub fn play(&mut self, color: Color) -> Result<Outcome, GameError> {
        match self.outcome() {
            Outcome::InProgress => {}
            done => return Err(GameError::Finished(done)),
        }
        if color == self.current_color() {
            return Ok(Outcome::InProgress);
        }

        let absorbed = play_move(&mut self.grid, color)?;
        self.moves += 1;
        let outcome = self.outcome();
        info!(
            "move {}: {} absorbed {} cells ({}/{} flooded), {:?}",
            self.moves,
            color.name(),
            absorbed.len(),
            self.grid.member_count(),
            self.grid.size() * self.grid.size(),
            outcome
        );
        Ok(outcome)
    }

    /// The color that would absorb the most cells right now.
    ///
    /// Ties go to the earliest palette color. Used by the demo player.
    pub fn greedy_choice(&self) -> Result<Color, GridError> {
        let current = self.current_color();
        let mut best = None;
        for color in Color::ALL.into_iter().filter(|&c| c != current) {
            let mut trial = self.grid.clone();
            let gained = play_move(&mut trial, color)?.len();
            if best.is_none_or(|(_, g)| gained > g) {
                best = Some((color, gained));
            }
        }
        Ok(best.map_or(current, |(c, _)| c))
    }

    /// Consume the game and release its grid.
    pub fn finish(self) {
        self.grid.free_space();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color::{Blue as B, Green as G, Red as R};

    fn striped() -> Grid {
        // Columns cycle blue, green, red.
        let rows: Vec<Vec<Color>> = (0..8)
            .map(|_| (0..8).map(|c| [B, G, R][c % 3]).collect())
            .collect();
        Grid::from_colors(&rows).unwrap()
    }

    #[test]
    fn test_new_floods_anchor_region() {
        let game = Game::new(striped()).unwrap();
        assert_eq!(game.grid().member_count(), 8);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.max_moves(), 15);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_same_color_is_free() {
        let mut game = Game::new(striped()).unwrap();
        assert_eq!(game.play(B), Ok(Outcome::InProgress));
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_win_by_cycling() {
        let mut game = Game::new(striped()).unwrap();
        let mut outcome = Outcome::InProgress;
        for color in [G, R, B, G, R, B, G] {
            outcome = game.play(color).unwrap();
        }
        assert_eq!(outcome, Outcome::Won);
        assert_eq!(game.moves(), 7);
        assert_eq!(game.play(R), Err(GameError::Finished(Outcome::Won)));
    }

    #[test]
    fn test_lose_when_out_of_moves() {
        let mut game = Game::with_max_moves(striped(), 2).unwrap();
        assert_eq!(game.play(G), Ok(Outcome::InProgress));
        assert_eq!(game.play(R), Ok(Outcome::Lost));
        assert_eq!(game.moves_left(), 0);
        assert!(matches!(
            game.play(B),
            Err(GameError::Finished(Outcome::Lost))
        ));
    }

    #[test]
    fn test_greedy_choice() {
        let game = Game::new(striped()).unwrap();
        assert_eq!(game.greedy_choice(), Ok(G));
    }
}
