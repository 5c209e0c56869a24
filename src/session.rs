//! Line-oriented command driver.
//!
//! Reads one command per line and answers in the style of the Go Text
//! Protocol: `=` followed by the result on success, `?` followed by an error
//! message on failure, each reply terminated by a blank line. A command may
//! be prefixed with a numeric id, which is echoed back.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `new [size]` - Start a new random game, keeping the size if omitted
//! - `seed <n>` - Seed the generator used by `new`
//! - `show` - Render the grid
//! - `play <color>` - Flood with a color, by letter or name
//! - `status` - Report moves played, moves left and the outcome
//!
//! ## Example
//!
//! ```ignore
//! use flood_it::session::Session;
//! let mut session = Session::new(14, None, None)?;
//! session.run()?;
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::color::Color;
use crate::constants::default_moves;
use crate::game::{Game, Outcome};
use crate::grid::{Grid, GridError};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "known_command",
    "list_commands",
    "name",
    "new",
    "play",
    "quit",
    "seed",
    "show",
    "status",
    "version",
];

/// Driver state.
pub struct Session {
    game: Game,
    rng: fastrand::Rng,
    /// Fixed move allowance; `None` scales with the grid size
    max_moves: Option<usize>,
}

impl Session {
    /// Start a session with a random grid of the given size.
    pub fn new(size: usize, seed: Option<u64>, max_moves: Option<usize>) -> Result<Self, GridError> {
        let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
        let game = Self::fresh_game(size, &mut rng, max_moves)?;
        Ok(Session {
            game,
            rng,
            max_moves,
        })
    }

    fn fresh_game(
        size: usize,
        rng: &mut fastrand::Rng,
        max_moves: Option<usize>,
    ) -> Result<Game, GridError> {
        let grid = Grid::random_with(size, rng)?;
        Game::with_max_moves(grid, max_moves.unwrap_or_else(|| default_moves(size)))
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop on stdin and stdout.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop over arbitrary streams until `quit` or EOF.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];
            debug!("command {command} {args:?}");

            let (success, message) = self.execute(&command, args);
            if !success {
                warn!("{command} failed: {message}");
            }
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n").context("failed to write reply")?;
            output.flush().context("failed to flush reply")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    fn status(&self) -> String {
        let outcome = match self.game.outcome() {
            Outcome::InProgress => "playing",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        };
        format!(
            "{outcome} moves {}/{} flooded {}/{}",
            self.game.moves(),
            self.game.max_moves(),
            self.game.grid().member_count(),
            self.game.grid().size().pow(2)
        )
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, "flood-it".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "new" => {
                let size = match args.first().map(|a| a.parse::<usize>()) {
                    None => self.game.grid().size(),
                    Some(Ok(size)) => size,
                    Some(Err(_)) => return (false, "invalid size".to_string()),
                };
                match Self::fresh_game(size, &mut self.rng, self.max_moves) {
                    Ok(game) => {
                        let old = std::mem::replace(&mut self.game, game);
                        old.finish();
                        (true, self.status())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "seed" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                match args[0].parse::<u64>() {
                    Ok(seed) => {
                        self.rng.seed(seed);
                        (true, String::new())
                    }
                    Err(_) => (false, "invalid seed".to_string()),
                }
            }

            "show" => (true, format!("\n{}", self.game.grid().to_string().trim_end())),

            "play" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let color = match args[0].parse::<Color>() {
                    Ok(c) => c,
                    Err(e) => return (false, e.to_string()),
                };
                match self.game.play(color) {
                    Ok(_) => (true, self.status()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "status" => (true, self.status()),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
