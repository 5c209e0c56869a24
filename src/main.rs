//! Flood-It: a terminal flood-fill puzzle.
//!
//! ## Usage
//!
//! - `flood-it` - Play interactively over stdin/stdout
//! - `flood-it play` - Same as above
//! - `flood-it demo` - Watch a greedy player solve a random grid

use anyhow::Result;
use clap::{Parser, Subcommand};
use flexi_logger::{Logger, WriteMode};

use flood_it::constants::DEFAULT_SIZE;
use flood_it::game::{Game, Outcome};
use flood_it::grid::Grid;
use flood_it::session::Session;

/// Flood-It: flood the grid from the top-left corner in as few moves as possible
#[derive(Parser)]
#[command(name = "flood-it")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Grid side, between 8 and 24
    #[arg(short, long, default_value_t = DEFAULT_SIZE, global = true)]
    size: usize,

    /// Seed for the grid generator
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Moves allowed per game (scales with size by default)
    #[arg(short, long, global = true)]
    moves: Option<usize>,

    /// Log filter, e.g. `debug` or `flood_it=trace` (falls back to RUST_LOG)
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin and play interactively
    Play,
    /// Let the greedy player solve a random grid
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for replies.
    let _logger = match &cli.log_level {
        Some(filter) => Logger::try_with_str(filter)?,
        None => Logger::try_with_env_or_str("warn")?,
    }
    .write_mode(WriteMode::BufferAndFlush)
    .log_to_stderr()
    .start()?;

    match cli.command {
        Some(Commands::Demo) => run_demo(&cli),
        Some(Commands::Play) | None => {
            let mut session = Session::new(cli.size, cli.seed, cli.moves)?;
            session.run()
        }
    }
}

fn run_demo(cli: &Cli) -> Result<()> {
    let mut rng = cli.seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
    let grid = Grid::random_with(cli.size, &mut rng)?;
    let mut game = match cli.moves {
        Some(moves) => Game::with_max_moves(grid, moves)?,
        None => Game::new(grid)?,
    };

    println!("Flood-It demo: {0}x{0} grid, {1} moves\n", cli.size, game.max_moves());
    println!("{}", game.grid());

    while game.outcome() == Outcome::InProgress {
        let color = game.greedy_choice()?;
        game.play(color)?;
        println!(
            "Move {}: {} ({} cells flooded)",
            game.moves(),
            color.name(),
            game.grid().member_count()
        );
    }

    println!("\n{}", game.grid());
    match game.outcome() {
        Outcome::Won => println!("Flooded in {} moves.", game.moves()),
        _ => println!("Out of moves after {} moves.", game.moves()),
    }
    game.finish();
    Ok(())
}
