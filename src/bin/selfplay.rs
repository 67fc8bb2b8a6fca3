//! Connect-Four command-line game loop
//!
//! Plays a game between two agents from the command line, printing the
//! chosen column and the thinking time of every move, then the final board,
//! the total engine time and the result. Human sides are read from stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_four::config::{AgentKind, AppConfig};
use connect_four::{Agent, Board, BoardError, Game, Outcome, Player};

/// Play Connect-Four between two minimax engines (or humans).
#[derive(Parser)]
#[command(name = "selfplay", about = "Play a game of Connect-Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the first player's search depth
    #[arg(long)]
    depth_first: Option<u32>,

    /// Override the second player's search depth
    #[arg(long)]
    depth_second: Option<u32>,

    /// Play the first player from stdin
    #[arg(long)]
    human_first: bool,

    /// Play the second player from stdin
    #[arg(long)]
    human_second: bool,

    /// Start from this position: 1-based columns, e.g. "4453"
    #[arg(long, default_value = "")]
    moves: String,

    /// Print the board after every move
    #[arg(long)]
    show_board: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth_first {
        config.first.depth = depth;
    }
    if let Some(depth) = cli.depth_second {
        config.second.depth = depth;
    }
    if cli.human_first {
        config.first.agent = AgentKind::Human;
    }
    if cli.human_second {
        config.second.agent = AgentKind::Human;
    }
    config.validate()?;

    let start = Board::parse_moves(&cli.moves).context("parsing --moves")?;
    let mut game = Game::from_moves(config.game_config(), &start)
        .with_context(|| format!("replaying {:?}", cli.moves))?;

    log::info!(
        "first: {:?}, second: {:?}",
        config.first.agent(),
        config.second.agent()
    );

    let mut total_time = Duration::ZERO;
    while !game.is_over() {
        if cli.show_board {
            print!("\n{}", game.board());
        }

        match game.current_agent() {
            Agent::Human => {
                let column = read_column(&game)?;
                game.play_human(column)?;
            }
            Agent::Minimax { .. } => {
                let start = Instant::now();
                let result = game.play_engine()?;
                let elapsed = start.elapsed();
                total_time += elapsed;
                println!("{}, {:.4}s", result.column + 1, elapsed.as_secs_f32());
            }
        }
    }

    println!("\n{}", game.board());
    println!("Total Time: {:.3}s\n", total_time.as_secs_f32());

    match game.outcome() {
        Some(Outcome::Draw) => println!("It's a Tie"),
        Some(Outcome::Winner(Player::First)) => println!("White (●) Won!"),
        Some(Outcome::Winner(Player::Second)) => println!("Black (○) Won!"),
        None => bail!("game loop ended without an outcome"),
    }
    Ok(())
}

/// Prompt until the human enters a playable column.
fn read_column(game: &Game) -> Result<usize> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!(
            "\n{}{:?} to move, column (1-7): ",
            game.board(),
            game.side_to_move()
        );
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("stdin closed before the game ended");
        };
        let line = line?;
        match Board::parse_moves(&line).map(|c| c.first().copied()) {
            Ok(Some(column)) if game.board().is_valid(column) => return Ok(column),
            Ok(Some(column)) => println!("{}", BoardError::ColumnFull(column)),
            Ok(None) => {}
            Err(e) => println!("{}", e),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .format_timestamp(None)
    .target(env_logger::Target::Stderr)
    .init();
}
