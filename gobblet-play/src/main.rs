//! Gobblet Gobblers in the terminal.
//!
//! `gobblet play` runs a game against the bot (or a second human);
//! `gobblet arena` pits two difficulty tiers against each other.

mod arena;
mod play;
mod render;
mod stats;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gobblet_core::{Difficulty, GameConfig, Mode, StartingPlayer};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gobblet")]
#[command(about = "Gobblet Gobblers rules engine and bot", long_about = None)]
#[command(version)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game on stdin/stdout
    Play {
        /// single (against the bot) or two (two humans)
        #[arg(long, default_value = "single")]
        mode: Mode,

        /// easy, medium, hard or hardest
        #[arg(long, default_value = "medium")]
        difficulty: Difficulty,

        /// Who moves first: first (X) or second (O)
        #[arg(long, default_value = "first")]
        start: StartingPlayer,

        /// Seed for the bot's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before the bot replies, in milliseconds
        #[arg(long, default_value = "400")]
        bot_delay_ms: u64,
    },

    /// Play bot against bot and report results
    Arena {
        /// Difficulty playing X
        #[arg(long, default_value = "medium")]
        x: Difficulty,

        /// Difficulty playing O
        #[arg(long, default_value = "hardest")]
        o: Difficulty,

        /// Number of games; the starting side alternates
        #[arg(short, long, default_value = "20")]
        games: u32,

        /// Games longer than this are counted as unfinished
        #[arg(long, default_value = "200")]
        max_plies: u32,

        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            start,
            seed,
            bot_delay_ms,
        } => {
            let config = GameConfig {
                starting_player: start,
                mode,
                difficulty,
            };
            play::run(config, seed, bot_delay_ms)
        }
        Command::Arena {
            x,
            o,
            games,
            max_plies,
            seed,
        } => arena::run(x, o, games, max_plies, seed),
    }
}
