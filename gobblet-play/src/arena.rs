//! Bot-versus-bot games.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use gobblet_core::{Difficulty, Outcome, Player, Position};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::stats::ArenaStats;

/// Play one game from the empty board. Returns the outcome and the number of
/// plies; `InProgress` means `max_plies` was reached.
pub fn play_game(
    x: Difficulty,
    o: Difficulty,
    first: Player,
    max_plies: u32,
    rng: &mut StdRng,
) -> (Outcome, u32) {
    let mut position = Position::new();
    let mut to_move = first;

    for ply in 0..max_plies {
        let difficulty = match to_move {
            Player::One => x,
            Player::Two => o,
        };
        let Some(mov) = difficulty.select_move(&mut position, to_move, rng) else {
            return (Outcome::Draw, ply);
        };
        position.apply(mov, to_move);
        to_move = to_move.opponent();

        let outcome = position.outcome(to_move);
        if outcome.is_terminal() {
            return (outcome, ply + 1);
        }
    }
    (Outcome::InProgress, max_plies)
}

pub fn run(x: Difficulty, o: Difficulty, games: u32, max_plies: u32, seed: u64) -> Result<()> {
    println!("Gobblet Gobblers arena: X={x} vs O={o}");
    println!("==========================");
    println!();

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        println!("\nInterrupt received, finishing current game...");
        r.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl-C handler")?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut stats = ArenaStats::new();

    for game in 0..games {
        if !running.load(Ordering::SeqCst) {
            info!(played = game, "arena interrupted");
            break;
        }
        let first = if game % 2 == 0 { Player::One } else { Player::Two };
        let (outcome, plies) = play_game(x, o, first, max_plies, &mut rng);
        debug!(game, %first, %outcome, plies, "game finished");
        stats.record(outcome, u64::from(plies));
    }

    println!();
    stats.print_summary(x.label(), o.label());
    Ok(())
}
