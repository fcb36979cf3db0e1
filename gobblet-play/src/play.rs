//! Interactive game on stdin/stdout.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use gobblet_core::{GameConfig, GameError, Move, Phase, Player, Session};
use tracing::warn;

use crate::render;

const HELP: &str = "\
Moves:    S(r,c) M(r,c) L(r,c)   place from reserve
          (r,c)->(r,c)           move a top piece
Commands: moves  reset  help  quit";

pub fn run(config: GameConfig, seed: Option<u64>, bot_delay_ms: u64) -> Result<()> {
    let mut session = match seed {
        Some(seed) => Session::with_seed(config, seed),
        None => Session::new(config),
    };
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_loop(
        &mut session,
        stdin.lock(),
        &mut stdout,
        Duration::from_millis(bot_delay_ms),
    )
}

fn show<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    let snapshot = session.snapshot();
    writeln!(out)?;
    write!(out, "{}", render::board(&snapshot, session.winning_line()))?;
    for player in Player::ALL {
        writeln!(out, "{}", render::reserve(&snapshot, player))?;
    }
    Ok(())
}

/// Drive `session` until the input ends or the player quits.
pub fn play_loop<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
    bot_delay: Duration,
) -> Result<()> {
    writeln!(out, "{HELP}")?;
    show(session, out)?;

    let mut line = String::new();
    loop {
        match session.phase() {
            Phase::Terminal(outcome) => {
                writeln!(out, "Game over: {outcome}. Type reset to play again.")?;
            }
            Phase::AwaitingBot => {
                if !bot_delay.is_zero() {
                    thread::sleep(bot_delay);
                }
                match session.request_bot_move() {
                    Ok(turn) => {
                        writeln!(out, "{} plays {}", turn.player, turn.mv)?;
                        show(session, out)?;
                    }
                    Err(GameError::GameOver(_)) => {}
                    Err(err) => return Err(err.into()),
                }
                continue;
            }
            Phase::AwaitingHuman => {
                write!(out, "{} to move> ", session.current_player())?;
                out.flush()?;
            }
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        match line.trim() {
            "" => {}
            "quit" | "q" | "exit" => return Ok(()),
            "help" | "?" => writeln!(out, "{HELP}")?,
            "reset" => {
                session.reset();
                show(session, out)?;
            }
            "moves" => {
                let moves: Vec<String> = session.legal_moves().iter().map(Move::to_string).collect();
                writeln!(out, "{}", moves.join(" "))?;
            }
            text => match text.parse::<Move>() {
                Ok(mv) => match session.attempt_human_move(mv) {
                    Ok(_) => show(session, out)?,
                    Err(err) => writeln!(out, "Rejected: {err}")?,
                },
                Err(err) => {
                    warn!(input = text, "unparsable move");
                    writeln!(out, "{err}")?;
                }
            },
        }
    }
}
