//! Depth-bounded minimax with alpha-beta pruning.
//!
//! Scores are from the bot's point of view: `100 - depth` for a bot win,
//! `-100 + depth` for a loss, 0 at the horizon or when the side to move is
//! stuck. Faster wins and slower losses score better.

use tracing::{debug, trace};

use crate::{Move, Player, Position};

/// Plies searched below the root.
pub const SEARCH_DEPTH: u32 = 4;

/// Score of an immediate win.
pub const WIN_SCORE: i32 = 100;

const SCORE_INF: i32 = 1_000;

/// Minimax searcher for one bot player.
///
/// Mutates the position it is given and undoes every move before returning.
#[derive(Debug)]
pub struct Searcher {
    bot: Player,
    human: Player,
    depth_limit: u32,
    /// Nodes visited
    pub nodes: u64,
    /// Alpha-beta cutoffs taken
    pub cutoffs: u64,
}

impl Searcher {
    pub fn new(bot: Player) -> Self {
        Self {
            bot,
            human: bot.opponent(),
            depth_limit: SEARCH_DEPTH,
            nodes: 0,
            cutoffs: 0,
        }
    }

    pub fn with_depth_limit(mut self, depth_limit: u32) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    /// Score `position` with the side given by `is_maximizing` to move.
    pub fn minimax(
        &mut self,
        position: &mut Position,
        depth: u32,
        is_maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        match position.winning_player() {
            Some(winner) if winner == self.bot => return WIN_SCORE - depth as i32,
            Some(_) => return -WIN_SCORE + depth as i32,
            None => {}
        }
        if depth >= self.depth_limit {
            return 0;
        }

        let side = if is_maximizing { self.bot } else { self.human };
        let moves = position.legal_moves(side);
        if moves.is_empty() {
            return 0;
        }

        if is_maximizing {
            let mut best = -SCORE_INF;
            for mov in moves.iter() {
                position.apply(mov, side);
                let score = self.minimax(position, depth + 1, false, alpha, beta);
                position.undo(mov, side);

                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    self.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = SCORE_INF;
            for mov in moves.iter() {
                position.apply(mov, side);
                let score = self.minimax(position, depth + 1, true, alpha, beta);
                position.undo(mov, side);

                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    self.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    /// Best root move with its score. Each candidate is searched with a full
    /// window; ties go to the first candidate in generation order.
    pub fn search(&mut self, position: &mut Position) -> Option<(Move, i32)> {
        let bot = self.bot;
        let moves = position.legal_moves(bot);
        let mut best: Option<(Move, i32)> = None;

        for mov in moves.iter() {
            position.apply(mov, bot);
            let score = self.minimax(position, 1, false, -SCORE_INF, SCORE_INF);
            position.undo(mov, bot);

            trace!(?mov, score, "root candidate");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mov, score));
            }
        }

        debug!(
            player = %bot,
            best = ?best,
            candidates = moves.len(),
            nodes = self.nodes,
            cutoffs = self.cutoffs,
            "minimax search finished"
        );
        best
    }
}

/// The bot's move at the top difficulty tier, or None without legal moves.
pub fn pick_best_move(position: &mut Position, bot: Player) -> Option<Move> {
    Searcher::new(bot).search(position).map(|(mov, _)| mov)
}
