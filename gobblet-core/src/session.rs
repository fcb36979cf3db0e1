//! Turn controller for one game.
//!
//! ```text
//! AwaitingHuman --move--> check --> Terminal | AwaitingBot | AwaitingHuman
//! AwaitingBot   --move--> check --> Terminal | AwaitingHuman
//! ```
//!
//! Each game owns its [`Session`]; nothing is shared between sessions. The
//! search borrows the session's position mutably, so no other call can
//! observe it mid-search.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::rules;
use crate::{
    Difficulty, GameConfig, GameError, Mode, Move, Outcome, Piece, Player, Pos, Position,
};

/// Where the game is waiting.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Phase {
    AwaitingHuman,
    AwaitingBot,
    /// One-way: no further moves are accepted.
    Terminal(Outcome),
}

/// A move that was applied, and what it led to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Turn {
    pub player: Player,
    pub mv: Move,
    pub outcome: Outcome,
}

/// What a UI needs to render: top pieces only, never whole stacks.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub cells: [Option<Piece>; 9],
    /// Remaining reserve per player as [small, medium, large], X first.
    pub inventory: [[u8; 3]; 2],
    pub current_player: Player,
    pub phase: Phase,
    pub outcome: Outcome,
}

/// A single game: position, side to move, phase and the bot's RNG.
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    position: Position,
    to_move: Player,
    phase: Phase,
    history: Vec<Turn>,
    rng: StdRng,
}

impl Session {
    /// Start a game with an OS-seeded RNG for the bot.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Start a game whose bot choices are reproducible.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Resume from an arbitrary position with `to_move` to play. The
    /// position is checked for a finished game before anything else happens.
    pub fn from_position(config: GameConfig, position: Position, to_move: Player, seed: u64) -> Self {
        let mut session = Self::with_seed(config, seed);
        session.position = position;
        session.to_move = to_move;
        let outcome = position.outcome(to_move);
        session.phase = if outcome.is_terminal() {
            Phase::Terminal(outcome)
        } else {
            session.phase_for(to_move)
        };
        session
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let to_move = config.starting_player.player();
        let mut session = Self {
            config,
            position: Position::new(),
            to_move,
            phase: Phase::AwaitingHuman,
            history: Vec::new(),
            rng,
        };
        session.reset();
        session
    }

    /// Discard the board and reserves and start over with the same config.
    pub fn reset(&mut self) {
        self.position = Position::new();
        self.to_move = self.config.starting_player.player();
        self.history.clear();
        self.phase = self.phase_for(self.to_move);
        info!(
            mode = %self.config.mode,
            difficulty = %self.config.difficulty,
            first = %self.to_move,
            "new game"
        );
    }

    fn phase_for(&self, player: Player) -> Phase {
        if self.config.mode.bot_player() == Some(player) {
            Phase::AwaitingBot
        } else {
            Phase::AwaitingHuman
        }
    }

    /// Apply a human move after checking it against the rules.
    pub fn attempt_human_move(&mut self, mv: Move) -> Result<Turn, GameError> {
        match self.phase {
            Phase::Terminal(outcome) => Err(GameError::GameOver(outcome)),
            Phase::AwaitingBot => Err(GameError::NotHumanTurn),
            Phase::AwaitingHuman => {
                if !self.position.is_legal(mv, self.to_move) {
                    debug!(%mv, player = %self.to_move, "rejected illegal move");
                    return Err(GameError::IllegalMove {
                        mv,
                        player: self.to_move,
                    });
                }
                Ok(self.commit(mv))
            }
        }
    }

    /// Let the bot choose and apply its move.
    pub fn request_bot_move(&mut self) -> Result<Turn, GameError> {
        match self.phase {
            Phase::Terminal(outcome) => Err(GameError::GameOver(outcome)),
            Phase::AwaitingHuman => Err(GameError::NotBotTurn),
            Phase::AwaitingBot => {
                let player = self.to_move;
                let selected = self
                    .config
                    .difficulty
                    .select_move(&mut self.position, player, &mut self.rng);
                let Some(mv) = selected else {
                    // A stuck side is caught when the previous move commits
                    self.phase = Phase::Terminal(Outcome::Draw);
                    return Err(GameError::GameOver(Outcome::Draw));
                };
                Ok(self.commit(mv))
            }
        }
    }

    fn commit(&mut self, mv: Move) -> Turn {
        let player = self.to_move;
        self.position.apply(mv, player);

        let next = player.opponent();
        let outcome = self.position.outcome(next);
        self.to_move = next;
        self.phase = if outcome.is_terminal() {
            Phase::Terminal(outcome)
        } else {
            self.phase_for(next)
        };

        let turn = Turn { player, mv, outcome };
        self.history.push(turn);
        debug!(%player, %mv, %outcome, phase = ?self.phase, "move applied");
        turn
    }

    /// Takes effect at the next move; the current game continues.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    /// Switch between single-player and two-player for the rest of the game.
    pub fn set_mode(&mut self, mode: Mode) {
        self.config.mode = mode;
        if !matches!(self.phase, Phase::Terminal(_)) {
            self.phase = self.phase_for(self.to_move);
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn current_player(&self) -> Player {
        self.to_move
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::Terminal(outcome) => outcome,
            _ => Outcome::InProgress,
        }
    }

    pub fn is_bot_turn(&self) -> bool {
        self.phase == Phase::AwaitingBot
    }

    /// Moves applied so far, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.phase {
            Phase::Terminal(_) => Vec::new(),
            _ => self.position.legal_moves(self.to_move).to_vec(),
        }
    }

    /// The line that decided the game, if someone won.
    pub fn winning_line(&self) -> Option<[Pos; 3]> {
        rules::winning_line(&self.position.board).map(|(_, line)| line)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.position.board.tops(),
            inventory: [
                self.position.inventory.counts(Player::One),
                self.position.inventory.counts(Player::Two),
            ],
            current_player: self.to_move,
            phase: self.phase,
            outcome: self.outcome(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Size, StartingPlayer};

    fn place(size: Size, pos: u8) -> Move {
        Move::Place { size, to: Pos(pos) }
    }

    fn two_player() -> Session {
        Session::with_seed(
            GameConfig {
                mode: Mode::Two,
                ..GameConfig::default()
            },
            0,
        )
    }

    #[test]
    fn test_new_session_phase() {
        let session = Session::with_seed(GameConfig::default(), 0);
        assert_eq!(session.phase(), Phase::AwaitingHuman);
        assert_eq!(session.current_player(), Player::One);

        let bot_first = Session::with_seed(
            GameConfig {
                starting_player: StartingPlayer::Second,
                ..GameConfig::default()
            },
            0,
        );
        assert_eq!(bot_first.phase(), Phase::AwaitingBot);
        assert_eq!(bot_first.current_player(), Player::Two);
    }

    #[test]
    fn test_two_player_alternates_humans() {
        let mut session = two_player();
        session.attempt_human_move(place(Size::Small, 4)).unwrap();
        assert_eq!(session.phase(), Phase::AwaitingHuman);
        assert_eq!(session.current_player(), Player::Two);
        assert_eq!(session.request_bot_move(), Err(GameError::NotBotTurn));

        session.attempt_human_move(place(Size::Large, 4)).unwrap();
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_illegal_move_leaves_state_unchanged() {
        let mut session = two_player();
        session.attempt_human_move(place(Size::Small, 0)).unwrap();
        let before = session.snapshot();

        let err = session.attempt_human_move(place(Size::Small, 0)).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                mv: place(Size::Small, 0),
                player: Player::Two
            }
        );
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_human_cannot_move_for_bot() {
        let mut session = Session::with_seed(GameConfig::default(), 1);
        session.attempt_human_move(place(Size::Medium, 4)).unwrap();
        assert_eq!(session.phase(), Phase::AwaitingBot);
        assert_eq!(
            session.attempt_human_move(place(Size::Small, 0)),
            Err(GameError::NotHumanTurn)
        );

        let turn = session.request_bot_move().unwrap();
        assert_eq!(turn.player, Player::Two);
        assert_eq!(session.phase(), Phase::AwaitingHuman);
    }

    #[test]
    fn test_terminal_is_one_way() {
        let mut session = two_player();
        for mv in [
            place(Size::Small, 0),
            place(Size::Small, 3),
            place(Size::Small, 1),
            place(Size::Small, 4),
        ] {
            session.attempt_human_move(mv).unwrap();
        }
        let turn = session.attempt_human_move(place(Size::Medium, 2)).unwrap();
        assert_eq!(turn.outcome, Outcome::Win(Player::One));
        assert_eq!(session.phase(), Phase::Terminal(Outcome::Win(Player::One)));
        assert_eq!(session.winning_line(), Some([Pos(0), Pos(1), Pos(2)]));
        assert!(session.legal_moves().is_empty());

        let err = session.attempt_human_move(place(Size::Large, 5));
        assert_eq!(err, Err(GameError::GameOver(Outcome::Win(Player::One))));
    }

    #[test]
    fn test_reset() {
        let mut session = two_player();
        session.attempt_human_move(place(Size::Small, 0)).unwrap();
        session.reset();
        assert_eq!(*session.position(), Position::new());
        assert!(session.history().is_empty());
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_set_mode_mid_game() {
        let mut session = two_player();
        session.attempt_human_move(place(Size::Small, 0)).unwrap();
        assert_eq!(session.phase(), Phase::AwaitingHuman);

        // O becomes the bot on its pending turn
        session.set_mode(Mode::Single);
        assert_eq!(session.phase(), Phase::AwaitingBot);
        session.set_difficulty(Difficulty::Hardest);
        assert_eq!(session.config().difficulty, Difficulty::Hardest);
        session.request_bot_move().unwrap();
        assert_eq!(session.phase(), Phase::AwaitingHuman);
    }

    #[test]
    fn test_snapshot_reflects_inventory() {
        let mut session = two_player();
        session.attempt_human_move(place(Size::Large, 8)).unwrap();
        let snap = session.snapshot();
        assert_eq!(snap.inventory, [[2, 2, 1], [2, 2, 2]]);
        assert_eq!(snap.cells[8], Some(Piece::new(Player::One, Size::Large)));
        assert_eq!(snap.current_player, Player::Two);
        assert_eq!(snap.outcome, Outcome::InProgress);
    }
}
