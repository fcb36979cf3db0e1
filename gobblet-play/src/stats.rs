//! Arena result tracking.

use std::time::Instant;

use gobblet_core::{Outcome, Player};

/// Results collected over an arena run.
#[derive(Debug, Default)]
pub struct ArenaStats {
    pub x_wins: u64,
    pub o_wins: u64,
    pub draws: u64,

    /// Games stopped at the ply limit
    pub unfinished: u64,

    /// Plies played across all games
    pub plies: u64,

    /// Longest finished game, in plies
    pub longest: u64,

    start_time: Option<Instant>,
}

impl ArenaStats {
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// Record one game. `InProgress` means it hit the ply limit.
    pub fn record(&mut self, outcome: Outcome, plies: u64) {
        self.plies += plies;
        match outcome {
            Outcome::Win(Player::One) => self.x_wins += 1,
            Outcome::Win(Player::Two) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {
                self.unfinished += 1;
                return;
            }
        }
        self.longest = self.longest.max(plies);
    }

    pub fn games(&self) -> u64 {
        self.x_wins + self.o_wins + self.draws + self.unfinished
    }

    pub fn games_per_sec(&self) -> f64 {
        if let Some(start) = self.start_time {
            let elapsed = start.elapsed().as_secs_f64();
            if elapsed > 0.0 {
                return self.games() as f64 / elapsed;
            }
        }
        0.0
    }

    fn pct(&self, count: u64) -> f64 {
        match self.games() {
            0 => 0.0,
            games => 100.0 * count as f64 / games as f64,
        }
    }

    /// Print final summary
    pub fn print_summary(&self, x_label: &str, o_label: &str) {
        println!("Games played: {}", self.games());
        println!("  - X ({x_label}) wins: {} ({:.1}%)", self.x_wins, self.pct(self.x_wins));
        println!("  - O ({o_label}) wins: {} ({:.1}%)", self.o_wins, self.pct(self.o_wins));
        println!("  - Draws: {}", self.draws);
        println!("  - Unfinished: {}", self.unfinished);
        if self.games() > 0 {
            println!("Average length: {:.1} plies", self.plies as f64 / self.games() as f64);
        }
        println!("Longest finished game: {} plies", self.longest);
        println!("Rate: {:.1} games/sec", self.games_per_sec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut stats = ArenaStats::new();
        stats.record(Outcome::Win(Player::One), 7);
        stats.record(Outcome::Win(Player::Two), 10);
        stats.record(Outcome::Draw, 12);
        stats.record(Outcome::InProgress, 200);

        assert_eq!(stats.games(), 4);
        assert_eq!((stats.x_wins, stats.o_wins, stats.draws, stats.unfinished), (1, 1, 1, 1));
        assert_eq!(stats.plies, 229);
        assert_eq!(stats.longest, 12);
        assert!((stats.pct(stats.x_wins) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_stats() {
        let stats = ArenaStats::default();
        assert_eq!(stats.games(), 0);
        assert_eq!(stats.pct(0), 0.0);
        assert_eq!(stats.games_per_sec(), 0.0);
    }
}
