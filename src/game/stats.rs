//! Win/loss statistics across simulated games
//!
//! Persisted as `{ "win": {"1": n, ..., "6": n}, "loss": n }`.

use super::persist::{StoreError, read_json, write_json};
use super::session::{GameOutcome, MAX_TURNS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Win counts per turn and total losses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StatsFile", into = "StatsFile")]
pub struct Stats {
    wins: [u64; MAX_TURNS],
    losses: u64,
}

/// On-disk layout
#[derive(Serialize, Deserialize)]
struct StatsFile {
    win: BTreeMap<String, u64>,
    loss: u64,
}

impl TryFrom<StatsFile> for Stats {
    type Error = String;

    fn try_from(file: StatsFile) -> Result<Self, Self::Error> {
        let mut wins = [0; MAX_TURNS];
        for (key, count) in file.win {
            // Only the canonical "1".."6" spellings; "01" or "+1" would alias a turn
            let turn = (1..=MAX_TURNS)
                .find(|turn| turn.to_string() == key)
                .ok_or_else(|| format!("invalid turn key {key:?} in \"win\""))?;
            wins[turn - 1] = count;
        }

        Ok(Self {
            wins,
            losses: file.loss,
        })
    }
}

impl From<Stats> for StatsFile {
    fn from(stats: Stats) -> Self {
        let win = (1..=MAX_TURNS)
            .zip(stats.wins)
            .map(|(turn, count)| (turn.to_string(), count))
            .collect();

        Self {
            win,
            loss: stats.losses,
        }
    }
}

impl Stats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished game
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Won { turn } if (1..=MAX_TURNS).contains(&turn) => {
                self.wins[turn - 1] += 1;
            }
            // A win past the last turn cannot be produced by a session
            GameOutcome::Won { .. } | GameOutcome::Lost => self.losses += 1,
        }
    }

    /// Wins on a 1-based turn; 0 outside 1..=6
    #[must_use]
    pub fn wins_at(&self, turn: usize) -> u64 {
        turn.checked_sub(1)
            .and_then(|index| self.wins.get(index))
            .copied()
            .unwrap_or(0)
    }

    /// Wins indexed by turn - 1
    #[must_use]
    pub const fn wins(&self) -> &[u64; MAX_TURNS] {
        &self.wins
    }

    #[must_use]
    pub fn total_wins(&self) -> u64 {
        self.wins.iter().sum()
    }

    #[must_use]
    pub const fn losses(&self) -> u64 {
        self.losses
    }

    #[must_use]
    pub fn total_games(&self) -> u64 {
        self.total_wins() + self.losses
    }

    /// Fraction of games won, 0.0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        match self.total_games() {
            0 => 0.0,
            total => self.total_wins() as f64 / total as f64,
        }
    }

    /// Average winning turn, if any game was won
    #[must_use]
    pub fn average_winning_turn(&self) -> Option<f64> {
        let wins = self.total_wins();
        if wins == 0 {
            return None;
        }
        let weighted: u64 = (1..=MAX_TURNS as u64)
            .zip(self.wins)
            .map(|(turn, count)| turn * count)
            .sum();
        Some(weighted as f64 / wins as f64)
    }

    /// Add another tally into this one
    pub fn merge(&mut self, other: &Self) {
        for (mine, theirs) in self.wins.iter_mut().zip(other.wins) {
            *mine += theirs;
        }
        self.losses += other.losses;
    }

    /// Load from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or malformed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        read_json(path.as_ref())
    }

    /// Save to a JSON file, replacing it
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        write_json(path.as_ref(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_increments_exactly_one_counter() {
        let mut stats = Stats::new();
        stats.record(GameOutcome::Won { turn: 3 });
        stats.record(GameOutcome::Won { turn: 3 });
        stats.record(GameOutcome::Won { turn: 1 });
        stats.record(GameOutcome::Lost);

        assert_eq!(stats.wins_at(3), 2);
        assert_eq!(stats.wins_at(1), 1);
        assert_eq!(stats.wins_at(6), 0);
        assert_eq!(stats.losses(), 1);
        assert_eq!(stats.total_games(), 4);
    }

    #[test]
    fn wins_at_out_of_range_is_zero() {
        let mut stats = Stats::new();
        stats.record(GameOutcome::Won { turn: 1 });
        assert_eq!(stats.wins_at(0), 0);
        assert_eq!(stats.wins_at(7), 0);
    }

    #[test]
    fn rates_and_averages() {
        let mut stats = Stats::new();
        assert!(stats.win_rate().abs() < f64::EPSILON);
        assert!(stats.average_winning_turn().is_none());

        stats.record(GameOutcome::Won { turn: 2 });
        stats.record(GameOutcome::Won { turn: 4 });
        stats.record(GameOutcome::Lost);
        stats.record(GameOutcome::Lost);

        assert!((stats.win_rate() - 0.5).abs() < 1e-9);
        assert!((stats.average_winning_turn().unwrap() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn merge_sums_counters() {
        let mut a = Stats::new();
        a.record(GameOutcome::Won { turn: 5 });
        let mut b = Stats::new();
        b.record(GameOutcome::Won { turn: 5 });
        b.record(GameOutcome::Lost);

        a.merge(&b);
        assert_eq!(a.wins_at(5), 2);
        assert_eq!(a.losses(), 1);
    }

    #[test]
    fn json_layout_uses_string_turn_keys() {
        let mut stats = Stats::new();
        stats.record(GameOutcome::Won { turn: 2 });
        stats.record(GameOutcome::Lost);

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "win": {"1": 0, "2": 1, "3": 0, "4": 0, "5": 0, "6": 0},
                "loss": 1
            })
        );
    }

    #[test]
    fn json_missing_turn_keys_read_as_zero() {
        let stats: Stats = serde_json::from_str(r#"{"win": {"4": 9}, "loss": 2}"#).unwrap();
        assert_eq!(stats.wins_at(4), 9);
        assert_eq!(stats.wins_at(1), 0);
        assert_eq!(stats.total_games(), 11);
    }

    #[test]
    fn json_rejects_bad_turn_keys() {
        assert!(serde_json::from_str::<Stats>(r#"{"win": {"7": 1}, "loss": 0}"#).is_err());
        assert!(serde_json::from_str::<Stats>(r#"{"win": {"x": 1}, "loss": 0}"#).is_err());
        assert!(serde_json::from_str::<Stats>(r#"{"win": {}}"#).is_err());
    }

    #[test]
    fn json_rejects_aliased_turn_keys() {
        for key in ["01", "+1", " 1", "1.0", "0"] {
            let json = format!(r#"{{"win": {{"{key}": 5, "1": 2}}, "loss": 0}}"#);
            assert!(
                serde_json::from_str::<Stats>(&json).is_err(),
                "{key:?} should be rejected"
            );
        }
    }
}
