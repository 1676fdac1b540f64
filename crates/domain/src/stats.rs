use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Lifetime results across every finished game.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatisticsRecord {
    pub games_played: u32,
    pub games_won: u32,
    pub total_attempts: u32,
    /// Fewest attempts used in a won game; `None` until the first win.
    pub best_game: Option<NonZeroU32>,
}

impl StatisticsRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished game into the totals.
    pub fn apply(&mut self, won: bool, attempts_used: NonZeroU32) {
        self.games_played = self.games_played.saturating_add(1);
        if won {
            self.games_won = self.games_won.saturating_add(1);
            self.best_game = Some(match self.best_game {
                Some(best) => best.min(attempts_used),
                None => attempts_used,
            });
        }
        self.total_attempts = self.total_attempts.saturating_add(attempts_used.get());
    }

    /// Fraction of finished games that were won, 0.0 when none were played.
    pub fn win_rate(&self) -> f32 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.games_won as f32 / self.games_played as f32
    }

    pub fn average_attempts(&self) -> Option<f32> {
        if self.games_played == 0 {
            return None;
        }
        Some(self.total_attempts as f32 / self.games_played as f32)
    }

    /// Check the relationships every record produced by `apply` satisfies.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.games_won > self.games_played {
            return Err(DomainError::validation(format!(
                "games_won ({}) exceeds games_played ({})",
                self.games_won, self.games_played
            )));
        }
        if self.total_attempts < self.games_played {
            return Err(DomainError::validation(format!(
                "total_attempts ({}) is less than games_played ({})",
                self.total_attempts, self.games_played
            )));
        }
        match (self.games_won, self.best_game) {
            (0, Some(best)) => Err(DomainError::validation(format!(
                "best_game is {best} but no game has been won"
            ))),
            (won, None) if won > 0 => Err(DomainError::validation(
                "games were won but best_game is missing",
            )),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for StatisticsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Games Played: {}", self.games_played)?;
        writeln!(f, "Games Won: {}", self.games_won)?;
        writeln!(f, "Total Attempts: {}", self.total_attempts)?;
        match self.best_game {
            Some(best) => write!(f, "Best Game (fewest attempts): {best}"),
            None => write!(f, "Best Game (fewest attempts): N/A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    #[test]
    fn default_is_empty() {
        let stats = StatisticsRecord::new();
        assert_eq!(stats.games_played, 0);
        assert_eq!(stats.games_won, 0);
        assert_eq!(stats.total_attempts, 0);
        assert_eq!(stats.best_game, None);
        assert_eq!(stats.average_attempts(), None);
    }

    #[test]
    fn best_game_is_order_independent_minimum() {
        let mut a = StatisticsRecord::new();
        a.apply(true, n(3));
        a.apply(true, n(5));
        let mut b = StatisticsRecord::new();
        b.apply(true, n(5));
        b.apply(true, n(3));
        assert_eq!(a.best_game, Some(n(3)));
        assert_eq!(b.best_game, Some(n(3)));
        assert_eq!(a, b);
    }

    #[test]
    fn loss_only_touches_played_and_attempts() {
        let mut stats = StatisticsRecord::new();
        stats.apply(true, n(4));
        let before = stats;
        stats.apply(false, n(10));
        assert_eq!(stats.games_played, before.games_played + 1);
        assert_eq!(stats.total_attempts, before.total_attempts + 10);
        assert_eq!(stats.games_won, before.games_won);
        assert_eq!(stats.best_game, before.best_game);
    }

    #[test]
    fn won_never_exceeds_played() {
        let mut stats = StatisticsRecord::new();
        for i in 1..=40u32 {
            stats.apply(i % 3 != 0, n(i % 10 + 1));
            assert!(stats.games_won <= stats.games_played);
            assert!(stats.validate().is_ok());
        }
        assert_eq!(stats.games_played, 40);
        assert_eq!(stats.best_game, Some(n(1)));
    }

    #[test]
    fn derived_views() {
        let mut stats = StatisticsRecord::new();
        stats.apply(true, n(2));
        stats.apply(false, n(5));
        assert_eq!(stats.win_rate(), 0.5);
        assert_eq!(stats.average_attempts(), Some(3.5));
    }

    #[test]
    fn validate_rejects_inconsistent_records() {
        let too_many_wins = StatisticsRecord {
            games_played: 1,
            games_won: 2,
            total_attempts: 4,
            best_game: Some(n(2)),
        };
        assert!(too_many_wins.validate().is_err());

        let orphan_best = StatisticsRecord {
            games_played: 1,
            games_won: 0,
            total_attempts: 5,
            best_game: Some(n(5)),
        };
        assert!(orphan_best.validate().is_err());

        let missing_best = StatisticsRecord {
            games_played: 1,
            games_won: 1,
            total_attempts: 5,
            best_game: None,
        };
        assert!(missing_best.validate().is_err());
    }

    #[test]
    fn display_matches_stats_dialog() {
        let mut stats = StatisticsRecord::new();
        assert!(stats.to_string().ends_with("Best Game (fewest attempts): N/A"));
        stats.apply(true, n(6));
        let text = stats.to_string();
        assert!(text.starts_with("Games Played: 1\nGames Won: 1\nTotal Attempts: 6\n"));
        assert!(text.ends_with("Best Game (fewest attempts): 6"));
    }

    #[test]
    fn serializes_best_game_as_null_when_absent() {
        let json = serde_json::to_string(&StatisticsRecord::new()).unwrap();
        assert_eq!(
            json,
            r#"{"games_played":0,"games_won":0,"total_attempts":0,"best_game":null}"#
        );
        let zero_best = r#"{"games_played":1,"games_won":1,"total_attempts":1,"best_game":0}"#;
        assert!(serde_json::from_str::<StatisticsRecord>(zero_best).is_err());
    }
}
