use serde::{Deserialize, Serialize};

use super::{pass_threshold, RoundResult, RoundState};

/// Snapshot of a finished round, for the win/lose screens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// How the round ended.
    pub result: RoundResult,
    /// Microgames won.
    pub wins: u32,
    /// Microgames resolved before the round ended.
    pub games_played: u32,
    /// Microgames the round scheduled.
    pub max_games: u32,
    /// Lives left at the end.
    pub lives_left: u32,
    /// Lives the round started with.
    pub lives_at_start: u32,
    /// Wins that were needed to pass.
    pub pass_threshold: u32,
}

impl RoundSummary {
    /// Capture the counters of a round that ended with `result`.
    #[must_use]
    pub fn new(round: &RoundState, result: RoundResult) -> Self {
        Self {
            result,
            wins: round.wins(),
            games_played: round.games_played(),
            max_games: round.max_games(),
            lives_left: round.lives(),
            lives_at_start: round.lives_at_start(),
            pass_threshold: pass_threshold(round.max_games()),
        }
    }

    /// Check if every scheduled microgame was played.
    #[must_use]
    pub fn completed_schedule(&self) -> bool {
        self.games_played >= self.max_games
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_state() {
        let mut round = RoundState::new(2, 3);
        round.apply_result(false);
        round.apply_result(false);

        let summary = RoundSummary::new(&round, round.evaluate());

        assert_eq!(summary.result, RoundResult::Lost);
        assert_eq!(summary.wins, 0);
        assert_eq!(summary.games_played, 2);
        assert_eq!(summary.lives_left, 0);
        assert_eq!(summary.lives_at_start, 2);
        assert_eq!(summary.pass_threshold, 2);
        assert!(!summary.completed_schedule());
    }
}
