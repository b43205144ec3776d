//! Sequencer phases.

use serde::{Deserialize, Serialize};

use crate::round::RoundResult;

/// Where the round currently stands.
///
/// The phase transitions through:
/// - `Idle` -> `Selecting` (round started)
/// - `Selecting` -> `PreChallenge` (challenge drawn)
/// - `Selecting` -> `RoundWon` | `RoundLost` (nothing left to play)
/// - `PreChallenge` -> `ChallengeActive` (presentation begins the challenge)
/// - `ChallengeActive` -> `PostChallenge` (outcome accepted)
/// - `PostChallenge` -> `Selecting` | `RoundWon` | `RoundLost` (continue)
/// - `RoundWon` | `RoundLost` -> `Idle` (back to menu)
///
/// Starting a new round supersedes any phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No round in progress.
    #[default]
    Idle,
    /// Choosing the next challenge. Never observed between calls.
    Selecting,
    /// A challenge is selected and its intro screen is showing.
    PreChallenge,
    /// A challenge is being played and may report its outcome.
    ChallengeActive,
    /// The last outcome is being summarized.
    PostChallenge,
    /// The round ended in victory.
    RoundWon,
    /// The round ended in defeat.
    RoundLost,
}

impl Phase {
    /// Returns `true` for the end-of-round phases.
    ///
    /// ```
    /// use rust_microgames::sequencer::Phase;
    ///
    /// assert!(Phase::RoundWon.is_terminal());
    /// assert!(Phase::RoundLost.is_terminal());
    /// assert!(!Phase::PostChallenge.is_terminal());
    /// ```
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::RoundWon | Phase::RoundLost)
    }

    /// Returns `true` while a round is underway and not yet decided.
    #[must_use]
    pub const fn is_in_round(self) -> bool {
        matches!(
            self,
            Phase::Selecting | Phase::PreChallenge | Phase::ChallengeActive | Phase::PostChallenge
        )
    }

    /// The terminal phase for a round result.
    #[must_use]
    pub const fn from_result(result: RoundResult) -> Self {
        match result {
            RoundResult::Won => Phase::RoundWon,
            RoundResult::Lost => Phase::RoundLost,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
