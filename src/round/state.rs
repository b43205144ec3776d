use serde::{Deserialize, Serialize};

/// Minimum wins needed to pass a round of `max_games` microgames.
///
/// Majority rule, rounded up: 3 games need 2 wins, 4 games need 2 wins.
///
/// ```
/// use rust_microgames::round::pass_threshold;
///
/// assert_eq!(pass_threshold(3), 2);
/// assert_eq!(pass_threshold(4), 2);
/// assert_eq!(pass_threshold(5), 3);
/// ```
#[must_use]
pub const fn pass_threshold(max_games: u32) -> u32 {
    max_games.div_ceil(2)
}

/// Final result of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundResult {
    /// Enough wins with lives to spare.
    Won,
    /// Out of lives, too few wins, or nothing was played.
    Lost,
}

impl RoundResult {
    /// Check if the round was won.
    #[must_use]
    pub const fn is_won(self) -> bool {
        matches!(self, RoundResult::Won)
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundResult::Won => f.write_str("won"),
            RoundResult::Lost => f.write_str("lost"),
        }
    }
}

/// Lives, wins and progress for the current round.
///
/// Mutated only by the orchestrator in response to accepted outcomes.
///
/// ## Invariants
///
/// - `games_played <= max_games`
/// - `lives <= lives_at_start`, and reaching 0 ends the round
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    lives: u32,
    wins: u32,
    games_played: u32,
    max_games: u32,
    lives_at_start: u32,
}

impl RoundState {
    /// Create counters for a fresh round.
    #[must_use]
    pub fn new(lives: u32, max_games: u32) -> Self {
        let mut state = Self::default();
        state.start(lives, max_games);
        state
    }

    /// Reset all counters for a new round.
    pub fn start(&mut self, lives: u32, max_games: u32) {
        *self = Self {
            lives,
            wins: 0,
            games_played: 0,
            max_games,
            lives_at_start: lives,
        };
    }

    /// Record one microgame result.
    ///
    /// A loss costs a life; lives never drop below zero. Once the round is
    /// over further results are ignored and `false` is returned.
    pub fn apply_result(&mut self, won: bool) -> bool {
        if self.is_round_over() {
            return false;
        }

        self.games_played += 1;
        if won {
            self.wins += 1;
        } else {
            self.lives = self.lives.saturating_sub(1);
        }
        true
    }

    /// Check if the round has ended.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.lives == 0 || self.games_played >= self.max_games
    }

    /// Check the pass rule against an explicit threshold.
    #[must_use]
    pub fn passed(&self, min_wins_to_pass: u32) -> bool {
        self.wins >= min_wins_to_pass && self.lives > 0
    }

    /// Decide the round's result from the current counters.
    ///
    /// The threshold is recomputed from `max_games` on every call. A round in
    /// which nothing was played is lost.
    #[must_use]
    pub fn evaluate(&self) -> RoundResult {
        if self.games_played > 0 && self.passed(pass_threshold(self.max_games)) {
            RoundResult::Won
        } else {
            RoundResult::Lost
        }
    }

    /// Lives remaining.
    #[must_use]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Wins so far.
    #[must_use]
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Microgames resolved so far.
    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Microgames scheduled for the round.
    #[must_use]
    pub fn max_games(&self) -> u32 {
        self.max_games
    }

    /// Lives the round started with.
    #[must_use]
    pub fn lives_at_start(&self) -> u32 {
        self.lives_at_start
    }

    /// Scheduled microgames not yet played.
    #[must_use]
    pub fn games_remaining(&self) -> u32 {
        self.max_games.saturating_sub(self.games_played)
    }
}
