//! The transition state machine.
//!
//! The sequencer owns nothing but the current stage. Pool and counters are
//! passed in by the orchestrator, which decides what to do with each
//! transition's result.

use tracing::{debug, warn};

use super::Phase;
use crate::core::{ChallengeId, ChallengeInstanceId, RoundRng};
use crate::error::{Result, RoundError};
use crate::microgame::MicrogameOutcome;
use crate::pool::SelectionPool;
use crate::round::{RoundResult, RoundState};

/// Stage with the data that is only valid inside it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum Stage {
    #[default]
    Idle,
    Selecting,
    PreChallenge {
        pending: ChallengeId,
    },
    ChallengeActive {
        challenge: ChallengeId,
        instance: ChallengeInstanceId,
    },
    PostChallenge,
    RoundOver(RoundResult),
}

impl Stage {
    fn phase(&self) -> Phase {
        match self {
            Stage::Idle => Phase::Idle,
            Stage::Selecting => Phase::Selecting,
            Stage::PreChallenge { .. } => Phase::PreChallenge,
            Stage::ChallengeActive { .. } => Phase::ChallengeActive,
            Stage::PostChallenge => Phase::PostChallenge,
            Stage::RoundOver(result) => Phase::from_result(*result),
        }
    }
}

/// What leaving `Selecting` produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// A challenge was drawn and is now pending.
    Drawn(ChallengeId),
    /// Nothing more will be played; the round ended with this result.
    RoundOver(RoundResult),
}

/// Round phase state machine.
///
/// ## Behavior
///
/// - `start()`: Any phase -> `Selecting`
/// - `select()`: `Selecting` -> `PreChallenge`, or straight to the round end
/// - `begin()`: `PreChallenge` -> `ChallengeActive`, consuming the selection
/// - `resolve()`: `ChallengeActive` -> `PostChallenge` for the active play only
/// - `advance()`: `PostChallenge` -> `Selecting` or the round end
/// - `return_to_idle()`: `RoundWon`/`RoundLost` -> `Idle`
///
/// Every rejected call returns an error and leaves the stage untouched.
#[derive(Clone, Debug, Default)]
pub struct Sequencer {
    stage: Stage,
    /// Most recent play whose outcome was accepted.
    last_resolved: Option<ChallengeInstanceId>,
}

impl Sequencer {
    /// Create a sequencer in `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.stage.phase()
    }

    /// The challenge drawn for the next play, while in `PreChallenge`.
    #[must_use]
    pub fn pending_selection(&self) -> Option<&ChallengeId> {
        match &self.stage {
            Stage::PreChallenge { pending } => Some(pending),
            _ => None,
        }
    }

    /// The challenge being played, while in `ChallengeActive`.
    #[must_use]
    pub fn active_challenge(&self) -> Option<(&ChallengeId, ChallengeInstanceId)> {
        match &self.stage {
            Stage::ChallengeActive { challenge, instance } => Some((challenge, *instance)),
            _ => None,
        }
    }

    /// The round's result, once decided.
    #[must_use]
    pub fn round_result(&self) -> Option<RoundResult> {
        match self.stage {
            Stage::RoundOver(result) => Some(result),
            _ => None,
        }
    }

    fn reject(&self, operation: &'static str) -> RoundError {
        RoundError::InvalidTransition {
            operation,
            phase: self.phase(),
        }
    }

    fn transition(&mut self, to: Stage) {
        debug!(from = %self.phase(), to = %to.phase(), "phase transition");
        self.stage = to;
    }

    /// Enter `Selecting` for a new round, abandoning whatever was in progress.
    pub fn start(&mut self) {
        if self.phase().is_in_round() {
            debug!(phase = %self.phase(), "abandoning round in progress");
        }
        self.transition(Stage::Selecting);
    }

    /// Leave `Selecting`: draw the next challenge or end the round.
    ///
    /// The round ends when the counters say it is over, or when the pool runs
    /// dry with games still scheduled. The latter is logged as
    /// [`RoundError::PoolExhausted`] and evaluated like a natural end.
    pub fn select(
        &mut self,
        pool: &mut SelectionPool,
        rng: &mut RoundRng,
        round: &RoundState,
    ) -> Result<Selection> {
        if self.stage != Stage::Selecting {
            return Err(self.reject("select"));
        }

        if round.is_round_over() {
            return Ok(Selection::RoundOver(self.end_round(round)));
        }

        match pool.draw_random(rng) {
            Ok(pending) => {
                self.transition(Stage::PreChallenge {
                    pending: pending.clone(),
                });
                Ok(Selection::Drawn(pending))
            }
            Err(RoundError::EmptyPool) => {
                let exhausted = RoundError::PoolExhausted {
                    remaining: round.games_remaining(),
                };
                warn!(error = %exhausted, "ending round early");
                Ok(Selection::RoundOver(self.end_round(round)))
            }
            Err(other) => Err(other),
        }
    }

    fn end_round(&mut self, round: &RoundState) -> RoundResult {
        let result = round.evaluate();
        self.transition(Stage::RoundOver(result));
        result
    }

    /// Begin the pending challenge as play `instance`.
    ///
    /// Returns the challenge that is now active.
    pub fn begin(&mut self, instance: ChallengeInstanceId) -> Result<ChallengeId> {
        let Stage::PreChallenge { pending } = &self.stage else {
            return Err(self.reject("begin_selected_challenge"));
        };

        let challenge = pending.clone();
        self.transition(Stage::ChallengeActive {
            challenge: challenge.clone(),
            instance,
        });
        Ok(challenge)
    }

    /// Accept the outcome of the active play.
    ///
    /// Outcomes for any other play are rejected: a repeat of the last
    /// accepted play is a [`RoundError::DuplicateOutcome`], an older or
    /// abandoned play is a [`RoundError::StaleOutcome`].
    pub fn resolve(&mut self, outcome: &MicrogameOutcome) -> Result<()> {
        let received = outcome.instance();

        match &self.stage {
            Stage::ChallengeActive { instance, .. } if *instance == received => {
                self.last_resolved = Some(received);
                self.transition(Stage::PostChallenge);
                Ok(())
            }
            _ if self.last_resolved == Some(received) => {
                Err(RoundError::DuplicateOutcome { instance: received })
            }
            Stage::ChallengeActive { instance, .. } => Err(RoundError::StaleOutcome {
                received,
                expected: *instance,
            }),
            _ => Err(self.reject("report_outcome")),
        }
    }

    /// Leave `PostChallenge`.
    ///
    /// Returns `Some(result)` when the round is over, `None` when the
    /// sequencer is back in `Selecting`.
    pub fn advance(&mut self, round: &RoundState) -> Result<Option<RoundResult>> {
        if self.stage != Stage::PostChallenge {
            return Err(self.reject("continue_after_summary"));
        }

        if round.is_round_over() {
            Ok(Some(self.end_round(round)))
        } else {
            self.transition(Stage::Selecting);
            Ok(None)
        }
    }

    /// Leave a finished round for `Idle`.
    pub fn return_to_idle(&mut self) -> Result<RoundResult> {
        let Stage::RoundOver(result) = self.stage else {
            return Err(self.reject("return_to_menu"));
        };
        self.transition(Stage::Idle);
        Ok(result)
    }
}
