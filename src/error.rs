//! Error types for round orchestration.
//!
//! None of these are fatal. A rejected call leaves every counter, the pool
//! and the current phase exactly as they were, so callers may log and move
//! on. Presentation and timing races are expected to produce them.

use crate::core::ChallengeInstanceId;
use crate::sequencer::Phase;

/// A specialized `Result` type for orchestration operations.
pub type Result<T> = std::result::Result<T, RoundError>;

/// Errors reported by the pool, the sequencer and the orchestrator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    /// `draw_random` was called on an empty pool.
    #[error("selection pool is empty")]
    EmptyPool,

    /// Games remain in the round but the pool has nothing left to draw.
    ///
    /// Recovered by evaluating the round as if it had ended naturally.
    #[error("selection pool exhausted with {remaining} game(s) still scheduled")]
    PoolExhausted {
        /// Games that could not be played.
        remaining: u32,
    },

    /// The call is not permitted in the current phase.
    #[error("`{operation}` is not valid in phase {phase}")]
    InvalidTransition {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Phase the sequencer was in.
        phase: Phase,
    },

    /// A second outcome arrived for a play that was already resolved.
    #[error("outcome for {instance} ignored: already resolved")]
    DuplicateOutcome {
        /// The play that reported twice.
        instance: ChallengeInstanceId,
    },

    /// An outcome arrived from a play that is no longer the active one.
    #[error("outcome for {received} ignored: active play is {expected}")]
    StaleOutcome {
        /// The play that reported.
        received: ChallengeInstanceId,
        /// The play currently awaiting an outcome.
        expected: ChallengeInstanceId,
    },

    /// The round configuration cannot start a round.
    #[error("invalid round configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = RoundError::InvalidTransition {
            operation: "continue_after_summary",
            phase: Phase::ChallengeActive,
        };
        assert_eq!(
            err.to_string(),
            "`continue_after_summary` is not valid in phase ChallengeActive"
        );

        let err = RoundError::PoolExhausted { remaining: 2 };
        assert_eq!(
            err.to_string(),
            "selection pool exhausted with 2 game(s) still scheduled"
        );

        let err = RoundError::DuplicateOutcome {
            instance: ChallengeInstanceId::new(7),
        };
        assert_eq!(err.to_string(), "outcome for Instance(7) ignored: already resolved");
    }
}
