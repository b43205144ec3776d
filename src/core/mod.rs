//! Core types: challenge identifiers, RNG, configuration.
//!
//! These are the building blocks shared by the pool, the round counters and
//! the sequencer. Nothing here knows about phases or presentation.

pub mod challenge;
pub mod config;
pub mod rng;

pub use challenge::{distinct, ChallengeId, ChallengeInstanceId};
pub use config::{
    RoundConfig, DEFAULT_CATALOG, DEFAULT_LIVES_PER_ROUND, DEFAULT_MICROGAMES_PER_ROUND,
};
pub use rng::RoundRng;
