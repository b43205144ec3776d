//! # rust-microgames
//!
//! Round orchestration for games built from short timed challenges
//! ("microgames").
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The core never renders, plays audio or reads
//!    input. It returns the [`ScreenId`] to load and exposes read accessors.
//!
//! 2. **Explicit Coordinator**: One [`Orchestrator`] value, constructed by the
//!    host and passed by reference. No global lookup.
//!
//! 3. **Ignore, Don't Corrupt**: Calls that arrive in the wrong phase, or
//!    outcomes reported twice, return a [`RoundError`] and leave lives, wins
//!    and the pool untouched.
//!
//! ## Round Flow
//!
//! `start_round` -> draw from the pool -> `PreChallenge` ->
//! `begin_selected_challenge` -> `ChallengeActive` -> `report_outcome` ->
//! `PostChallenge` -> `continue_after_summary` -> repeat, or `RoundWon` /
//! `RoundLost` -> `return_to_menu` -> `Idle`.
//!
//! ## Modules
//!
//! - `core`: Challenge IDs, RNG, configuration
//! - `pool`: Draw-without-replacement selection pool
//! - `round`: Lives/wins counters and the pass rule
//! - `microgame`: Outcome tickets and the `Microgame` trait
//! - `sequencer`: Phase state machine
//! - `orchestrator`: Public coordinator and screen identifiers

pub mod core;
pub mod error;
pub mod microgame;
pub mod orchestrator;
pub mod pool;
pub mod round;
pub mod sequencer;

// Re-export commonly used types
pub use crate::core::{ChallengeId, ChallengeInstanceId, RoundConfig, RoundRng};

pub use crate::error::{Result, RoundError};

pub use crate::microgame::{
    Microgame, MicrogameOutcome, MicrogameResult, MicrogameTicket, OutcomeSlot,
};

pub use crate::orchestrator::{ChallengeLaunch, Orchestrator, ScreenId};

pub use crate::pool::SelectionPool;

pub use crate::round::{pass_threshold, RoundResult, RoundState, RoundSummary};

pub use crate::sequencer::{Phase, Selection, Sequencer};
