//! Transition sequencing for a round.
//!
//! The sequencer is the state machine behind a round:
//! pre-challenge -> challenge -> post-challenge -> (repeat | round end) -> menu.
//!
//! Nothing here waits. A phase that needs an external signal (the player
//! pressing continue, a challenge finishing) simply stays put until the
//! orchestrator calls the matching transition.

mod machine;
mod phase;

pub use machine::{Selection, Sequencer};
pub use phase::Phase;
