//! Round counters and the pass/fail rule.
//!
//! A round grants a fixed number of lives and schedules a fixed number of
//! microgames. Each result consumes one scheduled game; losses also consume
//! a life. The round is over when lives run out or the schedule is done.

mod state;
mod summary;

pub use state::{pass_threshold, RoundResult, RoundState};
pub use summary::RoundSummary;
