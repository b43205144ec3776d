//! Microgame reporting contract.
//!
//! Challenges are external to the core. All they share with it is:
//! - a [`MicrogameTicket`] received when their play begins,
//! - the [`MicrogameOutcome`] they produce from it, exactly once,
//! - the [`Microgame`] trait a host uses to drive them.

mod contract;
mod outcome;

pub use contract::Microgame;
pub use outcome::{MicrogameOutcome, MicrogameResult, MicrogameTicket, OutcomeSlot};
