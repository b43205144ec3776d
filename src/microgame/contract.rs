//! The contract every microgame implements.

use std::time::Duration;

use super::{MicrogameOutcome, MicrogameTicket};
use crate::core::ChallengeId;

/// A single timed challenge.
///
/// The host creates the microgame when its screen becomes active, hands it
/// the ticket from [`Orchestrator::begin_selected_challenge`], then calls
/// [`Microgame::update`] every frame until it yields an outcome. That first
/// outcome is forwarded to [`Orchestrator::report_outcome`].
///
/// ## Implementation Notes
///
/// - `update` must return `Some` at most once per ticket. Parking the ticket
///   in an [`OutcomeSlot`](super::OutcomeSlot) gives this for free.
/// - Running out of time is a loss, not a missing outcome.
///
/// [`Orchestrator::begin_selected_challenge`]: crate::Orchestrator::begin_selected_challenge
/// [`Orchestrator::report_outcome`]: crate::Orchestrator::report_outcome
pub trait Microgame {
    /// The catalog entry this microgame implements.
    ///
    /// [`Orchestrator::update_microgame`](crate::Orchestrator::update_microgame)
    /// only advances the microgame while this is the active challenge.
    fn challenge_id(&self) -> &ChallengeId;

    /// Begin a play. Called once, before the first `update`.
    fn start(&mut self, ticket: MicrogameTicket);

    /// Advance by `elapsed` since the previous call.
    ///
    /// Returns the play's outcome on the frame it is decided.
    fn update(&mut self, elapsed: Duration) -> Option<MicrogameOutcome>;
}
