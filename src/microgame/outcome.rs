//! Outcome reporting primitives.
//!
//! A challenge receives a [`MicrogameTicket`] when it begins. The ticket is
//! consumed to produce the play's single [`MicrogameOutcome`]. Challenges
//! that resolve from a `&mut self` update loop can park the ticket in an
//! [`OutcomeSlot`], which yields an outcome at most once.

use serde::{Deserialize, Serialize};

use crate::core::{ChallengeId, ChallengeInstanceId};

/// Win/lose tag of a finished microgame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MicrogameResult {
    /// The player completed the challenge.
    Won,
    /// The player failed or ran out of time.
    Lost,
}

impl MicrogameResult {
    /// Convert from the boolean form challenges usually track.
    #[must_use]
    pub const fn from_won(won: bool) -> Self {
        if won {
            MicrogameResult::Won
        } else {
            MicrogameResult::Lost
        }
    }

    /// Check if this is a win.
    #[must_use]
    pub const fn is_won(self) -> bool {
        matches!(self, MicrogameResult::Won)
    }
}

/// Result of one play of one challenge.
///
/// Only a [`MicrogameTicket`] can create one, so every outcome names the play
/// it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MicrogameOutcome {
    challenge: ChallengeId,
    instance: ChallengeInstanceId,
    result: MicrogameResult,
}

impl MicrogameOutcome {
    /// The challenge that produced this outcome.
    #[must_use]
    pub fn challenge(&self) -> &ChallengeId {
        &self.challenge
    }

    /// The play that produced this outcome.
    #[must_use]
    pub fn instance(&self) -> ChallengeInstanceId {
        self.instance
    }

    /// Win/lose tag.
    #[must_use]
    pub fn result(&self) -> MicrogameResult {
        self.result
    }

    /// Check if the play was won.
    #[must_use]
    pub fn won(&self) -> bool {
        self.result.is_won()
    }
}

/// Permission to report the outcome of one play.
///
/// Issued by the orchestrator when a selected challenge begins. Not `Clone`:
/// reporting consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct MicrogameTicket {
    challenge: ChallengeId,
    instance: ChallengeInstanceId,
}

impl MicrogameTicket {
    pub(crate) fn new(challenge: ChallengeId, instance: ChallengeInstanceId) -> Self {
        Self { challenge, instance }
    }

    /// The challenge to play.
    #[must_use]
    pub fn challenge(&self) -> &ChallengeId {
        &self.challenge
    }

    /// The play this ticket belongs to.
    #[must_use]
    pub fn instance(&self) -> ChallengeInstanceId {
        self.instance
    }

    /// Consume the ticket, producing the play's outcome.
    #[must_use]
    pub fn finish(self, won: bool) -> MicrogameOutcome {
        MicrogameOutcome {
            challenge: self.challenge,
            instance: self.instance,
            result: MicrogameResult::from_won(won),
        }
    }

    /// Shorthand for `finish(true)`.
    #[must_use]
    pub fn win(self) -> MicrogameOutcome {
        self.finish(true)
    }

    /// Shorthand for `finish(false)`.
    #[must_use]
    pub fn lose(self) -> MicrogameOutcome {
        self.finish(false)
    }
}

/// Holds a ticket until the challenge resolves, then stays empty.
///
/// ```
/// use rust_microgames::core::RoundConfig;
/// use rust_microgames::microgame::OutcomeSlot;
/// use rust_microgames::Orchestrator;
///
/// let mut orchestrator = Orchestrator::with_seed(RoundConfig::default(), 1);
/// orchestrator.start_round(RoundConfig::default()).unwrap();
/// let launch = orchestrator.begin_selected_challenge().unwrap();
///
/// let mut slot = OutcomeSlot::new(launch.ticket);
/// assert!(slot.resolve(true).is_some());
/// assert!(slot.resolve(false).is_none());
/// ```
#[derive(Debug, Default)]
pub struct OutcomeSlot {
    ticket: Option<MicrogameTicket>,
}

impl OutcomeSlot {
    /// Park a ticket.
    #[must_use]
    pub fn new(ticket: MicrogameTicket) -> Self {
        Self { ticket: Some(ticket) }
    }

    /// Check if the outcome has already been produced (or no ticket was given).
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.ticket.is_none()
    }

    /// The challenge this slot reports for, while unresolved.
    #[must_use]
    pub fn challenge(&self) -> Option<&ChallengeId> {
        self.ticket.as_ref().map(MicrogameTicket::challenge)
    }

    /// Produce the outcome the first time; `None` afterwards.
    pub fn resolve(&mut self, won: bool) -> Option<MicrogameOutcome> {
        self.ticket.take().map(|ticket| ticket.finish(won))
    }
}
