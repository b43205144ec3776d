//! Presentation-facing types.
//!
//! The orchestrator never draws anything. It tells the host which screen to
//! load next and hands challenges the ticket they report with.

use serde::{Deserialize, Serialize};

use crate::core::ChallengeId;
use crate::microgame::MicrogameTicket;
use crate::round::RoundResult;
use crate::sequencer::Phase;

/// A presentation unit the host can load.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenId {
    /// Main menu; no round in progress.
    Menu,
    /// Entry point of a round. Entering it starts a round.
    RoundStart,
    /// Intro card naming the next challenge.
    PreChallenge,
    /// The challenge itself.
    Challenge(ChallengeId),
    /// Result of the last challenge, lives and progress.
    PostChallenge,
    /// Round won.
    RoundWon,
    /// Round lost.
    RoundLost,
}

impl ScreenId {
    /// The end-of-round screen for a result.
    #[must_use]
    pub fn for_result(result: RoundResult) -> Self {
        match result {
            RoundResult::Won => ScreenId::RoundWon,
            RoundResult::Lost => ScreenId::RoundLost,
        }
    }

    /// The phase the orchestrator is in while this screen is showing.
    ///
    /// `RoundStart` has none: entering it immediately moves on.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        match self {
            ScreenId::Menu => Some(Phase::Idle),
            ScreenId::RoundStart => None,
            ScreenId::PreChallenge => Some(Phase::PreChallenge),
            ScreenId::Challenge(_) => Some(Phase::ChallengeActive),
            ScreenId::PostChallenge => Some(Phase::PostChallenge),
            ScreenId::RoundWon => Some(Phase::RoundWon),
            ScreenId::RoundLost => Some(Phase::RoundLost),
        }
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenId::Challenge(id) => write!(f, "Challenge({})", id),
            other => std::fmt::Debug::fmt(other, f),
        }
    }
}

/// What the host needs to run a challenge that just began.
#[derive(Debug)]
pub struct ChallengeLaunch {
    /// Screen to load.
    pub screen: ScreenId,
    /// Ticket to give the challenge; it reports its outcome with it.
    pub ticket: MicrogameTicket,
}
