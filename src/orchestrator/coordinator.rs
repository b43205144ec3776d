//! The round coordinator.

use std::time::Duration;

use im::Vector;
use tracing::{debug, info, warn};

use super::{ChallengeLaunch, ScreenId};
use crate::core::{ChallengeId, ChallengeInstanceId, RoundConfig, RoundRng};
use crate::error::Result;
use crate::microgame::{Microgame, MicrogameOutcome, MicrogameTicket};
use crate::pool::SelectionPool;
use crate::round::{pass_threshold, RoundResult, RoundState, RoundSummary};
use crate::sequencer::{Phase, Selection, Sequencer};

/// Coordinates rounds of microgames.
///
/// Owns the round counters, the selection pool and the sequencer. Hosts
/// construct one and pass it by reference to whatever drives presentation;
/// every transition is a synchronous call that returns the screen to load.
///
/// A call that is not valid right now returns an error and changes nothing.
/// Such calls are expected from presentation and timing races, so callers
/// can treat the error as "ignored".
///
/// ## Example
///
/// ```
/// use rust_microgames::{Orchestrator, RoundConfig, RoundResult, ScreenId};
///
/// let config = RoundConfig::new().with_lives(2).with_microgames(3);
/// let mut orchestrator = Orchestrator::with_seed(config.clone(), 7);
///
/// assert_eq!(orchestrator.start_round(config).unwrap(), ScreenId::PreChallenge);
///
/// for _ in 0..3 {
///     let launch = orchestrator.begin_selected_challenge().unwrap();
///     let outcome = launch.ticket.win();
///     assert_eq!(orchestrator.report_outcome(outcome).unwrap(), ScreenId::PostChallenge);
///     orchestrator.continue_after_summary().unwrap();
/// }
///
/// assert_eq!(orchestrator.round_result(), Some(RoundResult::Won));
/// assert_eq!(orchestrator.return_to_menu().unwrap(), ScreenId::Menu);
/// ```
#[derive(Clone, Debug)]
pub struct Orchestrator {
    config: RoundConfig,
    rng: RoundRng,
    pool: SelectionPool,
    round: RoundState,
    sequencer: Sequencer,
    next_instance: ChallengeInstanceId,
    last_result: Option<MicrogameOutcome>,
    history: Vector<MicrogameOutcome>,
    last_round: Option<RoundSummary>,
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new(RoundConfig::default(), RoundRng::from_entropy())
    }
}

impl Orchestrator {
    /// Create an idle orchestrator.
    ///
    /// `config` is used by [`restart_round`](Self::restart_round) and by
    /// entering [`ScreenId::RoundStart`] until a round is started with
    /// another one.
    pub fn new(config: RoundConfig, rng: RoundRng) -> Self {
        Self {
            config,
            rng,
            pool: SelectionPool::new(),
            round: RoundState::default(),
            sequencer: Sequencer::new(),
            next_instance: ChallengeInstanceId::new(0),
            last_result: None,
            history: Vector::new(),
            last_round: None,
        }
    }

    /// Create an idle orchestrator with a deterministic selection order.
    pub fn with_seed(config: RoundConfig, seed: u64) -> Self {
        Self::new(config, RoundRng::new(seed))
    }

    // === Round lifecycle ===

    /// Start a new round, abandoning any round in progress.
    ///
    /// Returns the screen to load: normally `PreChallenge`, or the end screen
    /// if the config leaves nothing to play. An invalid config is rejected
    /// and the current round, if any, continues untouched.
    pub fn start_round(&mut self, config: RoundConfig) -> Result<ScreenId> {
        if let Err(err) = config.validate() {
            warn!(error = %err, "round not started");
            return Err(err);
        }

        info!(
            lives = config.lives_per_round,
            microgames = config.microgames_per_round,
            catalog = config.catalog.len(),
            seed = self.rng.seed(),
            "starting round"
        );

        self.round
            .start(config.lives_per_round, config.microgames_per_round);
        self.pool.reset(&config.catalog);
        self.config = config;
        self.last_result = None;
        self.history.clear();
        self.sequencer.start();

        self.select_next()
    }

    /// Start a new round with the most recent config.
    ///
    /// Backs the "next round" and "retry" buttons of the end screens.
    pub fn restart_round(&mut self) -> Result<ScreenId> {
        self.start_round(self.config.clone())
    }

    /// Begin the challenge drawn for the next play.
    ///
    /// Valid only in `PreChallenge`. Consumes the pending selection and
    /// issues the ticket the challenge must report with.
    pub fn begin_selected_challenge(&mut self) -> Result<ChallengeLaunch> {
        let instance = self.next_instance;
        let challenge = self
            .sequencer
            .begin(instance)
            .inspect_err(|err| warn!(error = %err, "begin ignored"))?;
        self.next_instance = instance.next();

        debug!(%challenge, %instance, "challenge started");
        Ok(ChallengeLaunch {
            screen: ScreenId::Challenge(challenge.clone()),
            ticket: MicrogameTicket::new(challenge, instance),
        })
    }

    /// Record the outcome of the active challenge.
    ///
    /// Valid only in `ChallengeActive`, and only once, for the play that is
    /// active. Anything else (a duplicate, a report from an abandoned
    /// play) is rejected without touching lives or wins.
    pub fn report_outcome(&mut self, outcome: MicrogameOutcome) -> Result<ScreenId> {
        self.sequencer
            .resolve(&outcome)
            .inspect_err(|err| warn!(error = %err, "outcome ignored"))?;

        self.round.apply_result(outcome.won());
        if outcome.won() {
            info!(
                challenge = %outcome.challenge(),
                wins = self.round.wins(),
                "microgame won"
            );
        } else {
            info!(
                challenge = %outcome.challenge(),
                lives = self.round.lives(),
                "microgame lost"
            );
        }

        self.history.push_back(outcome.clone());
        self.last_result = Some(outcome);
        Ok(ScreenId::PostChallenge)
    }

    /// Leave the post-challenge summary.
    ///
    /// Valid only in `PostChallenge`. Draws the next challenge, or ends the
    /// round when lives are gone or the schedule is complete.
    pub fn continue_after_summary(&mut self) -> Result<ScreenId> {
        let finished = self
            .sequencer
            .advance(&self.round)
            .inspect_err(|err| warn!(error = %err, "continue ignored"))?;

        match finished {
            Some(result) => Ok(self.finish_round(result)),
            None => self.select_next(),
        }
    }

    /// Leave a finished round for the menu.
    pub fn return_to_menu(&mut self) -> Result<ScreenId> {
        self.sequencer
            .return_to_idle()
            .inspect_err(|err| warn!(error = %err, "return to menu ignored"))?;
        Ok(ScreenId::Menu)
    }

    /// Lifecycle hook: the host has made `screen` active.
    ///
    /// Entering `RoundStart` starts a round with the most recent config and
    /// returns the screen to load next. Any other screen only gets checked
    /// against the current phase; a mismatch is logged.
    pub fn on_enter_presentation(&mut self, screen: &ScreenId) -> Result<Option<ScreenId>> {
        if *screen == ScreenId::RoundStart {
            return self.restart_round().map(Some);
        }

        if !self.is_showing(screen) {
            warn!(%screen, phase = %self.phase(), "screen entered out of sequence");
        } else {
            debug!(%screen, "screen entered");
        }
        Ok(None)
    }

    /// Drive a microgame by one frame and forward its outcome, if any.
    ///
    /// Returns `None` while the microgame is still undecided. A microgame
    /// that is not the active challenge is not advanced; the mismatch is
    /// logged and `None` returned.
    pub fn update_microgame<M>(&mut self, game: &mut M, elapsed: Duration) -> Option<Result<ScreenId>>
    where
        M: Microgame + ?Sized,
    {
        let screen = ScreenId::Challenge(game.challenge_id().clone());
        if !self.is_showing(&screen) {
            warn!(%screen, phase = %self.phase(), "update for inactive microgame ignored");
            return None;
        }

        game.update(elapsed).map(|outcome| self.report_outcome(outcome))
    }

    fn select_next(&mut self) -> Result<ScreenId> {
        match self
            .sequencer
            .select(&mut self.pool, &mut self.rng, &self.round)?
        {
            Selection::Drawn(challenge) => {
                debug!(
                    %challenge,
                    remaining = self.pool.len(),
                    "next challenge selected"
                );
                Ok(ScreenId::PreChallenge)
            }
            Selection::RoundOver(result) => Ok(self.finish_round(result)),
        }
    }

    fn finish_round(&mut self, result: RoundResult) -> ScreenId {
        let summary = RoundSummary::new(&self.round, result);
        info!(
            %result,
            wins = summary.wins,
            games_played = summary.games_played,
            microgames = summary.max_games,
            lives = summary.lives_left,
            "round over"
        );
        self.last_round = Some(summary);
        ScreenId::for_result(result)
    }

    fn is_showing(&self, screen: &ScreenId) -> bool {
        match screen {
            ScreenId::Challenge(id) => self
                .sequencer
                .active_challenge()
                .is_some_and(|(active, _)| active == id),
            other => other.phase() == Some(self.phase()),
        }
    }

    // === Read accessors ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.sequencer.phase()
    }

    /// Config of the current (or most recent) round.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Lives remaining this round.
    #[must_use]
    pub fn current_lives(&self) -> u32 {
        self.round.lives()
    }

    /// Microgames won this round.
    #[must_use]
    pub fn wins_this_round(&self) -> u32 {
        self.round.wins()
    }

    /// Microgames resolved this round.
    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.round.games_played()
    }

    /// Microgames the current round schedules.
    #[must_use]
    pub fn microgames_per_round(&self) -> u32 {
        self.round.max_games()
    }

    /// Wins needed to pass the current round.
    #[must_use]
    pub fn pass_threshold(&self) -> u32 {
        pass_threshold(self.round.max_games())
    }

    /// Full round counters.
    #[must_use]
    pub fn round_state(&self) -> &RoundState {
        &self.round
    }

    /// Outcome of the most recent microgame this round.
    #[must_use]
    pub fn last_result(&self) -> Option<&MicrogameOutcome> {
        self.last_result.as_ref()
    }

    /// Challenge drawn for the next play, while in `PreChallenge`.
    #[must_use]
    pub fn next_challenge_id(&self) -> Option<&ChallengeId> {
        self.sequencer.pending_selection()
    }

    /// Challenge being played, while in `ChallengeActive`.
    #[must_use]
    pub fn active_challenge(&self) -> Option<&ChallengeId> {
        self.sequencer.active_challenge().map(|(id, _)| id)
    }

    /// Result of the current round, once decided.
    #[must_use]
    pub fn round_result(&self) -> Option<RoundResult> {
        self.sequencer.round_result()
    }

    /// Challenges not yet drawn this round.
    #[must_use]
    pub fn remaining_challenges(&self) -> &[ChallengeId] {
        self.pool.remaining()
    }

    /// Outcomes accepted this round, oldest first.
    ///
    /// Cloning the returned vector is O(1).
    #[must_use]
    pub fn history(&self) -> &Vector<MicrogameOutcome> {
        &self.history
    }

    /// Summary of the most recently finished round.
    #[must_use]
    pub fn last_round(&self) -> Option<&RoundSummary> {
        self.last_round.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoundError;

    fn config(lives: u32, games: u32, catalog: &[&str]) -> RoundConfig {
        RoundConfig::new()
            .with_lives(lives)
            .with_microgames(games)
            .with_catalog(catalog.iter().copied())
    }

    fn play(orchestrator: &mut Orchestrator, won: bool) -> ScreenId {
        let launch = orchestrator.begin_selected_challenge().unwrap();
        orchestrator.report_outcome(launch.ticket.finish(won)).unwrap()
    }

    #[test]
    fn test_new_is_idle() {
        let orchestrator = Orchestrator::with_seed(RoundConfig::default(), 1);

        assert_eq!(orchestrator.phase(), Phase::Idle);
        assert_eq!(orchestrator.next_challenge_id(), None);
        assert_eq!(orchestrator.last_result(), None);
        assert_eq!(orchestrator.round_result(), None);
    }

    #[test]
    fn test_start_round_selects() {
        let mut orchestrator = Orchestrator::with_seed(RoundConfig::default(), 1);
        let screen = orchestrator.start_round(config(2, 3, &["a", "b", "c"])).unwrap();

        assert_eq!(screen, ScreenId::PreChallenge);
        assert_eq!(orchestrator.phase(), Phase::PreChallenge);
        assert_eq!(orchestrator.current_lives(), 2);
        assert_eq!(orchestrator.games_played(), 0);
        assert_eq!(orchestrator.remaining_challenges().len(), 2);
        assert!(orchestrator.next_challenge_id().is_some());
    }

    #[test]
    fn test_begin_issues_unique_instances() {
        let mut orchestrator = Orchestrator::with_seed(RoundConfig::default(), 1);
        orchestrator.start_round(config(3, 3, &["a", "b", "c"])).unwrap();

        let first = orchestrator.begin_selected_challenge().unwrap();
        assert_eq!(
            first.screen,
            ScreenId::Challenge(first.ticket.challenge().clone())
        );
        let instance = first.ticket.instance();
        orchestrator.report_outcome(first.ticket.win()).unwrap();
        orchestrator.continue_after_summary().unwrap();

        let second = orchestrator.begin_selected_challenge().unwrap();
        assert!(second.ticket.instance() > instance);
    }

    #[test]
    fn test_invalid_config_keeps_round() {
        let mut orchestrator = Orchestrator::with_seed(RoundConfig::default(), 1);
        orchestrator.start_round(config(2, 3, &["a", "b", "c"])).unwrap();
        let pending = orchestrator.next_challenge_id().cloned();

        let err = orchestrator.start_round(config(0, 3, &["x"])).unwrap_err();

        assert!(matches!(err, RoundError::InvalidConfig(_)));
        assert_eq!(orchestrator.phase(), Phase::PreChallenge);
        assert_eq!(orchestrator.next_challenge_id().cloned(), pending);
        assert_eq!(orchestrator.config().lives_per_round, 2);
    }

    #[test]
    fn test_history_and_last_result() {
        let mut orchestrator = Orchestrator::with_seed(RoundConfig::default(), 9);
        orchestrator.start_round(config(2, 3, &["a", "b", "c"])).unwrap();

        play(&mut orchestrator, false);
        assert!(!orchestrator.last_result().unwrap().won());
        orchestrator.continue_after_summary().unwrap();
        play(&mut orchestrator, true);

        assert!(orchestrator.last_result().unwrap().won());
        let results: Vec<bool> = orchestrator.history().iter().map(|o| o.won()).collect();
        assert_eq!(results, vec![false, true]);

        orchestrator.restart_round().unwrap();
        assert!(orchestrator.history().is_empty());
        assert_eq!(orchestrator.last_result(), None);
    }

    #[test]
    fn test_last_round_summary() {
        let mut orchestrator = Orchestrator::with_seed(RoundConfig::default(), 3);
        orchestrator.start_round(config(2, 1, &["a"])).unwrap();
        play(&mut orchestrator, true);

        assert_eq!(orchestrator.continue_after_summary().unwrap(), ScreenId::RoundWon);

        let summary = orchestrator.last_round().unwrap();
        assert_eq!(summary.result, RoundResult::Won);
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.pass_threshold, 1);
    }

    #[test]
    fn test_enter_round_start_restarts() {
        let mut orchestrator = Orchestrator::with_seed(config(2, 3, &["a", "b", "c"]), 5);

        let next = orchestrator.on_enter_presentation(&ScreenId::RoundStart).unwrap();

        assert_eq!(next, Some(ScreenId::PreChallenge));
        assert_eq!(orchestrator.phase(), Phase::PreChallenge);
    }

    #[test]
    fn test_enter_other_screen_changes_nothing() {
        let mut orchestrator = Orchestrator::with_seed(RoundConfig::default(), 5);
        orchestrator.start_round(RoundConfig::default()).unwrap();

        assert_eq!(
            orchestrator.on_enter_presentation(&ScreenId::PreChallenge).unwrap(),
            None
        );
        assert_eq!(
            orchestrator.on_enter_presentation(&ScreenId::RoundWon).unwrap(),
            None
        );
        assert_eq!(orchestrator.phase(), Phase::PreChallenge);
    }

    #[test]
    fn test_is_showing() {
        let mut orchestrator = Orchestrator::with_seed(RoundConfig::default(), 5);
        assert!(orchestrator.is_showing(&ScreenId::Menu));

        orchestrator.start_round(RoundConfig::default()).unwrap();
        let launch = orchestrator.begin_selected_challenge().unwrap();

        assert!(orchestrator.is_showing(&launch.screen));
        assert!(!orchestrator.is_showing(&ScreenId::Challenge(ChallengeId::new("nope"))));
        assert!(!orchestrator.is_showing(&ScreenId::PreChallenge));
    }
}
