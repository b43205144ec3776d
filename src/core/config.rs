//! Round configuration.
//!
//! A `RoundConfig` fixes everything a round needs at start:
//! - how many lives the player has,
//! - how many microgames the round schedules,
//! - which challenges may be drawn.
//!
//! Configs can be built in code or deserialized; missing fields fall back to
//! the defaults below (2 lives, 3 microgames, three stock challenges).

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{distinct, ChallengeId};
use crate::error::{Result, RoundError};

/// Lives granted when none are configured.
pub const DEFAULT_LIVES_PER_ROUND: u32 = 2;

/// Microgames scheduled when none are configured.
pub const DEFAULT_MICROGAMES_PER_ROUND: u32 = 3;

/// Challenges available when no catalog is configured.
pub const DEFAULT_CATALOG: [&str; 3] = ["MG_Loteria", "MG_Ruleta", "MG_SmashBar"];

/// Configuration for a round.
///
/// ```
/// use rust_microgames::core::RoundConfig;
///
/// let config = RoundConfig::new()
///     .with_lives(3)
///     .with_microgames(5)
///     .with_catalog(["a", "b", "c", "d", "e"]);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.pass_threshold(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Lives at the start of the round. Must be positive.
    pub lives_per_round: u32,

    /// Microgames the round schedules.
    ///
    /// Zero is accepted and yields a round that ends immediately as a loss.
    pub microgames_per_round: u32,

    /// Challenges eligible for selection.
    ///
    /// Should hold at least `microgames_per_round` distinct entries; a
    /// smaller catalog ends the round early when it runs dry.
    pub catalog: Vec<ChallengeId>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            lives_per_round: DEFAULT_LIVES_PER_ROUND,
            microgames_per_round: DEFAULT_MICROGAMES_PER_ROUND,
            catalog: DEFAULT_CATALOG.iter().copied().map(ChallengeId::new).collect(),
        }
    }
}

impl RoundConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set lives per round.
    #[must_use]
    pub fn with_lives(mut self, lives: u32) -> Self {
        self.lives_per_round = lives;
        self
    }

    /// Set microgames per round.
    #[must_use]
    pub fn with_microgames(mut self, count: u32) -> Self {
        self.microgames_per_round = count;
        self
    }

    /// Replace the catalog.
    #[must_use]
    pub fn with_catalog<I>(mut self, catalog: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ChallengeId>,
    {
        self.catalog = catalog.into_iter().map(Into::into).collect();
        self
    }

    /// Add one challenge to the catalog.
    #[must_use]
    pub fn with_challenge(mut self, id: impl Into<ChallengeId>) -> Self {
        self.catalog.push(id.into());
        self
    }

    /// Minimum wins needed to pass a round with this config.
    #[must_use]
    pub fn pass_threshold(&self) -> u32 {
        crate::round::pass_threshold(self.microgames_per_round)
    }

    /// The catalog with duplicates removed, first occurrence kept.
    #[must_use]
    pub fn distinct_catalog(&self) -> Vec<ChallengeId> {
        distinct(&self.catalog).cloned().collect()
    }

    /// Check that a round can be started with this config.
    ///
    /// A catalog smaller than the number of scheduled games is allowed but
    /// logged, since the round will end early.
    pub fn validate(&self) -> Result<()> {
        if self.lives_per_round == 0 {
            return Err(RoundError::InvalidConfig(
                "lives_per_round must be at least 1".to_string(),
            ));
        }

        let unique = distinct(&self.catalog).count();
        if unique < self.catalog.len() {
            warn!(
                listed = self.catalog.len(),
                unique, "catalog lists duplicate challenges; duplicates are ignored"
            );
        }
        if (unique as u64) < u64::from(self.microgames_per_round) {
            warn!(
                unique,
                scheduled = self.microgames_per_round,
                "catalog is smaller than the number of scheduled microgames"
            );
        }

        Ok(())
    }
}
