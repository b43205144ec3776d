use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{distinct, ChallengeId, RoundRng};
use crate::error::{Result, RoundError};

/// Bag of challenges still available this round.
///
/// ## Usage
///
/// ```
/// use rust_microgames::core::{ChallengeId, RoundRng};
/// use rust_microgames::pool::SelectionPool;
///
/// let catalog = [ChallengeId::new("a"), ChallengeId::new("b")];
/// let mut pool = SelectionPool::new();
/// let mut rng = RoundRng::new(1);
///
/// pool.reset(&catalog);
/// let first = pool.draw_random(&mut rng).unwrap();
/// let second = pool.draw_random(&mut rng).unwrap();
///
/// assert_ne!(first, second);
/// assert!(pool.is_empty());
/// assert!(pool.draw_random(&mut rng).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPool {
    /// Unordered; SmallVec covers typical catalogs without allocating.
    remaining: SmallVec<[ChallengeId; 8]>,
}

impl SelectionPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pool holding the given catalog.
    pub fn from_catalog<'a>(catalog: impl IntoIterator<Item = &'a ChallengeId>) -> Self {
        let mut pool = Self::new();
        pool.reset(catalog);
        pool
    }

    /// Replace the contents with a fresh copy of the full catalog.
    ///
    /// Duplicate entries collapse to one.
    pub fn reset<'a>(&mut self, catalog: impl IntoIterator<Item = &'a ChallengeId>) {
        self.remaining.clear();
        self.remaining.extend(distinct(catalog).cloned());
    }

    /// Check if nothing is left to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Number of challenges left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Check if a challenge is still available.
    #[must_use]
    pub fn contains(&self, id: &ChallengeId) -> bool {
        self.remaining.contains(id)
    }

    /// Challenges still available, in no particular order.
    #[must_use]
    pub fn remaining(&self) -> &[ChallengeId] {
        &self.remaining
    }

    /// Remove and return one challenge chosen uniformly at random.
    ///
    /// Fails with [`RoundError::EmptyPool`] when nothing is left.
    pub fn draw_random(&mut self, rng: &mut RoundRng) -> Result<ChallengeId> {
        let index = rng.gen_index(self.remaining.len()).ok_or(RoundError::EmptyPool)?;
        Ok(self.remaining.swap_remove(index))
    }
}
