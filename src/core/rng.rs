//! Deterministic random number generation for challenge selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical selection order
//! - **Reproducible**: The seed is kept so a logged run can be replayed
//! - **Uniform**: Index draws are unbiased over the requested range
//!
//! ```
//! use rust_microgames::core::RoundRng;
//!
//! let mut a = RoundRng::new(42);
//! let mut b = RoundRng::new(42);
//!
//! assert_eq!(a.gen_index(10), b.gen_index(10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used to draw from the selection pool.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct RoundRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl RoundRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    ///
    /// The chosen seed is still available through [`RoundRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick an index in `0..len` with uniform probability.
    ///
    /// Returns `None` when `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
    }
}

impl Default for RoundRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = RoundRng::new(42);
        let mut rng2 = RoundRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_index(1000), rng2.gen_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = RoundRng::new(1);
        let mut rng2 = RoundRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_gen_index_bounds() {
        let mut rng = RoundRng::new(7);

        assert_eq!(rng.gen_index(0), None);
        assert_eq!(rng.gen_index(1), Some(0));

        for _ in 0..200 {
            let i = rng.gen_index(5).unwrap();
            assert!(i < 5);
        }
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(RoundRng::new(99).seed(), 99);

        let rng = RoundRng::from_entropy();
        let mut replay = RoundRng::new(rng.seed());
        let mut original = rng.clone();
        assert_eq!(original.gen_index(100), replay.gen_index(100));
    }
}
