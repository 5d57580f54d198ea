//! Injectable randomness for the automated player.
//!
//! The strategy only ever needs "pick one of these `len` candidates", so
//! that is the whole trait. Production code uses [`GameRng`]; tests plug
//! in scripted sources to make tie-breaking deterministic.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform choices.
pub trait RandomSource {
    /// Returns an index uniformly distributed in `0..len`.
    ///
    /// Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// ChaCha8-backed random source.
///
/// Seeded instances replay the same choices, which the CLI exposes as
/// `--seed` for reproducible games.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: Option<u64>,
}

impl GameRng {
    /// Create a deterministic source from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a source seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    /// Create from an optional seed, falling back to entropy.
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// The seed this source was created with, if deterministic.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for GameRng {
    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.pick(9), rng2.pick(9));
        }
    }

    #[test]
    fn test_pick_in_range() {
        let mut rng = GameRng::new(7);
        for len in 1..20 {
            for _ in 0..50 {
                assert!(rng.pick(len) < len);
            }
        }
    }

    #[test]
    fn test_pick_single_candidate() {
        let mut rng = GameRng::from_entropy();
        assert_eq!(rng.pick(1), 0);
        assert_eq!(rng.seed(), None);
    }

    #[test]
    fn test_covers_all_indices() {
        let mut rng = GameRng::new(1);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.pick(4)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
