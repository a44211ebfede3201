//! Deterministic random number generation for the draw.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical draws
//! - **Uniform**: Every index in `0..len` is equally likely
//! - **Entropy fallback**: Unseeded sessions draw their seed from the OS
//!
//! ```
//! use who_pays::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! assert_eq!(rng1.pick_index(5), rng2.pick_index(5));
//! assert!(rng1.pick_index(5).unwrap() < 5);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG used to pick the loser.
///
/// Uses ChaCha8 for speed while keeping draws reproducible from a seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick an index uniformly from `0..len`.
    ///
    /// Each index has probability `1 / len`. Returns `None` when `len` is 0.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
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
            assert_eq!(rng1.pick_index(1000), rng2.pick_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.pick_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.pick_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_pick_index_bounds() {
        let mut rng = GameRng::new(7);

        assert_eq!(rng.pick_index(0), None);
        assert_eq!(rng.pick_index(1), Some(0));
        for _ in 0..1000 {
            let i = rng.pick_index(3).unwrap();
            assert!(i < 3);
        }
    }

    #[test]
    fn test_pick_index_hits_every_slot() {
        let mut rng = GameRng::new(42);
        let mut seen = [false; 6];

        for _ in 0..600 {
            seen[rng.pick_index(6).unwrap()] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(GameRng::new(99).seed(), 99);
    }
}
