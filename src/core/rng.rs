//! Deterministic random number generation.
//!
//! Every source of chance in a game (initial scatter, which racer moves,
//! the die roll, random participants) draws from a `GameRng` that the
//! caller seeds. There is no thread-local or global generator.
//!
//! ```
//! use camel_race::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.roll(1..=3), b.roll(1..=3));
//!
//! // Forks are independent but reproducible.
//! let mut fork_a = a.fork();
//! let mut fork_b = b.fork();
//! assert_eq!(fork_a.gen_range_usize(0..100), fork_b.gen_range_usize(0..100));
//! ```

use std::ops::{Range, RangeInclusive};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 generator with deterministic forking.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent child stream.
    ///
    /// The n-th fork of a given seed is always the same stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Roll a die over an inclusive range.
    pub fn roll(&mut self, range: RangeInclusive<u8>) -> u8 {
        self.inner.gen_range(range)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
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
            assert_eq!(rng1.roll(1..=3), rng2.roll(1..=3));
        }
    }

    #[test]
    fn test_roll_stays_in_range() {
        let mut rng = GameRng::new(3);
        let mut seen = [false; 4];

        for _ in 0..500 {
            let r = rng.roll(1..=3);
            assert!((1..=3).contains(&r));
            seen[r as usize] = true;
        }

        assert!(seen[1] && seen[2] && seen[3]);
    }

    #[test]
    fn test_fork_differs_from_parent() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_successive_forks_differ() {
        let mut rng = GameRng::new(42);
        let first = rng.fork();
        let second = rng.fork();

        assert_ne!(first.seed(), second.seed());
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u8> = (0..10).collect();

        rng.shuffle(&mut data);
        data.sort_unstable();

        assert_eq!(data, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = [1, 2, 3];

        let chosen = rng.choose(&items).copied();
        assert!(matches!(chosen, Some(1..=3)));

        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
