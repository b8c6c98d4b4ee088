//! Deterministic random number generation for shuffling and bot play.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles and deals
//! - **Forkable**: Hand bots an independent stream without disturbing the deck
//! - **Serializable**: Travels inside every `GameState` snapshot as a
//!   `GameRngState`, so a peer restoring a snapshot deals the same cards
//!
//! ```
//! use jakaro::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut bot_rng = rng.fork();
//!
//! // Forks are deterministic: same seed and fork counter, same stream
//! let mut again = GameRng::new(42).fork();
//! assert_eq!(bot_rng.gen_range_usize(0..1000), again.gen_range_usize(0..1000));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backed by ChaCha8.
///
/// Serializes through [`GameRngState`], which makes it cheap to embed in
/// the synchronized game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "GameRngState", into = "GameRngState")]
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

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence. Sessions
    /// fork the room's deck stream once to drive their bots.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    ///
    /// Delegates to rand's Fisher–Yates implementation, so every permutation
    /// is equally likely.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl PartialEq for GameRng {
    fn eq(&self, other: &Self) -> bool {
        self.state() == other.state()
    }
}

impl Eq for GameRng {}

impl From<GameRngState> for GameRng {
    fn from(state: GameRngState) -> Self {
        Self::from_state(&state)
    }
}

impl From<GameRng> for GameRngState {
    fn from(rng: GameRng) -> Self {
        rng.state()
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture and restore are O(1)
/// regardless of how many cards have been shuffled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_leaves_parent_stream_alone() {
        let mut parent = GameRng::new(42);
        let mut untouched = GameRng::new(42);
        let mut forked = parent.fork();
        for _ in 0..10 {
            forked.gen_range_usize(0..1000);
        }

        let seq1: Vec<_> = (0..10).map(|_| parent.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| untouched.gen_range_usize(0..1000)).collect();
        assert_eq!(seq1, seq2);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=10).collect();
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_ne!(data, original);
        data.sort_unstable();
        assert_eq!(data, original);
    }

    #[test]
    fn test_state_restore_continues_sequence() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.gen_range_usize(0..1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_range_usize(0..1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_rng_serde_round_trip() {
        let mut rng = GameRng::new(7);
        let mut cards: Vec<u8> = (0..52).collect();
        rng.shuffle(&mut cards);

        let json = serde_json::to_string(&rng).unwrap();
        let restored: GameRng = serde_json::from_str(&json).unwrap();

        assert_eq!(rng, restored);
    }
}
