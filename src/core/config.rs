//! Game configuration.
//!
//! A `GameConfig` is fixed at game creation and travels inside the
//! `GameState`, so every synchronized snapshot carries the rules it was
//! played under.

use serde::{Deserialize, Serialize};

/// Cards per hand in the first round.
pub const FIRST_ROUND_HAND_SIZE: usize = 5;

/// Cards per hand in every later round.
pub const HAND_SIZE: usize = 4;

/// Complete rule configuration for one game.
///
/// ```
/// use jakaro::core::GameConfig;
///
/// let config = GameConfig::new(7).with_partner_play(true);
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.hand_size_for_round(1), 5);
/// assert_eq!(config.hand_size_for_round(2), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the deck RNG.
    pub seed: u64,

    /// Hand size dealt in round 1.
    pub first_round_hand_size: usize,

    /// Hand size dealt in rounds 2 and later.
    pub hand_size: usize,

    /// Once all of a color's marbles are safe, its player moves the
    /// partner's marbles instead of burning cards.
    pub partner_play: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            first_round_hand_size: FIRST_ROUND_HAND_SIZE,
            hand_size: HAND_SIZE,
            partner_play: false,
        }
    }
}

impl GameConfig {
    /// Create a configuration with standard hand sizes and the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Override the round-1 hand size.
    #[must_use]
    pub fn with_first_round_hand_size(mut self, size: usize) -> Self {
        self.first_round_hand_size = size;
        self
    }

    /// Override the hand size for later rounds.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Enable or disable partner play.
    #[must_use]
    pub fn with_partner_play(mut self, enabled: bool) -> Self {
        self.partner_play = enabled;
        self
    }

    /// Hand size dealt at the start of `round` (1-based).
    #[must_use]
    pub fn hand_size_for_round(&self, round: u32) -> usize {
        if round <= 1 {
            self.first_round_hand_size
        } else {
            self.hand_size
        }
    }
}
