//! Automated players.
//!
//! Bots choose among `legal_moves` through a [`MovePolicy`] and burn a card
//! when nothing is legal, so a bot turn always makes progress.

pub mod policy;

pub use policy::{GreedyPolicy, MovePolicy, RandomPolicy};

use tracing::trace;

use crate::core::{GameRng, GameState};
use crate::error::Result;
use crate::rules::{apply_move, burn_card, legal_moves};

/// Play one turn for the active color.
///
/// ## Errors
///
/// Phase errors when the game is not being played, or a deck error if a new
/// round cannot be dealt.
pub fn take_turn<P: MovePolicy + ?Sized>(
    state: &GameState,
    policy: &P,
    rng: &mut GameRng,
) -> Result<GameState> {
    let moves = legal_moves(state);
    match policy.choose(state, &moves, rng) {
        Some(mv) => {
            trace!(color = %state.current_turn, %mv, candidates = moves.len(), "bot move");
            apply_move(state, &mv)
        }
        None => burn_card(state),
    }
}
