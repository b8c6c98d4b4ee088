//! Move-choice policies for bot seats.
//!
//! Policies are trait-based so a caller can plug in its own heuristic:
//! - `RandomPolicy`: uniform over legal moves
//! - `GreedyPolicy`: one-ply heuristic, no lookahead

use crate::board::{progress, Location};
use crate::core::{GameRng, GameState, Move};

/// Picks one move out of the legal candidates.
pub trait MovePolicy: Send + Sync {
    /// Choose a move from `moves`.
    ///
    /// Returns `None` only when `moves` is empty.
    fn choose(&self, state: &GameState, moves: &[Move], rng: &mut GameRng) -> Option<Move>;
}

/// Uniform random policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose(&self, _state: &GameState, moves: &[Move], rng: &mut GameRng) -> Option<Move> {
        rng.choose(moves).copied()
    }
}

/// Greedy one-ply policy.
///
/// Ranks moves by capture, then entering the home stretch, then leaving
/// Base, then distance gained. Ties go to the earliest candidate.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    /// Heuristic score of a single move; larger is better.
    #[must_use]
    pub fn score(state: &GameState, mv: &Move) -> (bool, bool, bool, i32) {
        let color = mv.marble.color;
        let captures = match mv.to {
            Location::Track(index) => state.opponent_on_track(color, index).is_some(),
            _ => false,
        };
        let before = progress(mv.from, color).unwrap_or(-1);
        let after = progress(mv.to, color).unwrap_or(-1);
        (captures, mv.enters_safe(), mv.is_exit(), after - before)
    }
}

impl MovePolicy for GreedyPolicy {
    fn choose(&self, state: &GameState, moves: &[Move], _rng: &mut GameRng) -> Option<Move> {
        let mut best: Option<(Move, (bool, bool, bool, i32))> = None;
        for mv in moves {
            let score = Self::score(state, mv);
            match &best {
                Some((_, top)) if *top >= score => {}
                _ => best = Some((*mv, score)),
            }
        }
        best.map(|(mv, _)| mv)
    }
}
