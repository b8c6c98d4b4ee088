//! Turn/Round Controller: rotation, burning, round changes, victory.

use tracing::{debug, info};

use super::moves::legal_moves;
use crate::cards::deck;
use crate::core::{Color, GameState, MoveRecord, Phase, TeamId, TurnKind};
use crate::error::{DeckError, MoveError, Result};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Both colors of this team have every marble home.
    TeamWon(TeamId),
}

impl GameResult {
    /// Check if a color is on the winning side.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        match self {
            GameResult::TeamWon(team) => color.team() == *team,
        }
    }
}

/// `Some` once the game has been won.
#[must_use]
pub fn outcome(state: &GameState) -> Option<GameResult> {
    state.winner.map(GameResult::TeamWon)
}

/// Team whose eight marbles are all in their home stretches, if any.
#[must_use]
pub fn check_winner(state: &GameState) -> Option<TeamId> {
    [TeamId(1), TeamId(2)]
        .into_iter()
        .find(|team| team.colors().iter().all(|&c| state.players[c].all_safe()))
}

/// Pass the turn to the next color in rotation.
pub fn advance_turn(state: &mut GameState) {
    state.current_turn = state.current_turn.next();
}

/// Discard a card without effect and pass the turn.
///
/// Only allowed when the active player has no legal move. The first card in
/// hand is burned; a player with no cards simply passes. `last_played_card`
/// is left untouched.
///
/// ## Errors
///
/// `MoveError::MustPlay` if a legal move exists, or the phase errors from
/// [`apply_move`](super::apply_move).
pub fn burn_card(state: &GameState) -> Result<GameState> {
    ensure_playing(state)?;

    let color = state.current_turn;
    if !legal_moves(state).is_empty() {
        return Err(MoveError::MustPlay(color));
    }

    let mut next = state.clone();
    let kind = match next.players[color].hand.pop_front() {
        Some(card) => {
            next.discard_pile.push_back(card);
            debug!(%color, %card, "burned card");
            TurnKind::Burned(card)
        }
        None => {
            debug!(%color, "passed with empty hand");
            TurnKind::Passed
        }
    };

    record_turn(&mut next, color, kind);
    end_turn(&mut next)?;
    Ok(next)
}

pub(crate) fn ensure_playing(state: &GameState) -> Result<()> {
    match state.phase {
        Phase::Playing => Ok(()),
        Phase::GameOver => Err(MoveError::GameOver),
        phase => Err(MoveError::NotPlaying(phase)),
    }
}

pub(crate) fn record_turn(state: &mut GameState, color: Color, kind: TurnKind) {
    let sequence = state.history.len() as u32;
    state.history.push_back(MoveRecord {
        color,
        kind,
        round: state.round,
        sequence,
    });
}

/// Pass the turn and start the next round once every hand is empty.
pub(crate) fn end_turn(state: &mut GameState) -> Result<(), DeckError> {
    advance_turn(state);

    if state.hands_empty() {
        state.round += 1;
        deck::deal(state)?;
        info!(round = state.round, first = %state.current_turn, "new round dealt");
    }
    Ok(())
}
