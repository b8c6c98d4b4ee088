//! Error types for rule operations and the sync adapter.
//!
//! A rule operation that fails never touches its input: the caller still
//! holds the previous `GameState`, which stays the source of truth.

use thiserror::Error;

use crate::board::MarbleId;
use crate::cards::CardId;
use crate::core::{Color, Phase};
use crate::sync::RoomId;

/// Dealing failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Not enough cards exist anywhere to deal the requested hands.
    #[error("deck exhausted: need {needed} cards, only {available} in draw and discard piles")]
    Exhausted { needed: usize, available: usize },
}

/// A move or burn was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The game already has a winner.
    #[error("game is over")]
    GameOver,

    /// The game is not accepting moves in this phase.
    #[error("game is in phase {0:?}, not playing")]
    NotPlaying(Phase),

    /// The marble belongs to a color the active player cannot move.
    #[error("it is {active}'s turn, {marble} cannot be moved")]
    NotYourTurn { active: Color, marble: MarbleId },

    /// The card is not in the active player's hand.
    #[error("{card} is not in {color}'s hand")]
    CardNotInHand { card: CardId, color: Color },

    /// The card cannot move that marble by that many steps.
    #[error("{marble} cannot move {steps} with {card}")]
    IllegalMove { card: CardId, marble: MarbleId, steps: i8 },

    /// A burn was requested while a legal move exists.
    #[error("{0} has a legal move and must play it")]
    MustPlay(Color),

    /// Re-dealing after the move failed.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Game creation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Humans plus bots must fill exactly four seats.
    #[error("need exactly 4 seats, got {humans} humans and {bots} bots")]
    SeatCount { humans: usize, bots: usize },

    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// The sync adapter failed.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("room {0} does not exist")]
    UnknownRoom(RoomId),

    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] bincode::Error),

    /// The snapshot was produced from an older version than the room holds.
    #[error("stale snapshot: room is at version {current}, update was based on {based_on}")]
    Stale { current: u64, based_on: u64 },

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Result type for rule operations.
pub type Result<T, E = MoveError> = std::result::Result<T, E>;
