//! Moves and the turn history.
//!
//! A `Move` is fully resolved: besides the card and marble it names the
//! chosen step count and the source and destination cells. Cards with two
//! readings (Ace as 1 or 11, Ten as +10 or -1) appear as two distinct moves,
//! and the caller picks one.

use serde::{Deserialize, Serialize};

use crate::board::{Location, MarbleId};
use crate::cards::Card;

use super::color::Color;

/// A candidate or applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The card played.
    pub card: Card,

    /// The marble moved.
    pub marble: MarbleId,

    /// Signed steps taken (negative is backward).
    pub steps: i8,

    /// Location before the move.
    pub from: Location,

    /// Location after the move.
    pub to: Location,
}

impl Move {
    /// True if this move brings a marble out of Base.
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        self.from.is_base()
    }

    /// True if this move takes a marble from the track into its home stretch.
    #[must_use]
    pub const fn enters_safe(&self) -> bool {
        matches!(self.from, Location::Track(_)) && self.to.is_safe()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {:+} ({:?} -> {:?})", self.card, self.marble, self.steps, self.from, self.to)
    }
}

/// What happened on one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnKind {
    /// A card was played to move a marble.
    Played {
        mv: Move,
        /// Marble sent back to Base, if any.
        captured: Option<MarbleId>,
    },
    /// No legal move existed, so a card was discarded without effect.
    Burned(Card),
    /// The player had no cards left.
    Passed,
}

/// A recorded turn, used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Color whose turn it was.
    pub color: Color,

    /// What the player did.
    pub kind: TurnKind,

    /// Round the turn belonged to.
    pub round: u32,

    /// Sequence number across the whole game.
    pub sequence: u32,
}
