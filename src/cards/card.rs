//! Playing cards and the movement each rank allows.
//!
//! ## Step options
//!
//! | Rank | Steps |
//! |------|-------|
//! | A | 1 or 11 (or leaves Base) |
//! | 2, 3, 5–9 | face value |
//! | 4 | 4 backward |
//! | 10 | 10 forward or 1 backward |
//! | J, Q | 11, 12 |
//! | K | 13 (or leaves Base) |

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits, in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
}

/// Card rank. `Joker` exists for completeness but is never dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Joker,
}

impl Rank {
    /// The thirteen ranks that make up a standard deck.
    pub const STANDARD: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value: A=1, number cards at face value, J=11, Q=12, K=13.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Rank::Joker => 0,
            other => other as u8 + 1,
        }
    }

    /// Every signed step count this rank can move a marble already in play.
    ///
    /// Negative values move backward along the track.
    #[must_use]
    pub fn step_options(self) -> SmallVec<[i8; 2]> {
        match self {
            Rank::Ace => smallvec![1, 11],
            Rank::Four => smallvec![-4],
            Rank::Ten => smallvec![10, -1],
            Rank::Joker => SmallVec::new(),
            other => smallvec![other.value() as i8],
        }
    }

    /// Step count used when this rank brings a marble out of Base.
    ///
    /// Only Ace and King can do that.
    #[must_use]
    pub const fn exit_step(self) -> Option<i8> {
        match self {
            Rank::Ace => Some(1),
            Rank::King => Some(13),
            _ => None,
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Joker => "Joker",
        };
        f.write_str(label)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        };
        f.write_str(symbol)
    }
}

/// Unique card identifier within one deck (0..52).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// An immutable playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(id: CardId, suit: Suit, rank: Rank) -> Self {
        Self { id, suit, rank }
    }

    /// Movement value of this card's rank.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
