//! Cards and the Deck Manager.
//!
//! - `card`: suits, ranks, card values and per-rank step options
//! - `deck`: building, shuffling, dealing and recycling

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Rank, Suit};
pub use deck::DECK_SIZE;
