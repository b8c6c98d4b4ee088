//! # jakaro
//!
//! Rules engine for Jakaro, a four-player partnership race game played with
//! marbles and a standard 52-card deck.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every rule operation takes `&GameState` and
//!    returns a new `GameState` or an error. A rejected move never changes
//!    the state the caller holds.
//!
//! 2. **Tagged Locations**: A marble is in `Base`, on a `Track` cell or on a
//!    `Safe` cell; flat integer positions exist only at the sync boundary.
//!
//! 3. **Deterministic**: All shuffling goes through a seeded `GameRng` that
//!    travels inside the state, so a snapshot replays identically anywhere.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs` for hands,
//!   piles and history.
//!
//! - **Sync at the Edge**: Rooms, subscribers and snapshot encoding live in
//!   `sync`, outside the rules.
//!
//! ## Modules
//!
//! - `core`: colors, teams, moves, state, RNG, configuration
//! - `cards`: cards and the deck manager
//! - `board`: marbles, locations and track topology
//! - `rules`: setup, move resolution, turns and victory
//! - `bot`: move policies for automated seats
//! - `sync`: room snapshots, the room hub and sessions
//!
//! ## Example
//!
//! ```
//! use jakaro::{apply_move, burn_card, initialize_game, legal_moves, GameConfig};
//!
//! let mut state = initialize_game(&["Ana"], 3, GameConfig::new(42)).unwrap();
//! for _ in 0..8 {
//!     state = match legal_moves(&state).first() {
//!         Some(mv) => apply_move(&state, mv).unwrap(),
//!         None => burn_card(&state).unwrap(),
//!     };
//! }
//! assert_eq!(state.history.len(), 8);
//! ```

pub mod board;
pub mod bot;
pub mod cards;
pub mod core;
pub mod error;
pub mod rules;
pub mod sync;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorMap, GameConfig, GameRng, GameRngState, GameState, Move, MoveRecord, Phase,
    Player, PlayerId, TeamId, TurnKind,
};

pub use crate::cards::{Card, CardId, Rank, Suit};

pub use crate::board::{resolve_target, Location, Marble, MarbleId};

pub use crate::rules::{
    apply_move, burn_card, check_winner, initialize_game, legal_moves, outcome, GameResult,
};

pub use crate::bot::{take_turn, GreedyPolicy, MovePolicy, RandomPolicy};

pub use crate::sync::{RoomHub, RoomId, Session, Snapshot, SyncChannel};

pub use crate::error::{DeckError, MoveError, SetupError, SyncError};
