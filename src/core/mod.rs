//! Core engine types: colors, RNG, configuration, moves, state.

pub mod action;
pub mod color;
pub mod config;
pub mod rng;
pub mod state;

pub use action::{Move, MoveRecord, TurnKind};
pub use color::{Color, ColorMap, PlayerId, TeamId, SEAT_COUNT};
pub use config::GameConfig;
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Phase, Player};
