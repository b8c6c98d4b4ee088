//! Jakaro rules.
//!
//! Every operation is a pure function from `&GameState` (plus input) to a new
//! `GameState`:
//! - `setup`: game creation and the initial deal
//! - `moves`: legal move generation and move application
//! - `turn`: burning, rotation, round changes and win detection

pub mod moves;
pub mod setup;
pub mod turn;

pub use moves::{apply_move, legal_moves, moving_color};
pub use setup::initialize_game;
pub use turn::{burn_card, check_winner, outcome, GameResult};
