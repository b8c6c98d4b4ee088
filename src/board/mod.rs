//! The board: marbles, their locations and the track geometry.
//!
//! - `marble`: marble identities and the tagged `Location` (Base, Track, Safe)
//! - `topology`: start cells, safety entries and target resolution

pub mod marble;
pub mod topology;

pub use marble::{Location, Marble, MarbleId, MARBLES_PER_COLOR};
pub use topology::{
    progress, resolve_target, safe_base, safety_entry, start_index, BASE_SENTINEL, EXIT_STEPS,
    SAFE_LEN, TRACK_LEN,
};
