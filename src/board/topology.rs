//! Board geometry: the shared track, start cells, safety entries and the
//! per-color home stretches.
//!
//! ## Layout
//!
//! - The track has 64 cells shared by everybody.
//! - Each color enters the track at its start cell (red 0, green 16,
//!   yellow 32, blue 48).
//! - The cell just before a start cell is that color's safety entry
//!   (red 63, green 15, yellow 31, blue 47). Stepping forward past it sends
//!   the marble into its 4-cell home stretch instead of around the track.
//!
//! ```
//! use jakaro::board::{resolve_target, Location};
//! use jakaro::core::Color;
//!
//! // Red at 60 moving 5: three steps reach the entry (63), two more go home.
//! assert_eq!(resolve_target(Location::Track(60), 5, Color::Red), Some(Location::Safe(1)));
//! ```

use super::marble::Location;
use crate::core::Color;

/// Cells on the shared track.
pub const TRACK_LEN: i32 = 64;

/// Cells in each home stretch.
pub const SAFE_LEN: i32 = 4;

/// Flat position of a marble in Base.
pub const BASE_SENTINEL: i32 = -1;

/// Step counts that bring a marble out of Base (Ace as 1, King as 13).
pub const EXIT_STEPS: [i8; 2] = [1, 13];

const START_SPACING: i32 = TRACK_LEN / 4;

/// Track cell where `color` enters from Base.
#[must_use]
pub const fn start_index(color: Color) -> u8 {
    (color.index() as i32 * START_SPACING) as u8
}

/// Last track cell before `color`'s home stretch.
#[must_use]
pub const fn safety_entry(color: Color) -> u8 {
    (start_index(color) as i32 + TRACK_LEN - 1).rem_euclid(TRACK_LEN) as u8
}

/// First flat position of `color`'s home stretch (red 100, green 200, ...).
#[must_use]
pub const fn safe_base(color: Color) -> i32 {
    100 * (color.index() as i32 + 1)
}

/// Where a marble of `color` at `from` ends up after `steps`.
///
/// Returns `None` when the move is impossible:
/// - from Base, unless `steps` is one of [`EXIT_STEPS`];
/// - inside the home stretch, when the result falls outside cells 0..=3;
/// - forward on the track, when the marble would overshoot its home stretch.
///
/// Backward moves wrap around the track and never enter a home stretch.
#[must_use]
pub fn resolve_target(from: Location, steps: i8, color: Color) -> Option<Location> {
    let steps = i32::from(steps);

    match from {
        Location::Base => {
            if EXIT_STEPS.iter().any(|&s| i32::from(s) == steps) {
                Some(Location::Track(start_index(color)))
            } else {
                None
            }
        }
        Location::Safe(offset) => {
            let target = i32::from(offset) + steps;
            if (0..SAFE_LEN).contains(&target) {
                Some(Location::Safe(target as u8))
            } else {
                None
            }
        }
        Location::Track(index) => {
            let index = i32::from(index);
            if steps < 0 {
                return Some(Location::Track((index + steps).rem_euclid(TRACK_LEN) as u8));
            }

            let to_entry = (i32::from(safety_entry(color)) - index).rem_euclid(TRACK_LEN);
            if steps > to_entry {
                // The step onto the first home cell is part of the remainder.
                let offset = steps - to_entry - 1;
                if offset < SAFE_LEN {
                    Some(Location::Safe(offset as u8))
                } else {
                    None
                }
            } else {
                Some(Location::Track((index + steps).rem_euclid(TRACK_LEN) as u8))
            }
        }
    }
}

/// Distance a marble has travelled from its start cell, used to rank moves.
///
/// Base has no progress; home cells count past the full lap.
#[must_use]
pub fn progress(location: Location, color: Color) -> Option<i32> {
    match location {
        Location::Base => None,
        Location::Track(index) => {
            Some((i32::from(index) - i32::from(start_index(color))).rem_euclid(TRACK_LEN))
        }
        Location::Safe(offset) => Some(TRACK_LEN + i32::from(offset)),
    }
}
