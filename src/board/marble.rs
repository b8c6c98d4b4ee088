//! Marbles and where they sit.
//!
//! A marble's location is a single tagged value, so a marble can never be
//! "in Base and on the Track" at once.

use serde::{Deserialize, Serialize};

use super::topology::{safe_base, BASE_SENTINEL, SAFE_LEN, TRACK_LEN};
use crate::core::Color;

/// Marbles owned by each color.
pub const MARBLES_PER_COLOR: usize = 4;

/// Where a marble is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Not yet in play.
    Base,
    /// Cell on the shared circular track (0..64).
    Track(u8),
    /// Cell in the owner's home stretch (0..4, 3 innermost).
    Safe(u8),
}

impl Location {
    #[must_use]
    pub const fn is_base(self) -> bool {
        matches!(self, Location::Base)
    }

    #[must_use]
    pub const fn is_safe(self) -> bool {
        matches!(self, Location::Safe(_))
    }

    /// Flat integer position as used by renderers: `-1` for Base, `0..63`
    /// for the track and `100 * (seat + 1) + offset` for a safe cell.
    #[must_use]
    pub fn to_raw(self, color: Color) -> i32 {
        match self {
            Location::Base => BASE_SENTINEL,
            Location::Track(index) => i32::from(index),
            Location::Safe(offset) => safe_base(color) + i32::from(offset),
        }
    }

    /// Inverse of [`Location::to_raw`]. Returns `None` for positions outside
    /// the track and outside `color`'s own safe range.
    #[must_use]
    pub fn from_raw(color: Color, raw: i32) -> Option<Self> {
        if raw == BASE_SENTINEL {
            return Some(Location::Base);
        }
        if (0..TRACK_LEN).contains(&raw) {
            return u8::try_from(raw).ok().map(Location::Track);
        }
        let offset = raw - safe_base(color);
        if (0..SAFE_LEN).contains(&offset) {
            return u8::try_from(offset).ok().map(Location::Safe);
        }
        None
    }
}

/// Identifies one marble: its color and slot (0..4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MarbleId {
    pub color: Color,
    pub slot: u8,
}

impl MarbleId {
    #[must_use]
    pub const fn new(color: Color, slot: u8) -> Self {
        Self { color, slot }
    }
}

impl std::fmt::Display for MarbleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.color, self.slot)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marble {
    pub id: MarbleId,
    pub location: Location,
}

impl Marble {
    /// The four marbles of `color`, all in Base.
    #[must_use]
    pub fn set_for(color: Color) -> [Marble; MARBLES_PER_COLOR] {
        [0u8, 1, 2, 3].map(|slot| Marble {
            id: MarbleId::new(color, slot),
            location: Location::Base,
        })
    }
}
