//! Seat colors, teams, and per-color data storage.
//!
//! ## Color
//!
//! The four fixed seats, in turn order: red, green, yellow, blue.
//! Partners sit opposite each other, so red+yellow and green+blue form
//! the two teams.
//!
//! ## ColorMap
//!
//! Fixed four-slot storage indexed by `Color`, backed by an array for O(1)
//! access and cheap cloning.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at a Jakaro table.
pub const SEAT_COUNT: usize = 4;

/// One of the four seat colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    /// All colors in turn order.
    pub const ALL: [Color; SEAT_COUNT] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

    /// Seat index (0-based, turn order).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color for a seat index, wrapping past the last seat.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % SEAT_COUNT]
    }

    /// Next color in the fixed rotation red → green → yellow → blue → red.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The partner seated opposite.
    #[must_use]
    pub const fn partner(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Team this color plays for.
    #[must_use]
    pub const fn team(self) -> TeamId {
        TeamId((self.index() % 2) as u8 + 1)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Team number: 1 for red+yellow, 2 for green+blue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    /// Both colors on this team.
    #[must_use]
    pub fn colors(self) -> [Color; 2] {
        let first = Color::from_index(usize::from(self.0.saturating_sub(1)));
        [first, first.partner()]
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

/// Player identifier, equal to the seat index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl From<Color> for PlayerId {
    fn from(color: Color) -> Self {
        Self(color.index() as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-color data storage with O(1) access.
///
/// ```
/// use jakaro::core::{Color, ColorMap};
///
/// let mut score: ColorMap<u32> = ColorMap::new(|_| 0);
/// score[Color::Yellow] += 3;
/// assert_eq!(score[Color::Yellow], 3);
/// assert_eq!(score[Color::Red], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: Color::ALL.map(factory),
        }
    }

    /// Iterate over (Color, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Color, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Color, &mut T)> {
        Color::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        &self.data[color.index()]
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.data[color.index()]
    }
}
