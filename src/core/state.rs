//! Game state: the single value synchronized between peers.
//!
//! `GameState` is never mutated in place by callers. Every rule operation
//! takes `&GameState` and returns a new one; the `im` collections inside
//! make that clone O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::color::{Color, ColorMap, PlayerId, TeamId};
use super::config::GameConfig;
use super::rng::GameRng;
use crate::board::{Location, Marble, MarbleId, MARBLES_PER_COLOR};
use crate::cards::{Card, CardId};

/// Lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Created, initial deal not yet applied.
    Dealing,
    /// Turns are being played.
    Playing,
    /// A team has won; the state is terminal.
    GameOver,
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: Color,
    pub team: TeamId,
    pub hand: Vector<Card>,
    pub marbles: [Marble; MARBLES_PER_COLOR],
    pub is_bot: bool,
}

impl Player {
    /// A player with an empty hand and all marbles in Base.
    #[must_use]
    pub fn new(color: Color, name: impl Into<String>, is_bot: bool) -> Self {
        Self {
            id: PlayerId::from(color),
            name: name.into(),
            color,
            team: color.team(),
            hand: Vector::new(),
            marbles: Marble::set_for(color),
            is_bot,
        }
    }

    /// Position of a card in this player's hand.
    #[must_use]
    pub fn hand_position(&self, card: CardId) -> Option<usize> {
        self.hand.iter().position(|c| c.id == card)
    }

    /// True once every marble of this color is in its home stretch.
    #[must_use]
    pub fn all_safe(&self) -> bool {
        self.marbles.iter().all(|m| m.location.is_safe())
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Rules this game is played under.
    pub config: GameConfig,

    pub phase: Phase,

    /// Players in fixed seat order: red, green, yellow, blue.
    pub players: ColorMap<Player>,

    /// Color whose turn it is.
    pub current_turn: Color,

    /// Face-down draw pile (top = back).
    pub draw_pile: Vector<Card>,

    /// Played and burned cards.
    pub discard_pile: Vector<Card>,

    pub last_played_card: Option<Card>,

    /// Round number (starts at 1). Determines hand size.
    pub round: u32,

    /// Set once a team has all its marbles home.
    pub winner: Option<TeamId>,

    /// Every turn taken so far.
    pub history: Vector<MoveRecord>,

    /// Deck RNG; serialized so peers deal identical cards.
    pub rng: GameRng,
}

impl GameState {
    /// A fresh table: four players, marbles in Base, empty piles, round 1,
    /// phase `Dealing`. Use [`crate::rules::initialize_game`] to get a dealt game.
    #[must_use]
    pub fn new(config: GameConfig, players: ColorMap<Player>) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            phase: Phase::Dealing,
            players,
            current_turn: Color::Red,
            draw_pile: Vector::new(),
            discard_pile: Vector::new(),
            last_played_card: None,
            round: 1,
            winner: None,
            history: Vector::new(),
            rng,
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.current_turn]
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    #[must_use]
    pub fn marble(&self, id: MarbleId) -> Option<&Marble> {
        self.players[id.color].marbles.get(usize::from(id.slot))
    }

    pub(crate) fn marble_mut(&mut self, id: MarbleId) -> Option<&mut Marble> {
        self.players[id.color].marbles.get_mut(usize::from(id.slot))
    }

    /// Every marble on the board, in seat order.
    pub fn marbles(&self) -> impl Iterator<Item = &Marble> {
        self.players.values().flat_map(|p| p.marbles.iter())
    }

    /// Marble of `color` occupying `location`, if any.
    #[must_use]
    pub fn occupant(&self, color: Color, location: Location) -> Option<MarbleId> {
        if location.is_base() {
            return None;
        }
        self.players[color]
            .marbles
            .iter()
            .find(|m| m.location == location)
            .map(|m| m.id)
    }

    /// Marble of a color other than `color` on track cell `index`, if any.
    #[must_use]
    pub fn opponent_on_track(&self, color: Color, index: u8) -> Option<MarbleId> {
        self.marbles()
            .find(|m| m.id.color != color && m.location == Location::Track(index))
            .map(|m| m.id)
    }

    /// True when every player's hand is empty.
    #[must_use]
    pub fn hands_empty(&self) -> bool {
        self.players.values().all(|p| p.hand.is_empty())
    }

    /// Total cards across draw pile, discard pile and hands.
    #[must_use]
    pub fn cards_in_circulation(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.players.values().map(|p| p.hand.len()).sum::<usize>()
    }
}
