//! Game creation.

use tracing::info;

use crate::cards::deck;
use crate::core::{ColorMap, GameConfig, GameState, Phase, Player, SEAT_COUNT};
use crate::error::SetupError;

/// Create a dealt, ready-to-play game.
///
/// Seats are filled in turn order (red, green, yellow, blue): human names
/// first, then `bot_count` bots named "Bot 1", "Bot 2", ... Every marble
/// starts in Base, red moves first and round 1 hands are already dealt.
///
/// ```
/// use jakaro::core::{Color, GameConfig, Phase};
/// use jakaro::rules::initialize_game;
///
/// let state = initialize_game(&["Ana", "Omar"], 2, GameConfig::new(1)).unwrap();
/// assert_eq!(state.phase, Phase::Playing);
/// assert!(state.players[Color::Yellow].is_bot);
/// assert_eq!(state.players[Color::Red].hand.len(), 5);
/// ```
///
/// ## Errors
///
/// `SetupError::SeatCount` unless humans and bots fill exactly four seats.
pub fn initialize_game(
    player_names: &[&str],
    bot_count: usize,
    config: GameConfig,
) -> Result<GameState, SetupError> {
    let humans = player_names.len();
    if humans + bot_count != SEAT_COUNT {
        return Err(SetupError::SeatCount { humans, bots: bot_count });
    }

    let players = ColorMap::new(|color| {
        let seat = color.index();
        match player_names.get(seat) {
            Some(name) => Player::new(color, *name, false),
            None => Player::new(color, format!("Bot {}", seat - humans + 1), true),
        }
    });

    let mut state = GameState::new(config, players);
    state.draw_pile = deck::build(&mut state.rng).into_iter().collect();
    deck::deal(&mut state)?;
    state.phase = Phase::Playing;

    info!(humans, bots = bot_count, seed = state.config.seed, "game initialized");
    Ok(state)
}
