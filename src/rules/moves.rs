//! Move Resolver: legal move generation and move application.
//!
//! ## Rules applied here
//!
//! - A marble in Base only responds to the exit ranks (Ace, King).
//! - Every other marble tries each step option of the card; Ace and Ten
//!   yield two separate candidates when both readings are legal.
//! - A move may not land on a cell already holding a marble of the same
//!   color.
//! - Landing on another color's marble on the track sends it back to Base.

use smallvec::SmallVec;
use tracing::{debug, info};

use super::turn::{check_winner, end_turn, ensure_playing, record_turn};
use crate::board::{resolve_target, Location, Marble};
use crate::cards::Card;
use crate::core::{Color, GameState, Move, Phase, TurnKind};
use crate::error::{MoveError, Result};

/// Color whose marbles the active player moves this turn.
///
/// Normally the player's own color; with partner play enabled and every own
/// marble home, the partner's.
#[must_use]
pub fn moving_color(state: &GameState) -> Color {
    let active = state.current_turn;
    if state.config.partner_play && state.players[active].all_safe() {
        active.partner()
    } else {
        active
    }
}

/// Every legal move for the active player.
///
/// Empty when the game is not in the playing phase or nothing in the hand
/// can move any marble. Choosing between candidates is left to the caller.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    if state.phase != Phase::Playing {
        return Vec::new();
    }

    let color = moving_color(state);
    let mut moves = Vec::new();
    for card in state.active_player().hand.iter() {
        for marble in &state.players[color].marbles {
            candidates(state, card, marble, &mut moves);
        }
    }
    moves
}

/// Legal moves for one card and one marble.
fn candidates(state: &GameState, card: &Card, marble: &Marble, out: &mut Vec<Move>) {
    let color = marble.id.color;
    let steps: SmallVec<[i8; 2]> = if marble.location.is_base() {
        card.rank.exit_step().into_iter().collect()
    } else {
        card.rank.step_options()
    };

    for step in steps {
        let Some(to) = resolve_target(marble.location, step, color) else {
            continue;
        };
        if state.occupant(color, to).is_some() {
            continue;
        }
        out.push(Move {
            card: *card,
            marble: marble.id,
            steps: step,
            from: marble.location,
            to,
        });
    }
}

/// Apply a move and return the resulting state.
///
/// The move is re-validated against `state`: the card must be in the active
/// player's hand and the (card, marble, steps) combination must be legal.
/// On success the card is discarded, captures are resolved, the turn passes
/// and a new round is dealt if every hand is empty. A winning move ends the
/// game without passing the turn.
///
/// ## Errors
///
/// Any `MoveError`; `state` is left as it was and remains authoritative.
pub fn apply_move(state: &GameState, mv: &Move) -> Result<GameState> {
    ensure_playing(state)?;

    let active = state.current_turn;
    let player = state.active_player();
    let hand_pos = player.hand_position(mv.card.id).ok_or(MoveError::CardNotInHand {
        card: mv.card.id,
        color: active,
    })?;
    let card = player.hand[hand_pos];

    let color = moving_color(state);
    if mv.marble.color != color {
        return Err(MoveError::NotYourTurn { active, marble: mv.marble });
    }

    let illegal = MoveError::IllegalMove {
        card: card.id,
        marble: mv.marble,
        steps: mv.steps,
    };
    let marble = state.marble(mv.marble).ok_or_else(|| illegal.clone())?;
    let mut options = Vec::with_capacity(2);
    candidates(state, &card, marble, &mut options);
    let resolved = options
        .into_iter()
        .find(|m| m.steps == mv.steps)
        .ok_or(illegal)?;

    let mut next = state.clone();

    let captured = match resolved.to {
        Location::Track(index) => next.opponent_on_track(color, index),
        _ => None,
    };
    if let Some(victim) = captured {
        if let Some(m) = next.marble_mut(victim) {
            m.location = Location::Base;
        }
        debug!(%victim, by = %resolved.marble, "captured");
    }
    if let Some(m) = next.marble_mut(resolved.marble) {
        m.location = resolved.to;
    }

    next.players[active].hand.remove(hand_pos);
    next.discard_pile.push_back(card);
    next.last_played_card = Some(card);
    debug!(color = %active, mv = %resolved, "move applied");

    record_turn(&mut next, active, TurnKind::Played { mv: resolved, captured });

    if let Some(team) = check_winner(&next) {
        next.winner = Some(team);
        next.phase = Phase::GameOver;
        info!(%team, round = next.round, "game won");
        return Ok(next);
    }

    end_turn(&mut next)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MarbleId;
    use crate::cards::{CardId, Rank, Suit};
    use crate::core::{ColorMap, GameConfig, Player};
    use im::Vector;

    /// A playing-phase table with empty piles. Blue holds one spare card so
    /// a single move never empties every hand and triggers a re-deal.
    fn table() -> GameState {
        let players = ColorMap::new(|c| Player::new(c, c.to_string(), false));
        let mut state = GameState::new(GameConfig::new(1), players);
        state.phase = Phase::Playing;
        state.players[Color::Blue].hand.push_back(card(51, Rank::Two));
        state
    }

    fn card(id: u8, rank: Rank) -> Card {
        Card::new(CardId(id), Suit::Clubs, rank)
    }

    fn give(state: &mut GameState, color: Color, cards: &[Card]) {
        state.players[color].hand = cards.iter().copied().collect::<Vector<_>>();
    }

    fn place(state: &mut GameState, color: Color, slot: u8, location: Location) {
        state.marble_mut(MarbleId::new(color, slot)).unwrap().location = location;
    }

    #[test]
    fn test_base_marbles_need_exit_rank() {
        let mut state = table();
        give(&mut state, Color::Red, &[card(0, Rank::Five), card(1, Rank::Queen)]);
        assert!(legal_moves(&state).is_empty());

        give(&mut state, Color::Red, &[card(2, Rank::King)]);
        let moves = legal_moves(&state);
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.to == Location::Track(0) && m.steps == 13));
    }

    #[test]
    fn test_ace_offers_exit_once_and_both_readings_on_track() {
        let mut state = table();
        place(&mut state, Color::Red, 0, Location::Track(5));
        give(&mut state, Color::Red, &[card(0, Rank::Ace)]);

        let moves = legal_moves(&state);
        let on_track: Vec<_> = moves.iter().filter(|m| m.marble.slot == 0).map(|m| m.to).collect();
        assert_eq!(on_track, vec![Location::Track(6), Location::Track(16)]);

        let exits = moves.iter().filter(|m| m.is_exit()).count();
        assert_eq!(exits, 3);
    }

    #[test]
    fn test_ten_offers_forward_and_back() {
        let mut state = table();
        place(&mut state, Color::Red, 0, Location::Track(20));
        give(&mut state, Color::Red, &[card(0, Rank::Ten)]);

        let targets: Vec<_> = legal_moves(&state).iter().map(|m| (m.steps, m.to)).collect();
        assert_eq!(targets, vec![(10, Location::Track(30)), (-1, Location::Track(19))]);
    }

    #[test]
    fn test_same_color_destination_is_excluded() {
        let mut state = table();
        place(&mut state, Color::Red, 0, Location::Track(0));
        give(&mut state, Color::Red, &[card(0, Rank::King)]);

        // Start cell is occupied by red's own marble: no exits.
        let moves = legal_moves(&state);
        assert!(moves.iter().all(|m| !m.is_exit()));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, Location::Track(13));

        place(&mut state, Color::Red, 1, Location::Track(13));
        let moves = legal_moves(&state);
        assert_eq!(moves.len(), 1);
        assert_eq!((moves[0].marble.slot, moves[0].to), (1, Location::Track(26)));
    }

    #[test]
    fn test_capture_sends_opponent_home() {
        let mut state = table();
        place(&mut state, Color::Red, 0, Location::Track(10));
        place(&mut state, Color::Green, 2, Location::Track(15));
        let five = card(0, Rank::Five);
        give(&mut state, Color::Red, &[five, card(1, Rank::Two)]);

        let mv = legal_moves(&state).into_iter().find(|m| m.card == five).unwrap();
        let next = apply_move(&state, &mv).unwrap();

        assert_eq!(next.marble(MarbleId::new(Color::Green, 2)).unwrap().location, Location::Base);
        assert_eq!(next.marble(MarbleId::new(Color::Red, 0)).unwrap().location, Location::Track(15));
        assert_eq!(next.marbles().filter(|m| m.location == Location::Track(15)).count(), 1);
        assert_eq!(next.discard_pile.back(), Some(&five));
        assert_eq!(next.last_played_card, Some(five));
        assert_eq!(next.current_turn, Color::Green);
        assert_eq!(next.players[Color::Red].hand.len(), 1);
    }

    #[test]
    fn test_exit_captures_opponent_on_start() {
        let mut state = table();
        place(&mut state, Color::Blue, 1, Location::Track(16));
        give(&mut state, Color::Green, &[card(0, Rank::Ace)]);
        state.current_turn = Color::Green;

        let mv = legal_moves(&state)[0];
        let next = apply_move(&state, &mv).unwrap();

        assert_eq!(next.marble(MarbleId::new(Color::Blue, 1)).unwrap().location, Location::Base);
        assert_eq!(next.marble(mv.marble).unwrap().location, Location::Track(16));
    }

    #[test]
    fn test_safe_marbles_are_never_captured() {
        let mut state = table();
        place(&mut state, Color::Green, 0, Location::Safe(0));
        place(&mut state, Color::Red, 0, Location::Track(10));
        give(&mut state, Color::Red, &[card(0, Rank::Five)]);

        let mv = legal_moves(&state)[0];
        let next = apply_move(&state, &mv).unwrap();
        assert_eq!(next.marble(MarbleId::new(Color::Green, 0)).unwrap().location, Location::Safe(0));
    }

    #[test]
    fn test_card_not_in_hand_is_rejected() {
        let mut state = table();
        give(&mut state, Color::Red, &[card(0, Rank::King)]);
        let mut mv = legal_moves(&state)[0];
        mv.card = card(9, Rank::King);

        let result = apply_move(&state, &mv);
        assert_eq!(result, Err(MoveError::CardNotInHand { card: CardId(9), color: Color::Red }));
    }

    #[test]
    fn test_illegal_step_is_rejected() {
        let mut state = table();
        give(&mut state, Color::Red, &[card(0, Rank::Ace)]);
        let mut mv = legal_moves(&state)[0];
        mv.steps = 11;

        assert!(matches!(apply_move(&state, &mv), Err(MoveError::IllegalMove { steps: 11, .. })));
    }

    #[test]
    fn test_other_colors_marble_is_rejected() {
        let mut state = table();
        give(&mut state, Color::Red, &[card(0, Rank::King)]);
        let mut mv = legal_moves(&state)[0];
        mv.marble = MarbleId::new(Color::Green, 0);

        assert!(matches!(apply_move(&state, &mv), Err(MoveError::NotYourTurn { .. })));
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut state = table();
        give(&mut state, Color::Red, &[card(0, Rank::King)]);
        let mv = legal_moves(&state)[0];
        state.phase = Phase::GameOver;

        assert!(legal_moves(&state).is_empty());
        assert_eq!(apply_move(&state, &mv), Err(MoveError::GameOver));
    }

    #[test]
    fn test_partner_play_moves_partner_marbles() {
        let mut state = table();
        state.config.partner_play = true;
        for slot in 0..4 {
            place(&mut state, Color::Red, slot, Location::Safe(slot));
        }
        give(&mut state, Color::Red, &[card(0, Rank::King)]);

        assert_eq!(moving_color(&state), Color::Yellow);
        let moves = legal_moves(&state);
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.marble.color == Color::Yellow && m.to == Location::Track(32)));

        let next = apply_move(&state, &moves[0]).unwrap();
        assert_eq!(next.marble(moves[0].marble).unwrap().location, Location::Track(32));
        assert!(next.players[Color::Red].hand.is_empty());
    }
}
