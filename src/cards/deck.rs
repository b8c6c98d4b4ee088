//! Deck Manager: building, shuffling, dealing and recycling the 52-card deck.

use im::Vector;
use tracing::debug;

use super::card::{Card, CardId, Rank, Suit};
use crate::core::{Color, GameRng, GameState};
use crate::error::DeckError;

/// Cards in a standard deck (no jokers).
pub const DECK_SIZE: usize = 52;

/// Build all 52 suit × rank cards and return them shuffled.
///
/// Card ids are assigned before shuffling, suit by suit, so `CardId(0)` is
/// always the Ace of Spades.
#[must_use]
pub fn build(rng: &mut GameRng) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::STANDARD {
            cards.push(Card::new(CardId(cards.len() as u8), suit, rank));
        }
    }
    shuffle(&mut cards, rng);
    cards
}

/// Uniform in-place Fisher–Yates shuffle.
pub fn shuffle(cards: &mut [Card], rng: &mut GameRng) {
    rng.shuffle(cards);
}

/// Deal a fresh hand to every player for the current round.
///
/// Hand size comes from the config (5 in round 1, 4 afterwards). If the draw
/// pile is short, the discard pile is shuffled back in first. Cards are dealt
/// one at a time in seat order.
///
/// ## Errors
///
/// `DeckError::Exhausted` if draw and discard piles together cannot cover
/// every hand. With a 52-card deck and empty hands this cannot happen.
pub fn deal(state: &mut GameState) -> Result<(), DeckError> {
    let hand_size = state.config.hand_size_for_round(state.round);
    let needed = hand_size * Color::ALL.len();

    if state.draw_pile.len() < needed {
        recycle_discards(state);
    }

    let available = state.draw_pile.len();
    if available < needed {
        return Err(DeckError::Exhausted { needed, available });
    }

    for _ in 0..hand_size {
        for color in Color::ALL {
            if let Some(card) = state.draw_pile.pop_back() {
                state.players[color].hand.push_back(card);
            }
        }
    }

    debug!(round = state.round, hand_size, remaining = state.draw_pile.len(), "dealt hands");
    Ok(())
}

/// Shuffle the discard pile underneath the draw pile and clear the discards.
pub fn recycle_discards(state: &mut GameState) {
    if state.discard_pile.is_empty() {
        return;
    }

    let mut recycled: Vec<Card> = state.discard_pile.iter().copied().collect();
    shuffle(&mut recycled, &mut state.rng);

    // Existing draw cards stay on top and are dealt first.
    let mut pile: Vector<Card> = recycled.into_iter().collect();
    pile.append(std::mem::take(&mut state.draw_pile));
    state.draw_pile = pile;
    state.discard_pile = Vector::new();

    debug!(draw = state.draw_pile.len(), "recycled discard pile");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ColorMap, GameConfig, Player};
    use rustc_hash::FxHashSet;

    fn empty_table(seed: u64) -> GameState {
        let players = ColorMap::new(|c| Player::new(c, c.to_string(), false));
        GameState::new(GameConfig::new(seed), players)
    }

    #[test]
    fn test_build_has_52_distinct_cards() {
        let mut rng = GameRng::new(3);
        let deck = build(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE);
        let ids: FxHashSet<_> = deck.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), DECK_SIZE);
        let faces: FxHashSet<_> = deck.iter().map(|c| (c.suit, c.rank)).collect();
        assert_eq!(faces.len(), DECK_SIZE);
        assert!(deck.iter().all(|c| c.rank != Rank::Joker));
    }

    #[test]
    fn test_build_is_shuffled_and_deterministic() {
        let a = build(&mut GameRng::new(11));
        let b = build(&mut GameRng::new(11));
        let c = build(&mut GameRng::new(12));

        assert_eq!(a, b);
        assert_ne!(a, c);
        let sorted: Vec<_> = (0..DECK_SIZE as u8).map(CardId).collect();
        assert_ne!(a.iter().map(|c| c.id).collect::<Vec<_>>(), sorted);
    }

    #[test]
    fn test_deal_round_one_and_two() {
        let mut state = empty_table(5);
        state.draw_pile = build(&mut state.rng).into_iter().collect();

        deal(&mut state).unwrap();
        for player in state.players.values() {
            assert_eq!(player.hand.len(), 5);
        }
        assert_eq!(state.draw_pile.len(), 32);

        for (_, player) in state.players.iter_mut() {
            let hand = std::mem::take(&mut player.hand);
            state.discard_pile.append(hand);
        }
        state.round = 2;
        deal(&mut state).unwrap();
        for player in state.players.values() {
            assert_eq!(player.hand.len(), 4);
        }
        assert_eq!(state.cards_in_circulation(), DECK_SIZE);
    }

    #[test]
    fn test_deal_recycles_discards() {
        let mut state = empty_table(8);
        let deck = build(&mut state.rng);
        state.draw_pile = deck[..6].iter().copied().collect();
        state.discard_pile = deck[6..].iter().copied().collect();
        state.round = 4;

        deal(&mut state).unwrap();

        assert!(state.discard_pile.is_empty());
        assert_eq!(state.draw_pile.len(), DECK_SIZE - 16);
        assert_eq!(state.cards_in_circulation(), DECK_SIZE);
    }

    #[test]
    fn test_deal_uses_remaining_draw_cards_first() {
        let mut state = empty_table(8);
        let deck = build(&mut state.rng);
        let top = deck[0];
        state.draw_pile = std::iter::once(top).collect();
        state.discard_pile = deck[1..].iter().copied().collect();
        state.round = 2;

        deal(&mut state).unwrap();

        assert_eq!(state.players[Color::Red].hand.front(), Some(&top));
    }

    #[test]
    fn test_deal_reports_exhaustion() {
        let mut state = empty_table(8);
        let deck = build(&mut state.rng);
        state.draw_pile = deck[..10].iter().copied().collect();

        let result = deal(&mut state);
        assert_eq!(result, Err(DeckError::Exhausted { needed: 20, available: 10 }));
    }
}
