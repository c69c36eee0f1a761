use std::collections::HashMap;

use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::{
    card::{Card, Color, Rank, PLAYABLE_COLORS},
    constants::*,
    error::{Result, UnoError},
};

/// Every card of a fresh deck in a fixed, unshuffled order.
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK);

    for color in PLAYABLE_COLORS {
        // Skip Cards
        for _ in 0..SKIP_CARDS_PER_COLOR {
            cards.push(Card::new(color, Rank::Skip));
        }

        // Reverse Cards
        for _ in 0..REVERSE_CARDS_PER_COLOR {
            cards.push(Card::new(color, Rank::Reverse));
        }

        // Draw Two Cards
        for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
            cards.push(Card::new(color, Rank::DrawTwo));
        }

        // Number Cards
        for number in NUMBER_CARDS_PER_COLOR {
            cards.push(Card::new(color, Rank::Number(*number)));
        }
    }

    for _ in 0..WILD_CARDS_IN_DECK {
        cards.push(Card::wild());
    }

    for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
        cards.push(Card::wild_draw_four());
    }

    cards
}

/// The face-down stock. The last element is the top of the pile.
#[derive(Debug)]
pub struct DrawPile {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl DrawPile {
    /// A full, shuffled pile.
    pub fn new(seed: u64) -> Self {
        let mut pile = Self {
            cards: Vec::with_capacity(TOTAL_CARDS_IN_DECK),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        pile.build(&[]);
        pile
    }

    /// Replaces the pile with the full deck minus `excluding`, then shuffles.
    ///
    /// Exclusion is by multiset: holding one Red 5 removes one of the two
    /// Red 5s. Wild-family cards are matched regardless of their bound color.
    pub fn build(&mut self, excluding: &[Card]) {
        let mut excluded: HashMap<Card, usize> = HashMap::new();
        for card in excluding {
            *excluded.entry(card.identity()).or_default() += 1;
        }

        self.cards.clear();
        for card in full_deck() {
            match excluded.get_mut(&card) {
                Some(count) if *count > 0 => *count -= 1,
                _ => self.cards.push(card),
            }
        }

        self.shuffle();
        debug!(size = self.cards.len(), "Built draw pile");
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes `count` cards from the top, first drawn first.
    ///
    /// Never refills itself: when too few cards remain the pile is left
    /// untouched and the caller decides how to repopulate it.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>> {
        if count > self.cards.len() {
            return Err(UnoError::InsufficientCards {
                requested: count,
                available: self.cards.len(),
            });
        }

        let mut drawn = self.cards.split_off(self.cards.len() - count);
        drawn.reverse();
        Ok(drawn)
    }

    /// Returns a card covered on the discard pile to the bottom of the stock.
    pub fn put_under(&mut self, card: Card) {
        self.cards.insert(0, card.identity());
    }

    /// Turns over the top card to start the discard pile. A wild-family card
    /// is bound to a random playable color on the way.
    pub(crate) fn reveal(&mut self) -> Result<Card> {
        let card = self.draw(1)?.remove(0);
        if card.color() == Color::Wild {
            let color = PLAYABLE_COLORS[self.rng.gen_range(0..PLAYABLE_COLORS.len())];
            return Ok(card.with_color(color));
        }
        Ok(card)
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_of(cards: &[Card], card: Card) -> usize {
        cards.iter().filter(|x| **x == card).count()
    }

    #[test]
    fn correct_card_count_new_deck() {
        assert_eq!(full_deck().len(), TOTAL_CARDS_IN_DECK);
        assert_eq!(DrawPile::new(7).size(), TOTAL_CARDS_IN_DECK);
    }

    #[test]
    fn full_deck_has_standard_composition() {
        let deck = full_deck();

        for color in PLAYABLE_COLORS {
            assert_eq!(count_of(&deck, Card::new(color, Rank::Number(0))), 1);
            for number in 1..=9 {
                assert_eq!(count_of(&deck, Card::new(color, Rank::Number(number))), 2);
            }
            for rank in [Rank::Skip, Rank::Reverse, Rank::DrawTwo] {
                assert_eq!(count_of(&deck, Card::new(color, rank)), 2);
            }
        }

        assert_eq!(count_of(&deck, Card::wild()), 4);
        assert_eq!(count_of(&deck, Card::wild_draw_four()), 4);
    }

    #[test]
    fn draw_takes_from_the_top() {
        let mut pile = DrawPile::new(1);
        let top = *pile.cards().last().unwrap();

        let drawn = pile.draw(3).unwrap();

        assert_eq!(drawn.len(), 3);
        assert_eq!(drawn[0], top);
        assert_eq!(pile.size(), TOTAL_CARDS_IN_DECK - 3);
    }

    #[test]
    fn draw_reports_insufficient_cards_without_changing_the_pile() {
        let mut pile = DrawPile::new(1);
        pile.draw(TOTAL_CARDS_IN_DECK - 2).unwrap();

        let error = pile.draw(3).unwrap_err();

        assert!(matches!(
            error,
            UnoError::InsufficientCards {
                requested: 3,
                available: 2
            }
        ));
        assert_eq!(pile.size(), 2);
    }

    #[test]
    fn put_under_unbinds_and_is_drawn_last() {
        let mut pile = DrawPile::new(5);
        pile.put_under(Card::wild().with_color(Color::Blue));

        assert_eq!(pile.size(), TOTAL_CARDS_IN_DECK + 1);
        assert_eq!(pile.cards()[0], Card::wild());

        let drawn = pile.draw(TOTAL_CARDS_IN_DECK + 1).unwrap();
        assert_eq!(drawn.last(), Some(&Card::wild()));
    }

    #[test]
    fn build_excludes_each_held_copy_once() {
        let red_5 = Card::new(Color::Red, Rank::Number(5));
        let blue_0 = Card::new(Color::Blue, Rank::Number(0));
        let mut pile = DrawPile::new(3);

        pile.build(&[
            red_5,
            blue_0,
            Card::wild_draw_four().with_color(Color::Green),
            Card::wild_draw_four(),
        ]);

        assert_eq!(pile.size(), TOTAL_CARDS_IN_DECK - 4);
        assert_eq!(count_of(pile.cards(), red_5), 1);
        assert_eq!(count_of(pile.cards(), blue_0), 0);
        assert_eq!(count_of(pile.cards(), Card::wild_draw_four()), 2);
    }

    #[test]
    fn same_seed_shuffles_the_same_way() {
        assert_eq!(DrawPile::new(42).cards(), DrawPile::new(42).cards());
        assert_ne!(DrawPile::new(42).cards(), DrawPile::new(43).cards());
    }

    #[test]
    fn shuffle_is_not_biased_towards_original_order() {
        let ordered = full_deck();
        let shuffles = 500;

        // A card keeps its slot with probability copies/108, about two
        // matches per shuffle. An identity "shuffle" would score 108.
        let matches: usize = (0..shuffles)
            .map(|seed| {
                DrawPile::new(seed)
                    .cards()
                    .iter()
                    .zip(&ordered)
                    .filter(|(a, b)| a == b)
                    .count()
            })
            .sum();
        let mean = matches as f64 / shuffles as f64;
        assert!(mean < 4.0, "mean fixed points {mean}");

        // The top card's slot in the unshuffled deck should be spread evenly.
        let mut halves = [0usize; 2];
        for seed in 0..shuffles {
            let mut pile = DrawPile::new(seed);
            pile.shuffle();
            let top = *pile.cards().last().unwrap();
            let slot = ordered.iter().position(|card| *card == top).unwrap();
            halves[usize::from(slot >= TOTAL_CARDS_IN_DECK / 2)] += 1;
        }
        assert!(halves[0] > 180 && halves[1] > 180, "{halves:?}");
    }

    #[test]
    fn reveal_binds_wild_family_cards() {
        for seed in 0..200 {
            let mut pile = DrawPile::new(seed);
            let card = pile.reveal().unwrap();
            assert_ne!(card.color(), Color::Wild);
            assert_eq!(pile.size(), TOTAL_CARDS_IN_DECK - 1);
        }
    }
}
