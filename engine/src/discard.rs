use tracing::debug;

use crate::card::{Card, Rank};

/// Keeps only the most recently played card and how many times its draw
/// effect has been stacked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscardPile {
    top: Card,
    stack: usize,
    /// The stacked draw effect on `top` has been delivered.
    paid: bool,
}

impl DiscardPile {
    pub fn new(first: Card) -> Self {
        Self {
            top: first,
            stack: 1,
            paid: false,
        }
    }

    /// Shares color or rank with the top, or is wild-family.
    pub fn is_valid(&self, candidate: &Card) -> bool {
        candidate.color() == self.top.color()
            || candidate.rank() == self.top.rank()
            || candidate.is_wild_family()
    }

    /// Puts `candidate` on top if it is legal. Returns `false` and leaves the
    /// pile untouched otherwise.
    pub fn play(&mut self, candidate: Card) -> bool {
        if !self.is_valid(&candidate) {
            return false;
        }

        self.stack = if candidate.stackable_with(&self.top) && !self.paid {
            self.stack + 1
        } else {
            1
        };
        self.top = candidate;
        self.paid = false;
        debug!(card = %candidate, stack = self.stack, "Discarded");

        true
    }

    /// Called once a stacked draw effect has been delivered. The next play of
    /// the same rank starts a fresh stack.
    pub fn reduce_stack(&mut self) {
        self.stack = 1;
        self.paid = true;
    }

    pub fn current_top(&self) -> Card {
        self.top
    }

    pub fn pending_multiplier(&self) -> usize {
        self.stack
    }

    pub fn last_effect_rank(&self) -> Rank {
        self.top.rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Color;

    fn red(rank: Rank) -> Card {
        Card::new(Color::Red, rank)
    }

    fn blue(rank: Rank) -> Card {
        Card::new(Color::Blue, rank)
    }

    #[test]
    fn starts_with_a_single_stack() {
        let pile = DiscardPile::new(red(Rank::Number(4)));
        assert_eq!(pile.current_top(), red(Rank::Number(4)));
        assert_eq!(pile.pending_multiplier(), 1);
    }

    #[test]
    fn top_card_is_valid_against_itself() {
        let mut cards = crate::deck::full_deck();
        cards.push(Card::wild().with_color(Color::Yellow));

        for card in cards {
            assert!(DiscardPile::new(card).is_valid(&card), "{card}");
        }
    }

    #[test]
    fn matches_on_color_rank_or_wild() {
        let pile = DiscardPile::new(red(Rank::Number(7)));

        assert!(pile.is_valid(&red(Rank::Skip)));
        assert!(pile.is_valid(&blue(Rank::Number(7))));
        assert!(pile.is_valid(&Card::wild()));
        assert!(pile.is_valid(&Card::wild_draw_four().with_color(Color::Green)));
        assert!(!pile.is_valid(&blue(Rank::Number(3))));
        assert!(!pile.is_valid(&blue(Rank::DrawTwo)));
    }

    #[test]
    fn illegal_play_changes_nothing() {
        let mut pile = DiscardPile::new(red(Rank::DrawTwo));
        pile.play(red(Rank::DrawTwo));
        let before = pile.clone();

        assert!(!pile.play(blue(Rank::Number(1))));
        assert_eq!(pile, before);
    }

    #[test]
    fn same_draw_rank_increments_stack() {
        let mut pile = DiscardPile::new(red(Rank::Number(2)));

        assert!(pile.play(red(Rank::DrawTwo)));
        assert_eq!(pile.pending_multiplier(), 1);

        assert!(pile.play(blue(Rank::DrawTwo)));
        assert_eq!(pile.pending_multiplier(), 2);

        assert!(pile.play(blue(Rank::DrawTwo)));
        assert_eq!(pile.pending_multiplier(), 3);
        assert_eq!(pile.last_effect_rank(), Rank::DrawTwo);
    }

    #[test]
    fn other_cards_reset_stack() {
        let mut pile = DiscardPile::new(red(Rank::DrawTwo));
        pile.play(blue(Rank::DrawTwo));
        assert_eq!(pile.pending_multiplier(), 2);

        pile.play(blue(Rank::Number(9)));
        assert_eq!(pile.pending_multiplier(), 1);
    }

    #[test]
    fn draw_two_and_wild_draw_four_do_not_stack_together() {
        let mut pile = DiscardPile::new(red(Rank::DrawTwo));
        pile.play(Card::wild_draw_four().with_color(Color::Red));
        assert_eq!(pile.pending_multiplier(), 1);

        pile.play(Card::wild_draw_four().with_color(Color::Blue));
        assert_eq!(pile.pending_multiplier(), 2);
    }

    #[test]
    fn skips_and_reverses_do_not_stack() {
        let mut pile = DiscardPile::new(red(Rank::Skip));
        pile.play(blue(Rank::Skip));
        assert_eq!(pile.pending_multiplier(), 1);
    }

    #[test]
    fn reduce_stack_keeps_top() {
        let mut pile = DiscardPile::new(red(Rank::DrawTwo));
        pile.play(red(Rank::DrawTwo));
        pile.reduce_stack();

        assert_eq!(pile.pending_multiplier(), 1);
        assert_eq!(pile.current_top(), red(Rank::DrawTwo));
    }

    #[test]
    fn paid_stack_starts_fresh() {
        let mut pile = DiscardPile::new(red(Rank::Number(1)));
        pile.play(red(Rank::DrawTwo));
        pile.play(blue(Rank::DrawTwo));
        assert_eq!(pile.pending_multiplier(), 2);

        pile.reduce_stack();
        assert!(pile.play(red(Rank::DrawTwo)));
        assert_eq!(pile.pending_multiplier(), 1);

        assert!(pile.play(blue(Rank::DrawTwo)));
        assert_eq!(pile.pending_multiplier(), 2);
    }
}
