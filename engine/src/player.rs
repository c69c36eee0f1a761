use crate::card::Card;

pub type PlayerId = usize;

#[derive(Debug)]
pub struct Player {
    pub id: PlayerId,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(id: PlayerId, cards: Vec<Card>) -> Self {
        Self { id, hand: cards }
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }

    /// First card in hand that is `card` as dealt, ignoring any bound color.
    pub fn card_index(&self, card: &Card) -> Option<usize> {
        let identity = card.identity();
        self.hand.iter().position(|x| x.identity() == identity)
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    pub fn remove_card(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }
}
