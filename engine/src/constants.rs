use crate::card::PLAYABLE_COLORS;

pub const NUM_PLAYERS: usize = 4;
pub const INITIAL_CARDS: usize = 7;

/// Seat of the human player; every other seat is automated.
pub const HUMAN_PLAYER: usize = 0;

pub(crate) const NUMBER_CARDS_PER_COLOR: &[u8] =
    &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];
pub(crate) const SKIP_CARDS_PER_COLOR: usize = 2;
pub(crate) const REVERSE_CARDS_PER_COLOR: usize = 2;
pub(crate) const DRAW_TWO_CARDS_PER_COLOR: usize = 2;

const COLORS: usize = PLAYABLE_COLORS.len();

pub(crate) const NUMBER_CARDS_IN_DECK: usize = NUMBER_CARDS_PER_COLOR.len() * COLORS;
pub(crate) const SKIP_CARDS_IN_DECK: usize = SKIP_CARDS_PER_COLOR * COLORS;
pub(crate) const REVERSE_CARDS_IN_DECK: usize = REVERSE_CARDS_PER_COLOR * COLORS;
pub(crate) const DRAW_TWO_CARDS_IN_DECK: usize = DRAW_TWO_CARDS_PER_COLOR * COLORS;

pub(crate) const WILD_CARDS_IN_DECK: usize = 4;
pub(crate) const WILD_DRAW_FOUR_CARDS_IN_DECK: usize = 4;

pub const TOTAL_CARDS_IN_DECK: usize = NUMBER_CARDS_IN_DECK
    + SKIP_CARDS_IN_DECK
    + REVERSE_CARDS_IN_DECK
    + DRAW_TWO_CARDS_IN_DECK
    + WILD_CARDS_IN_DECK
    + WILD_DRAW_FOUR_CARDS_IN_DECK;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_card_count_constants() {
        assert_eq!(NUMBER_CARDS_PER_COLOR.len(), 19);
        assert_eq!(NUMBER_CARDS_IN_DECK, 76);

        assert_eq!(SKIP_CARDS_IN_DECK, 8);

        assert_eq!(REVERSE_CARDS_IN_DECK, 8);

        assert_eq!(DRAW_TWO_CARDS_IN_DECK, 8);

        assert_eq!(TOTAL_CARDS_IN_DECK, 108);
    }
}
