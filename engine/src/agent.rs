use std::collections::HashMap;

use crate::card::{Card, Color};
use crate::discard::DiscardPile;
use crate::error::Result;
use crate::turn::{AfterDraw, Choice};

/// Decides what one seat does on its turn.
///
/// The engine validates every choice: an out-of-range index or a draw while
/// holding a playable card is simply asked again. An illegal card is asked
/// again too, after one drawn card if the agent keeps playing after draws.
pub trait PlayerAgent {
    fn choose_card(&mut self, hand: &[Card], discard_top: &Card, can_draw: bool) -> Result<Choice>;

    /// Binds a color to a wild-family card about to be played.
    fn choose_color(&mut self, options: &[Color]) -> Result<Color>;

    fn after_draw(&self) -> AfterDraw {
        AfterDraw::EndTurn
    }
}

/// Plays the first legal card in hand, drawing until one turns up.
#[derive(Debug, Default)]
pub struct AutomatedAgent {
    preferred_color: Option<Color>,
}

impl AutomatedAgent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerAgent for AutomatedAgent {
    fn choose_card(&mut self, hand: &[Card], discard_top: &Card, can_draw: bool) -> Result<Choice> {
        let pile = DiscardPile::new(*discard_top);

        let mut counts: HashMap<Color, usize> = HashMap::new();
        for card in hand.iter().filter(|card| card.color() != Color::Wild) {
            *counts.entry(card.color()).or_default() += 1;
        }
        self.preferred_color = counts
            .into_iter()
            .max_by_key(|(color, count)| (*count, std::cmp::Reverse(color.symbol())))
            .map(|(color, _)| color);

        match hand.iter().position(|card| pile.is_valid(card)) {
            Some(index) => Ok(Choice::Play(index)),
            None => {
                debug_assert!(can_draw);
                Ok(Choice::Draw)
            }
        }
    }

    fn choose_color(&mut self, options: &[Color]) -> Result<Color> {
        let color = self
            .preferred_color
            .filter(|color| options.contains(color))
            .or_else(|| options.iter().copied().find(|color| *color != Color::Wild))
            .unwrap_or(Color::Red);
        Ok(color)
    }

    fn after_draw(&self) -> AfterDraw {
        AfterDraw::KeepPlaying
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, PLAYABLE_COLORS};

    #[test]
    fn plays_first_legal_card() {
        let mut agent = AutomatedAgent::new();
        let hand = [
            Card::new(Color::Blue, Rank::Number(3)),
            Card::new(Color::Red, Rank::Skip),
            Card::new(Color::Red, Rank::Number(1)),
        ];
        let top = Card::new(Color::Red, Rank::Number(8));

        assert_eq!(
            agent.choose_card(&hand, &top, false).unwrap(),
            Choice::Play(1)
        );
    }

    #[test]
    fn draws_when_nothing_is_playable() {
        let mut agent = AutomatedAgent::new();
        let hand = [Card::new(Color::Blue, Rank::Number(3))];
        let top = Card::new(Color::Red, Rank::Number(8));

        assert_eq!(agent.choose_card(&hand, &top, true).unwrap(), Choice::Draw);
        assert_eq!(agent.after_draw(), AfterDraw::KeepPlaying);
    }

    #[test]
    fn binds_wild_to_most_held_color() {
        let mut agent = AutomatedAgent::new();
        let hand = [
            Card::wild(),
            Card::new(Color::Green, Rank::Number(3)),
            Card::new(Color::Green, Rank::Skip),
            Card::new(Color::Blue, Rank::Number(1)),
        ];
        let top = Card::new(Color::Red, Rank::Number(8));

        assert_eq!(
            agent.choose_card(&hand, &top, false).unwrap(),
            Choice::Play(0)
        );
        assert_eq!(agent.choose_color(&PLAYABLE_COLORS).unwrap(), Color::Green);
    }

    #[test]
    fn never_binds_wild_color() {
        let mut agent = AutomatedAgent::new();
        let hand = [Card::wild()];
        let top = Card::new(Color::Red, Rank::Number(8));

        agent.choose_card(&hand, &top, false).unwrap();
        let color = agent.choose_color(&PLAYABLE_COLORS).unwrap();

        assert_ne!(color, Color::Wild);
    }
}
