use std::fmt::Debug;
use std::io;

use thiserror::Error;

use crate::player::PlayerId;

#[derive(Error, Debug)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error("Malformed card token `{0}`")]
    MalformedCard(String),
    #[error("Draw pile holds {available} cards, {requested} requested")]
    InsufficientCards { requested: usize, available: usize },
    #[error("Draw pile exhausted beyond recovery: {requested} requested, {available} left after repopulation")]
    DrawPileExhausted { requested: usize, available: usize },
    #[error("Dealing {initial_cards} cards to {players} players needs more than {deck_size} cards")]
    DeckTooSmall {
        players: usize,
        initial_cards: usize,
        deck_size: usize,
    },
    #[error("Player {0} bound a wild card to the wild color")]
    UnboundWildColor(PlayerId),
    #[error("Player input failed")]
    Input(#[from] io::Error),
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
