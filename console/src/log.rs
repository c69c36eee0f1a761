use std::io::Write;

use tracing::warn;
use uno_engine::{
    constants::HUMAN_PLAYER,
    turn::{EventSink, GameEvent},
};

use crate::render::render;

/// Narrates a round on the terminal.
pub struct ConsoleLog<W> {
    output: W,
}

impl<W: Write> ConsoleLog<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    fn describe(event: &GameEvent) -> Option<String> {
        let line = match event {
            GameEvent::Dealt { player, count } => format!("player {player}: {count} cards given"),
            GameEvent::StartingCard(card) => {
                format!("\nStarting card: {}\n{}", render(card), "-".repeat(35))
            }
            GameEvent::TurnStarted(player) => format!("player {player}'s outcome:"),
            GameEvent::Skipped(player) => format!("player {player} skipped!"),
            GameEvent::Reversed(direction) => format!("play reversed, now {direction}"),
            GameEvent::DrewCards { player, count } => {
                format!("{count} cards given to player {player}")
            }
            GameEvent::Repopulated { size } => format!("draw pile rebuilt with {size} cards"),
            GameEvent::IllegalPlay { player, card } if *player == HUMAN_PLAYER => {
                format!("{} can't be played right now!", render(card))
            }
            GameEvent::IllegalPlay { .. } => return None,
            GameEvent::Passed(player) => format!("player {player} passed"),
            GameEvent::Played { player, card } => {
                format!("player {player} discarded {}", render(card))
            }
            GameEvent::Won(player) => format!("player {player} has won!"),
        };
        Some(line)
    }
}

impl<W: Write> EventSink for ConsoleLog<W> {
    fn record(&mut self, event: GameEvent) {
        let Some(line) = Self::describe(&event) else {
            return;
        };
        if let Err(err) = writeln!(self.output, "{line}") {
            warn!(?err, "Failed to write game log");
        }
    }
}
