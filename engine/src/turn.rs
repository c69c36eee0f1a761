use strum_macros::Display;

use crate::card::Card;
use crate::constants::NUM_PLAYERS;
use crate::player::PlayerId;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// The seat after `player` going this way round the table.
    pub fn next(self, player: PlayerId) -> PlayerId {
        match self {
            Direction::Clockwise => (player + 1) % NUM_PLAYERS,
            Direction::CounterClockwise => (player + NUM_PLAYERS - 1) % NUM_PLAYERS,
        }
    }
}

/// Where a round stands. Dealing happens inside `GameRound::deal`, so a
/// fresh round is first observed as `AwaitingAction(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The seat is up and the discard top owes it nothing.
    AwaitingAction(PlayerId),
    /// The card just played still owes its effect to this seat.
    ResolvingPendingEffect(PlayerId),
    AwaitingPlay(PlayerId),
    Resolved(PlayerId),
}

/// What a player agent wants to do with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    /// Play the card at this index of the hand.
    Play(usize),
    /// Draw one card. Only honored when nothing in hand is playable.
    Draw,
}

/// What follows an explicit [`Choice::Draw`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterDraw {
    EndTurn,
    KeepPlaying,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Dealt { player: PlayerId, count: usize },
    StartingCard(Card),
    TurnStarted(PlayerId),
    Skipped(PlayerId),
    Reversed(Direction),
    DrewCards { player: PlayerId, count: usize },
    Repopulated { size: usize },
    IllegalPlay { player: PlayerId, card: Card },
    Passed(PlayerId),
    Played { player: PlayerId, card: Card },
    Won(PlayerId),
}

/// Receives the structured events of a round as they happen.
pub trait EventSink {
    fn record(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn record(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl EventSink for () {
    fn record(&mut self, _event: GameEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_player_wraps_clockwise() {
        assert_eq!(Direction::Clockwise.next(0), 1);
        assert_eq!(Direction::Clockwise.next(3), 0);
    }

    #[test]
    fn next_player_wraps_counter_clockwise() {
        assert_eq!(Direction::CounterClockwise.next(0), 3);
        assert_eq!(Direction::CounterClockwise.next(2), 1);
    }

    #[test]
    fn reversing_twice_restores_direction() {
        let direction = Direction::Clockwise.reversed();
        assert_eq!(direction, Direction::CounterClockwise);
        assert_eq!(direction.reversed(), Direction::Clockwise);
    }
}
