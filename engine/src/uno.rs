use std::fmt::Debug;

use rand::{thread_rng, Rng};
use tracing::{debug, info, warn};

use crate::agent::PlayerAgent;
use crate::card::{Card, Color, Rank, PLAYABLE_COLORS};
use crate::config::RoundConfig;
use crate::constants::{NUM_PLAYERS, TOTAL_CARDS_IN_DECK};
use crate::deck::DrawPile;
use crate::discard::DiscardPile;
use crate::error::{Result, UnoError};
use crate::player::{Player, PlayerId};
use crate::turn::{AfterDraw, Choice, Direction, EventSink, GameEvent, Phase};

/// Everything one round owns: both piles, every hand and the turn order.
#[derive(Debug)]
pub struct GameRound {
    draw_pile: DrawPile,
    discard_pile: DiscardPile,
    players: Vec<Player>,
    direction: Direction,
    /// Seat that held the last completed turn, played or not.
    cursor: PlayerId,
    phase: Phase,
}

impl GameRound {
    /// Shuffles a fresh deck, deals every seat and turns over the first
    /// discard. Player 0 opens with a normal play: the starting card's own
    /// effect is never applied.
    pub fn deal(config: &RoundConfig, seed: u64, events: &mut impl EventSink) -> Result<Self> {
        if NUM_PLAYERS * config.initial_cards + 1 > TOTAL_CARDS_IN_DECK {
            return Err(UnoError::DeckTooSmall {
                players: NUM_PLAYERS,
                initial_cards: config.initial_cards,
                deck_size: TOTAL_CARDS_IN_DECK,
            });
        }

        let mut draw_pile = DrawPile::new(seed);
        let mut players = Vec::with_capacity(NUM_PLAYERS);

        for id in 0..NUM_PLAYERS {
            let cards = draw_pile.draw(config.initial_cards)?;
            events.record(GameEvent::Dealt {
                player: id,
                count: cards.len(),
            });
            players.push(Player::new(id, cards));
        }

        let first = draw_pile.reveal()?;
        events.record(GameEvent::StartingCard(first));
        info!(seed, starting_card = %first, "Dealt a new round");

        Ok(Self {
            draw_pile,
            discard_pile: DiscardPile::new(first),
            players,
            direction: Direction::Clockwise,
            cursor: 0,
            phase: Phase::AwaitingAction(0),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Resolved(winner) => Some(winner),
            _ => None,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get_player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.get(player_id)
    }

    pub fn get_player_mut(&mut self, player_id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(player_id)
    }

    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard_pile
    }

    pub fn discard_pile_mut(&mut self) -> &mut DiscardPile {
        &mut self.discard_pile
    }

    pub fn draw_pile(&self) -> &DrawPile {
        &self.draw_pile
    }

    pub fn draw_pile_mut(&mut self) -> &mut DrawPile {
        &mut self.draw_pile
    }

    /// Cards in the draw pile, every hand and the discard top.
    pub fn card_count(&self) -> usize {
        self.draw_pile.size() + self.players.iter().map(Player::cards_count).sum::<usize>() + 1
    }

    /// Gives `count` cards to `player`, rebuilding the draw pile around every
    /// live card first if it runs short.
    pub fn draw_into(
        &mut self,
        player: PlayerId,
        count: usize,
        events: &mut impl EventSink,
    ) -> Result<()> {
        let cards = match self.draw_pile.draw(count) {
            Ok(cards) => cards,
            Err(UnoError::InsufficientCards { .. }) => {
                self.repopulate(events);
                match self.draw_pile.draw(count) {
                    Ok(cards) => cards,
                    Err(UnoError::InsufficientCards { available, .. }) => {
                        return Err(UnoError::DrawPileExhausted {
                            requested: count,
                            available,
                        })
                    }
                    Err(err) => return Err(err),
                }
            }
            Err(err) => return Err(err),
        };

        debug!(player, count, "Cards given to player");
        self.players[player].add_cards(cards);
        events.record(GameEvent::DrewCards { player, count });

        Ok(())
    }

    fn repopulate(&mut self, events: &mut impl EventSink) {
        let live: Vec<Card> = self
            .players
            .iter()
            .flat_map(|player| player.hand.iter().copied())
            .chain(std::iter::once(self.discard_pile.current_top()))
            .collect();

        self.draw_pile.build(&live);
        debug_assert_eq!(
            self.card_count(),
            TOTAL_CARDS_IN_DECK,
            "repopulation lost or duplicated cards"
        );

        info!(size = self.draw_pile.size(), "Repopulated draw pile");
        events.record(GameEvent::Repopulated {
            size: self.draw_pile.size(),
        });
    }

    fn next_actor(&self) -> PlayerId {
        self.direction.next(self.cursor)
    }

    fn resolve_effect(&mut self, player: PlayerId, events: &mut impl EventSink) -> Result<()> {
        let rank = self.discard_pile.last_effect_rank();

        self.phase = match rank {
            Rank::Skip => {
                debug!(player, "Skipped");
                events.record(GameEvent::Skipped(player));
                self.cursor = player;
                Phase::AwaitingAction(self.next_actor())
            }
            Rank::Reverse => {
                self.direction = self.direction.reversed();
                debug!(direction = %self.direction, "Reversed");
                events.record(GameEvent::Reversed(self.direction));
                Phase::AwaitingAction(self.next_actor())
            }
            Rank::DrawTwo | Rank::WildDrawFour => {
                let per_card = rank.draw_penalty().unwrap_or_default();
                let count = per_card * self.discard_pile.pending_multiplier();
                self.draw_into(player, count, events)?;
                self.discard_pile.reduce_stack();
                self.cursor = player;
                Phase::AwaitingAction(self.next_actor())
            }
            Rank::Number(_) | Rank::Wild => Phase::AwaitingPlay(player),
        };

        Ok(())
    }

    fn take_turn(
        &mut self,
        player: PlayerId,
        agent: &mut dyn PlayerAgent,
        events: &mut impl EventSink,
    ) -> Result<()> {
        events.record(GameEvent::TurnStarted(player));

        let (index, card) = loop {
            let top = self.discard_pile.current_top();
            let hand = &self.players[player].hand;
            let can_draw = !hand.iter().any(|card| self.discard_pile.is_valid(card));

            let index = match agent.choose_card(hand, &top, can_draw)? {
                Choice::Play(index) => index,
                Choice::Draw if !can_draw => {
                    warn!(player, "Refused a draw while holding a playable card");
                    continue;
                }
                Choice::Draw => {
                    self.draw_into(player, 1, events)?;
                    match agent.after_draw() {
                        AfterDraw::KeepPlaying => continue,
                        AfterDraw::EndTurn => {
                            events.record(GameEvent::Passed(player));
                            self.cursor = player;
                            self.phase = Phase::AwaitingAction(self.next_actor());
                            return Ok(());
                        }
                    }
                }
            };

            let Some(card) = self.players[player].hand.get(index).copied() else {
                warn!(player, index, "Chose a card outside the hand");
                continue;
            };

            let card = if card.is_wild_family() {
                let color = agent.choose_color(&PLAYABLE_COLORS)?;
                if color == Color::Wild {
                    return Err(UnoError::UnboundWildColor(player));
                }
                card.with_color(color)
            } else {
                card
            };

            let covered = self.discard_pile.current_top();
            if self.discard_pile.play(card) {
                self.draw_pile.put_under(covered);
                break (index, card);
            }

            debug!(player, %card, "Illegal play attempt");
            events.record(GameEvent::IllegalPlay { player, card });
            if agent.after_draw() == AfterDraw::KeepPlaying {
                self.draw_into(player, 1, events)?;
            }
        };

        let seat = &mut self.players[player];
        let position = seat.card_index(&card).unwrap_or(index);
        seat.remove_card(position);
        self.cursor = player;
        events.record(GameEvent::Played { player, card });

        self.phase = if self.players.iter().any(Player::has_won) {
            info!(player, "Player won the round");
            events.record(GameEvent::Won(player));
            Phase::Resolved(player)
        } else if card.has_effect() {
            Phase::ResolvingPendingEffect(self.next_actor())
        } else {
            Phase::AwaitingAction(self.next_actor())
        };

        Ok(())
    }
}

/// Runs rounds for a fixed table of four player agents.
pub struct TurnEngine {
    agents: Vec<Box<dyn PlayerAgent>>,
    config: RoundConfig,
    rounds_dealt: u64,
}

impl Debug for TurnEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnEngine")
            .field("seats", &self.agents.len())
            .field("config", &self.config)
            .field("rounds_dealt", &self.rounds_dealt)
            .finish()
    }
}

impl TurnEngine {
    pub fn new(agents: Vec<Box<dyn PlayerAgent>>, config: RoundConfig) -> Result<Self> {
        if agents.len() < NUM_PLAYERS {
            return Err(UnoError::NotEnoughPlayers);
        }
        if agents.len() > NUM_PLAYERS {
            return Err(UnoError::TooManyPlayers);
        }

        Ok(Self {
            agents,
            config,
            rounds_dealt: 0,
        })
    }

    /// Plays one full round and returns the winning seat.
    pub fn start(&mut self, events: &mut impl EventSink) -> Result<PlayerId> {
        let mut round = self.deal(events)?;
        self.play(&mut round, events)
    }

    pub fn deal(&mut self, events: &mut impl EventSink) -> Result<GameRound> {
        let seed = match self.config.seed {
            Some(base) => base.wrapping_add(self.rounds_dealt),
            None => thread_rng().gen(),
        };
        self.rounds_dealt += 1;

        GameRound::deal(&self.config, seed, events)
    }

    /// Steps `round` until somebody wins.
    pub fn play(&mut self, round: &mut GameRound, events: &mut impl EventSink) -> Result<PlayerId> {
        loop {
            if let Phase::Resolved(winner) = self.step(round, events)? {
                return Ok(winner);
            }
        }
    }

    /// Advances `round` by a single phase transition.
    pub fn step(&mut self, round: &mut GameRound, events: &mut impl EventSink) -> Result<Phase> {
        match round.phase {
            Phase::AwaitingAction(player) => round.phase = Phase::AwaitingPlay(player),
            Phase::ResolvingPendingEffect(player) => round.resolve_effect(player, events)?,
            Phase::AwaitingPlay(player) => {
                round.take_turn(player, self.agents[player].as_mut(), events)?
            }
            Phase::Resolved(_) => {}
        }

        debug!(phase = ?round.phase, "Advanced round");
        Ok(round.phase)
    }
}
