//! Round configuration and its environment loader.
use std::env;

use crate::constants::INITIAL_CARDS;

#[derive(Clone, Debug)]
pub struct RoundConfig {
    /// Cards dealt to every seat at the start of a round.
    pub initial_cards: usize,
    /// Base shuffle seed. Round `k` of an engine uses `seed + k`; without a
    /// seed every round draws fresh entropy.
    pub seed: Option<u64>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            initial_cards: INITIAL_CARDS,
            seed: None,
        }
    }
}

impl RoundConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// - `UNO_INITIAL_CARDS` - cards dealt per seat (default: 7, minimum 1)
    /// - `UNO_SEED` - base shuffle seed (default: random)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(initial_cards) = read_env::<usize>("UNO_INITIAL_CARDS") {
            config.initial_cards = initial_cards.max(1);
        }

        if let Some(seed) = read_env::<u64>("UNO_SEED") {
            config.seed = Some(seed);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
