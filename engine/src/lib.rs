//! Rules engine for a four-seat game of UNO: one human seat, three automated.

pub mod agent;
pub mod card;
pub mod config;
pub mod constants;
pub mod deck;
pub mod discard;
pub mod error;
pub mod player;
pub mod turn;
pub mod uno;
