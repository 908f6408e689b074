//! Decision policies for automated Flip 7 players.
//!
//! The game engine assembles a [`StrategyContext`] and asks a [`Strategy`] whether to hit
//! or stay, which duplicate to give up on a Second Chance, and whom to hit with Flip Three
//! or Freeze.

pub mod card;
pub mod config;
pub mod context;
pub mod error;
pub mod player;
pub mod strategies;
pub mod strategy;

pub use card::NumberCard;
pub use config::{RandomConfig, ThresholdConfig};
pub use context::{StrategyContext, WINNING_SCORE};
pub use error::StrategyError;
pub use player::{OpponentInfo, PlayerId};
pub use strategies::{RandomStrategy, ThresholdStrategy};
pub use strategy::Strategy;
