use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::card::NumberCard;
use crate::config::RandomConfig;
use crate::context::StrategyContext;
use crate::error::StrategyError;
use crate::player::PlayerId;
use crate::strategy::Strategy;

/// Baseline that decides everything by coin flip.
/// Only a Flip Three in progress is respected, since drawing is not optional then.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    name: String,
    hit_probability: f64,
}

impl RandomStrategy {
    /// Constructor with a fair coin for hit or stay.
    pub fn new() -> Self {
        Self::from_config(RandomConfig::default())
    }

    /// Builds the strategy from a loaded configuration.
    pub fn from_config(config: RandomConfig) -> Self {
        // random_bool panics outside [0, 1]
        let hit_probability = if config.hit_probability.is_nan() {
            0.0
        } else {
            config.hit_probability.clamp(0.0, 1.0)
        };

        RandomStrategy {
            name: config.name.unwrap_or_else(|| "Random".to_string()),
            hit_probability,
        }
    }

    pub fn hit_probability(&self) -> f64 {
        self.hit_probability
    }

    fn random_target(
        &self,
        context: &StrategyContext,
        possible_targets: &[PlayerId],
    ) -> PlayerId {
        let mut rng = rand::rng();
        match possible_targets.choose(&mut rng) {
            Some(target) => target.clone(),
            None => context.my_player_id.clone(),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_hit_or_stay(&self, context: &StrategyContext) -> bool {
        if context.forced_draw() {
            return true;
        }
        let hit = rand::rng().random_bool(self.hit_probability);
        debug!(strategy = %self.name, hit, "hit or stay");
        hit
    }

    fn decide_second_chance_discard<'a>(
        &self,
        _context: &StrategyContext,
        _duplicate_value: u8,
        duplicate_cards: &'a [NumberCard],
    ) -> Result<&'a NumberCard, StrategyError> {
        let mut rng = rand::rng();
        duplicate_cards.choose(&mut rng).ok_or(StrategyError::NoDuplicateCards)
    }

    fn decide_flip_three_target(
        &self,
        context: &StrategyContext,
        possible_targets: &[PlayerId],
    ) -> PlayerId {
        self.random_target(context, possible_targets)
    }

    fn decide_freeze_target(
        &self,
        context: &StrategyContext,
        possible_targets: &[PlayerId],
    ) -> PlayerId {
        self.random_target(context, possible_targets)
    }
}
