use crate::card::NumberCard;
use crate::config::ThresholdConfig;
use crate::context::{StrategyContext, WINNING_SCORE};
use crate::error::StrategyError;
use crate::player::PlayerId;
use crate::strategy::Strategy;
use tracing::{debug, trace};

/// Hits until the round score reaches a target, then stays.
///
/// Keeps hitting past the target while some opponent threatens to win: an opponent
/// already at 200, or an active one whose banked plus round points would land within
/// `distance_from_200` of 200. Flip Three and Freeze go to the leading opponent.
#[derive(Clone, Debug)]
pub struct ThresholdStrategy {
    name: String,
    target_score: i32,
    distance_from_200: i32,
}

impl ThresholdStrategy {
    /// Strategy named `Threshold(<target_score>)`.
    pub fn new(target_score: i32, distance_from_200: i32) -> Self {
        ThresholdStrategy {
            name: format!("Threshold({})", target_score),
            target_score,
            distance_from_200,
        }
    }

    /// Builds the strategy from a loaded configuration.
    pub fn from_config(config: ThresholdConfig) -> Self {
        let strategy = Self::new(config.target_score, config.distance_from_200);
        match config.name {
            Some(name) => strategy.with_name(name),
            None => strategy,
        }
    }

    /// Replaces the default display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn target_score(&self) -> i32 {
        self.target_score
    }

    pub fn distance_from_200(&self) -> i32 {
        self.distance_from_200
    }

    /// Whether any opponent is close enough to winning that staying would be premature.
    pub fn opponent_can_win(&self, context: &StrategyContext) -> bool {
        let danger_line = i64::from(WINNING_SCORE) - i64::from(self.distance_from_200);

        for opp in &context.opponents {
            if opp.total_score >= WINNING_SCORE {
                trace!(
                    opponent = %opp.player_id,
                    total = opp.total_score,
                    "opponent already at winning score"
                );
                return true;
            }
            if opp.is_active() && opp.projected_total() >= danger_line {
                trace!(
                    opponent = %opp.player_id,
                    projected = opp.projected_total(),
                    danger_line,
                    "opponent close to winning"
                );
                return true;
            }
        }
        false
    }

    fn target_leader(&self, context: &StrategyContext, possible_targets: &[PlayerId]) -> PlayerId {
        match context.leading_opponent(possible_targets) {
            Some(leader) => leader.player_id.clone(),
            None => context.my_player_id.clone(),
        }
    }
}

impl Default for ThresholdStrategy {
    fn default() -> Self {
        Self::from_config(ThresholdConfig::default())
    }
}

impl Strategy for ThresholdStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_hit_or_stay(&self, context: &StrategyContext) -> bool {
        if context.forced_draw() {
            debug!(
                strategy = %self.name,
                remaining = context.my_flip_three_count,
                "forced to hit by Flip Three"
            );
            return true;
        }

        let hit = context.my_round_score < self.target_score || self.opponent_can_win(context);
        debug!(
            strategy = %self.name,
            round_score = context.my_round_score,
            target = self.target_score,
            hit,
            "hit or stay"
        );
        hit
    }

    // Both duplicates carry the same value; drop the newer one.
    fn decide_second_chance_discard<'a>(
        &self,
        _context: &StrategyContext,
        _duplicate_value: u8,
        duplicate_cards: &'a [NumberCard],
    ) -> Result<&'a NumberCard, StrategyError> {
        duplicate_cards.last().ok_or(StrategyError::NoDuplicateCards)
    }

    fn decide_flip_three_target(
        &self,
        context: &StrategyContext,
        possible_targets: &[PlayerId],
    ) -> PlayerId {
        let target = self.target_leader(context, possible_targets);
        debug!(strategy = %self.name, %target, "flip three target");
        target
    }

    fn decide_freeze_target(
        &self,
        context: &StrategyContext,
        possible_targets: &[PlayerId],
    ) -> PlayerId {
        // Freezing ourselves banks a round score that already meets the target.
        if context.my_round_score >= self.target_score {
            debug!(strategy = %self.name, round_score = context.my_round_score, "freezing self");
            return context.my_player_id.clone();
        }

        let target = self.target_leader(context, possible_targets);
        debug!(strategy = %self.name, %target, "freeze target");
        target
    }
}
