use crate::card::NumberCard;
use crate::context::StrategyContext;
use crate::error::StrategyError;
use crate::player::PlayerId;

/// Decisions the game engine asks a player for during a round.
pub trait Strategy: Send + Sync {
    fn name(&self) -> &str;

    /// `true` to hit (draw another card), `false` to stay and bank the round.
    fn decide_hit_or_stay(&self, context: &StrategyContext) -> bool;

    /// Pick which of the duplicates (ordered oldest drawn first) a Second Chance discards.
    fn decide_second_chance_discard<'a>(
        &self,
        context: &StrategyContext,
        duplicate_value: u8,
        duplicate_cards: &'a [NumberCard],
    ) -> Result<&'a NumberCard, StrategyError>;

    /// Pick who has to draw three cards.
    fn decide_flip_three_target(
        &self,
        context: &StrategyContext,
        possible_targets: &[PlayerId],
    ) -> PlayerId;

    /// Pick whose turn is ended by a Freeze.
    fn decide_freeze_target(
        &self,
        context: &StrategyContext,
        possible_targets: &[PlayerId],
    ) -> PlayerId;
}
