use serde::{Deserialize, Serialize};
use crate::player::{OpponentInfo, PlayerId};

/// Total score that wins the game.
pub const WINNING_SCORE: i32 = 200;

/// Snapshot of the round handed to a strategy for every decision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategyContext {
    pub my_player_id: PlayerId,
    pub my_round_score: i32,
    pub my_flip_three_active: bool,
    /// Draws still owed to an active Flip Three.
    pub my_flip_three_count: u32,
    pub opponents: Vec<OpponentInfo>,
}

impl StrategyContext {
    /// A Flip Three is in progress on us and we must keep drawing.
    pub fn forced_draw(&self) -> bool {
        self.my_flip_three_active && self.my_flip_three_count > 0
    }

    /// Opponents that appear in `possible_targets`, in table order.
    pub fn eligible_opponents<'a, 'b>(
        &'a self,
        possible_targets: &'b [PlayerId],
    ) -> impl Iterator<Item = &'a OpponentInfo> {
        self.opponents
            .iter()
            .filter(move |opp| possible_targets.contains(&opp.player_id))
    }

    /// Eligible opponent with the highest total score.
    /// On equal totals the one listed first in `opponents` is kept.
    pub fn leading_opponent(&self, possible_targets: &[PlayerId]) -> Option<&OpponentInfo> {
        let mut best: Option<&OpponentInfo> = None;

        for opp in self.eligible_opponents(possible_targets) {
            match best {
                Some(leader) if opp.total_score <= leader.total_score => {}
                _ => best = Some(opp),
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opponent(id: &str, total_score: i32) -> OpponentInfo {
        OpponentInfo {
            player_id: id.into(),
            total_score,
            round_score: 0,
            has_stayed: false,
            is_busted: false,
        }
    }

    fn context(opponents: Vec<OpponentInfo>) -> StrategyContext {
        StrategyContext {
            my_player_id: "p1".into(),
            my_round_score: 0,
            my_flip_three_active: false,
            my_flip_three_count: 0,
            opponents,
        }
    }

    fn ids(ids: &[&str]) -> Vec<PlayerId> {
        ids.iter().map(|&id| PlayerId::from(id)).collect()
    }

    #[test]
    fn test_forced_draw_needs_active_and_remaining_count() {
        let mut ctx = context(vec![]);
        assert!(!ctx.forced_draw());

        ctx.my_flip_three_active = true;
        assert!(!ctx.forced_draw());

        ctx.my_flip_three_count = 2;
        assert!(ctx.forced_draw());

        ctx.my_flip_three_active = false;
        assert!(!ctx.forced_draw());
    }

    #[test]
    fn test_eligible_opponents_keeps_table_order() {
        let ctx = context(vec![opponent("p2", 10), opponent("p3", 20), opponent("p4", 30)]);
        let targets = ids(&["p4", "p1", "p2"]);

        let eligible: Vec<&str> = ctx
            .eligible_opponents(&targets)
            .map(|opp| opp.player_id.as_str())
            .collect();

        assert_eq!(eligible, vec!["p2", "p4"]);
    }

    #[test]
    fn test_leading_opponent_picks_highest_total() {
        let ctx = context(vec![opponent("p2", 80), opponent("p3", 120), opponent("p4", 90)]);
        let leader = ctx.leading_opponent(&ids(&["p2", "p3", "p4"])).unwrap();
        assert_eq!(leader.player_id.as_str(), "p3");
    }

    #[test]
    fn test_leading_opponent_first_seen_wins_ties() {
        let ctx = context(vec![opponent("p2", 50), opponent("p3", 120), opponent("p4", 120)]);
        let leader = ctx.leading_opponent(&ids(&["p4", "p3", "p2"])).unwrap();
        assert_eq!(leader.player_id.as_str(), "p3");
    }

    #[test]
    fn test_leading_opponent_ignores_ineligible() {
        let ctx = context(vec![opponent("p2", 80), opponent("p3", 120)]);
        let leader = ctx.leading_opponent(&ids(&["p2"])).unwrap();
        assert_eq!(leader.player_id.as_str(), "p2");

        assert!(ctx.leading_opponent(&ids(&["p1"])).is_none());
        assert!(ctx.leading_opponent(&[]).is_none());
    }

    #[test]
    fn test_context_from_json() {
        let json = r#"{
            "my_player_id": "p1",
            "my_round_score": 42,
            "my_flip_three_active": true,
            "my_flip_three_count": 3,
            "opponents": [
                {"player_id": "p2", "total_score": 150, "round_score": 40,
                 "has_stayed": false, "is_busted": false}
            ]
        }"#;

        let ctx: StrategyContext = serde_json::from_str(json).unwrap();
        assert_eq!(ctx.my_player_id, PlayerId::from("p1"));
        assert!(ctx.forced_draw());
        assert_eq!(ctx.opponents[0].projected_total(), 190);
    }
}
