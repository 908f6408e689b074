use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        PlayerId(id.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        PlayerId(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a strategy can see of another player at the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpponentInfo {
    pub player_id: PlayerId,
    /// Banked over all completed rounds.
    pub total_score: i32,
    /// Unbanked points of the current round.
    pub round_score: i32,
    pub has_stayed: bool,
    pub is_busted: bool,
}

impl OpponentInfo {
    /// Still drawing this round.
    pub fn is_active(&self) -> bool {
        !(self.has_stayed || self.is_busted)
    }

    /// Total score if the current round were banked now, in `i64` so it cannot overflow.
    pub fn projected_total(&self) -> i64 {
        i64::from(self.total_score) + i64::from(self.round_score)
    }
}
