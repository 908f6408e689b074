//! Construction parameters for the bundled strategies.

use serde::{Deserialize, Serialize};
use crate::error::StrategyError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Display name, `Threshold(<target_score>)` when unset.
    pub name: Option<String>,
    /// Round score to reach before staying.
    pub target_score: i32,
    /// Keep hitting while an active opponent is within this many points of 200.
    pub distance_from_200: i32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            name: None,
            target_score: 100,
            distance_from_200: 0,
        }
    }
}

impl ThresholdConfig {
    pub fn from_json(json: &str) -> Result<Self, StrategyError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    pub name: Option<String>,
    /// Chance of hitting when not forced to draw.
    pub hit_probability: f64,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            name: None,
            hit_probability: 0.5,
        }
    }
}

impl RandomConfig {
    pub fn from_json(json: &str) -> Result<Self, StrategyError> {
        Ok(serde_json::from_str(json)?)
    }
}
