#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("No duplicate cards to discard from")]
    NoDuplicateCards,
    #[error("Invalid strategy configuration: {0}")]
    Config(#[from] serde_json::Error),
}
