pub mod random;
pub mod threshold;

pub use random::RandomStrategy;
pub use threshold::ThresholdStrategy;
