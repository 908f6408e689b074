use std::fmt;
use serde::{Deserialize, Serialize};

/// A numbered card as drawn from the deck (values 0 to 12).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberCard {
    pub value: u8,
}

impl NumberCard {
    pub fn new(value: u8) -> Self {
        NumberCard { value }
    }

    pub fn is_duplicate_of(&self, other: &NumberCard) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for NumberCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_share_value() {
        assert!(NumberCard::new(7).is_duplicate_of(&NumberCard::new(7)));
        assert!(!NumberCard::new(7).is_duplicate_of(&NumberCard::new(8)));
    }

    #[test]
    fn test_display() {
        assert_eq!(NumberCard::new(12).to_string(), "[12]");
    }
}
