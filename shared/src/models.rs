use serde::{Deserialize, Serialize};

/// Predicted price direction of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Lifecycle of a signal. Transitions only run pending -> profit|loss;
/// a resolved signal never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStatus {
    Pending,
    Profit,
    Loss,
}

impl SignalStatus {
    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(SignalStatus::Pending),
            "profit" => Some(SignalStatus::Profit),
            "loss" => Some(SignalStatus::Loss),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalStatus::Pending => "pending",
            SignalStatus::Profit => "profit",
            SignalStatus::Loss => "loss",
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, SignalStatus::Profit | SignalStatus::Loss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_round_trips_through_db_strings() {
        assert_eq!(Direction::from_db("up"), Some(Direction::Up));
        assert_eq!(Direction::from_db("down"), Some(Direction::Down));
        assert_eq!(Direction::from_db("sideways"), None);
        assert_eq!(Direction::Up.as_str(), "up");
    }

    #[test]
    fn only_profit_and_loss_count_as_resolved() {
        assert!(!SignalStatus::Pending.is_resolved());
        assert!(SignalStatus::Profit.is_resolved());
        assert!(SignalStatus::Loss.is_resolved());
    }
}
