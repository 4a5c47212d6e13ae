//! Order enums for the Foxbit REST API.
//!
//! Each enum serializes to the exchange's upper-case wire string.

use serde::Serialize;
use std::fmt;

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Convert to Foxbit string representation.
    pub fn as_foxbit_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Limit,
    Market,
    StopLimit,
    StopMarket,
    Instant,
}

impl OrderType {
    /// Convert to Foxbit string representation.
    pub fn as_foxbit_str(&self) -> &'static str {
        match self {
            Self::Limit => "LIMIT",
            Self::Market => "MARKET",
            Self::StopLimit => "STOP_LIMIT",
            Self::StopMarket => "STOP_MARKET",
            Self::Instant => "INSTANT",
        }
    }
}

/// Order state, used to filter order listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    /// Resting on the book.
    Active,
    /// Canceled before any fill.
    Canceled,
    /// Canceled after a partial fill.
    PartiallyCanceled,
    /// Completely filled.
    Filled,
    /// Partially filled and still resting.
    PartiallyFilled,
    /// Cancellation requested but not yet confirmed.
    PendingCancel,
}

impl OrderState {
    /// Convert to Foxbit string representation.
    pub fn as_foxbit_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Canceled => "CANCELED",
            Self::PartiallyCanceled => "PARTIALLY_CANCELED",
            Self::Filled => "FILLED",
            Self::PartiallyFilled => "PARTIALLY_FILLED",
            Self::PendingCancel => "PENDING_CANCEL",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_foxbit_str())
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_foxbit_str())
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_foxbit_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_matches_foxbit_str() {
        for side in [OrderSide::Buy, OrderSide::Sell] {
            let json = serde_json::to_string(&side).unwrap();
            assert_eq!(json, format!("\"{}\"", side.as_foxbit_str()));
        }

        for order_type in [
            OrderType::Limit,
            OrderType::Market,
            OrderType::StopLimit,
            OrderType::StopMarket,
            OrderType::Instant,
        ] {
            let json = serde_json::to_string(&order_type).unwrap();
            assert_eq!(json, format!("\"{}\"", order_type.as_foxbit_str()));
        }

        let json = serde_json::to_string(&OrderState::PartiallyCanceled).unwrap();
        assert_eq!(json, "\"PARTIALLY_CANCELED\"");
    }
}
