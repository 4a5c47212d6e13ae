//! Foxbit API response types.
//!
//! Endpoints return raw bytes; these types interpret the few fields the
//! workspace relies on and reject anything else with a `Parse` error.

use crate::error::FoxbitRestError;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

/// Identifier returned by POST /rest/v3/orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderResponse {
    pub id: String,
}

impl CreateOrderResponse {
    /// Extract the order id.
    ///
    /// A string or integer id is accepted and normalized to a string.
    pub fn parse(body: &[u8]) -> Result<Self, FoxbitRestError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| FoxbitRestError::Parse(format!("order response is not JSON: {}", e)))?;

        let id = match value.get("id") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) if n.is_u64() || n.is_i64() => n.to_string(),
            Some(other) => {
                return Err(FoxbitRestError::Parse(format!(
                    "order response has unusable id: {}",
                    other
                )))
            }
            None => {
                return Err(FoxbitRestError::Parse(format!(
                    "order response has no id: {}",
                    String::from_utf8_lossy(body)
                )))
            }
        };

        Ok(Self { id })
    }
}

/// Response from GET /rest/v3/markets/{market_symbol}/ticker/24hr.
#[derive(Debug, Clone, Deserialize)]
struct TickerEnvelope {
    data: Vec<Ticker24hr>,
}

/// 24h ticker for one market.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker24hr {
    #[serde(default)]
    pub market_symbol: Option<String>,
    pub best: BestQuotes,
}

/// Top of book.
#[derive(Debug, Clone, Deserialize)]
pub struct BestQuotes {
    #[serde(default)]
    pub bid: Option<Quote>,
    #[serde(default)]
    pub ask: Option<Quote>,
}

/// A price level.
#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

impl Ticker24hr {
    /// Parse the first ticker in the response envelope.
    pub fn parse(body: &[u8]) -> Result<Self, FoxbitRestError> {
        let envelope: TickerEnvelope = serde_json::from_slice(body).map_err(|e| {
            tracing::warn!(body = %String::from_utf8_lossy(body), error = %e, "Failed to parse ticker");
            FoxbitRestError::Parse(e.to_string())
        })?;

        envelope
            .data
            .into_iter()
            .next()
            .ok_or_else(|| FoxbitRestError::Parse("ticker response has no data".into()))
    }

    /// Best bid price, if the book has bids.
    pub fn best_bid_price(&self) -> Option<Decimal> {
        self.best.bid.as_ref().map(|q| q.price)
    }

    /// Best ask price, if the book has asks.
    pub fn best_ask_price(&self) -> Option<Decimal> {
        self.best.ask.as_ref().map(|q| q.price)
    }
}
