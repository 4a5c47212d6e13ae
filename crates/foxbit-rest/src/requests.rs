//! Foxbit API request bodies and query parameters.

use chrono::{DateTime, SecondsFormat, Utc};
use model::{OrderSide, OrderState, OrderType};
use rust_decimal::Decimal;
use serde::Serialize;

/// Body of POST /rest/v3/orders.
///
/// Fields serialize in declaration order; price and quantity go out as
/// decimal strings that keep their scale (`10.0` stays `"10.0"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateOrderRequest {
    pub market_symbol: String,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
}

impl CreateOrderRequest {
    pub fn new(
        market_symbol: &str,
        side: OrderSide,
        order_type: OrderType,
        price: Decimal,
        quantity: Decimal,
    ) -> Self {
        Self {
            market_symbol: market_symbol.to_string(),
            side,
            order_type,
            price,
            quantity,
        }
    }

    /// Limit order shorthand.
    pub fn limit(market_symbol: &str, side: OrderSide, price: Decimal, quantity: Decimal) -> Self {
        Self::new(market_symbol, side, OrderType::Limit, price, quantity)
    }
}

/// Body of PUT /rest/v3/orders/cancel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CancelOrderRequest {
    /// Cancel a single order by exchange id.
    Id { id: String },
}

impl CancelOrderRequest {
    pub fn by_id(order_id: &str) -> Self {
        Self::Id {
            id: order_id.to_string(),
        }
    }
}

/// Query parameters of GET /rest/v3/orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOrdersQuery {
    pub market_symbol: String,
    pub state: Option<OrderState>,
    /// Only orders created at or after this instant.
    pub start_time: Option<DateTime<Utc>>,
}

impl ListOrdersQuery {
    pub fn new(market_symbol: &str) -> Self {
        Self {
            market_symbol: market_symbol.to_string(),
            state: None,
            start_time: None,
        }
    }

    /// Orders still resting on the book for `market_symbol`.
    pub fn active(market_symbol: &str) -> Self {
        Self::new(market_symbol).with_state(OrderState::Active)
    }

    pub fn with_state(mut self, state: OrderState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Key/value pairs to be signed and sent; order is not significant.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("market_symbol", self.market_symbol.clone())];

        if let Some(state) = self.state {
            params.push(("state", state.as_foxbit_str().to_string()));
        }

        if let Some(start) = self.start_time {
            params.push((
                "start_time",
                start.to_rfc3339_opts(SecondsFormat::Millis, true),
            ));
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_order_body() {
        let order = CreateOrderRequest::new(
            "btcbrl",
            OrderSide::Buy,
            OrderType::Limit,
            dec!(10.0),
            dec!(0.0001),
        );

        assert_eq!(
            serde_json::to_string(&order).unwrap(),
            r#"{"market_symbol":"btcbrl","side":"BUY","type":"LIMIT","price":"10.0","quantity":"0.0001"}"#
        );
    }

    #[test]
    fn test_limit_shorthand() {
        let order = CreateOrderRequest::limit("ethbrl", OrderSide::Sell, dec!(15000), dec!(0.5));
        assert_eq!(order.order_type, OrderType::Limit);
        assert_eq!(order.market_symbol, "ethbrl");
    }

    #[test]
    fn test_cancel_by_id_body() {
        let cancel = CancelOrderRequest::by_id("abc-123");
        assert_eq!(
            serde_json::to_string(&cancel).unwrap(),
            r#"{"type":"ID","id":"abc-123"}"#
        );
    }

    #[test]
    fn test_list_orders_params() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let query = ListOrdersQuery::active("btcbrl").with_start_time(start);

        assert_eq!(
            query.to_params(),
            vec![
                ("market_symbol", "btcbrl".to_string()),
                ("state", "ACTIVE".to_string()),
                ("start_time", "2024-05-01T12:00:00.000Z".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_orders_params_minimal() {
        let query = ListOrdersQuery::new("btcbrl");
        assert_eq!(query.to_params(), vec![("market_symbol", "btcbrl".to_string())]);
    }
}
