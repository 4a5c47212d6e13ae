//! Place an order, list active orders in its market, then cancel it.

use crate::client::FoxbitRestClient;
use crate::error::FoxbitRestError;
use crate::requests::{CreateOrderRequest, ListOrdersQuery};
use crate::responses::CreateOrderResponse;
use std::time::Duration;

/// Pause between placing and listing used by the runner.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(2);

/// Raw responses from one [`place_and_cancel`] run.
#[derive(Debug, Clone)]
pub struct OrderRoundTrip {
    pub order_id: String,
    pub created: Vec<u8>,
    pub active_orders: Vec<u8>,
    pub canceled: Vec<u8>,
}

/// Create `order`, list active orders in its market, then cancel it by id.
///
/// Stops at the first failing step. An order that was created before a
/// later step failed is left on the book.
pub async fn place_and_cancel(
    client: &FoxbitRestClient,
    order: &CreateOrderRequest,
    settle_delay: Duration,
) -> Result<OrderRoundTrip, FoxbitRestError> {
    let created = client.place_order(order).await?;
    let order_id = CreateOrderResponse::parse(&created)?.id;

    tracing::info!(order_id = %order_id, "Order placed");

    if !settle_delay.is_zero() {
        tokio::time::sleep(settle_delay).await;
    }

    let active_orders = client
        .list_orders(&ListOrdersQuery::active(&order.market_symbol))
        .await?;

    let canceled = client.cancel_order(&order_id).await?;

    tracing::info!(order_id = %order_id, "Order canceled");

    Ok(OrderRoundTrip {
        order_id,
        created,
        active_orders,
        canceled,
    })
}
