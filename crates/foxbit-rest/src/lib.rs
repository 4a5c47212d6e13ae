//! Foxbit REST API v3 client.
//!
//! This crate provides a signed client for the Foxbit REST API with:
//!
//! - **Request signing**: every call carries `X-FB-ACCESS-*` headers computed
//!   over the exact query string and body that are sent
//! - **Raw responses**: endpoints return body bytes; typed parsers cover the
//!   fields the workspace needs
//! - **Order management**: create, list and cancel orders with typed bodies
//! - **Error handling**: one error type that separates configuration,
//!   signing, transport, HTTP status and parse failures
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::ApiCredentials;
//! use foxbit_rest::{CreateOrderResponse, FoxbitRestClient};
//! use model::{OrderSide, OrderType};
//! use rust_decimal_macros::dec;
//!
//! // Load credentials from environment
//! let credentials = ApiCredentials::from_env()?;
//! let client = FoxbitRestClient::new(credentials)?;
//!
//! let me = client.current_member().await?;
//!
//! // Place an order
//! let body = client
//!     .create_order("btcbrl", OrderSide::Buy, OrderType::Limit, dec!(10.0), dec!(0.0001))
//!     .await?;
//! let order_id = CreateOrderResponse::parse(&body)?.id;
//!
//! client.cancel_order(&order_id).await?;
//! ```

mod client;
mod error;
mod requests;
mod responses;
mod workflow;

pub use client::{
    ticker_24hr_path, FoxbitRestClient, ACCESS_KEY_HEADER, ACCESS_SIGNATURE_HEADER,
    ACCESS_TIMESTAMP_HEADER, CANCEL_ORDERS_PATH, ME_PATH, ORDERS_PATH,
};
pub use error::FoxbitRestError;
pub use requests::{CancelOrderRequest, CreateOrderRequest, ListOrdersQuery};
pub use responses::{BestQuotes, CreateOrderResponse, Quote, Ticker24hr};
pub use workflow::{place_and_cancel, OrderRoundTrip, DEFAULT_SETTLE_DELAY};
pub use rest_client::Method;
