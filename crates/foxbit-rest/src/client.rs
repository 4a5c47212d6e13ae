//! Foxbit REST API client.

use crate::error::FoxbitRestError;
use crate::requests::{CancelOrderRequest, CreateOrderRequest, ListOrdersQuery};
use auth::{timestamp_ms, ApiCredentials, RequestSigner};
use common::RestEndpoint;
use model::{OrderSide, OrderType};
use rest_client::{Method, RestClient, RestError};
use rust_decimal::Decimal;
use serde::Serialize;
use std::time::Duration;

/// Request timeout for Foxbit API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the public API key.
pub const ACCESS_KEY_HEADER: &str = "X-FB-ACCESS-KEY";
/// Header carrying the millisecond timestamp that was signed.
pub const ACCESS_TIMESTAMP_HEADER: &str = "X-FB-ACCESS-TIMESTAMP";
/// Header carrying the hex HMAC-SHA256 signature.
pub const ACCESS_SIGNATURE_HEADER: &str = "X-FB-ACCESS-SIGNATURE";

pub const ME_PATH: &str = "/rest/v3/me";
pub const ORDERS_PATH: &str = "/rest/v3/orders";
pub const CANCEL_ORDERS_PATH: &str = "/rest/v3/orders/cancel";

/// Path of the 24h ticker for one market.
pub fn ticker_24hr_path(market_symbol: &str) -> String {
    format!("/rest/v3/markets/{}/ticker/24hr", market_symbol)
}

/// Upper-case an HTTP verb. The result is both signed and sent.
fn normalize_method(method: Method) -> Result<Method, FoxbitRestError> {
    let upper = method.as_str().to_ascii_uppercase();
    if upper == method.as_str() {
        return Ok(method);
    }

    Method::from_bytes(upper.as_bytes())
        .map_err(|e| FoxbitRestError::Rest(RestError::RequestBuild(e.to_string())))
}

/// Foxbit REST API client with authentication support.
pub struct FoxbitRestClient {
    client: RestClient,
    credentials: ApiCredentials,
    endpoint: RestEndpoint,
}

impl FoxbitRestClient {
    /// Create a new Foxbit REST client for production.
    ///
    /// # Arguments
    /// * `credentials` - API credentials for authenticated requests
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(credentials: ApiCredentials) -> Result<Self, FoxbitRestError> {
        Self::with_endpoint(credentials, RestEndpoint::default())
    }

    /// Create a new Foxbit REST client for a specific base URL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_endpoint(
        credentials: ApiCredentials,
        endpoint: RestEndpoint,
    ) -> Result<Self, FoxbitRestError> {
        let client = RestClient::new(endpoint.base_url(), REQUEST_TIMEOUT)?;

        Ok(Self {
            client,
            credentials,
            endpoint,
        })
    }

    /// Get the endpoint this client talks to.
    pub fn endpoint(&self) -> &RestEndpoint {
        &self.endpoint
    }

    /// Get the API key (for logging/debugging).
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Sign and send one request, returning the raw response body.
    ///
    /// The method is upper-cased once, and that verb, the query string and
    /// the body produced while signing are the ones put on the wire, so the
    /// exchange can recompute the same signature.
    ///
    /// # Errors
    /// - `Sign` if params or body cannot be encoded
    /// - `Rest(HttpStatus)` for any status other than 200/201
    /// - `Rest(Timeout | Connection)` for network failures
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        params: Option<&[(&str, &str)]>,
        body: Option<&B>,
    ) -> Result<Vec<u8>, FoxbitRestError>
    where
        B: Serialize + ?Sized,
    {
        let method = normalize_method(method)?;
        let signer = RequestSigner::new(&self.credentials);
        let signed = signer.sign_request(method.as_str(), path, params, body, timestamp_ms())?;

        tracing::trace!(
            method = %method,
            path = %path,
            query = %signed.query,
            timestamp = %signed.timestamp,
            signature = %signed.signature,
            "Request signed"
        );

        let headers = [
            (ACCESS_KEY_HEADER, self.credentials.api_key()),
            (ACCESS_TIMESTAMP_HEADER, signed.timestamp.as_str()),
            (ACCESS_SIGNATURE_HEADER, signed.signature.as_str()),
            ("Content-Type", "application/json"),
        ];

        let query = Some(signed.query.as_str()).filter(|q| !q.is_empty());

        let response = self
            .client
            .send(method, path, query, &headers, signed.body)
            .await?;

        Ok(response)
    }

    // ========================================================================
    // Account
    // ========================================================================

    /// Get the authenticated member's information.
    ///
    /// GET /rest/v3/me
    pub async fn current_member(&self) -> Result<Vec<u8>, FoxbitRestError> {
        tracing::debug!("Fetching member info");
        self.request::<()>(Method::GET, ME_PATH, None, None).await
    }

    // ========================================================================
    // Market Data
    // ========================================================================

    /// Get the 24h ticker for a market.
    ///
    /// GET /rest/v3/markets/{market_symbol}/ticker/24hr
    ///
    /// Parse the result with [`crate::Ticker24hr::parse`].
    pub async fn ticker_24hr(&self, market_symbol: &str) -> Result<Vec<u8>, FoxbitRestError> {
        tracing::debug!(market_symbol = %market_symbol, "Fetching 24h ticker");
        self.request::<()>(Method::GET, &ticker_24hr_path(market_symbol), None, None)
            .await
    }

    // ========================================================================
    // Order Management
    // ========================================================================

    /// Place a new order.
    ///
    /// POST /rest/v3/orders
    ///
    /// # Parameters
    /// - `market_symbol`: Trading pair (e.g., "btcbrl")
    /// - `side`: Buy or Sell
    /// - `order_type`: Limit, Market, StopLimit, StopMarket, Instant
    /// - `price`: Limit price
    /// - `quantity`: Order quantity
    pub async fn create_order(
        &self,
        market_symbol: &str,
        side: OrderSide,
        order_type: OrderType,
        price: Decimal,
        quantity: Decimal,
    ) -> Result<Vec<u8>, FoxbitRestError> {
        let order = CreateOrderRequest::new(market_symbol, side, order_type, price, quantity);
        self.place_order(&order).await
    }

    /// Place a prepared order.
    ///
    /// POST /rest/v3/orders
    pub async fn place_order(&self, order: &CreateOrderRequest) -> Result<Vec<u8>, FoxbitRestError> {
        tracing::info!(
            market_symbol = %order.market_symbol,
            side = %order.side,
            order_type = %order.order_type,
            price = %order.price,
            quantity = %order.quantity,
            "Placing order"
        );

        self.request(Method::POST, ORDERS_PATH, None, Some(order))
            .await
    }

    /// List orders matching a filter.
    ///
    /// GET /rest/v3/orders
    pub async fn list_orders(&self, query: &ListOrdersQuery) -> Result<Vec<u8>, FoxbitRestError> {
        let params = query.to_params();
        let param_refs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();

        tracing::debug!(params = ?param_refs, "Listing orders");

        self.request::<()>(Method::GET, ORDERS_PATH, Some(param_refs.as_slice()), None)
            .await
    }

    /// Cancel an order by exchange order ID.
    ///
    /// PUT /rest/v3/orders/cancel
    pub async fn cancel_order(&self, order_id: &str) -> Result<Vec<u8>, FoxbitRestError> {
        let cancel = CancelOrderRequest::by_id(order_id);

        tracing::info!(order_id = %order_id, "Canceling order");

        self.request(Method::PUT, CANCEL_ORDERS_PATH, None, Some(&cancel))
            .await
    }
}

impl std::fmt::Debug for FoxbitRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FoxbitRestClient")
            .field("base_url", &self.endpoint.base_url())
            .field("api_key", &self.credentials.api_key())
            .finish()
    }
}
