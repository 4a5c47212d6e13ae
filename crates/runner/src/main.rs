use auth::ApiCredentials;
use common::RestEndpoint;
use foxbit_rest::{
    place_and_cancel, CreateOrderRequest, FoxbitRestClient, FoxbitRestError, Ticker24hr,
    DEFAULT_SETTLE_DELAY,
};
use model::OrderSide;
use rust_decimal_macros::dec;
use tracing::{error, info, warn};

/// Market used for the demonstration order.
const MARKET_SYMBOL: &str = "btcbrl";

#[tokio::main]
async fn main() {
    common::init_logging();

    if let Err(e) = run().await {
        error!(error = %e, "Run failed");
        std::process::exit(1);
    }

    info!("Run complete");
}

async fn run() -> Result<(), FoxbitRestError> {
    let credentials = ApiCredentials::from_env()?;
    let endpoint = RestEndpoint::from_env()?;

    info!(
        api_key = %credentials.api_key(),
        base_url = %endpoint,
        production = endpoint.is_production(),
        "Starting Foxbit run"
    );

    let client = FoxbitRestClient::with_endpoint(credentials, endpoint)?;

    let me = client.current_member().await?;
    print_response("Member", &me);

    match client.ticker_24hr(MARKET_SYMBOL).await {
        Ok(body) => {
            print_response("Ticker", &body);
            match Ticker24hr::parse(&body) {
                Ok(ticker) => info!(
                    market_symbol = MARKET_SYMBOL,
                    best_bid = ?ticker.best_bid_price(),
                    best_ask = ?ticker.best_ask_price(),
                    "Market ticker"
                ),
                Err(e) => warn!(error = %e, "Ticker response not understood"),
            }
        }
        Err(e) => warn!(error = %e, "Ticker unavailable"),
    }

    let order = CreateOrderRequest::limit(MARKET_SYMBOL, OrderSide::Buy, dec!(10.0), dec!(0.0001));
    let round_trip = place_and_cancel(&client, &order, DEFAULT_SETTLE_DELAY).await?;

    print_response("Order", &round_trip.created);
    print_response("Active orders", &round_trip.active_orders);
    print_response("Cancel", &round_trip.canceled);

    Ok(())
}

fn print_response(label: &str, body: &[u8]) {
    println!("{}: {}", label, String::from_utf8_lossy(body));
}
