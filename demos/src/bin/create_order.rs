//! Place a limit order
//!
//! Run: INTX_CREDENTIALS='{...}' cargo run --bin create_order -- \
//!     BTC-PERP BUY 0.001 50000

use intx_rest::services::orders::CreateOrderRequest;
use intx_rest::{RestClient, RestError};
use intx_types::{OrderSide, TimeInForce};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 5 {
        eprintln!("usage: create_order <instrument> <BUY|SELL> <size> <price>");
        std::process::exit(2);
    }

    let client = RestClient::from_env()?;
    let portfolio = client
        .portfolio_id()
        .ok_or("INTX_CREDENTIALS must include portfolioId")?
        .to_string();

    let side = match args[2].as_str() {
        "BUY" => OrderSide::Buy,
        "SELL" => OrderSide::Sell,
        other => return Err(format!("unknown side: {}", other).into()),
    };
    let size: Decimal = args[3].parse()?;
    let price: Decimal = args[4].parse()?;

    let mut request = CreateOrderRequest::limit(portfolio, &args[1], side, size, price);
    request.tif = Some(TimeInForce::Gtc);
    request.client_order_id = Some(format!("demo-{}", std::process::id()));

    match client.orders().create(&request).await {
        Ok(order) => {
            println!("order {} accepted: {}", order.order_id, order.order_status);
        }
        Err(RestError::Api { status, message, .. }) => {
            eprintln!("rejected ({}): {}", status, message);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
