//! Print an index price and its current composition
//!
//! Run: INTX_CREDENTIALS='{...}' cargo run --bin index_price -- COIN50

use intx_rest::RestClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let index = std::env::args().nth(1).unwrap_or_else(|| "COIN50".to_string());
    let client = RestClient::from_env()?;

    let price = client.index().price(&index).await?;
    println!("{} = {} ({})", price.index_name, price.price, price.timestamp);

    let composition = client.index().composition(&index).await?;
    for constituent in &composition.constituents {
        println!("  {:<8} {:>8}%", constituent.asset_id, constituent.weight);
    }

    Ok(())
}
