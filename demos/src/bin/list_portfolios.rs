//! List every portfolio on the account, with its summary
//!
//! Run: INTX_CREDENTIALS='{...}' cargo run --bin list_portfolios

use intx_rest::RestClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = RestClient::from_env()?;

    let portfolios = client.portfolios().list().await?;
    println!("{} portfolios\n", portfolios.len());

    for portfolio in &portfolios {
        println!(
            "{:<14} {:<20} maker {:>9} taker {:>9}{}",
            portfolio.portfolio_id,
            portfolio.name,
            portfolio.maker_fee_rate,
            portfolio.taker_fee_rate,
            if portfolio.is_default { "  (default)" } else { "" }
        );

        let summary = client.portfolios().summary(&portfolio.portfolio_id).await?;
        if let Some(balance) = summary.balance {
            println!("    balance: {}", balance);
        }
        if let Some(unrealized) = summary.unrealized_pnl {
            println!("    unrealized pnl: {}", unrealized);
        }
    }

    Ok(())
}
