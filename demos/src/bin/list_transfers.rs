//! Page through the account's transfer history
//!
//! Run: INTX_CREDENTIALS='{...}' cargo run --bin list_transfers

use intx_rest::services::transfers::ListTransfersFilter;
use intx_rest::RestClient;
use intx_types::PaginationParams;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = RestClient::from_env()?;

    // Multi-page iteration is the caller's loop: one dispatcher call per
    // page, advancing the offset until a short page comes back.
    let mut filter = ListTransfersFilter {
        pagination: Some(PaginationParams::new(25, 0)),
        ..Default::default()
    };

    loop {
        let page = client.transfers().list(&filter).await?;
        for transfer in &page.results {
            println!(
                "{}  {:<9} {:<10} {:>18} {}",
                transfer.created_at,
                transfer.transfer_type.as_str(),
                transfer.status.as_str(),
                transfer.amount,
                transfer.asset,
            );
        }

        match page.pagination.next_page() {
            Some(next) if !page.is_empty() => filter.pagination = Some(next),
            _ => break,
        }
    }

    Ok(())
}
