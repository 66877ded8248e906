//! Fee rate endpoints

use crate::client::RestClient;
use crate::error::RestResult;
use intx_types::FeeTier;
use reqwest::Method;
use tracing::instrument;

/// Venue-wide fee tiers
pub struct FeeRatesService<'a> {
    client: &'a RestClient,
}

impl<'a> FeeRatesService<'a> {
    pub(crate) fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// List all volume-based fee tiers
    #[instrument(skip(self))]
    pub async fn list_tiers(&self) -> RestResult<Vec<FeeTier>> {
        self.client
            .send(Method::GET, "/fee-rate-tiers", None, None)
            .await
    }
}
