//! Asset reference data endpoints

use crate::client::RestClient;
use crate::error::RestResult;
use intx_types::{Asset, SupportedNetwork};
use reqwest::Method;
use tracing::instrument;

/// Asset reference data
pub struct AssetsService<'a> {
    client: &'a RestClient,
}

impl<'a> AssetsService<'a> {
    pub(crate) fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// List all supported assets
    #[instrument(skip(self))]
    pub async fn list(&self) -> RestResult<Vec<Asset>> {
        self.client.send(Method::GET, "/assets", None, None).await
    }

    /// Get details for one asset
    ///
    /// `asset` may be an asset id, uuid, or name (e.g. `"BTC"`).
    #[instrument(skip(self))]
    pub async fn details(&self, asset: &str) -> RestResult<Asset> {
        let path = format!("/assets/{}", asset);
        self.client.send(Method::GET, &path, None, None).await
    }

    /// List the networks an asset can move on
    #[instrument(skip(self))]
    pub async fn supported_networks(&self, asset: &str) -> RestResult<Vec<SupportedNetwork>> {
        let path = format!("/assets/{}/networks", asset);
        self.client.send(Method::GET, &path, None, None).await
    }
}
