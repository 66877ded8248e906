//! Position offset endpoints

use crate::client::RestClient;
use crate::error::RestResult;
use intx_types::PositionOffset;
use reqwest::Method;
use tracing::instrument;

/// Position offsets recognized for margin relief
pub struct PositionOffsetsService<'a> {
    client: &'a RestClient,
}

impl<'a> PositionOffsetsService<'a> {
    pub(crate) fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// List the offsetting position pairs the venue recognizes
    #[instrument(skip(self))]
    pub async fn list(&self) -> RestResult<Vec<PositionOffset>> {
        self.client
            .send(Method::GET, "/position-offsets", None, None)
            .await
    }
}
