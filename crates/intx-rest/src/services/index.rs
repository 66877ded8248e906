//! Index endpoints

use crate::client::RestClient;
use crate::error::RestResult;
use crate::query::QueryParams;
use intx_types::{Aggregation, Granularity, IndexComposition, IndexPrice, Paginated, PaginationParams};
use reqwest::Method;
use serde::Deserialize;
use tracing::instrument;

/// Index prices, candles, and composition
pub struct IndexService<'a> {
    client: &'a RestClient,
}

#[derive(Deserialize)]
struct CandlesEnvelope {
    #[serde(default)]
    aggregations: Vec<Aggregation>,
}

impl<'a> IndexService<'a> {
    pub(crate) fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Get candles for an index over `[start, end)`
    ///
    /// `start` and `end` are RFC 3339 timestamps; `end` defaults to now.
    #[instrument(skip(self))]
    pub async fn candles(
        &self,
        index: &str,
        granularity: Granularity,
        start: &str,
        end: Option<&str>,
    ) -> RestResult<Vec<Aggregation>> {
        let path = format!("/index/{}/candles", index);
        let query = QueryParams::new()
            .push("granularity", Some(granularity.as_str()))
            .push("start", Some(start))
            .push("end", end)
            .build();
        let envelope: CandlesEnvelope = self
            .client
            .send(Method::GET, &path, query.as_deref(), None)
            .await?;
        Ok(envelope.aggregations)
    }

    /// Get the current composition of an index
    #[instrument(skip(self))]
    pub async fn composition(&self, index: &str) -> RestResult<IndexComposition> {
        let path = format!("/index/{}/composition", index);
        self.client.send(Method::GET, &path, None, None).await
    }

    /// Get historical compositions of an index, one page per call
    #[instrument(skip(self, pagination))]
    pub async fn composition_history(
        &self,
        index: &str,
        time_from: Option<&str>,
        pagination: Option<&PaginationParams>,
    ) -> RestResult<Paginated<IndexComposition>> {
        let path = format!("/index/{}/composition-history", index);
        let query = QueryParams::new()
            .push("time_from", time_from)
            .paginated(pagination)
            .build();
        self.client
            .send(Method::GET, &path, query.as_deref(), None)
            .await
    }

    /// Get the current price of an index
    #[instrument(skip(self))]
    pub async fn price(&self, index: &str) -> RestResult<IndexPrice> {
        let path = format!("/index/{}/price", index);
        self.client.send(Method::GET, &path, None, None).await
    }
}
