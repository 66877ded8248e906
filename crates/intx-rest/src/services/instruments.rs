//! Instrument endpoints

use crate::client::RestClient;
use crate::error::RestResult;
use crate::query::QueryParams;
use intx_types::{
    Aggregation, DailyTradingVolume, FundingRate, Granularity, Instrument, Paginated,
    PaginationParams, Quote,
};
use reqwest::Method;
use serde::Deserialize;
use tracing::instrument;

/// Instrument reference data and market stats
pub struct InstrumentsService<'a> {
    client: &'a RestClient,
}

#[derive(Deserialize)]
struct CandlesEnvelope {
    #[serde(default)]
    aggregations: Vec<Aggregation>,
}

impl<'a> InstrumentsService<'a> {
    pub(crate) fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// List all tradable instruments
    #[instrument(skip(self))]
    pub async fn list(&self) -> RestResult<Vec<Instrument>> {
        self.client
            .send(Method::GET, "/instruments", None, None)
            .await
    }

    /// Get details for one instrument
    ///
    /// `instrument` may be a symbol (e.g. `"BTC-PERP"`), id, or uuid.
    #[instrument(skip(self))]
    pub async fn details(&self, instrument: &str) -> RestResult<Instrument> {
        let path = format!("/instruments/{}", instrument);
        self.client.send(Method::GET, &path, None, None).await
    }

    /// Get the current quote for one instrument
    #[instrument(skip(self))]
    pub async fn quote(&self, instrument: &str) -> RestResult<Quote> {
        let path = format!("/instruments/{}/quote", instrument);
        self.client.send(Method::GET, &path, None, None).await
    }

    /// Get aggregated candles for an instrument over `[start, end)`
    #[instrument(skip(self))]
    pub async fn candles(
        &self,
        instrument: &str,
        granularity: Granularity,
        start: &str,
        end: Option<&str>,
    ) -> RestResult<Vec<Aggregation>> {
        let path = format!("/instruments/{}/candles", instrument);
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

    /// Get historical funding rates for a perpetual, one page per call
    #[instrument(skip(self, pagination))]
    pub async fn funding_rates(
        &self,
        instrument: &str,
        pagination: Option<&PaginationParams>,
    ) -> RestResult<Paginated<FundingRate>> {
        let path = format!("/instruments/{}/funding", instrument);
        let query = QueryParams::new().paginated(pagination).build();
        self.client
            .send(Method::GET, &path, query.as_deref(), None)
            .await
    }

    /// Get daily trading volumes, one page per call
    ///
    /// * `instruments` - comma-separated instrument list
    /// * `show_other` - include the aggregate "other" bucket
    #[instrument(skip(self, pagination))]
    pub async fn daily_volumes(
        &self,
        instruments: &str,
        time_from: Option<&str>,
        show_other: Option<bool>,
        pagination: Option<&PaginationParams>,
    ) -> RestResult<Paginated<DailyTradingVolume>> {
        let query = QueryParams::new()
            .push("instruments", Some(instruments))
            .push("time_from", time_from)
            .push("show_other", show_other)
            .paginated(pagination)
            .build();
        self.client
            .send(Method::GET, "/instruments/volumes/daily", query.as_deref(), None)
            .await
    }
}
