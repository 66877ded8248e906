//! Rankings endpoints

use crate::client::RestClient;
use crate::error::RestResult;
use crate::query::QueryParams;
use intx_types::{InstrumentType, RankingPeriod, Rankings};
use reqwest::Method;
use tracing::instrument;

/// Your trading rankings within the venue
pub struct RankingsService<'a> {
    client: &'a RestClient,
}

impl<'a> RankingsService<'a> {
    pub(crate) fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Get maker/taker/total ranking statistics
    ///
    /// * `instruments` - optional comma-separated instrument list
    #[instrument(skip(self))]
    pub async fn statistics(
        &self,
        instrument_type: InstrumentType,
        period: Option<RankingPeriod>,
        instruments: Option<&str>,
    ) -> RestResult<Rankings> {
        let query = QueryParams::new()
            .push("instrument_type", Some(instrument_type.as_str()))
            .push("period", period.map(|p| p.as_str()))
            .push("instruments", instruments)
            .build();
        self.client
            .send(Method::GET, "/rankings/statistics", query.as_deref(), None)
            .await
    }
}
