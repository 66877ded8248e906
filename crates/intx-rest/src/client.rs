//! Main REST client implementation
//!
//! [`RestClient`] owns the connection pool and credentials and executes
//! one signed request per call. Each call is a single atomic attempt with
//! exactly three outcomes: a decoded JSON payload, a classified
//! [`RestError::Api`], or a transport-level failure. Nothing is retried -
//! order mutations must never be replayed by a generic layer.

use crate::error::{RestError, RestResult};
use crate::services::{
    AddressBookService, AssetsService, FeeRatesService, IndexService, InstrumentsService,
    OrdersService, PortfoliosService, PositionOffsetsService, RankingsService, TransfersService,
};
use intx_auth::{
    Credentials, HEADER_ACCESS_KEY, HEADER_ACCESS_PASSPHRASE, HEADER_ACCESS_SIGN,
    HEADER_ACCESS_TIMESTAMP,
};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.international.coinbase.com/api/v1";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Coinbase International Exchange REST client
///
/// One instance may be shared across arbitrarily many concurrent tasks;
/// signing and serialization are independent per call and the connection
/// pool inside `reqwest::Client` is internally thread-safe.
///
/// # Example
///
/// ```no_run
/// use intx_rest::{ClientConfig, RestClient};
/// use intx_auth::Credentials;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let creds = Credentials::from_env()?;
///     let client = RestClient::new(creds);
///
///     let portfolios = client.portfolios().list().await?;
///     println!("{} portfolios", portfolios.len());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct RestClient {
    http: Client,
    credentials: Credentials,
    base_url: String,
}

impl RestClient {
    /// Create a client against the production endpoint
    pub fn new(credentials: Credentials) -> Self {
        Self::with_config(ClientConfig::new(credentials))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or("intx-rest/0.1.0"))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            credentials: config.credentials,
            base_url: config.base_url,
        }
    }

    /// Create a client from the `INTX_CREDENTIALS` environment variable
    pub fn from_env() -> RestResult<Self> {
        Ok(Self::new(Credentials::from_env()?))
    }

    /// The base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Default portfolio identifier from the credential set, if any
    pub fn portfolio_id(&self) -> Option<&str> {
        self.credentials.portfolio_id()
    }

    /// Execute one signed request and return the raw decoded payload
    ///
    /// * `query` - pre-encoded query string, appended after `?` when
    ///   non-empty; not covered by the signature
    /// * `body` - serialized to its wire form before signing, since the
    ///   signature covers the exact transmitted bytes
    /// * `allowed_status_codes` - statuses outside 2xx to treat as
    ///   success (e.g. pass `&[404]` to observe a missing resource as a
    ///   decoded body instead of an error)
    ///
    /// Exactly one attempt is made. Network-level failures surface as
    /// [`RestError::Transport`] (or [`RestError::Timeout`]) immediately;
    /// the caller decides whether a retry is safe for that operation.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        body: Option<&serde_json::Value>,
        allowed_status_codes: Option<&[u16]>,
    ) -> RestResult<serde_json::Value> {
        let serialized = match body {
            Some(body) => serde_json::to_string(body)
                .map_err(|e| RestError::Decode(format!("failed to serialize body: {}", e)))?,
            None => String::new(),
        };

        let timestamp = unix_timestamp();
        let headers = self
            .credentials
            .sign(method.as_str(), path, &serialized, timestamp);

        let mut url = format!("{}{}", self.base_url, path);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(query);
        }

        debug!(%method, path, "dispatching signed request");

        let mut builder = self
            .http
            .request(method, &url)
            .header(HEADER_ACCESS_KEY, &headers.api_key)
            .header(HEADER_ACCESS_PASSPHRASE, &headers.passphrase)
            .header(HEADER_ACCESS_SIGN, &headers.signature)
            .header(HEADER_ACCESS_TIMESTAMP, &headers.timestamp);

        if body.is_some() {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(serialized);
        }

        let response = builder.send().await.map_err(RestError::transport)?;
        let status = response.status();
        let text = response.text().await.map_err(RestError::transport)?;

        let accepted = status.is_success()
            || allowed_status_codes
                .map(|codes| codes.contains(&status.as_u16()))
                .unwrap_or(false);
        if !accepted {
            return Err(RestError::api(status.as_u16(), text));
        }

        if text.is_empty() {
            // 204-style responses decode to an empty mapping
            return Ok(serde_json::Value::Object(serde_json::Map::new()));
        }
        serde_json::from_str(&text).map_err(|e| RestError::Decode(e.to_string()))
    }

    /// Execute a request and deserialize the payload into `T`
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        body: Option<&serde_json::Value>,
    ) -> RestResult<T> {
        let value = self.request(method, path, query, body, None).await?;
        serde_json::from_value(value).map_err(|e| RestError::Decode(e.to_string()))
    }

    // ========================================================================
    // Service accessors
    // ========================================================================

    /// Asset reference data
    pub fn assets(&self) -> AssetsService<'_> {
        AssetsService::new(self)
    }

    /// Saved withdrawal destinations
    pub fn address_book(&self) -> AddressBookService<'_> {
        AddressBookService::new(self)
    }

    /// Venue-wide fee tiers
    pub fn fee_rates(&self) -> FeeRatesService<'_> {
        FeeRatesService::new(self)
    }

    /// Index prices, candles, and composition
    pub fn index(&self) -> IndexService<'_> {
        IndexService::new(self)
    }

    /// Instrument reference data and market stats
    pub fn instruments(&self) -> InstrumentsService<'_> {
        InstrumentsService::new(self)
    }

    /// Order entry and management
    pub fn orders(&self) -> OrdersService<'_> {
        OrdersService::new(self)
    }

    /// Portfolio balances, positions, fills, loans, and limits
    pub fn portfolios(&self) -> PortfoliosService<'_> {
        PortfoliosService::new(self)
    }

    /// Position offsets recognized for margin relief
    pub fn position_offsets(&self) -> PositionOffsetsService<'_> {
        PositionOffsetsService::new(self)
    }

    /// Your trading rankings
    pub fn rankings(&self) -> RankingsService<'_> {
        RankingsService::new(self)
    }

    /// Deposits, withdrawals, and counterparty transfers
    pub fn transfers(&self) -> TransfersService<'_> {
        TransfersService::new(self)
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs() as i64
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials
    pub credentials: Credentials,
    /// Base URL (override for sandbox or mock environments)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Configuration against the production endpoint
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }

    /// Override the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set a custom user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_credentials() -> Credentials {
        Credentials::new("test_key", "test_phrase", "dGVzdF9zaWduaW5nX2tleQ==").unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::new(test_credentials());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new(test_credentials())
            .with_base_url("http://127.0.0.1:9999")
            .with_timeout(5)
            .with_user_agent("test-agent");

        let client = RestClient::with_config(config);
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_portfolio_id_passthrough() {
        let creds = test_credentials().with_portfolio_id("1wp37qsc-1-0");
        let client = RestClient::new(creds);
        assert_eq!(client.portfolio_id(), Some("1wp37qsc-1-0"));
    }
}
