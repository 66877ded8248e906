//! Portfolio endpoints
//!
//! Balances, positions, fills, fee rates, transfers, margin settings,
//! loans, and position limits, all scoped to a portfolio identifier
//! (id or uuid).

use crate::client::RestClient;
use crate::error::{RestError, RestResult};
use crate::query::QueryParams;
use intx_types::{
    AssetBalance, AssetLoan, Fill, FundTransferLimit, LoanAvailability, LoanPreview,
    MarginOverrideResult, OpenPositionLimit, OrderSide, Paginated, PaginationParams, Portfolio,
    PortfolioDetail, PortfolioFeeRate, PortfolioLoan, PortfolioPosition, PortfolioSummary,
    TotalOpenPositionLimit, TransferResult,
};
use reqwest::Method;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use tracing::instrument;

/// Portfolio balances, positions, fills, loans, and limits
pub struct PortfoliosService<'a> {
    client: &'a RestClient,
}

/// Filters for listing fills (per portfolio or across portfolios)
#[derive(Debug, Clone, Default)]
pub struct ListFillsFilter {
    pub order_id: Option<String>,
    pub client_order_id: Option<String>,
    pub ref_datetime: Option<String>,
    pub time_from: Option<String>,
    pub pagination: Option<PaginationParams>,
}

/// Body for `POST /portfolios/margin`
#[derive(Debug, Clone, Serialize)]
pub struct SetMarginOverrideRequest {
    pub portfolio: String,
    pub margin_override: Decimal,
}

/// Body for acquiring or repaying a loan
#[derive(Debug, Clone, Serialize)]
pub struct LoanUpdateRequest {
    /// `"ACQUIRE"` or `"REPAY"`
    pub action: String,
    pub amount: Decimal,
}

impl<'a> PortfoliosService<'a> {
    pub(crate) fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    // ========================================================================
    // Portfolio CRUD
    // ========================================================================

    /// List all portfolios for the account
    #[instrument(skip(self))]
    pub async fn list(&self) -> RestResult<Vec<Portfolio>> {
        self.client
            .send(Method::GET, "/portfolios", None, None)
            .await
    }

    /// Create a new portfolio
    #[instrument(skip(self))]
    pub async fn create(&self, name: &str) -> RestResult<Portfolio> {
        let body = json!({ "name": name });
        self.client
            .send(Method::POST, "/portfolios", None, Some(&body))
            .await
    }

    /// Get one portfolio
    #[instrument(skip(self))]
    pub async fn get(&self, portfolio: &str) -> RestResult<Portfolio> {
        let path = format!("/portfolios/{}", portfolio);
        self.client.send(Method::GET, &path, None, None).await
    }

    /// Rename a portfolio (full update)
    #[instrument(skip(self))]
    pub async fn update(&self, portfolio: &str, name: &str) -> RestResult<Portfolio> {
        let path = format!("/portfolios/{}", portfolio);
        let body = json!({ "name": name });
        self.client
            .send(Method::PUT, &path, None, Some(&body))
            .await
    }

    /// Patch portfolio settings; absent fields are left untouched
    #[instrument(skip(self, settings))]
    pub async fn patch(&self, portfolio: &str, settings: &PatchPortfolioRequest) -> RestResult<Portfolio> {
        let path = format!("/portfolios/{}", portfolio);
        let body = serde_json::to_value(settings)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
        self.client
            .send(Method::PATCH, &path, None, Some(&body))
            .await
    }

    /// Get a portfolio's summary plus balances and positions
    #[instrument(skip(self))]
    pub async fn detail(&self, portfolio: &str) -> RestResult<PortfolioDetail> {
        let path = format!("/portfolios/{}/detail", portfolio);
        self.client.send(Method::GET, &path, None, None).await
    }

    /// Get aggregated margin and equity figures for a portfolio
    #[instrument(skip(self))]
    pub async fn summary(&self, portfolio: &str) -> RestResult<PortfolioSummary> {
        let path = format!("/portfolios/{}/summary", portfolio);
        self.client.send(Method::GET, &path, None, None).await
    }

    // ========================================================================
    // Balances & positions
    // ========================================================================

    /// List all asset balances in a portfolio
    #[instrument(skip(self))]
    pub async fn balances(&self, portfolio: &str) -> RestResult<Vec<AssetBalance>> {
        let path = format!("/portfolios/{}/balances", portfolio);
        self.client.send(Method::GET, &path, None, None).await
    }

    /// Get the balance of one asset in a portfolio
    #[instrument(skip(self))]
    pub async fn balance(&self, portfolio: &str, asset: &str) -> RestResult<AssetBalance> {
        let path = format!("/portfolios/{}/balances/{}", portfolio, asset);
        self.client.send(Method::GET, &path, None, None).await
    }

    /// List all open positions in a portfolio
    #[instrument(skip(self))]
    pub async fn positions(&self, portfolio: &str) -> RestResult<Vec<PortfolioPosition>> {
        let path = format!("/portfolios/{}/positions", portfolio);
        self.client.send(Method::GET, &path, None, None).await
    }

    /// Get the position in one instrument
    #[instrument(skip(self))]
    pub async fn position(&self, portfolio: &str, instrument: &str) -> RestResult<PortfolioPosition> {
        let path = format!("/portfolios/{}/positions/{}", portfolio, instrument);
        self.client.send(Method::GET, &path, None, None).await
    }

    // ========================================================================
    // Fills & fee rates
    // ========================================================================

    /// List fills for one portfolio, one page per call
    #[instrument(skip(self, filter))]
    pub async fn fills(
        &self,
        portfolio: &str,
        filter: &ListFillsFilter,
    ) -> RestResult<Paginated<Fill>> {
        let path = format!("/portfolios/{}/fills", portfolio);
        let query = Self::fills_query(filter).build();
        self.client
            .send(Method::GET, &path, query.as_deref(), None)
            .await
    }

    /// List fills across portfolios, one page per call
    ///
    /// `portfolios` is a comma-separated list of portfolio identifiers.
    #[instrument(skip(self, filter))]
    pub async fn fills_by_portfolios(
        &self,
        portfolios: &str,
        filter: &ListFillsFilter,
    ) -> RestResult<Paginated<Fill>> {
        let query = Self::fills_query(filter)
            .push("portfolios", Some(portfolios))
            .build();
        self.client
            .send(Method::GET, "/portfolios/fills", query.as_deref(), None)
            .await
    }

    /// Get the fee rates applied to each portfolio
    #[instrument(skip(self))]
    pub async fn fee_rates(&self) -> RestResult<Vec<PortfolioFeeRate>> {
        self.client
            .send(Method::GET, "/portfolios/fee-rates", None, None)
            .await
    }

    // ========================================================================
    // Transfers between portfolios
    // ========================================================================

    /// Move funds between two portfolios of the same account
    #[instrument(skip(self))]
    pub async fn transfer_funds(
        &self,
        from: &str,
        to: &str,
        asset: &str,
        amount: Decimal,
    ) -> RestResult<TransferResult> {
        let body = json!({
            "from": from,
            "to": to,
            "asset": asset,
            "amount": amount,
        });
        self.client
            .send(Method::POST, "/portfolios/transfer", None, Some(&body))
            .await
    }

    /// Move an open position between two portfolios
    #[instrument(skip(self))]
    pub async fn transfer_position(
        &self,
        from: &str,
        to: &str,
        instrument: &str,
        quantity: Decimal,
        side: OrderSide,
    ) -> RestResult<TransferResult> {
        let body = json!({
            "from": from,
            "to": to,
            "instrument": instrument,
            "quantity": quantity,
            "side": side,
        });
        self.client
            .send(Method::POST, "/portfolios/transfer-position", None, Some(&body))
            .await
    }

    /// Get the maximum transferable amount for a portfolio/asset pair
    #[instrument(skip(self))]
    pub async fn fund_transfer_limit(
        &self,
        portfolio: &str,
        asset: &str,
    ) -> RestResult<FundTransferLimit> {
        let path = format!("/portfolios/transfer/{}/{}/transfer-limit", portfolio, asset);
        self.client.send(Method::GET, &path, None, None).await
    }

    // ========================================================================
    // Margin settings
    // ========================================================================

    /// Set a portfolio margin override
    #[instrument(skip(self, request))]
    pub async fn set_margin_override(
        &self,
        request: &SetMarginOverrideRequest,
    ) -> RestResult<MarginOverrideResult> {
        let body = serde_json::to_value(request)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
        self.client
            .send(Method::POST, "/portfolios/margin", None, Some(&body))
            .await
    }

    /// Enable or disable auto-margin for a portfolio
    #[instrument(skip(self))]
    pub async fn set_auto_margin(&self, portfolio: &str, enabled: bool) -> RestResult<serde_json::Value> {
        let path = format!("/portfolios/{}/auto-margin-enabled", portfolio);
        let body = json!({ "enabled": enabled });
        self.client
            .request(Method::POST, &path, None, Some(&body), None)
            .await
    }

    /// Enable or disable cross-collateral for a portfolio
    #[instrument(skip(self))]
    pub async fn set_cross_collateral(
        &self,
        portfolio: &str,
        enabled: bool,
    ) -> RestResult<serde_json::Value> {
        let path = format!("/portfolios/{}/cross-collateral-enabled", portfolio);
        let body = json!({ "enabled": enabled });
        self.client
            .request(Method::POST, &path, None, Some(&body), None)
            .await
    }

    // ========================================================================
    // Loans
    // ========================================================================

    /// Acquire or repay a loan in one asset
    #[instrument(skip(self, request))]
    pub async fn update_loan(
        &self,
        portfolio: &str,
        asset: &str,
        request: &LoanUpdateRequest,
    ) -> RestResult<AssetLoan> {
        let path = format!("/portfolios/{}/loans/{}", portfolio, asset);
        let body = serde_json::to_value(request)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
        self.client
            .send(Method::POST, &path, None, Some(&body))
            .await
    }

    /// Preview a loan update without applying it
    #[instrument(skip(self, request))]
    pub async fn preview_loan_update(
        &self,
        portfolio: &str,
        asset: &str,
        request: &LoanUpdateRequest,
    ) -> RestResult<LoanPreview> {
        let path = format!("/portfolios/{}/loans/{}/preview", portfolio, asset);
        let body = serde_json::to_value(request)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
        self.client
            .send(Method::POST, &path, None, Some(&body))
            .await
    }

    /// Get the active loan in one asset
    #[instrument(skip(self))]
    pub async fn loan(&self, portfolio: &str, asset: &str) -> RestResult<PortfolioLoan> {
        let path = format!("/portfolios/{}/loans/{}", portfolio, asset);
        self.client.send(Method::GET, &path, None, None).await
    }

    /// How much of an asset the portfolio could currently borrow
    #[instrument(skip(self))]
    pub async fn loan_availability(
        &self,
        portfolio: &str,
        asset: &str,
    ) -> RestResult<LoanAvailability> {
        let path = format!("/portfolios/{}/loans/{}/availability", portfolio, asset);
        self.client.send(Method::GET, &path, None, None).await
    }

    /// List all active loans for a portfolio
    #[instrument(skip(self))]
    pub async fn active_loans(&self, portfolio: &str) -> RestResult<Vec<PortfolioLoan>> {
        let path = format!("/portfolios/{}/loans", portfolio);
        self.client.send(Method::GET, &path, None, None).await
    }

    // ========================================================================
    // Position limits
    // ========================================================================

    /// Portfolio-wide open-position limit
    #[instrument(skip(self))]
    pub async fn total_position_limit(&self, portfolio: &str) -> RestResult<TotalOpenPositionLimit> {
        let path = format!("/portfolios/{}/position-limits", portfolio);
        self.client.send(Method::GET, &path, None, None).await
    }

    /// Open-position limits for every instrument
    #[instrument(skip(self))]
    pub async fn position_limits(&self, portfolio: &str) -> RestResult<Vec<OpenPositionLimit>> {
        let path = format!("/portfolios/{}/position-limits/positions", portfolio);
        self.client.send(Method::GET, &path, None, None).await
    }

    /// Open-position limit for one instrument
    #[instrument(skip(self))]
    pub async fn position_limit(
        &self,
        portfolio: &str,
        instrument: &str,
    ) -> RestResult<OpenPositionLimit> {
        let path = format!(
            "/portfolios/{}/position-limits/positions/{}",
            portfolio, instrument
        );
        self.client.send(Method::GET, &path, None, None).await
    }

    fn fills_query(filter: &ListFillsFilter) -> QueryParams {
        QueryParams::new()
            .paginated(filter.pagination.as_ref())
            .push("order_id", filter.order_id.as_deref())
            .push("client_order_id", filter.client_order_id.as_deref())
            .push("ref_datetime", filter.ref_datetime.as_deref())
            .push("time_from", filter.time_from.as_deref())
    }
}

/// Body for `PATCH /portfolios/{portfolio}`
///
/// Only the fields set here reach the wire; the rest of the portfolio
/// configuration is untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchPortfolioRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_margin_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_collateral_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_offsets_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_launch_trading_enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_body_only_carries_set_fields() {
        let patch = PatchPortfolioRequest {
            auto_margin_enabled: Some(true),
            ..Default::default()
        };
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({"auto_margin_enabled": true}));
    }

    #[test]
    fn test_loan_update_body() {
        let request = LoanUpdateRequest {
            action: "ACQUIRE".to_string(),
            amount: rust_decimal_macros::dec!(1000),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["action"], "ACQUIRE");
        assert_eq!(body["amount"], "1000");
    }
}
