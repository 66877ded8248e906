//! Transfer endpoints
//!
//! Withdrawals accept a caller-supplied `nonce` as an idempotency token;
//! submitting the same nonce twice cannot double-spend, which is why the
//! client leaves retry decisions to the caller.

use crate::client::RestClient;
use crate::error::{RestError, RestResult};
use crate::query::QueryParams;
use intx_types::{
    Counterparty, CounterpartyValidation, CryptoAddress, Paginated, PaginationParams, Transfer,
    TransferStatus, TransferType, Withdrawal,
};
use reqwest::Method;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

/// Deposits, withdrawals, and counterparty transfers
pub struct TransfersService<'a> {
    client: &'a RestClient,
}

/// Filters for `GET /transfers`
#[derive(Debug, Clone, Default)]
pub struct ListTransfersFilter {
    /// Comma-separated portfolio identifiers
    pub portfolios: Option<String>,
    pub time_from: Option<String>,
    pub time_to: Option<String>,
    pub status: Option<TransferStatus>,
    pub transfer_type: Option<TransferType>,
    pub pagination: Option<PaginationParams>,
}

/// Body for `POST /transfers/withdraw`
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawToCryptoAddressRequest {
    pub portfolio: String,
    pub asset: String,
    pub amount: Decimal,
    pub address: String,
    pub network_arn_id: String,
    /// Caller-supplied idempotency token
    pub nonce: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_network_fee_to_total: Option<bool>,
}

/// Body for `POST /transfers/address`
#[derive(Debug, Clone, Serialize)]
pub struct CreateCryptoAddressRequest {
    pub portfolio: String,
    pub asset: String,
    pub network_arn_id: String,
}

/// Body for `POST /transfers/withdraw/counterparty`
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawToCounterpartyRequest {
    pub portfolio: String,
    pub counterparty_id: String,
    pub asset: String,
    pub amount: Decimal,
    /// Caller-supplied idempotency token
    pub nonce: u64,
}

impl<'a> TransfersService<'a> {
    pub(crate) fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// List transfers matching the filter, one page per call
    #[instrument(skip(self, filter))]
    pub async fn list(&self, filter: &ListTransfersFilter) -> RestResult<Paginated<Transfer>> {
        let query = QueryParams::new()
            .paginated(filter.pagination.as_ref())
            .push("portfolios", filter.portfolios.as_deref())
            .push("time_from", filter.time_from.as_deref())
            .push("time_to", filter.time_to.as_deref())
            .push("status", filter.status.map(|s| s.as_str()))
            .push("type", filter.transfer_type.map(|t| t.as_str()))
            .build();
        self.client
            .send(Method::GET, "/transfers", query.as_deref(), None)
            .await
    }

    /// Get one transfer by uuid
    #[instrument(skip(self))]
    pub async fn get(&self, transfer_uuid: &str) -> RestResult<Transfer> {
        let path = format!("/transfers/{}", transfer_uuid);
        self.client.send(Method::GET, &path, None, None).await
    }

    /// Withdraw to an external crypto address
    #[instrument(skip(self, request), fields(asset = %request.asset))]
    pub async fn withdraw_to_crypto_address(
        &self,
        request: &WithdrawToCryptoAddressRequest,
    ) -> RestResult<Withdrawal> {
        let body = serde_json::to_value(request)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
        self.client
            .send(Method::POST, "/transfers/withdraw", None, Some(&body))
            .await
    }

    /// Generate a deposit address for a portfolio/asset/network triple
    #[instrument(skip(self, request), fields(asset = %request.asset))]
    pub async fn create_crypto_address(
        &self,
        request: &CreateCryptoAddressRequest,
    ) -> RestResult<CryptoAddress> {
        let body = serde_json::to_value(request)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
        self.client
            .send(Method::POST, "/transfers/address", None, Some(&body))
            .await
    }

    /// Create a counterparty id for fee-free transfers to this portfolio
    #[instrument(skip(self))]
    pub async fn create_counterparty_id(&self, portfolio: &str) -> RestResult<Counterparty> {
        let body = serde_json::json!({ "portfolio": portfolio });
        self.client
            .send(
                Method::POST,
                "/transfers/create-counterparty-id",
                None,
                Some(&body),
            )
            .await
    }

    /// Check whether a counterparty id exists
    #[instrument(skip(self))]
    pub async fn validate_counterparty_id(
        &self,
        counterparty_id: &str,
    ) -> RestResult<CounterpartyValidation> {
        let body = serde_json::json!({ "counterparty_id": counterparty_id });
        self.client
            .send(
                Method::POST,
                "/transfers/validate-counterparty-id",
                None,
                Some(&body),
            )
            .await
    }

    /// Withdraw directly to another INTX user by counterparty id
    #[instrument(skip(self, request), fields(asset = %request.asset))]
    pub async fn withdraw_to_counterparty_id(
        &self,
        request: &WithdrawToCounterpartyRequest,
    ) -> RestResult<Withdrawal> {
        let body = serde_json::to_value(request)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
        self.client
            .send(
                Method::POST,
                "/transfers/withdraw/counterparty",
                None,
                Some(&body),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_withdrawal_body_carries_nonce() {
        let request = WithdrawToCryptoAddressRequest {
            portfolio: "1wp37qsc-1-0".to_string(),
            asset: "USDC".to_string(),
            amount: dec!(250),
            address: "0xabc".to_string(),
            network_arn_id: "networks/ethereum-mainnet/assets/0".to_string(),
            nonce: 1700000000,
            add_network_fee_to_total: None,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["nonce"], 1700000000u64);
        assert_eq!(body["amount"], "250");
        assert!(body.get("add_network_fee_to_total").is_none());
    }
}
