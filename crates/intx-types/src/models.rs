//! Response models for the INTX REST API
//!
//! Each endpoint is an independent leaf type; there is no inheritance
//! hierarchy hiding here. Decimal quantities arrive as JSON strings and
//! deserialize into [`Decimal`]; timestamps arrive as RFC 3339 strings
//! and deserialize into [`DateTime<Utc>`]. Fields the API only sometimes
//! sends are `Option` with `#[serde(default)]` so a missing key never
//! fails the whole response.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Portfolios
// ============================================================================

/// An account-like container holding balances, positions, and margin
/// settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub portfolio_id: String,
    pub portfolio_uuid: String,
    pub name: String,
    pub user_uuid: String,
    pub maker_fee_rate: Decimal,
    pub taker_fee_rate: Decimal,
    pub trading_lock: bool,
    pub withdrawal_lock: bool,
    pub borrow_disabled: bool,
    pub is_lsp: bool,
    pub is_default: bool,
    pub cross_collateral_enabled: bool,
    pub auto_margin_enabled: bool,
    pub pre_launch_trading_enabled: bool,
    pub position_offsets_enabled: bool,
    #[serde(default)]
    pub margin_call_enabled: bool,
    #[serde(default)]
    pub close_only: bool,
    #[serde(default)]
    pub forced_liquidation: bool,
    #[serde(default)]
    pub disable_overdraft_protection: bool,
}

/// Aggregated margin and equity figures for a portfolio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    #[serde(default)]
    pub collateral: Option<Decimal>,
    #[serde(default)]
    pub unrealized_pnl: Option<Decimal>,
    #[serde(default)]
    pub unrealized_pnl_percent: Option<Decimal>,
    #[serde(default)]
    pub position_notional: Option<Decimal>,
    #[serde(default)]
    pub open_position_notional: Option<Decimal>,
    #[serde(default)]
    pub pending_fees: Option<Decimal>,
    #[serde(default)]
    pub borrow: Option<Decimal>,
    #[serde(default)]
    pub accrued_interest: Option<Decimal>,
    #[serde(default)]
    pub rolling_debt: Option<Decimal>,
    #[serde(default)]
    pub balance: Option<Decimal>,
    #[serde(default)]
    pub buying_power: Option<Decimal>,
    #[serde(default)]
    pub portfolio_current_margin: Option<Decimal>,
    #[serde(default)]
    pub portfolio_initial_margin: Option<Decimal>,
    #[serde(default)]
    pub portfolio_maintenance_margin: Option<Decimal>,
    #[serde(default)]
    pub in_liquidation: Option<bool>,
    #[serde(default)]
    pub loan_collateral_requirement: Option<Decimal>,
    #[serde(default)]
    pub margin_override: Option<Decimal>,
    #[serde(default)]
    pub lock_up_initial_margin: Option<Decimal>,
}

/// Portfolio summary plus its balances and positions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioDetail {
    pub summary: PortfolioSummary,
    #[serde(default)]
    pub balances: Vec<AssetBalance>,
    #[serde(default)]
    pub positions: Vec<PortfolioPosition>,
}

/// Balance of one asset inside a portfolio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetBalance {
    pub asset_id: String,
    pub asset_name: String,
    pub asset_uuid: String,
    pub quantity: Decimal,
    pub hold: Decimal,
    #[serde(default)]
    pub hold_available_for_collateral: Option<Decimal>,
    #[serde(default)]
    pub transfer_hold: Option<Decimal>,
    #[serde(default)]
    pub collateral_value: Option<Decimal>,
    #[serde(default)]
    pub max_withdraw_amount: Option<Decimal>,
    #[serde(default)]
    pub loan: Option<Decimal>,
    #[serde(default)]
    pub loan_collateral_requirement: Option<Decimal>,
    #[serde(default)]
    pub pledged_collateral_quantity: Option<Decimal>,
}

/// Open position in one instrument
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioPosition {
    pub id: String,
    pub symbol: String,
    pub instrument_id: String,
    pub instrument_uuid: String,
    pub vwap: Decimal,
    pub net_size: Decimal,
    pub buy_order_size: Decimal,
    pub sell_order_size: Decimal,
    pub im_contribution: Decimal,
    #[serde(default)]
    pub unrealized_pnl: Option<Decimal>,
    #[serde(default)]
    pub mark_price: Option<Decimal>,
    #[serde(default)]
    pub entry_vwap: Option<Decimal>,
}

/// Maker/taker fee rates applied to a portfolio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioFeeRate {
    pub portfolio_id: String,
    #[serde(default)]
    pub fee_tier_id: Option<String>,
    pub maker_fee_rate: Decimal,
    pub taker_fee_rate: Decimal,
    #[serde(default)]
    pub is_vip_tier: Option<bool>,
    #[serde(default)]
    pub is_override: Option<bool>,
    #[serde(default)]
    pub trailing_30day_volume: Option<Decimal>,
    #[serde(default)]
    pub trailing_24hr_usdc_balance: Option<Decimal>,
}

/// An executed trade event against an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fill {
    pub portfolio_id: String,
    pub portfolio_uuid: String,
    pub portfolio_name: String,
    pub fill_id: String,
    pub exec_id: String,
    pub order_id: String,
    pub instrument_id: String,
    pub instrument_uuid: String,
    pub symbol: String,
    pub match_id: String,
    pub fill_price: Decimal,
    pub fill_qty: Decimal,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_order_id: Option<String>,
    pub order_qty: Decimal,
    #[serde(default)]
    pub limit_price: Option<Decimal>,
    pub total_filled: Decimal,
    #[serde(default)]
    pub filled_vwap: Option<Decimal>,
    #[serde(default)]
    pub expire_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stop_price: Option<Decimal>,
    pub side: crate::enums::OrderSide,
    #[serde(default)]
    pub tif: Option<crate::enums::TimeInForce>,
    #[serde(default)]
    pub stp_mode: Option<String>,
    #[serde(default)]
    pub flags: Option<String>,
    pub fee: Decimal,
    pub fee_asset: String,
    pub order_status: String,
    pub event_time: DateTime<Utc>,
    #[serde(default)]
    pub source: Option<String>,
}

/// Result of a funds or position transfer between portfolios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferResult {
    pub success: bool,
}

/// Result of setting or clearing a portfolio margin override
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginOverrideResult {
    pub portfolio_id: String,
    pub margin_override: Decimal,
}

/// Maximum transferable amount for a portfolio/asset pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundTransferLimit {
    pub max_portfolio_transfer_amount: Decimal,
}

// ============================================================================
// Loans
// ============================================================================

/// Loan state for one asset after an acquire/repay operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetLoan {
    pub portfolio_id: String,
    pub asset_id: String,
    pub asset_name: String,
    pub amount: Decimal,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub loan_status: Option<String>,
}

/// Active loan held by a portfolio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioLoan {
    pub portfolio_id: String,
    pub asset_id: String,
    pub asset_name: String,
    pub loan_amount: Decimal,
    #[serde(default)]
    pub accrued_interest: Option<Decimal>,
    #[serde(default)]
    pub loan_interest_rate: Option<Decimal>,
    #[serde(default)]
    pub max_loan_amount: Option<Decimal>,
}

/// How much of an asset a portfolio could currently borrow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanAvailability {
    pub asset_id: String,
    pub asset_name: String,
    pub available_to_borrow: Decimal,
    #[serde(default)]
    pub loan_interest_rate: Option<Decimal>,
}

/// Projected portfolio state if a loan update were applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanPreview {
    #[serde(default)]
    pub current_loan_amount: Option<Decimal>,
    #[serde(default)]
    pub projected_loan_amount: Option<Decimal>,
    #[serde(default)]
    pub current_loan_collateral_requirement: Option<Decimal>,
    #[serde(default)]
    pub projected_loan_collateral_requirement: Option<Decimal>,
    #[serde(default)]
    pub current_portfolio_initial_margin: Option<Decimal>,
    #[serde(default)]
    pub projected_portfolio_initial_margin: Option<Decimal>,
}

// ============================================================================
// Position limits
// ============================================================================

/// Open-position limit for one instrument within a portfolio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenPositionLimit {
    pub instrument_id: String,
    pub instrument_uuid: String,
    pub symbol: String,
    pub long_limit: Decimal,
    pub short_limit: Decimal,
    #[serde(default)]
    pub long_exposure: Option<Decimal>,
    #[serde(default)]
    pub short_exposure: Option<Decimal>,
}

/// Portfolio-wide open-position limit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalOpenPositionLimit {
    pub portfolio_id: String,
    pub total_limit: Decimal,
    #[serde(default)]
    pub total_exposure: Option<Decimal>,
}

/// Offsetting position pair recognized for margin relief
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionOffset {
    pub id: String,
    #[serde(default)]
    pub symbols: Vec<String>,
    #[serde(default)]
    pub offset_ratio: Option<Decimal>,
}

// ============================================================================
// Orders
// ============================================================================

/// A resting or historical order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    #[serde(default)]
    pub client_order_id: Option<String>,
    pub side: crate::enums::OrderSide,
    pub instrument_id: String,
    pub instrument_uuid: String,
    pub symbol: String,
    pub portfolio_id: String,
    pub portfolio_uuid: String,
    #[serde(rename = "type")]
    pub order_type: crate::enums::OrderType,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub stop_price: Option<Decimal>,
    #[serde(default)]
    pub stop_limit_price: Option<Decimal>,
    pub size: Decimal,
    #[serde(default)]
    pub tif: Option<crate::enums::TimeInForce>,
    #[serde(default)]
    pub expire_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stp_mode: Option<String>,
    pub event_type: crate::enums::EventType,
    #[serde(default)]
    pub event_time: Option<DateTime<Utc>>,
    pub order_status: String,
    pub leaves_qty: Decimal,
    pub exec_qty: Decimal,
    #[serde(default)]
    pub avg_price: Option<Decimal>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub fee: Option<Decimal>,
    #[serde(default)]
    pub post_only: Option<bool>,
    #[serde(default)]
    pub close_only: Option<bool>,
    #[serde(default)]
    pub algo_strategy: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

// ============================================================================
// Instruments & market data
// ============================================================================

/// A tradable product (spot pair or perpetual future)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    pub instrument_id: String,
    pub instrument_uuid: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub instrument_type: crate::enums::InstrumentType,
    pub base_asset_id: String,
    pub base_asset_uuid: String,
    pub base_asset_name: String,
    pub quote_asset_id: String,
    pub quote_asset_uuid: String,
    pub quote_asset_name: String,
    pub base_increment: Decimal,
    pub quote_increment: Decimal,
    #[serde(default)]
    pub price_band_percent: Option<Decimal>,
    #[serde(default)]
    pub market_order_percent: Option<Decimal>,
    pub qty_24hr: Decimal,
    pub notional_24hr: Decimal,
    #[serde(default)]
    pub avg_daily_qty: Option<Decimal>,
    #[serde(default)]
    pub avg_daily_notional: Option<Decimal>,
    #[serde(default)]
    pub previous_day_qty: Option<Decimal>,
    #[serde(default)]
    pub open_interest: Option<Decimal>,
    #[serde(default)]
    pub position_limit_qty: Option<Decimal>,
    #[serde(default)]
    pub position_limit_adq_pct: Option<Decimal>,
    #[serde(default)]
    pub replacement_cost: Option<Decimal>,
    #[serde(default)]
    pub base_imf: Option<Decimal>,
    #[serde(default)]
    pub min_notional_value: Option<Decimal>,
    #[serde(default)]
    pub funding_interval: Option<String>,
    pub trading_state: String,
    #[serde(default)]
    pub quote: Option<Quote>,
    #[serde(default)]
    pub mode: Option<String>,
}

/// Best bid/ask snapshot for an instrument
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub best_bid_price: Option<Decimal>,
    #[serde(default)]
    pub best_bid_size: Option<Decimal>,
    #[serde(default)]
    pub best_ask_price: Option<Decimal>,
    #[serde(default)]
    pub best_ask_size: Option<Decimal>,
    #[serde(default)]
    pub trade_price: Option<Decimal>,
    #[serde(default)]
    pub trade_qty: Option<Decimal>,
    #[serde(default)]
    pub index_price: Option<Decimal>,
    #[serde(default)]
    pub mark_price: Option<Decimal>,
    #[serde(default)]
    pub settlement_price: Option<Decimal>,
    #[serde(default)]
    pub limit_up: Option<Decimal>,
    #[serde(default)]
    pub limit_down: Option<Decimal>,
    #[serde(default)]
    pub predicted_funding: Option<Decimal>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// One OHLCV candle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aggregation {
    pub start: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

/// Historical funding rate entry for a perpetual
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingRate {
    pub instrument_id: String,
    pub funding_rate: Decimal,
    #[serde(default)]
    pub mark_price: Option<Decimal>,
    pub event_time: DateTime<Utc>,
}

/// Daily traded volume across instruments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTradingVolume {
    pub instrument_id: String,
    pub qty: Decimal,
    pub notional: Decimal,
    pub date: String,
}

// ============================================================================
// Assets
// ============================================================================

/// An asset supported for collateral, loans, or transfers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub asset_id: String,
    pub asset_uuid: String,
    pub asset_name: String,
    pub status: String,
    pub collateral_weight: Decimal,
    pub supported_networks_enabled: bool,
    pub min_borrow_qty: Decimal,
    pub max_borrow_qty: Decimal,
    pub loan_collateral_requirement_multiplier: Decimal,
    pub ecosystem_collateral_limit_breached: bool,
    pub loan_initial_margin: Decimal,
    pub max_loan_leverage: Decimal,
}

/// A network an asset can be deposited or withdrawn on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportedNetwork {
    pub asset_id: String,
    pub asset_uuid: String,
    pub asset_name: String,
    pub network_arn_id: String,
    pub min_withdrawal_amt: Decimal,
    pub max_withdrawal_amt: Decimal,
    pub network_confirms: u32,
    pub processing_time: String,
    pub is_default: bool,
    pub network_name: String,
    pub display_name: String,
}

// ============================================================================
// Address book
// ============================================================================

/// A saved withdrawal destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressBookEntry {
    pub recipient_type: String,
    pub recipient_id: String,
    pub label: String,
    pub status: String,
    pub asset: String,
    pub network_arn_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub nick_name: Option<String>,
}

// ============================================================================
// Fee rates
// ============================================================================

/// One volume-based fee tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeTier {
    pub fee_tier_id: String,
    pub fee_tier_name: String,
    pub maker_fee_rate: Decimal,
    pub taker_fee_rate: Decimal,
    #[serde(default)]
    pub min_balance: Option<Decimal>,
    #[serde(default)]
    pub min_volume: Option<Decimal>,
    #[serde(default)]
    pub require_balance_and_volume: Option<bool>,
}

// ============================================================================
// Transfers
// ============================================================================

/// A deposit, withdrawal, or internal transfer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transfer {
    pub transfer_uuid: String,
    #[serde(rename = "type")]
    pub transfer_type: crate::enums::TransferType,
    pub amount: Decimal,
    pub asset: String,
    pub status: crate::enums::TransferStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub from_portfolio: Option<String>,
    #[serde(default)]
    pub to_portfolio: Option<String>,
    #[serde(default)]
    pub from_address: Option<String>,
    #[serde(default)]
    pub to_address: Option<String>,
    #[serde(default)]
    pub from_cb_account: Option<String>,
    #[serde(default)]
    pub to_cb_account: Option<String>,
    #[serde(default)]
    pub from_counterparty_id: Option<String>,
    #[serde(default)]
    pub to_counterparty_id: Option<String>,
    #[serde(default)]
    pub instrument_id: Option<String>,
    #[serde(default)]
    pub network_name: Option<String>,
    #[serde(default)]
    pub position_id: Option<String>,
}

/// Acknowledgement of a submitted withdrawal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Withdrawal {
    pub idem: String,
}

/// A freshly generated deposit address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CryptoAddress {
    pub address: String,
    #[serde(default)]
    pub network_arn_id: Option<String>,
    #[serde(default)]
    pub destination_tag: Option<String>,
}

/// A counterparty identifier for fee-free transfers between INTX users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counterparty {
    pub counterparty_id: String,
    #[serde(default)]
    pub portfolio_uuid: Option<String>,
}

/// Result of validating a counterparty identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterpartyValidation {
    pub counterparty_id: String,
    pub valid: bool,
}

// ============================================================================
// Index
// ============================================================================

/// Weight of one constituent asset inside an index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConstituent {
    pub asset_id: String,
    pub asset_name: String,
    pub weight: Decimal,
    #[serde(default)]
    pub price: Option<Decimal>,
}

/// Composition of an index at one point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexComposition {
    pub index_id: String,
    pub index_name: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub constituents: Vec<IndexConstituent>,
}

/// Current price of an index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexPrice {
    pub index_id: String,
    pub index_name: String,
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Rankings
// ============================================================================

/// One ranking figure (volume and rank within the venue)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingStatistic {
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub volume: Option<Decimal>,
    #[serde(default)]
    pub percentage_of_total: Option<Decimal>,
}

/// Maker/taker/total ranking breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingStatistics {
    pub maker: RankingStatistic,
    pub taker: RankingStatistic,
    pub total: RankingStatistic,
}

/// Your trading rankings for a statistics window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rankings {
    pub last_updated: DateTime<Utc>,
    pub statistics: RankingStatistics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_portfolio_defaults_optional_flags() {
        // margin_call_enabled and friends are sometimes omitted by the API
        let json = r#"{
            "portfolio_id": "1wp37qsc-1-0",
            "portfolio_uuid": "018c52a7-0000-0000-0000-000000000000",
            "name": "main",
            "user_uuid": "018c52a7-ffff-ffff-ffff-ffffffffffff",
            "maker_fee_rate": "-0.00008",
            "taker_fee_rate": "0.00018",
            "trading_lock": false,
            "withdrawal_lock": false,
            "borrow_disabled": false,
            "is_lsp": false,
            "is_default": true,
            "cross_collateral_enabled": true,
            "auto_margin_enabled": false,
            "pre_launch_trading_enabled": false,
            "position_offsets_enabled": false
        }"#;
        let portfolio: Portfolio = serde_json::from_str(json).unwrap();
        assert_eq!(portfolio.maker_fee_rate, dec!(-0.00008));
        assert!(!portfolio.margin_call_enabled);
        assert!(!portfolio.close_only);
    }

    #[test]
    fn test_order_type_field_rename() {
        let json = r#"{
            "order_id": "2v3xn8q5-1-1",
            "side": "BUY",
            "instrument_id": "114jqr89-0-0",
            "instrument_uuid": "b3469e0b-0000-0000-0000-000000000000",
            "symbol": "BTC-PERP",
            "portfolio_id": "1wp37qsc-1-0",
            "portfolio_uuid": "018c52a7-0000-0000-0000-000000000000",
            "type": "STOP_LIMIT",
            "price": "63100.5",
            "size": "0.25",
            "tif": "GTC",
            "event_type": "NEW",
            "order_status": "WORKING",
            "leaves_qty": "0.25",
            "exec_qty": "0"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_type, crate::enums::OrderType::StopLimit);
        assert_eq!(order.size, dec!(0.25));
        assert_eq!(order.event_type, crate::enums::EventType::New);
    }

    #[test]
    fn test_transfer_enum_fields() {
        let json = r#"{
            "transfer_uuid": "0192a7bc-0000-0000-0000-000000000000",
            "type": "WITHDRAW",
            "amount": "150.5",
            "asset": "USDC",
            "status": "PROCESSED",
            "created_at": "2025-02-01T10:00:00Z",
            "updated_at": "2025-02-01T10:05:00Z",
            "from_portfolio": "1wp37qsc-1-0"
        }"#;
        let transfer: Transfer = serde_json::from_str(json).unwrap();
        assert_eq!(transfer.transfer_type, crate::enums::TransferType::Withdraw);
        assert!(transfer.status.is_terminal());
        assert!(transfer.to_address.is_none());
        // Timestamps parse into chrono, not raw strings
        assert_eq!(
            transfer.created_at,
            "2025-02-01T10:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
        assert_eq!(transfer.updated_at - transfer.created_at, chrono::Duration::minutes(5));
    }

    #[test]
    fn test_decimal_strings_round_trip() {
        let candle = Aggregation {
            start: "2025-01-01T00:00:00Z".parse().unwrap(),
            open: dec!(42000.1),
            high: dec!(42100),
            low: dec!(41900.55),
            close: dec!(42050),
            volume: dec!(12.345678),
        };
        let json = serde_json::to_string(&candle).unwrap();
        assert!(json.contains(r#""open":"42000.1""#));
        let back: Aggregation = serde_json::from_str(&json).unwrap();
        assert_eq!(back.low, candle.low);
    }
}
