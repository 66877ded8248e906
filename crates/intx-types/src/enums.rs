//! Closed enums for the string constants used by the INTX API
//!
//! Unrecognized wire values are rejected at deserialization time rather
//! than carried through as raw strings.

use serde::{Deserialize, Serialize};

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl OrderSide {
    /// Returns the side as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }

    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

/// Order types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Limit order - executes at the specified price or better
    Limit,
    /// Market order - executes immediately at the best available price
    Market,
    /// Stop order - becomes a market order once the stop price trades
    Stop,
    /// Stop-limit order - becomes a limit order once the stop price trades
    StopLimit,
    /// Time-weighted average price algo order
    Twap,
}

impl OrderType {
    /// Returns the order type as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limit => "LIMIT",
            Self::Market => "MARKET",
            Self::Stop => "STOP",
            Self::StopLimit => "STOP_LIMIT",
            Self::Twap => "TWAP",
        }
    }
}

/// Time in force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
    /// Good till cancelled
    Gtc,
    /// Good till time (requires an expiry)
    Gtt,
    /// Immediate or cancel
    Ioc,
    /// Fill or kill
    Fok,
}

impl TimeInForce {
    /// Returns the time in force as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gtc => "GTC",
            Self::Gtt => "GTT",
            Self::Ioc => "IOC",
            Self::Fok => "FOK",
        }
    }
}

/// Tradable product categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentType {
    /// Spot pair
    Spot,
    /// Perpetual future
    PerpetualFuture,
    /// Index product
    Index,
}

impl InstrumentType {
    /// Returns the instrument type as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spot => "SPOT",
            Self::PerpetualFuture => "PERPETUAL_FUTURE",
            Self::Index => "INDEX",
        }
    }
}

/// Order event types reported on order state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    New,
    Pending,
    Filled,
    Canceled,
    Replaced,
    PendingCancel,
    Rejected,
    PendingNew,
    PendingReplace,
    StopTriggered,
    Expired,
}

/// Transfer direction/kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferType {
    Deposit,
    Withdraw,
    /// Transfer between two portfolios of the same account
    Internal,
    /// Transfer into or out of a multi-signature vault
    Sweep,
}

impl TransferType {
    /// Returns the transfer type as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "DEPOSIT",
            Self::Withdraw => "WITHDRAW",
            Self::Internal => "INTERNAL",
            Self::Sweep => "SWEEP",
        }
    }
}

/// Transfer processing state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferStatus {
    New,
    Started,
    Processed,
    Failed,
}

impl TransferStatus {
    /// Returns the status as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Started => "STARTED",
            Self::Processed => "PROCESSED",
            Self::Failed => "FAILED",
        }
    }

    /// Returns true once the transfer has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Processed | Self::Failed)
    }
}

/// Candle granularity for index and instrument aggregations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    #[serde(rename = "ONE_MINUTE")]
    OneMinute,
    #[serde(rename = "FIVE_MINUTE")]
    FiveMinute,
    #[serde(rename = "FIFTEEN_MINUTE")]
    FifteenMinute,
    #[serde(rename = "THIRTY_MINUTE")]
    ThirtyMinute,
    #[serde(rename = "ONE_HOUR")]
    OneHour,
    #[serde(rename = "TWO_HOUR")]
    TwoHour,
    #[serde(rename = "SIX_HOUR")]
    SixHour,
    #[serde(rename = "ONE_DAY")]
    OneDay,
}

impl Granularity {
    /// Returns the granularity as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMinute => "ONE_MINUTE",
            Self::FiveMinute => "FIVE_MINUTE",
            Self::FifteenMinute => "FIFTEEN_MINUTE",
            Self::ThirtyMinute => "THIRTY_MINUTE",
            Self::OneHour => "ONE_HOUR",
            Self::TwoHour => "TWO_HOUR",
            Self::SixHour => "SIX_HOUR",
            Self::OneDay => "ONE_DAY",
        }
    }

    /// Candle width in seconds
    pub fn seconds(&self) -> u64 {
        match self {
            Self::OneMinute => 60,
            Self::FiveMinute => 300,
            Self::FifteenMinute => 900,
            Self::ThirtyMinute => 1800,
            Self::OneHour => 3600,
            Self::TwoHour => 7200,
            Self::SixHour => 21600,
            Self::OneDay => 86400,
        }
    }
}

/// Statistics window for the rankings endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankingPeriod {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "7D")]
    SevenDay,
    #[serde(rename = "30D")]
    ThirtyDay,
}

impl RankingPeriod {
    /// Returns the period as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::SevenDay => "7D",
            Self::ThirtyDay => "30D",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderType::StopLimit).unwrap(),
            r#""STOP_LIMIT""#
        );
        assert_eq!(
            serde_json::to_string(&InstrumentType::PerpetualFuture).unwrap(),
            r#""PERPETUAL_FUTURE""#
        );
        assert_eq!(
            serde_json::to_string(&RankingPeriod::SevenDay).unwrap(),
            r#""7D""#
        );
    }

    #[test]
    fn test_unknown_value_rejected() {
        let result: Result<OrderSide, _> = serde_json::from_str(r#""HOLD""#);
        assert!(result.is_err());

        let result: Result<TransferStatus, _> = serde_json::from_str(r#""MAYBE""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(OrderSide::Buy.opposite(), OrderSide::Sell);
        assert_eq!(OrderSide::Sell.opposite(), OrderSide::Buy);
    }

    #[test]
    fn test_as_str_matches_serde() {
        for tif in [
            TimeInForce::Gtc,
            TimeInForce::Gtt,
            TimeInForce::Ioc,
            TimeInForce::Fok,
        ] {
            let json = serde_json::to_string(&tif).unwrap();
            assert_eq!(json, format!("\"{}\"", tif.as_str()));
        }
    }

    #[test]
    fn test_granularity_seconds() {
        assert_eq!(Granularity::OneMinute.seconds(), 60);
        assert_eq!(Granularity::OneDay.seconds(), 86400);
    }
}
