//! Order entry and management endpoints
//!
//! Order creation accepts a caller-assigned `client_order_id` as an
//! idempotency token; the client itself never retries a mutation.

use crate::client::RestClient;
use crate::error::{RestError, RestResult};
use crate::query::QueryParams;
use intx_types::{
    EventType, InstrumentType, Order, OrderSide, OrderType, Paginated, PaginationParams,
    TimeInForce,
};
use reqwest::Method;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

/// Order entry and management
pub struct OrdersService<'a> {
    client: &'a RestClient,
}

/// Body for `POST /orders`
///
/// Optional fields are omitted from the wire entirely when `None`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
    pub portfolio: String,
    pub instrument: String,
    pub side: OrderSide,
    pub size: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_limit_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tif: Option<TimeInForce>,
    /// Expiry for GTT orders (RFC 3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stp_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algo_strategy: Option<String>,
}

impl CreateOrderRequest {
    /// A limit order with the required fields; optionals default to absent
    pub fn limit(
        portfolio: impl Into<String>,
        instrument: impl Into<String>,
        side: OrderSide,
        size: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            portfolio: portfolio.into(),
            instrument: instrument.into(),
            side,
            size,
            client_order_id: None,
            order_type: Some(OrderType::Limit),
            price: Some(price),
            stop_price: None,
            stop_limit_price: None,
            tif: None,
            expire_time: None,
            stp_mode: None,
            post_only: None,
            close_only: None,
            algo_strategy: None,
        }
    }
}

/// Body for `PUT /orders/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct ModifyOrderRequest {
    pub portfolio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
}

/// Filters for `DELETE /orders` (cancel in bulk)
#[derive(Debug, Clone)]
pub struct CancelOrdersFilter {
    pub portfolio: String,
    pub instrument: Option<String>,
    pub side: Option<OrderSide>,
    pub instrument_type: Option<InstrumentType>,
}

impl CancelOrdersFilter {
    /// Cancel everything in a portfolio
    pub fn all(portfolio: impl Into<String>) -> Self {
        Self {
            portfolio: portfolio.into(),
            instrument: None,
            side: None,
            instrument_type: None,
        }
    }
}

/// Filters for `GET /orders`
#[derive(Debug, Clone, Default)]
pub struct ListOpenOrdersFilter {
    pub portfolio: Option<String>,
    pub instrument: Option<String>,
    pub instrument_type: Option<InstrumentType>,
    pub client_order_id: Option<String>,
    pub event_type: Option<EventType>,
    pub order_type: Option<OrderType>,
    pub side: Option<OrderSide>,
    pub ref_datetime: Option<String>,
    pub pagination: Option<PaginationParams>,
}

impl<'a> OrdersService<'a> {
    pub(crate) fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Create a new order
    #[instrument(skip(self, request), fields(instrument = %request.instrument))]
    pub async fn create(&self, request: &CreateOrderRequest) -> RestResult<Order> {
        let body = serde_json::to_value(request)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
        self.client
            .send(Method::POST, "/orders", None, Some(&body))
            .await
    }

    /// Cancel one order
    #[instrument(skip(self))]
    pub async fn cancel(&self, order_id: &str, portfolio: &str) -> RestResult<Order> {
        let path = format!("/orders/{}", order_id);
        let query = QueryParams::new().push("portfolio", Some(portfolio)).build();
        self.client
            .send(Method::DELETE, &path, query.as_deref(), None)
            .await
    }

    /// Cancel orders in bulk, returning the canceled orders
    #[instrument(skip(self, filter), fields(portfolio = %filter.portfolio))]
    pub async fn cancel_all(&self, filter: &CancelOrdersFilter) -> RestResult<Vec<Order>> {
        let query = QueryParams::new()
            .push("portfolio", Some(&filter.portfolio))
            .push("instrument", filter.instrument.as_deref())
            .push("side", filter.side.map(|s| s.as_str()))
            .push("instrument_type", filter.instrument_type.map(|t| t.as_str()))
            .build();
        self.client
            .send(Method::DELETE, "/orders", query.as_deref(), None)
            .await
    }

    /// Get details for one order
    #[instrument(skip(self))]
    pub async fn get(&self, order_id: &str, portfolio: &str) -> RestResult<Order> {
        let path = format!("/orders/{}", order_id);
        let query = QueryParams::new().push("portfolio", Some(portfolio)).build();
        self.client
            .send(Method::GET, &path, query.as_deref(), None)
            .await
    }

    /// List open orders matching the filter, one page per call
    #[instrument(skip(self, filter))]
    pub async fn list_open(&self, filter: &ListOpenOrdersFilter) -> RestResult<Paginated<Order>> {
        let query = QueryParams::new()
            .paginated(filter.pagination.as_ref())
            .push("portfolio", filter.portfolio.as_deref())
            .push("instrument", filter.instrument.as_deref())
            .push("instrument_type", filter.instrument_type.map(|t| t.as_str()))
            .push("client_order_id", filter.client_order_id.as_deref())
            .push(
                "event_type",
                filter
                    .event_type
                    .map(|e| serde_plain_name(&e))
                    .transpose()?,
            )
            .push("order_type", filter.order_type.map(|t| t.as_str()))
            .push("side", filter.side.map(|s| s.as_str()))
            .push("ref_datetime", filter.ref_datetime.as_deref())
            .build();
        self.client
            .send(Method::GET, "/orders", query.as_deref(), None)
            .await
    }

    /// Modify an open order
    #[instrument(skip(self, request))]
    pub async fn modify(&self, order_id: &str, request: &ModifyOrderRequest) -> RestResult<Order> {
        let path = format!("/orders/{}", order_id);
        let body = serde_json::to_value(request)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
        self.client
            .send(Method::PUT, &path, None, Some(&body))
            .await
    }
}

/// Render a serde-serializable enum as its bare wire string
fn serde_plain_name<T: Serialize>(value: &T) -> RestResult<String> {
    match serde_json::to_value(value).map_err(|e| RestError::InvalidParameter(e.to_string()))? {
        serde_json::Value::String(s) => Ok(s),
        other => Err(RestError::InvalidParameter(format!(
            "expected string-like enum, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_order_body_omits_absent_fields() {
        let request = CreateOrderRequest::limit(
            "1wp37qsc-1-0",
            "BTC-PERP",
            OrderSide::Buy,
            dec!(0.5),
            dec!(60000),
        );
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["side"], "BUY");
        assert_eq!(body["type"], "LIMIT");
        assert_eq!(body["size"], "0.5");
        assert_eq!(body["price"], "60000");
        // Absent optionals must not appear on the wire at all
        assert!(body.get("client_order_id").is_none());
        assert!(body.get("stop_price").is_none());
        assert!(body.get("tif").is_none());
    }

    #[test]
    fn test_event_type_renders_bare() {
        let name = serde_plain_name(&EventType::StopTriggered).unwrap();
        assert_eq!(name, "STOP_TRIGGERED");
    }
}
