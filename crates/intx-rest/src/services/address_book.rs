//! Address book endpoints

use crate::client::RestClient;
use crate::error::{RestError, RestResult};
use crate::query::QueryParams;
use intx_types::{AddressBookEntry, Paginated, PaginationParams};
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

/// Saved withdrawal destinations
pub struct AddressBookService<'a> {
    client: &'a RestClient,
}

/// Filters for listing address book entries
#[derive(Debug, Clone, Default)]
pub struct ListAddressBookFilter {
    /// Restrict to one asset
    pub asset: Option<String>,
    /// Substring match on label or address
    pub search: Option<String>,
    /// Comma-separated entry states (e.g. `"ACTIVE,PENDING"`)
    pub states: Option<String>,
    pub pagination: Option<PaginationParams>,
}

/// Body for registering a new withdrawal destination
#[derive(Debug, Clone, Serialize)]
pub struct CreateAddressBookEntryRequest {
    pub address: String,
    pub asset: String,
    pub network_arn_id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_tag: Option<String>,
}

impl<'a> AddressBookService<'a> {
    pub(crate) fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// List address book entries, one page per call
    #[instrument(skip(self, filter))]
    pub async fn list(
        &self,
        filter: &ListAddressBookFilter,
    ) -> RestResult<Paginated<AddressBookEntry>> {
        let query = Self::list_query(filter).build();
        self.client
            .send(Method::GET, "/address-book", query.as_deref(), None)
            .await
    }

    /// Register a new withdrawal destination
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        request: &CreateAddressBookEntryRequest,
    ) -> RestResult<AddressBookEntry> {
        let body = serde_json::to_value(request)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
        self.client
            .send(Method::POST, "/address-book", None, Some(&body))
            .await
    }

    fn list_query(filter: &ListAddressBookFilter) -> QueryParams {
        QueryParams::new()
            .push("asset", filter.asset.as_deref())
            .push("search", filter.search.as_deref())
            .push("states", filter.states.as_deref())
            .paginated(filter.pagination.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_carries_states_filter() {
        let filter = ListAddressBookFilter {
            asset: Some("USDC".to_string()),
            states: Some("ACTIVE,PENDING".to_string()),
            ..Default::default()
        };
        let query = AddressBookService::list_query(&filter).build().unwrap();
        assert_eq!(query, "asset=USDC&states=ACTIVE%2CPENDING");
    }
}
