//! Query-string assembly for list endpoints
//!
//! Optional filters are modeled as present/absent explicitly: a `None`
//! never reaches the wire, a `Some` always does. Values are URL-encoded
//! via `serde_urlencoded`.

use intx_types::PaginationParams;

/// Builder for a request query string
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value` when `value` is present
    pub fn push(mut self, key: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Append pagination fields when supplied
    pub fn paginated(mut self, pagination: Option<&PaginationParams>) -> Self {
        if let Some(pagination) = pagination {
            for (key, value) in pagination.query_pairs() {
                self.pairs.push((key.to_string(), value));
            }
        }
        self
    }

    /// Returns true when no parameter was pushed
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render the encoded query string, or `None` when empty
    pub fn build(&self) -> Option<String> {
        if self.pairs.is_empty() {
            return None;
        }
        // Pairs of strings cannot fail to encode
        Some(serde_urlencoded::to_string(&self.pairs).expect("urlencoding string pairs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_values_are_skipped() {
        let query = QueryParams::new()
            .push("portfolio", Some("1wp37qsc-1-0"))
            .push("instrument", None::<&str>)
            .push("side", Some("BUY"));
        assert_eq!(query.build().as_deref(), Some("portfolio=1wp37qsc-1-0&side=BUY"));
    }

    #[test]
    fn test_empty_builds_none() {
        assert!(QueryParams::new().push("a", None::<&str>).build().is_none());
    }

    #[test]
    fn test_values_are_url_encoded() {
        let query = QueryParams::new().push("ref_datetime", Some("2025-01-01T00:00:00+00:00"));
        assert_eq!(
            query.build().as_deref(),
            Some("ref_datetime=2025-01-01T00%3A00%3A00%2B00%3A00")
        );
    }

    #[test]
    fn test_pagination_appended() {
        let params = PaginationParams::new(10, 20);
        let query = QueryParams::new()
            .push("portfolio", Some("p1"))
            .paginated(Some(&params));
        assert_eq!(
            query.build().as_deref(),
            Some("portfolio=p1&result_limit=10&result_offset=20")
        );
    }
}
