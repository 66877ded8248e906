//! Cursor/offset pagination types
//!
//! Each call to a paginated endpoint returns exactly one page; iterating
//! over multiple pages is the caller's loop, not the client's. The
//! pagination envelope varies slightly per endpoint, so [`Paginated`] is
//! generic over the result shape rather than pretending one envelope fits
//! everything.

use serde::{Deserialize, Serialize};

/// Caller-supplied pagination for list endpoints
///
/// All fields are optional; absent fields are omitted from the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationParams {
    /// Reference time anchoring the result window (RFC 3339)
    pub ref_datetime: Option<String>,
    /// Maximum number of results per page
    pub result_limit: Option<u32>,
    /// Offset into the result set
    pub result_offset: Option<u32>,
}

impl PaginationParams {
    /// A page of `limit` results starting at `offset`
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            ref_datetime: None,
            result_limit: Some(limit),
            result_offset: Some(offset),
        }
    }

    /// Anchor the window at a reference time
    pub fn with_ref_datetime(mut self, ref_datetime: impl Into<String>) -> Self {
        self.ref_datetime = Some(ref_datetime.into());
        self
    }

    /// Render as `(key, value)` query pairs, skipping absent fields
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref_datetime) = &self.ref_datetime {
            pairs.push(("ref_datetime", ref_datetime.clone()));
        }
        if let Some(limit) = self.result_limit {
            pairs.push(("result_limit", limit.to_string()));
        }
        if let Some(offset) = self.result_offset {
            pairs.push(("result_offset", offset.to_string()));
        }
        pairs
    }
}

/// Pagination echo returned alongside a page of results
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationResult {
    #[serde(default)]
    pub ref_datetime: Option<String>,
    #[serde(default)]
    pub result_limit: Option<u32>,
    #[serde(default)]
    pub result_offset: Option<u32>,
}

impl PaginationResult {
    /// Pagination parameters for the page after this one
    ///
    /// Returns `None` when the server echoed no limit, in which case the
    /// caller cannot derive a next offset.
    pub fn next_page(&self) -> Option<PaginationParams> {
        let limit = self.result_limit?;
        let offset = self.result_offset.unwrap_or(0) + limit;
        let mut params = PaginationParams::new(limit, offset);
        params.ref_datetime = self.ref_datetime.clone();
        Some(params)
    }
}

/// One page of results plus the pagination echo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub pagination: PaginationResult,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    /// Returns true when the page holds no results
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_skip_absent() {
        let params = PaginationParams::new(25, 50);
        assert_eq!(
            params.query_pairs(),
            vec![
                ("result_limit", "25".to_string()),
                ("result_offset", "50".to_string())
            ]
        );

        let empty = PaginationParams::default();
        assert!(empty.query_pairs().is_empty());
    }

    #[test]
    fn test_next_page_advances_offset() {
        let echo = PaginationResult {
            ref_datetime: Some("2025-01-01T00:00:00Z".to_string()),
            result_limit: Some(100),
            result_offset: Some(200),
        };
        let next = echo.next_page().unwrap();
        assert_eq!(next.result_offset, Some(300));
        assert_eq!(next.result_limit, Some(100));
        assert_eq!(next.ref_datetime.as_deref(), Some("2025-01-01T00:00:00Z"));
    }

    #[test]
    fn test_next_page_requires_limit() {
        assert!(PaginationResult::default().next_page().is_none());
    }

    #[test]
    fn test_paginated_deserializes_missing_fields() {
        let page: Paginated<String> = serde_json::from_str(r#"{"results":["a","b"]}"#).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.pagination, PaginationResult::default());

        let bare: Paginated<String> = serde_json::from_str("{}").unwrap();
        assert!(bare.is_empty());
    }
}
