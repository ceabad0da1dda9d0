//! Page-parameter normalization and full-collection aggregation.
//!
//! Crowdin list endpoints page with `offset` and `limit` query parameters
//! and answer with `{"data": [...], "pagination": {...}}`. Callers describe
//! what they want with [`PageParams`], either as a 1-based `page` number or as
//! an explicit `offset`/`limit` window, never both.
//!
//! [`fetch_all`] walks the collection one window at a time, awaiting each
//! page before requesting the next, until a page comes back shorter than the
//! requested limit.
//!
//! # Example
//!
//! ```rust
//! use crowdin_api::rest::PageParams;
//!
//! let params = PageParams::window(10, 25);
//! let query = params.normalize().unwrap();
//! assert_eq!(query.get("offset"), Some(&10));
//! assert_eq!(query.get("limit"), Some(&25));
//!
//! assert!(PageParams::page(2).with_offset(10).normalize().is_err());
//! ```

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::{HttpMethod, Requester};
use crate::rest::ResourceError;

/// Pagination inputs for a list operation.
///
/// At most one style may be populated: `page`, or `offset`/`limit`.
/// `max_items` is independent of both and only caps aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number.
    pub page: Option<u64>,
    /// Offset of the first item.
    pub offset: Option<u64>,
    /// Maximum number of items per request.
    pub limit: Option<u64>,
    /// Stop aggregating once this many items were collected.
    pub max_items: Option<usize>,
}

impl PageParams {
    /// No pagination inputs: start at the beginning with the default limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page: None,
            offset: None,
            limit: None,
            max_items: None,
        }
    }

    /// Starts at the given 1-based page.
    #[must_use]
    pub const fn page(page: u64) -> Self {
        Self {
            page: Some(page),
            ..Self::new()
        }
    }

    /// Starts at `offset`, requesting `limit` items at a time.
    #[must_use]
    pub const fn window(offset: u64, limit: u64) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
            ..Self::new()
        }
    }

    /// Sets the offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the per-request limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Caps the number of aggregated items.
    #[must_use]
    pub const fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// Normalizes the inputs into query parameters.
    ///
    /// - `page` -> `{"page": page}`
    /// - `offset`/`limit` -> `{"offset": .., "limit": ..}`, each only if set
    /// - nothing -> `{}`
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidArgument`] if `page` is combined with
    /// `offset` or `limit`, or if `page` is `0`.
    pub fn normalize(&self) -> Result<HashMap<&'static str, u64>, ResourceError> {
        let mut params = HashMap::new();

        if let Some(page) = self.page {
            if self.offset.is_some() || self.limit.is_some() {
                return Err(ResourceError::invalid_argument(
                    "page cannot be combined with offset or limit",
                ));
            }
            if page == 0 {
                return Err(ResourceError::invalid_argument("page numbers start at 1"));
            }
            params.insert("page", page);
            return Ok(params);
        }

        if let Some(offset) = self.offset {
            params.insert("offset", offset);
        }
        if let Some(limit) = self.limit {
            params.insert("limit", limit);
        }
        Ok(params)
    }

    /// Resolves the starting `(offset, limit)` window for aggregation.
    ///
    /// A page number maps to `offset = (page - 1) * default_limit`.
    ///
    /// # Errors
    ///
    /// Same as [`normalize`](Self::normalize), plus
    /// [`ResourceError::InvalidArgument`] for a zero limit.
    pub fn resolve(&self, default_limit: u64) -> Result<(u64, u64), ResourceError> {
        let params = self.normalize()?;

        let (offset, limit) = match params.get("page") {
            Some(&page) => ((page - 1).saturating_mul(default_limit), default_limit),
            None => (
                params.get("offset").copied().unwrap_or(0),
                params.get("limit").copied().unwrap_or(default_limit),
            ),
        };

        if limit == 0 {
            return Err(ResourceError::invalid_argument("limit must be greater than 0"));
        }
        Ok((offset, limit))
    }
}

/// Fetches every item of a list endpoint, page after page.
///
/// `filters` are sent unchanged with every request, together with the
/// current `offset` and `limit`. Items are read from each response's `data`
/// array and concatenated in server order. The walk ends with the first page
/// holding fewer than `limit` items, once `max_items` were collected, or
/// when the next offset would not fit in a `u64`.
///
/// # Errors
///
/// - [`ResourceError::InvalidArgument`] for invalid `page_params`, before
///   any request is sent
/// - [`ResourceError::UnexpectedResponse`] if a response has no `data` array
/// - [`ResourceError::Http`] for any dispatcher failure, unchanged
pub async fn fetch_all<R: Requester>(
    requester: &R,
    path: &str,
    filters: &HashMap<String, String>,
    page_params: &PageParams,
    default_limit: u64,
) -> Result<Vec<Value>, ResourceError> {
    let (mut offset, limit) = page_params.resolve(default_limit)?;
    let max_items = page_params.max_items;

    let mut items = Vec::new();
    if max_items == Some(0) {
        return Ok(items);
    }

    loop {
        let mut query = filters.clone();
        query.insert("offset".to_string(), offset.to_string());
        query.insert("limit".to_string(), limit.to_string());

        let body = requester
            .request(HttpMethod::Get, path, Some(query), None)
            .await?;

        let page = match body {
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(page)) => page,
                _ => return Err(missing_data(path)),
            },
            _ => return Err(missing_data(path)),
        };

        let received = page.len();
        tracing::debug!(path = %path, offset, limit, received, "Fetched page");
        items.extend(page);

        if let Some(max) = max_items {
            if items.len() >= max {
                items.truncate(max);
                break;
            }
        }
        if (received as u64) < limit {
            break;
        }
        // No window exists past `u64::MAX`.
        match offset.checked_add(limit) {
            Some(next) => offset = next,
            None => break,
        }
    }

    tracing::debug!(path = %path, total = items.len(), "Fetched all pages");
    Ok(items)
}

fn missing_data(path: &str) -> ResourceError {
    ResourceError::UnexpectedResponse {
        path: path.to_string(),
        reason: "missing `data` array",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::MockRequester;
    use crate::clients::{HttpError, HttpResponseError};
    use serde_json::json;

    fn ids(items: &[Value]) -> Vec<u64> {
        items
            .iter()
            .map(|item| item["data"]["id"].as_u64().unwrap())
            .collect()
    }

    // === normalize ===

    #[test]
    fn test_normalize_page() {
        let params = PageParams::page(2).normalize().unwrap();
        assert_eq!(params, HashMap::from([("page", 2)]));
    }

    #[test]
    fn test_normalize_offset_and_limit() {
        let params = PageParams::window(10, 25).normalize().unwrap();
        assert_eq!(params, HashMap::from([("offset", 10), ("limit", 25)]));
    }

    #[test]
    fn test_normalize_partial_window_keeps_only_present_keys() {
        let params = PageParams::new().with_limit(50).normalize().unwrap();
        assert_eq!(params, HashMap::from([("limit", 50)]));
    }

    #[test]
    fn test_normalize_nothing_is_empty() {
        assert!(PageParams::new().normalize().unwrap().is_empty());
        assert!(PageParams::default().normalize().unwrap().is_empty());
    }

    #[test]
    fn test_normalize_rejects_page_with_offset_or_limit() {
        assert!(matches!(
            PageParams::page(2).with_offset(10).normalize(),
            Err(ResourceError::InvalidArgument { .. })
        ));
        assert!(matches!(
            PageParams::page(2).with_limit(10).normalize(),
            Err(ResourceError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_normalize_rejects_page_zero() {
        assert!(matches!(
            PageParams::page(0).normalize(),
            Err(ResourceError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_normalize_ignores_max_items() {
        let params = PageParams::new().with_max_items(5).normalize().unwrap();
        assert!(params.is_empty());
    }

    // === resolve ===

    #[test]
    fn test_resolve_defaults() {
        assert_eq!(PageParams::new().resolve(25).unwrap(), (0, 25));
    }

    #[test]
    fn test_resolve_page_maps_to_offset() {
        assert_eq!(PageParams::page(1).resolve(25).unwrap(), (0, 25));
        assert_eq!(PageParams::page(3).resolve(25).unwrap(), (50, 25));
    }

    #[test]
    fn test_resolve_rejects_zero_limit() {
        assert!(matches!(
            PageParams::window(0, 0).resolve(25),
            Err(ResourceError::InvalidArgument { .. })
        ));
    }

    // === fetch_all ===

    #[tokio::test]
    async fn test_fetch_all_concatenates_pages_in_order() {
        let requester = MockRequester::new().with_pages(&[25, 25, 10]);

        let items = fetch_all(
            &requester,
            "projects",
            &HashMap::new(),
            &PageParams::new(),
            25,
        )
        .await
        .unwrap();

        assert_eq!(items.len(), 60);
        assert_eq!(ids(&items), (1..=60).collect::<Vec<u64>>());

        let calls = requester.calls();
        assert_eq!(calls.len(), 3);
        let offsets: Vec<&str> = calls
            .iter()
            .map(|c| c.query.as_ref().unwrap()["offset"].as_str())
            .collect();
        assert_eq!(offsets, vec!["0", "25", "50"]);
        assert!(calls
            .iter()
            .all(|c| c.method == HttpMethod::Get && c.path == "projects"));
    }

    #[tokio::test]
    async fn test_fetch_all_single_empty_page() {
        let requester = MockRequester::new().with_pages(&[0]);

        let items = fetch_all(&requester, "projects", &HashMap::new(), &PageParams::new(), 25)
            .await
            .unwrap();

        assert!(items.is_empty());
        assert_eq!(requester.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_all_restarts_from_offset() {
        let requester = MockRequester::new().with_pages(&[10, 3]);

        let items = fetch_all(
            &requester,
            "projects/1/file-format-settings",
            &HashMap::new(),
            &PageParams::window(40, 10),
            25,
        )
        .await
        .unwrap();

        assert_eq!(items.len(), 13);
        let calls = requester.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].query.as_ref().unwrap()["offset"], "40");
        assert_eq!(calls[0].query.as_ref().unwrap()["limit"], "10");
        assert_eq!(calls[1].query.as_ref().unwrap()["offset"], "50");
    }

    #[tokio::test]
    async fn test_fetch_all_stops_at_largest_offset() {
        let requester = MockRequester::new().with_pages(&[1, 1]);

        let items = fetch_all(
            &requester,
            "projects",
            &HashMap::new(),
            &PageParams::window(u64::MAX, 1),
            25,
        )
        .await
        .unwrap();

        assert_eq!(items.len(), 1);
        let calls = requester.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].query.as_ref().unwrap()["offset"],
            u64::MAX.to_string()
        );
    }

    #[tokio::test]
    async fn test_fetch_all_page_number_sets_start_offset() {
        let requester = MockRequester::new().with_pages(&[5]);

        fetch_all(&requester, "projects", &HashMap::new(), &PageParams::page(3), 25)
            .await
            .unwrap();

        let query = requester.calls()[0].query.clone().unwrap();
        assert_eq!(query["offset"], "50");
        assert_eq!(query["limit"], "25");
        assert!(!query.contains_key("page"));
    }

    #[tokio::test]
    async fn test_fetch_all_sends_filters_with_every_page() {
        let requester = MockRequester::new().with_pages(&[2, 1]);
        let filters = HashMap::from([("groupId".to_string(), "4".to_string())]);

        fetch_all(&requester, "projects", &filters, &PageParams::window(0, 2), 25)
            .await
            .unwrap();

        let calls = requester.calls();
        assert_eq!(calls.len(), 2);
        for call in calls {
            assert_eq!(call.query.unwrap()["groupId"], "4");
        }
    }

    #[tokio::test]
    async fn test_fetch_all_max_items_truncates() {
        let requester = MockRequester::new().with_pages(&[25, 25, 25]);

        let items = fetch_all(
            &requester,
            "projects",
            &HashMap::new(),
            &PageParams::new().with_max_items(30),
            25,
        )
        .await
        .unwrap();

        assert_eq!(items.len(), 30);
        assert_eq!(requester.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_all_max_items_zero_sends_nothing() {
        let requester = MockRequester::new().with_pages(&[25]);

        let items = fetch_all(
            &requester,
            "projects",
            &HashMap::new(),
            &PageParams::new().with_max_items(0),
            25,
        )
        .await
        .unwrap();

        assert!(items.is_empty());
        assert!(requester.calls().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_invalid_params_make_no_calls() {
        let requester = MockRequester::new().with_pages(&[25]);

        let result = fetch_all(
            &requester,
            "projects",
            &HashMap::new(),
            &PageParams::page(1).with_offset(10),
            25,
        )
        .await;

        assert!(matches!(result, Err(ResourceError::InvalidArgument { .. })));
        assert!(requester.calls().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_missing_data_is_unexpected_response() {
        let requester = MockRequester::new().respond_ok(json!({"pagination": {}}));

        let result =
            fetch_all(&requester, "projects", &HashMap::new(), &PageParams::new(), 25).await;

        assert!(matches!(
            result,
            Err(ResourceError::UnexpectedResponse { ref path, .. }) if path == "projects"
        ));
    }

    #[tokio::test]
    async fn test_fetch_all_passes_dispatcher_error_through() {
        let requester = MockRequester::new()
            .with_pages(&[25])
            .respond(Err(HttpError::Response(HttpResponseError {
                code: 500,
                message: "boom".to_string(),
                error_reference: None,
            })));

        let result =
            fetch_all(&requester, "projects", &HashMap::new(), &PageParams::new(), 25).await;

        assert_eq!(result.unwrap_err().status(), Some(500));
        assert_eq!(requester.calls().len(), 2);
    }
}
