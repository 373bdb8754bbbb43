//! Pagination helpers for API requests
//!
//! Admin list endpoints are page-numbered (1-indexed) and answer with an
//! envelope whose item array is named after the resource:
//!
//! ```json
//! { "users": [...], "total": 41, "page": 1, "page_size": 20, "total_pages": 3 }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Default page size, matching the web portals
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Pagination parameters for list requests.
///
/// # Example
/// ```ignore
/// let params = PaginationParams::new().page(2).page_size(50);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PaginationParams {
    /// Page number, 1-indexed (default: 1)
    pub page: Option<usize>,
    /// Items per page (default: 20)
    pub page_size: Option<usize>,
}

impl PaginationParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Query string pairs. Always includes both keys; page 0 is bumped to 1.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let page = self.page.unwrap_or(1).max(1);
        let size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
        vec![("page", page.to_string()), ("page_size", size.to_string())]
    }
}

/// One page of results plus the server's paging metadata
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Deserialize)]
struct PageMeta {
    #[serde(default)]
    total: usize,
    #[serde(default = "first_page")]
    page: usize,
    #[serde(default = "default_page_size")]
    page_size: usize,
    #[serde(default = "first_page")]
    total_pages: usize,
}

fn first_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Decode a paged envelope, pulling items out of `key`.
///
/// A `null` item array (an empty table on the server) decodes as empty.
pub fn decode_page<T: DeserializeOwned>(
    mut body: serde_json::Value,
    key: &str,
) -> Result<Page<T>, ApiError> {
    let raw_items = match body.get_mut(key) {
        Some(value) => value.take(),
        None => {
            return Err(ApiError::InvalidResponse(format!(
                "missing field `{}` in paged response",
                key
            )));
        }
    };

    let items: Vec<T> = if raw_items.is_null() {
        Vec::new()
    } else {
        serde_json::from_value(raw_items).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse `{}`: {}", key, e))
        })?
    };

    let meta: PageMeta = serde_json::from_value(body)
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse paging: {}", e)))?;

    Ok(Page {
        items,
        total: meta.total,
        page: meta.page,
        page_size: meta.page_size,
        total_pages: meta.total_pages.max(1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_pagination_params_defaults() {
        let query = PaginationParams::new().to_query_params();
        assert!(query.contains(&("page", "1".to_string())));
        assert!(query.contains(&("page_size", DEFAULT_PAGE_SIZE.to_string())));
    }

    #[test]
    fn test_pagination_params_builder() {
        let query = PaginationParams::new().page(3).page_size(50).to_query_params();
        assert!(query.contains(&("page", "3".to_string())));
        assert!(query.contains(&("page_size", "50".to_string())));
    }

    #[test]
    fn test_pagination_params_page_zero_is_first_page() {
        let query = PaginationParams::new().page(0).to_query_params();
        assert!(query.contains(&("page", "1".to_string())));
    }

    #[test]
    fn test_decode_page() {
        let body = json!({
            "routes": [{"id": 1}, {"id": 2}],
            "total": 41, "page": 2, "page_size": 20, "total_pages": 3
        });
        let page: Page<Item> = decode_page(body, "routes").unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].id, 2);
        assert_eq!(page.total, 41);
        assert!(page.has_next_page());
    }

    #[test]
    fn test_decode_page_null_items() {
        let body = json!({"tickets": null, "total": 0, "page": 1, "page_size": 20, "total_pages": 0});
        let page: Page<Item> = decode_page(body, "tickets").unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_decode_page_missing_key() {
        let body = json!({"total": 0});
        let err = decode_page::<Item>(body, "users").unwrap_err();
        assert!(err.to_string().contains("users"));
    }

    #[test]
    fn test_decode_page_bad_items() {
        let body = json!({"users": [{"name": "no id"}]});
        assert!(matches!(
            decode_page::<Item>(body, "users"),
            Err(ApiError::InvalidResponse(_))
        ));
    }
}
