// src/api/types.rs
//! Type definitions for the Smartsheet API module.

use crate::constants::SMARTSHEET_DEFAULT_PAGE_SIZE;
use crate::model::{ObjectExclusion, SheetInclusion};
use crate::types::{ColumnId, RowId};
use serde::{Deserialize, Serialize};

// --- Pagination Types ---

/// One page of a paginated listing (the API's `IndexResult`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> Page<T> {
    /// A page carrying complete metadata.
    pub fn new(data: Vec<T>, page_number: u32, page_size: u32, total_pages: u32, total_count: u64) -> Self {
        Self {
            page_number: Some(page_number),
            page_size: Some(page_size),
            total_pages: Some(total_pages),
            total_count: Some(total_count),
            data,
        }
    }

    /// A single page holding everything.
    pub fn single(data: Vec<T>) -> Self {
        let count = data.len();
        Self::new(data, 1, count as u32, 1, count as u64)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// What a single listing call asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
    /// Ask the server to return every item in one page.
    pub include_all: bool,
}

impl PageRequest {
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            include_all: false,
        }
    }

    /// The equivalent of the SDK's `ALL_PAGES` parameters.
    pub fn all() -> Self {
        Self {
            page: 1,
            page_size: SMARTSHEET_DEFAULT_PAGE_SIZE,
            include_all: true,
        }
    }

    /// Query parameters understood by every listing endpoint.
    ///
    /// An include-all request past the first page still names its page, so a
    /// server that split the listing hands out the next slice.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if self.include_all {
            pairs.push(("includeAll", "true".to_string()));
        }
        if !self.include_all || self.page > 1 {
            pairs.push(("page", self.page.to_string()));
            pairs.push(("pageSize", self.page_size.to_string()));
        }
        pairs
    }
}

/// How the aggregator should walk a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationRequest {
    pub page_size: u32,
    pub include_all: bool,
    pub max_pages: Option<u32>,
}

impl PaginationRequest {
    /// Walk page by page with the given page size.
    pub fn paged(page_size: u32) -> Self {
        Self {
            page_size,
            include_all: false,
            max_pages: None,
        }
    }

    /// Ask for everything at once; still follows pages if the server splits them.
    pub fn all_pages() -> Self {
        Self {
            page_size: SMARTSHEET_DEFAULT_PAGE_SIZE,
            include_all: true,
            max_pages: None,
        }
    }

    pub fn with_max_pages(self, max_pages: u32) -> Self {
        Self {
            max_pages: Some(max_pages),
            ..self
        }
    }

    /// The request for the given 1-based page at the given page size.
    pub(crate) fn request_for(&self, page: u32, page_size: u32) -> PageRequest {
        PageRequest {
            page,
            page_size,
            include_all: self.include_all,
        }
    }
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self::all_pages()
    }
}

/// Result of a pagination operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    pub total_fetched: usize,
    pub pages_fetched: u32,
}

// --- Sheet Query ---

/// Parameters of a single-sheet fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetQuery {
    pub include: Vec<SheetInclusion>,
    pub exclude: Vec<ObjectExclusion>,
    /// `None` means every row; `Some(empty)` means none.
    pub row_ids: Option<Vec<RowId>>,
    pub row_numbers: Option<Vec<u32>>,
    pub column_ids: Option<Vec<ColumnId>>,
    pub page_size: Option<u32>,
    pub page: Option<u32>,
}

impl SheetQuery {
    /// Whether this query asks for no rows at all.
    pub fn excludes_rows(&self) -> bool {
        matches!(&self.row_ids, Some(ids) if ids.is_empty())
            && matches!(&self.row_numbers, Some(numbers) if numbers.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_result_payload() {
        let page: Page<serde_json::Value> = serde_json::from_str(
            r#"{"pageNumber":2,"pageSize":100,"totalPages":3,"totalCount":237,"data":[{"id":1}]}"#,
        )
        .unwrap();
        assert_eq!(page.page_number, Some(2));
        assert_eq!(page.total_pages, Some(3));
        assert_eq!(page.total_count, Some(237));
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn test_page_request_query() {
        assert_eq!(
            PageRequest::all().query_pairs(),
            vec![("includeAll", "true".to_string())]
        );
        assert_eq!(
            PageRequest::page(3, 50).query_pairs(),
            vec![("page", "3".to_string()), ("pageSize", "50".to_string())]
        );
    }

    #[test]
    fn test_include_all_past_first_page_names_the_page() {
        let request = PaginationRequest::all_pages().request_for(2, 100);
        assert_eq!(
            request.query_pairs(),
            vec![
                ("includeAll", "true".to_string()),
                ("page", "2".to_string()),
                ("pageSize", "100".to_string()),
            ]
        );
    }
}
