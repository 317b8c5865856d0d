// src/api/pagination.rs
//! Sequential pagination over any listing call.

use super::types::{Page, PageRequest, PaginationRequest, PaginationResult};
use crate::error::AppError;

/// Fetches every page of a listing, one request at a time, in page order.
///
/// The first failing fetch aborts the walk and its error is returned; items
/// already collected are dropped with it.
pub fn fetch_all_pages<T, F>(
    mut fetch_fn: F,
    request: &PaginationRequest,
) -> Result<PaginationResult<T>, AppError>
where
    F: FnMut(PageRequest) -> Result<Page<T>, AppError>,
{
    let mut all_items = Vec::new();
    let mut page_number = 1u32;
    let mut page_size = request.page_size;
    let mut pages_fetched = 0u32;

    loop {
        if let Some(max) = request.max_pages {
            if pages_fetched >= max {
                log::debug!("Reached maximum page limit: {}", max);
                break;
            }
        }

        let page = fetch_fn(request.request_for(page_number, page_size))?;
        pages_fetched += 1;

        let more = has_more_pages(&page, page_number, page_size);
        if page.page_number.is_some_and(|reported| reported != page_number) {
            log::warn!(
                "Asked for page {} but the server reported page {}",
                page_number,
                page.page_number.unwrap_or_default()
            );
        }
        log::debug!(
            "Fetched page {}/{} with {} items (total count {})",
            page.page_number.unwrap_or(page_number),
            page.total_pages
                .map(|t| t.to_string())
                .unwrap_or_else(|| "?".to_string()),
            page.data.len(),
            page.total_count
                .map(|t| t.to_string())
                .unwrap_or_else(|| "?".to_string()),
        );
        all_items.extend(page.data);

        if !more {
            break;
        }
        // Later pages are sliced the way the server sliced the first one.
        if let Some(reported) = page.page_size.filter(|s| *s > 0) {
            page_size = reported;
        }
        page_number += 1;
    }

    Ok(PaginationResult {
        total_fetched: all_items.len(),
        items: all_items,
        pages_fetched,
    })
}

/// Convenience wrapper returning only the items.
pub fn collect_all<T, F>(fetch_fn: F, request: &PaginationRequest) -> Result<Vec<T>, AppError>
where
    F: FnMut(PageRequest) -> Result<Page<T>, AppError>,
{
    fetch_all_pages(fetch_fn, request).map(|result| result.items)
}

/// Decides from a page's metadata whether another page should be requested.
///
/// Progress is measured by the page that was asked for, so a server echoing
/// the same page back cannot keep the walk going.
fn has_more_pages<T>(page: &Page<T>, requested_page: u32, requested_size: u32) -> bool {
    if let Some(total_pages) = page.total_pages {
        if requested_page >= total_pages {
            return false;
        }
    }

    // The server may clamp the page size; judge a short page by what it reports.
    let effective_size = page.page_size.filter(|s| *s > 0).unwrap_or(requested_size);
    page.data.len() as u64 >= u64::from(effective_size) && !page.data.is_empty()
}
