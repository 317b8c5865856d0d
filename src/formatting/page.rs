// src/formatting/page.rs
use super::{list_or_null, or_null};
use crate::api::types::Page;
use crate::types::Labeled;

/// `{pageNum:.., pageSize:.., totalCount:.., totalPages:.., data:[..]}`
pub fn page_to_string<T: Labeled>(page: &Page<T>) -> String {
    format!(
        "{{pageNum:{}, pageSize:{}, totalCount:{}, totalPages:{}, data:{}}}",
        or_null(page.page_number),
        or_null(page.page_size),
        or_null(page.total_count),
        or_null(page.total_pages),
        list_or_null(Some(page.data.as_slice()), T::label),
    )
}
