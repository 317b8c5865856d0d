// src/formatting/mod.rs
//! Human-readable and JSON renderings of Smartsheet objects.
//!
//! The text renderings are single-record dumps meant for logs and the CLI,
//! not a stable interchange format. Absent values print as `null`.

pub mod json;
mod page;
mod row;
mod sheet;

pub use self::json::{to_json_string, write_json, JsonStyle};
pub use self::page::page_to_string;
pub use self::row::row_to_string;
pub use self::sheet::{column_info, sheet_to_string, SheetFormatOption};

use std::fmt::Display;

/// Renders an optional value, `null` when absent.
pub(crate) fn or_null<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

/// Renders an optional list as `[a, b]`, `null` when absent.
pub(crate) fn list_or_null<T, F>(items: Option<&[T]>, render: F) -> String
where
    F: Fn(&T) -> String,
{
    match items {
        Some(items) => format!(
            "[{}]",
            items.iter().map(render).collect::<Vec<_>>().join(", ")
        ),
        None => "null".to_string(),
    }
}
