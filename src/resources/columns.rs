// src/resources/columns.rs
use crate::model::{Column, Sheet};
use crate::types::{build_keyed_map, KeyedMap};

/// Columns keyed by title. Titles are unique within a sheet in practice;
/// if two collide the leftmost column is kept.
pub fn column_by_name_map(sheet: &Sheet) -> KeyedMap<String, Column> {
    build_keyed_map(sheet.columns.iter().cloned(), |column| column.title.clone())
}
