// src/resources/rows.rs
//! Building rows for add and update calls.

use crate::model::{Cell, CellValue, Row};
use crate::types::{ColumnId, RowId};

/// Fluent construction of a [`Row`] for add or update requests.
///
/// ```
/// use smartsheet_helpers::resources::RowBuilder;
/// use smartsheet_helpers::types::ColumnId;
///
/// let row = RowBuilder::new()
///     .to_bottom(true)
///     .cell(ColumnId::new(7), "Write release notes")
///     .build();
/// assert_eq!(row.cells.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RowBuilder {
    row: Row,
}

impl RowBuilder {
    /// A builder for a brand new row.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder for an update of `original`, carrying over its identity,
    /// location and flags but none of its cells.
    pub fn updating(original: &Row) -> Self {
        Self {
            row: Row {
                id: original.id,
                to_top: original.to_top,
                to_bottom: original.to_bottom,
                parent_id: original.parent_id,
                sibling_id: original.sibling_id,
                above: original.above,
                indent: original.indent,
                outdent: original.outdent,
                format: original.format.clone(),
                expanded: original.expanded,
                locked: original.locked,
                ..Row::default()
            },
        }
    }

    pub fn id(mut self, id: RowId) -> Self {
        self.row.id = Some(id);
        self
    }

    pub fn to_top(mut self, to_top: bool) -> Self {
        self.row.to_top = Some(to_top);
        self
    }

    pub fn to_bottom(mut self, to_bottom: bool) -> Self {
        self.row.to_bottom = Some(to_bottom);
        self
    }

    pub fn parent_id(mut self, parent_id: RowId) -> Self {
        self.row.parent_id = Some(parent_id);
        self
    }

    pub fn sibling_id(mut self, sibling_id: RowId) -> Self {
        self.row.sibling_id = Some(sibling_id);
        self
    }

    pub fn above(mut self, above: bool) -> Self {
        self.row.above = Some(above);
        self
    }

    pub fn indent(mut self, indent: u32) -> Self {
        self.row.indent = Some(indent);
        self
    }

    pub fn outdent(mut self, outdent: u32) -> Self {
        self.row.outdent = Some(outdent);
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.row.format = Some(format.into());
        self
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.row.expanded = Some(expanded);
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.row.locked = Some(locked);
        self
    }

    /// Adds a strict value for one column.
    pub fn cell(mut self, column_id: ColumnId, value: impl Into<CellValue>) -> Self {
        self.row.cells.push(Cell::update(column_id, value));
        self
    }

    /// Replaces the cell list.
    pub fn cells(mut self, cells: Vec<Cell>) -> Self {
        self.row.cells = cells;
        self
    }

    pub fn build(self) -> Row {
        self.row
    }
}

/// Strips every location hint from a row so it can be re-added elsewhere.
pub fn clear_locations(row: &mut Row) {
    row.to_top = None;
    row.to_bottom = None;
    row.above = None;
    row.indent = None;
    row.outdent = None;
    row.row_number = None;
    row.parent_id = None;
    row.sibling_id = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fetched_row() -> Row {
        serde_json::from_str(
            r#"{
                "id": 11,
                "sheetId": 1,
                "rowNumber": 4,
                "parentId": 10,
                "siblingId": 9,
                "indent": 1,
                "expanded": true,
                "locked": false,
                "format": ",,1,,,,,,,,,,,,,,",
                "createdAt": "2024-01-02T03:04:05Z",
                "cells": [{"columnId": 7, "value": "old"}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_updating_copies_identity_not_cells() {
        let row = RowBuilder::updating(&fetched_row())
            .cell(ColumnId::new(7), "new")
            .build();

        assert_eq!(row.id, Some(RowId::new(11)));
        assert_eq!(row.parent_id, Some(RowId::new(10)));
        assert_eq!(row.sibling_id, Some(RowId::new(9)));
        assert_eq!(row.indent, Some(1));
        assert_eq!(row.expanded, Some(true));
        assert_eq!(row.locked, Some(false));
        assert_eq!(row.row_number, None);
        assert_eq!(row.sheet_id, None);
        assert_eq!(row.created_at, None);
        assert_eq!(row.cells, vec![Cell::update(ColumnId::new(7), "new")]);
    }

    #[test]
    fn test_new_row_serializes_minimal() {
        let row = RowBuilder::new()
            .to_bottom(true)
            .cell(ColumnId::new(3), 42i64)
            .build();
        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            serde_json::json!({
                "toBottom": true,
                "cells": [{"columnId": 3, "value": 42.0, "strict": true}]
            })
        );
    }

    #[test]
    fn test_clear_locations() {
        let mut row = fetched_row();
        clear_locations(&mut row);
        assert_eq!(row.row_number, None);
        assert_eq!(row.parent_id, None);
        assert_eq!(row.sibling_id, None);
        assert_eq!(row.indent, None);
        assert_eq!(row.id, Some(RowId::new(11)));
        assert_eq!(row.cells.len(), 1);
    }
}
