// src/resources/cells.rs
//! Reading and writing individual cell values.

use crate::api::SmartsheetApi;
use crate::error::AppError;
use crate::model::{Cell, CellValue, Row, Sheet};
use crate::types::{ColumnId, RowId, SheetId};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Sets one cell and returns the updated row as the server reports it.
pub fn set_cell_value(
    api: &dyn SmartsheetApi,
    sheet_id: SheetId,
    row_id: RowId,
    column_id: ColumnId,
    value: impl Into<CellValue>,
) -> Result<Vec<Row>, AppError> {
    let value = value.into();
    log::debug!(
        "Setting sheet {} row {} column {} to '{}'",
        sheet_id,
        row_id,
        column_id,
        value
    );
    update_single_row(
        api,
        sheet_id,
        row_id,
        vec![Cell::update(column_id, value)],
        "set_cell_value",
    )
}

/// Sets several cells of one row in a single update.
pub fn set_cell_values(
    api: &dyn SmartsheetApi,
    sheet_id: SheetId,
    row_id: RowId,
    values: &IndexMap<ColumnId, CellValue>,
) -> Result<Vec<Row>, AppError> {
    let cells = values
        .iter()
        .map(|(column_id, value)| Cell::update(*column_id, value.clone()))
        .collect();
    update_single_row(api, sheet_id, row_id, cells, "set_cell_values")
}

fn update_single_row(
    api: &dyn SmartsheetApi,
    sheet_id: SheetId,
    row_id: RowId,
    cells: Vec<Cell>,
    operation: &'static str,
) -> Result<Vec<Row>, AppError> {
    let row = Row {
        id: Some(row_id),
        cells,
        ..Row::default()
    };
    let updated = api.update_rows(sheet_id, std::slice::from_ref(&row))?;
    if updated.len() != 1 {
        return Err(AppError::UnexpectedRowCount {
            operation,
            sent: 1,
            returned: updated.len(),
        });
    }
    Ok(updated)
}

pub fn cell_for_column(row: &Row, column_id: ColumnId) -> Option<&Cell> {
    row.cells
        .iter()
        .find(|cell| cell.column_id == Some(column_id))
}

/// False when the row has no cell for the column.
pub fn row_has_matching_cell<P>(row: &Row, column_id: ColumnId, predicate: P) -> bool
where
    P: Fn(&Cell) -> bool,
{
    cell_for_column(row, column_id).is_some_and(predicate)
}

/// One map per row of column title to cell value, in column order.
///
/// When two columns share a title the later column's value is kept, at the
/// position of the first.
pub fn cell_values_by_name(sheet: &Sheet) -> Vec<IndexMap<String, Option<CellValue>>> {
    sheet
        .rows
        .iter()
        .map(|row| {
            let cells = cells_by_column_id(row);
            let mut values = IndexMap::with_capacity(sheet.columns.len());
            for column in &sheet.columns {
                let value = column
                    .id
                    .and_then(|id| cells.get(&id))
                    .and_then(|cell| cell.value.clone());
                values.insert(column.title.clone(), value);
            }
            values
        })
        .collect()
}

/// Cells keyed by column id. Cells without a column id are skipped.
pub fn cells_by_column_id(row: &Row) -> HashMap<ColumnId, &Cell> {
    let mut cells = HashMap::with_capacity(row.cells.len());
    for cell in &row.cells {
        if let Some(column_id) = cell.column_id {
            cells.entry(column_id).or_insert(cell);
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;

    fn cell(column: u64, value: impl Into<CellValue>) -> Cell {
        Cell {
            column_id: Some(ColumnId::new(column)),
            value: Some(value.into()),
            ..Cell::default()
        }
    }

    fn row(cells: Vec<Cell>) -> Row {
        Row {
            id: Some(RowId::new(100)),
            cells,
            ..Row::default()
        }
    }

    #[test]
    fn test_cell_for_column() {
        let row = row(vec![cell(1, "a"), cell(2, 5i64)]);
        assert_eq!(
            cell_for_column(&row, ColumnId::new(2)).and_then(|c| c.value.clone()),
            Some(CellValue::Number(5.0))
        );
        assert!(cell_for_column(&row, ColumnId::new(3)).is_none());
    }

    #[test]
    fn test_row_has_matching_cell() {
        let row = row(vec![cell(1, "done")]);
        let is_done = |c: &Cell| c.value.as_ref().and_then(CellValue::as_text) == Some("done");
        assert!(row_has_matching_cell(&row, ColumnId::new(1), is_done));
        assert!(!row_has_matching_cell(&row, ColumnId::new(9), |_| true));
    }

    #[test]
    fn test_cell_values_by_name_follows_column_order() {
        let mut sheet = Sheet::new(SheetId::new(1), "Tasks");
        sheet.columns = vec![
            Column {
                id: Some(ColumnId::new(2)),
                title: "Status".to_string(),
                ..Column::default()
            },
            Column {
                id: Some(ColumnId::new(1)),
                title: "Task".to_string(),
                ..Column::default()
            },
        ];
        sheet.rows = vec![row(vec![cell(1, "Write docs")])];

        let values = cell_values_by_name(&sheet);

        assert_eq!(values.len(), 1);
        let keys: Vec<_> = values[0].keys().cloned().collect();
        assert_eq!(keys, vec!["Status", "Task"]);
        assert_eq!(values[0]["Status"], None);
        assert_eq!(values[0]["Task"], Some(CellValue::from("Write docs")));
    }

    #[test]
    fn test_cell_values_by_name_shared_title_keeps_later_column() {
        let mut sheet = Sheet::new(SheetId::new(1), "Tasks");
        sheet.columns = [(1, "Owner"), (2, "Task"), (3, "Owner")]
            .into_iter()
            .map(|(id, title)| Column {
                id: Some(ColumnId::new(id)),
                title: title.to_string(),
                ..Column::default()
            })
            .collect();
        sheet.rows = vec![row(vec![cell(1, "ann"), cell(2, "Ship"), cell(3, "bob")])];

        let values = cell_values_by_name(&sheet);

        let keys: Vec<_> = values[0].keys().cloned().collect();
        assert_eq!(keys, vec!["Owner", "Task"]);
        assert_eq!(values[0]["Owner"], Some(CellValue::from("bob")));
    }

    #[test]
    fn test_cells_by_column_id_skips_unkeyed_cells() {
        let mut cells = vec![cell(1, "a"), cell(2, "b")];
        cells.push(Cell::default());
        let row = row(cells);
        let map = cells_by_column_id(&row);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&ColumnId::new(2)].value, Some(CellValue::from("b")));
    }
}
