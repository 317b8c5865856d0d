// src/resources/sheets.rs
//! Sheet fetches, lookups and bulk row operations.

use crate::api::types::SheetQuery;
use crate::api::{collect_all, SmartsheetApi};
use crate::constants::{
    ALL_OBJECT_EXCLUSIONS, ALL_SHEET_COPY_INCLUSIONS, ALL_SHEET_INCLUSIONS,
    NORMAL_SHEET_INCLUSIONS,
};
use crate::error::AppError;
use crate::model::{Container, ContainerDestination, Row, Sheet};
use crate::types::{RowId, SheetId};

/// Fetches a sheet with every optional element and every row.
pub fn get_whole_sheet(api: &dyn SmartsheetApi, sheet_id: SheetId) -> Result<Sheet, AppError> {
    let query = SheetQuery {
        include: ALL_SHEET_INCLUSIONS.to_vec(),
        ..SheetQuery::default()
    };
    api.get_sheet(sheet_id, &query)
}

/// Fetches a sheet's metadata and columns without any rows.
pub fn get_sheet_no_rows(api: &dyn SmartsheetApi, sheet_id: SheetId) -> Result<Sheet, AppError> {
    let query = SheetQuery {
        include: NORMAL_SHEET_INCLUSIONS.to_vec(),
        exclude: ALL_OBJECT_EXCLUSIONS.to_vec(),
        row_ids: Some(Vec::new()),
        row_numbers: Some(Vec::new()),
        ..SheetQuery::default()
    };
    api.get_sheet(sheet_id, &query)
}

/// Every sheet named exactly `name`, in listing order.
pub fn find_sheets_by_name(api: &dyn SmartsheetApi, name: &str) -> Result<Vec<Sheet>, AppError> {
    let sheets = collect_all(|request| api.list_sheets(request), &api.pagination())?;
    Ok(sheets.into_iter().filter(|sheet| sheet.name == name).collect())
}

/// Adds one row and returns it as created.
pub fn add_row(api: &dyn SmartsheetApi, sheet_id: SheetId, row: Row) -> Result<Row, AppError> {
    let mut added = add_rows(api, sheet_id, vec![row])?;
    added.pop().ok_or(AppError::UnexpectedRowCount {
        operation: "add_row",
        sent: 1,
        returned: 0,
    })
}

/// Adds rows; the server must echo back exactly as many as were sent.
pub fn add_rows(api: &dyn SmartsheetApi, sheet_id: SheetId, rows: Vec<Row>) -> Result<Vec<Row>, AppError> {
    let added = api.add_rows(sheet_id, &rows)?;
    check_row_count("add_rows", rows.len(), added.len())?;
    log::debug!("Added {} rows to sheet {}", added.len(), sheet_id);
    Ok(added)
}

/// Updates rows after clearing the fields the API refuses on update.
pub fn update_rows(
    api: &dyn SmartsheetApi,
    sheet_id: SheetId,
    mut rows: Vec<Row>,
) -> Result<Vec<Row>, AppError> {
    rows.iter_mut().for_each(Row::clear_read_only_fields);
    let updated = api.update_rows(sheet_id, &rows)?;
    check_row_count("update_rows", rows.len(), updated.len())?;
    log::debug!("Updated {} rows in sheet {}", updated.len(), sheet_id);
    Ok(updated)
}

/// Deletes every row of `sheet`. An empty sheet makes no call at all,
/// since the API rejects a delete without ids.
pub fn clear_rows(api: &dyn SmartsheetApi, sheet: &Sheet) -> Result<(), AppError> {
    let row_ids: Vec<RowId> = sheet.rows.iter().filter_map(|row| row.id).collect();
    if row_ids.is_empty() {
        log::debug!("Sheet {} has no rows to clear", sheet.id);
        return Ok(());
    }
    let deleted = api.delete_rows(sheet.id, &row_ids, true)?;
    log::info!("Deleted {} rows from sheet {}", deleted.len(), sheet.id);
    Ok(())
}

/// Copies `original` with all its content and returns the copy without rows.
///
/// With no destination the copy lands in the user's home.
pub fn copy_and_refresh(
    api: &dyn SmartsheetApi,
    original: &Sheet,
    destination: Option<Container<'_>>,
    new_name: &str,
) -> Result<Sheet, AppError> {
    let destination = ContainerDestination::new(destination, new_name);
    let copy = api.copy_sheet(original.id, &destination, ALL_SHEET_COPY_INCLUSIONS)?;
    log::info!("Copied sheet {} to '{}' ({})", original.id, new_name, copy.id);
    get_sheet_no_rows(api, copy.id)
}

fn check_row_count(operation: &'static str, sent: usize, returned: usize) -> Result<(), AppError> {
    if sent == returned {
        Ok(())
    } else {
        Err(AppError::UnexpectedRowCount {
            operation,
            sent,
            returned,
        })
    }
}
