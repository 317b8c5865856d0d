// src/formatting/sheet.rs
//! Sheet summaries.

use super::or_null;
use crate::api::{collect_all, SmartsheetApi};
use crate::error::AppError;
use crate::model::{Column, Sheet};

/// Extra sections appended to a sheet summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormatOption {
    /// The sheet's column list, fetched from the API.
    WithColumns,
    /// Every row's cell values, from the sheet as given.
    WithRowContent,
    /// Both of the above.
    All,
}

/// Summarizes a sheet as `{{id:.. name:'..' ...}` followed by the requested
/// sections and a closing `}`.
///
/// `WithColumns` lists columns through the API, so it fails with
/// [`AppError::Unsupported`] when no client is given.
pub fn sheet_to_string(
    sheet: &Sheet,
    api: Option<&dyn SmartsheetApi>,
    options: &[SheetFormatOption],
) -> Result<String, AppError> {
    let mut out = header(sheet);
    for option in options {
        match option {
            SheetFormatOption::WithColumns => append_columns(&mut out, sheet, api)?,
            SheetFormatOption::WithRowContent => append_rows(&mut out, sheet),
            SheetFormatOption::All => {
                append_columns(&mut out, sheet, api)?;
                append_rows(&mut out, sheet);
            }
        }
    }
    out.push('}');
    Ok(out)
}

/// `col[<id>]={title:.. index:.. primary:..}` for every column, unseparated.
pub fn column_info(sheet: &Sheet) -> String {
    sheet
        .columns
        .iter()
        .map(|column| {
            format!(
                "col[{}]={{title:{} index:{} primary:{}}}",
                or_null(column.id),
                column.title,
                or_null(column.index),
                or_null(column.primary)
            )
        })
        .collect()
}

fn header(sheet: &Sheet) -> String {
    format!(
        "{{{{id:{} name:'{}' rowCount:{} version:{} owner:{}({}) source:{} accessLevel:{} \
         readOnly:{} link:{} ganttEnabled:{} dependEnabled:{} resMgmntEnabled:{} favorite:{}}}\n",
        sheet.id,
        sheet.name,
        or_null(sheet.total_row_count),
        or_null(sheet.version),
        or_null(sheet.owner.as_deref()),
        or_null(sheet.owner_id),
        or_null(sheet.source.as_ref()),
        or_null(sheet.access_level),
        or_null(sheet.read_only),
        or_null(sheet.permalink.as_deref()),
        or_null(sheet.gantt_enabled),
        or_null(sheet.dependencies_enabled),
        or_null(sheet.resource_management_enabled),
        or_null(sheet.favorite),
    )
}

fn append_columns(
    out: &mut String,
    sheet: &Sheet,
    api: Option<&dyn SmartsheetApi>,
) -> Result<(), AppError> {
    let api = api.ok_or_else(|| {
        AppError::Unsupported("listing sheet columns needs an API client".to_string())
    })?;
    let columns: Vec<Column> = collect_all(
        |request| api.list_columns(sheet.id, request),
        &api.pagination(),
    )?;

    out.push_str(&format!("\ncolumns:{{num:{} data:{{\n", columns.len()));
    for column in &columns {
        out.push_str(&format!("{}:'{}',", or_null(column.id), column.title));
    }
    out.push_str("}}");
    Ok(())
}

fn append_rows(out: &mut String, sheet: &Sheet) {
    out.push_str("{rows:{");
    for row in &sheet.rows {
        out.push_str(&format!("{}:[", or_null(row.id)));
        for cell in &row.cells {
            out.push_str(&format!("{},", cell));
        }
        out.push_str("],\n");
    }
    out.push_str("}}\n");
}
