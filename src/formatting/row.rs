// src/formatting/row.rs
use super::{list_or_null, or_null};
use crate::model::Row;
use crate::types::Labeled;

/// Dumps every field of a row as a single `{id:.., rowNum:.., ...}` record.
pub fn row_to_string(row: &Row) -> String {
    let mut out = format!(
        "{{id:{}, rowNum:{}, sheetId:{}, parentId:{}, parentRowNum:{}, siblingId:{}, permalink:{}, version:{}",
        or_null(row.id),
        or_null(row.row_number),
        or_null(row.sheet_id),
        or_null(row.parent_id),
        or_null(row.parent_row_number),
        or_null(row.sibling_id),
        or_null(row.permalink.as_deref()),
        or_null(row.version),
    );
    out.push_str(&format!(
        ", created:{{by:{}, at:{}}}, modified:{{by:{}, at:{}}}",
        or_null(row.created_by.as_ref()),
        or_null(row.created_at.map(|at| at.to_rfc3339())),
        or_null(row.modified_by.as_ref()),
        or_null(row.modified_at.map(|at| at.to_rfc3339())),
    ));
    out.push_str(&format!(
        ", above:{}, toBottom:{}, toTop:{}, indent:{}, outdent:{}, accessLevel:{}, format:{}, condFormat:{}",
        or_null(row.above),
        or_null(row.to_bottom),
        or_null(row.to_top),
        or_null(row.indent),
        or_null(row.outdent),
        or_null(row.access_level),
        or_null(row.format.as_deref()),
        or_null(row.conditional_format.as_deref()),
    ));
    out.push_str(&format!(
        ", columns:{}, cells:{}, attachments:{}, discussions:{}}}",
        list_or_null(row.columns.as_deref(), |c| c.label()),
        list_or_null(Some(row.cells.as_slice()), |c| c.to_string()),
        list_or_null(row.attachments.as_deref(), |a| a.label()),
        list_or_null(row.discussions.as_deref(), |d| d.id.to_string()),
    ));
    out
}
