// src/resources/mod.rs
//! Helpers built on top of [`SmartsheetApi`](crate::api::SmartsheetApi).
//!
//! Each submodule covers one kind of Smartsheet object. Listing helpers
//! always walk every page through the aggregator, using the client's own
//! pagination directive.

pub mod attachments;
pub mod cells;
pub mod columns;
pub mod folders;
pub mod rows;
pub mod sheets;
pub mod workspaces;

pub use attachments::{
    add_row_attachment, add_sheet_attachment, attachment_map, attachment_map_for_sheet,
    attachment_map_to_string, build_attachment_map, download_to_dir,
};
pub use cells::{
    cell_for_column, cell_values_by_name, cells_by_column_id, row_has_matching_cell,
    set_cell_value, set_cell_values,
};
pub use columns::column_by_name_map;
pub use folders::{find_first_folder_by_name, find_folders_by_name, populate_if_needed};
pub use rows::{clear_locations, RowBuilder};
pub use sheets::{
    add_row, add_rows, clear_rows, copy_and_refresh, find_sheets_by_name, get_sheet_no_rows,
    get_whole_sheet, update_rows,
};
pub use workspaces::find_workspace_by_name;
