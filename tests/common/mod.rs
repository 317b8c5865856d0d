// tests/common/mod.rs
//! In-memory stand-in for the Smartsheet API.
//!
//! Listings are split into pages according to each request, so helpers
//! exercise the real aggregator. Every call is recorded for assertions.

#![allow(dead_code)]

use smartsheet_helpers::api::types::{Page, PageRequest, SheetQuery};
use smartsheet_helpers::model::SheetCopyInclusion;
use smartsheet_helpers::{
    AppError, Attachment, AttachmentId, AttachmentTarget, Column, ContainerDestination, Folder,
    FolderId, PaginationRequest, Row, RowId, Sheet, SheetId, SmartsheetApi, SmartsheetErrorCode,
    Workspace,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

#[derive(Default)]
pub struct FakeApi {
    pub folders: Vec<Folder>,
    pub workspaces: Vec<Workspace>,
    pub sheets: Vec<Sheet>,
    pub columns: HashMap<SheetId, Vec<Column>>,
    pub attachments: HashMap<SheetId, Vec<Attachment>>,
    pub folder_details: HashMap<FolderId, Folder>,
    pub sheet_details: HashMap<SheetId, Sheet>,
    pub downloads: HashMap<String, Vec<u8>>,
    /// Walk listings page by page instead of asking for everything.
    pub page_size: Option<u32>,
    /// Include-all listings come back split into pages of this size.
    pub server_page_size: Option<usize>,
    /// Listing calls for this page fail.
    pub fail_on_page: Option<u32>,
    /// Write calls echo back at most this many rows.
    pub row_echo_limit: Option<usize>,
    pub calls: RefCell<Vec<String>>,
    pub added_rows: RefCell<Vec<Row>>,
    pub updated_rows: RefCell<Vec<Row>>,
    pub deleted_rows: RefCell<Vec<RowId>>,
    pub sheet_queries: RefCell<Vec<SheetQuery>>,
    pub copies: RefCell<Vec<ContainerDestination>>,
    pub uploads: RefCell<Vec<(AttachmentTarget, String, PathBuf)>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paged(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }

    fn serve<T: Clone>(&self, label: &str, items: &[T], request: PageRequest) -> Result<Page<T>, AppError> {
        self.record(format!("{} page {}", label, request.page));
        if self.fail_on_page == Some(request.page) {
            return Err(service_error(SmartsheetErrorCode::InternalError, "listing failed"));
        }

        // Answer only what goes on the wire.
        let pairs = request.query_pairs();
        let param = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .and_then(|(_, value)| value.parse::<usize>().ok())
        };
        let include_all = pairs.iter().any(|(key, _)| *key == "includeAll");
        let size = if include_all {
            // The server picks the slice size for include-all listings.
            match self.server_page_size {
                Some(size) => size,
                None => return Ok(Page::single(items.to_vec())),
            }
        } else {
            param("pageSize").unwrap_or(items.len())
        }
        .max(1);
        let page = param("page").unwrap_or(1);
        let total_pages = items.len().div_ceil(size).max(1) as u32;
        let start = ((page - 1) * size).min(items.len());
        let end = (start + size).min(items.len());
        Ok(Page::new(
            items[start..end].to_vec(),
            page as u32,
            size as u32,
            total_pages,
            items.len() as u64,
        ))
    }

    fn echo(&self, rows: &[Row]) -> Vec<Row> {
        let limit = self.row_echo_limit.unwrap_or(rows.len());
        rows.iter()
            .take(limit)
            .enumerate()
            .map(|(index, row)| Row {
                id: row.id.or(Some(RowId::new(1000 + index as u64))),
                ..row.clone()
            })
            .collect()
    }
}

pub fn service_error(code: SmartsheetErrorCode, message: &str) -> AppError {
    AppError::SmartsheetService {
        code,
        message: message.to_string(),
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        ref_id: None,
    }
}

fn not_found(what: String) -> AppError {
    AppError::SmartsheetService {
        code: SmartsheetErrorCode::NotFound,
        message: format!("{} not found", what),
        status: reqwest::StatusCode::NOT_FOUND,
        ref_id: None,
    }
}

impl SmartsheetApi for FakeApi {
    fn pagination(&self) -> PaginationRequest {
        match self.page_size {
            Some(size) => PaginationRequest::paged(size),
            None => PaginationRequest::all_pages(),
        }
    }

    fn list_folders(&self, request: PageRequest) -> Result<Page<Folder>, AppError> {
        self.serve("list_folders", &self.folders, request)
    }

    fn list_workspaces(&self, request: PageRequest) -> Result<Page<Workspace>, AppError> {
        self.serve("list_workspaces", &self.workspaces, request)
    }

    fn list_sheets(&self, request: PageRequest) -> Result<Page<Sheet>, AppError> {
        self.serve("list_sheets", &self.sheets, request)
    }

    fn list_columns(&self, sheet_id: SheetId, request: PageRequest) -> Result<Page<Column>, AppError> {
        let columns = self.columns.get(&sheet_id).cloned().unwrap_or_default();
        self.serve("list_columns", &columns, request)
    }

    fn list_attachments(&self, sheet_id: SheetId, request: PageRequest) -> Result<Page<Attachment>, AppError> {
        let attachments = self.attachments.get(&sheet_id).cloned().unwrap_or_default();
        self.serve("list_attachments", &attachments, request)
    }

    fn get_folder(&self, folder_id: FolderId) -> Result<Folder, AppError> {
        self.record(format!("get_folder {}", folder_id));
        self.folder_details
            .get(&folder_id)
            .cloned()
            .ok_or_else(|| not_found(format!("folder {}", folder_id)))
    }

    fn get_sheet(&self, sheet_id: SheetId, query: &SheetQuery) -> Result<Sheet, AppError> {
        self.record(format!("get_sheet {}", sheet_id));
        self.sheet_queries.borrow_mut().push(query.clone());
        self.sheet_details
            .get(&sheet_id)
            .cloned()
            .ok_or_else(|| not_found(format!("sheet {}", sheet_id)))
    }

    fn get_attachment(&self, sheet_id: SheetId, attachment_id: AttachmentId) -> Result<Attachment, AppError> {
        self.record(format!("get_attachment {}", attachment_id));
        self.attachments
            .get(&sheet_id)
            .and_then(|list| list.iter().find(|a| a.id == attachment_id))
            .cloned()
            .ok_or_else(|| not_found(format!("attachment {}", attachment_id)))
    }

    fn add_rows(&self, sheet_id: SheetId, rows: &[Row]) -> Result<Vec<Row>, AppError> {
        self.record(format!("add_rows {}", sheet_id));
        self.added_rows.borrow_mut().extend_from_slice(rows);
        Ok(self.echo(rows))
    }

    fn update_rows(&self, sheet_id: SheetId, rows: &[Row]) -> Result<Vec<Row>, AppError> {
        self.record(format!("update_rows {}", sheet_id));
        self.updated_rows.borrow_mut().extend_from_slice(rows);
        Ok(self.echo(rows))
    }

    fn delete_rows(
        &self,
        sheet_id: SheetId,
        row_ids: &[RowId],
        _ignore_rows_not_found: bool,
    ) -> Result<Vec<RowId>, AppError> {
        self.record(format!("delete_rows {}", sheet_id));
        self.deleted_rows.borrow_mut().extend_from_slice(row_ids);
        Ok(row_ids.to_vec())
    }

    fn copy_sheet(
        &self,
        sheet_id: SheetId,
        destination: &ContainerDestination,
        _include: &[SheetCopyInclusion],
    ) -> Result<Sheet, AppError> {
        self.record(format!("copy_sheet {}", sheet_id));
        self.copies.borrow_mut().push(destination.clone());
        Ok(Sheet::new(
            SheetId::new(sheet_id.value() + 1),
            destination.new_name.clone(),
        ))
    }

    fn attach_file(&self, target: AttachmentTarget, name: &str, path: &Path) -> Result<Attachment, AppError> {
        self.record(format!("attach_file {}", name));
        let size = std::fs::metadata(path)?.len();
        self.uploads
            .borrow_mut()
            .push((target, name.to_string(), path.to_path_buf()));
        let mut attachment = Attachment::new(AttachmentId::new(500), name);
        attachment.size_in_kb = Some(size.div_ceil(1024));
        Ok(attachment)
    }

    fn open_download(&self, url: &str) -> Result<Box<dyn Read + Send>, AppError> {
        self.record(format!("open_download {}", url));
        let bytes = self
            .downloads
            .get(url)
            .cloned()
            .ok_or_else(|| not_found(format!("download {}", url)))?;
        Ok(Box::new(Cursor::new(bytes)))
    }
}

// --- Fixtures ---

pub fn folder(id: u64, name: &str) -> Folder {
    Folder::new(FolderId::new(id), name)
}

pub fn sheet(id: u64, name: &str) -> Sheet {
    Sheet::new(SheetId::new(id), name)
}

pub fn attachment(id: u64, name: &str) -> Attachment {
    Attachment::new(AttachmentId::new(id), name)
}

pub fn column(id: u64, index: u32, title: &str) -> Column {
    Column {
        id: Some(smartsheet_helpers::ColumnId::new(id)),
        index: Some(index),
        title: title.to_string(),
        ..Column::default()
    }
}
