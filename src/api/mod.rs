// src/api/mod.rs
//! Smartsheet API interaction: the ability to list and modify sheet content.
//!
//! Helpers depend on the [`SmartsheetApi`] trait, never on HTTP details,
//! so they can be driven by the real client or by an in-memory fake.

pub mod client;
pub mod pagination;
pub mod parser;
pub mod responses;
pub mod types;

use crate::error::AppError;
use crate::model::{
    Attachment, Column, ContainerDestination, Folder, Row, Sheet, SheetCopyInclusion, Workspace,
};
use crate::types::{AttachmentId, FolderId, RowId, SheetId};
use std::io::Read;
use std::path::Path;
use types::{Page, PageRequest, SheetQuery};

/// Where an uploaded file gets attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentTarget {
    Sheet(SheetId),
    Row(SheetId, RowId),
}

/// The remote operations the helpers are built on.
///
/// Listing calls return one [`Page`] per invocation; walking all pages is the
/// job of [`pagination::fetch_all_pages`].
pub trait SmartsheetApi {
    /// How listing helpers should walk pages for this client.
    fn pagination(&self) -> PaginationRequest {
        PaginationRequest::default()
    }

    fn list_folders(&self, request: PageRequest) -> Result<Page<Folder>, AppError>;
    fn list_workspaces(&self, request: PageRequest) -> Result<Page<Workspace>, AppError>;
    fn list_sheets(&self, request: PageRequest) -> Result<Page<Sheet>, AppError>;
    fn list_columns(&self, sheet_id: SheetId, request: PageRequest) -> Result<Page<Column>, AppError>;
    fn list_attachments(
        &self,
        sheet_id: SheetId,
        request: PageRequest,
    ) -> Result<Page<Attachment>, AppError>;

    fn get_folder(&self, folder_id: FolderId) -> Result<Folder, AppError>;
    fn get_sheet(&self, sheet_id: SheetId, query: &SheetQuery) -> Result<Sheet, AppError>;
    /// Fetches one attachment including its short-lived download URL.
    fn get_attachment(
        &self,
        sheet_id: SheetId,
        attachment_id: AttachmentId,
    ) -> Result<Attachment, AppError>;

    fn add_rows(&self, sheet_id: SheetId, rows: &[Row]) -> Result<Vec<Row>, AppError>;
    fn update_rows(&self, sheet_id: SheetId, rows: &[Row]) -> Result<Vec<Row>, AppError>;
    fn delete_rows(
        &self,
        sheet_id: SheetId,
        row_ids: &[RowId],
        ignore_rows_not_found: bool,
    ) -> Result<Vec<RowId>, AppError>;
    fn copy_sheet(
        &self,
        sheet_id: SheetId,
        destination: &ContainerDestination,
        include: &[SheetCopyInclusion],
    ) -> Result<Sheet, AppError>;

    fn attach_file(
        &self,
        target: AttachmentTarget,
        name: &str,
        path: &Path,
    ) -> Result<Attachment, AppError>;
    /// Opens a byte stream for an attachment download URL.
    fn open_download(&self, url: &str) -> Result<Box<dyn Read + Send>, AppError>;
}

// Re-export the public interface
pub use client::SmartsheetHttpClient;
pub use pagination::{collect_all, fetch_all_pages};
pub use types::{PaginationRequest, PaginationResult};
