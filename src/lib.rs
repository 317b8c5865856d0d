// src/lib.rs
//! smartsheet-helpers: convenience helpers over the Smartsheet REST API.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `ValidationError`, `SmartsheetErrorCode`
//! - **Configuration**: `ClientConfig`
//! - **Domain model**: `Sheet`, `Row`, `Cell`, `Column`, `Attachment`, `Folder`, `Workspace`
//! - **Domain types**: `Id<T>` aliases, `AccessToken`, `BaseUrl`, `KeyedMap`
//! - **API client**: the `SmartsheetApi` trait, `SmartsheetHttpClient` and the page aggregator
//! - **Helpers**: `resources::*` lookups and updates built on the trait
//! - **Formatting**: sheet, row and page summaries plus JSON dumps

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod model;
pub mod resources;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, SmartsheetErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::ClientConfig;

// --- Domain Model ---
pub use crate::model::{
    AccessLevel, Attachment, Cell, CellValue, Column, Container, ContainerDestination,
    DestinationType, Folder, Row, Sheet, Workspace,
};

// --- Domain Types ---
pub use crate::types::{
    build_keyed_map, AccessToken, AttachmentId, BaseUrl, ColumnId, DuplicateKey, FolderId,
    KeyedMap, Labeled, RowId, SheetId, Warning, WarningLevel, WorkspaceId,
};

// --- API Client ---
pub use crate::api::{
    collect_all, fetch_all_pages,
    types::{Page, PageRequest, SheetQuery},
    AttachmentTarget, PaginationRequest, PaginationResult, SmartsheetApi, SmartsheetHttpClient,
};

// --- Formatting ---
pub use crate::formatting::{sheet_to_string, JsonStyle, SheetFormatOption};
