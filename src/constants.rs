// src/constants.rs
//! Domain constants that define the operational boundaries of the system.

use crate::model::{ObjectExclusion, SheetCopyInclusion, SheetInclusion};

// ---------------------------------------------------------------------------
// Smartsheet API boundaries
// ---------------------------------------------------------------------------

/// Production API endpoint.
pub const SMARTSHEET_PROD_URL: &str = "https://api.smartsheet.com/2.0";

/// Environment variable consulted when no access token is given explicitly.
pub const ACCESS_TOKEN_ENV_VAR: &str = "SMARTSHEET_ACCESS_TOKEN";

/// Environment variable consulted when no base URL is given explicitly.
pub const BASE_URL_ENV_VAR: &str = "SMARTSHEET_BASE_URL";

/// How many objects we ask for per page of results.
pub const SMARTSHEET_DEFAULT_PAGE_SIZE: u32 = 100;

/// Largest page size the API accepts.
pub const SMARTSHEET_MAX_PAGE_SIZE: u32 = 10_000;

// ---------------------------------------------------------------------------
// Request shaping
// ---------------------------------------------------------------------------

/// Every optional element of a sheet.
pub const ALL_SHEET_INCLUSIONS: &[SheetInclusion] = SheetInclusion::ALL;

/// What `get_sheet_no_rows` asks for.
pub const NORMAL_SHEET_INCLUSIONS: &[SheetInclusion] = &[
    SheetInclusion::OwnerInfo,
    SheetInclusion::ColumnType,
    SheetInclusion::Source,
];

pub const ALL_OBJECT_EXCLUSIONS: &[ObjectExclusion] = ObjectExclusion::ALL;

pub const ALL_SHEET_COPY_INCLUSIONS: &[SheetCopyInclusion] = SheetCopyInclusion::ALL;

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;

/// Estimated characters per attachment line, used to pre-allocate output strings.
pub const CHARS_PER_ATTACHMENT_ESTIMATE: usize = 100;
