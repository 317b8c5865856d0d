//! Smartsheet objects as they appear on the wire.
//!
//! Field names follow the API's camelCase JSON. Almost everything is
//! optional: the API omits whatever was not requested, and write requests
//! must leave read-only fields out entirely.

mod attachment;
mod common;
mod container;
mod row;
mod sheet;

pub use attachment::Attachment;
pub use common::*;
pub use container::{Container, ContainerDestination, DestinationType, Folder, Workspace};
pub use row::{Cell, CellValue, Discussion, Hyperlink, Row};
pub use sheet::{Column, Sheet};
