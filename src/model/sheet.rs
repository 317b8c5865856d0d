use super::{AccessLevel, Attachment, Discussion, Row, Source};
use crate::types::{ColumnId, Labeled, SheetId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sheet column definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ColumnId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub column_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Labeled for Column {
    fn label(&self) -> String {
        match self.id {
            Some(id) => format!("{}(id:{})", self.title, id),
            None => self.title.clone(),
        }
    }
}

/// A sheet, optionally with its columns, rows and attachments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    pub id: SheetId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_row_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_level: Option<AccessLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gantt_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_management_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Row>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discussions: Option<Vec<Discussion>>,
}

impl Sheet {
    pub fn new(id: SheetId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            version: None,
            total_row_count: None,
            access_level: None,
            permalink: None,
            read_only: None,
            gantt_enabled: None,
            dependencies_enabled: None,
            resource_management_enabled: None,
            favorite: None,
            owner: None,
            owner_id: None,
            source: None,
            created_at: None,
            modified_at: None,
            columns: Vec::new(),
            rows: Vec::new(),
            attachments: None,
            discussions: None,
        }
    }
}

impl Labeled for Sheet {
    fn label(&self) -> String {
        format!("{}(id:{})", self.name, self.id)
    }
}
