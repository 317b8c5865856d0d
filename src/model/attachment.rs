use super::User;
use crate::types::{AttachmentId, Labeled};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file or link attached to a sheet, row or comment.
///
/// `url` is only populated when a single attachment is fetched; listings
/// leave it empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: AttachmentId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_expires_in_millis: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_sub_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_in_kb: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<User>,
}

impl Attachment {
    pub fn new(id: AttachmentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            url: None,
            url_expires_in_millis: None,
            attachment_type: None,
            attachment_sub_type: None,
            mime_type: None,
            size_in_kb: None,
            parent_type: None,
            parent_id: None,
            created_at: None,
            created_by: None,
        }
    }
}

impl Labeled for Attachment {
    fn label(&self) -> String {
        format!("{}(id:{})", self.name, self.id)
    }
}
