use crate::types::Labeled;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Smartsheet user reference as embedded in rows and attachments.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, &self.email) {
            (Some(name), Some(email)) => write!(f, "{} <{}>", name, email),
            (Some(name), None) => write!(f, "{}", name),
            (None, Some(email)) => write!(f, "{}", email),
            (None, None) => write!(f, "null"),
        }
    }
}

/// The object a sheet was created from (template, another sheet, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: u64,
    #[serde(rename = "type")]
    pub source_type: String,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.source_type, self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessLevel {
    Viewer,
    Commenter,
    Editor,
    EditorShare,
    Admin,
    Owner,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Viewer => "VIEWER",
            Self::Commenter => "COMMENTER",
            Self::Editor => "EDITOR",
            Self::EditorShare => "EDITOR_SHARE",
            Self::Admin => "ADMIN",
            Self::Owner => "OWNER",
            Self::Unknown => "UNKNOWN",
        };
        write!(f, "{}", text)
    }
}

/// A report, sight or template listed inside a folder or workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerItem {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
}

impl Labeled for ContainerItem {
    fn label(&self) -> String {
        format!("{}(id:{})", self.name, self.id)
    }
}

/// Optional sheet elements requested through `include=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetInclusion {
    Attachments,
    ColumnType,
    ContactReferences,
    CrossSheetReferences,
    Data,
    Discussions,
    Filters,
    FilterDefinitions,
    Format,
    GanttConfig,
    ObjectValue,
    OwnerInfo,
    RowPermalink,
    Source,
    WriterInfo,
}

impl SheetInclusion {
    pub const ALL: &'static [SheetInclusion] = &[
        Self::Attachments,
        Self::ColumnType,
        Self::ContactReferences,
        Self::CrossSheetReferences,
        Self::Data,
        Self::Discussions,
        Self::Filters,
        Self::FilterDefinitions,
        Self::Format,
        Self::GanttConfig,
        Self::ObjectValue,
        Self::OwnerInfo,
        Self::RowPermalink,
        Self::Source,
        Self::WriterInfo,
    ];

    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Attachments => "attachments",
            Self::ColumnType => "columnType",
            Self::ContactReferences => "contactReferences",
            Self::CrossSheetReferences => "crossSheetReferences",
            Self::Data => "data",
            Self::Discussions => "discussions",
            Self::Filters => "filters",
            Self::FilterDefinitions => "filterDefinitions",
            Self::Format => "format",
            Self::GanttConfig => "ganttConfig",
            Self::ObjectValue => "objectValue",
            Self::OwnerInfo => "ownerInfo",
            Self::RowPermalink => "rowPermalink",
            Self::Source => "source",
            Self::WriterInfo => "writerInfo",
        }
    }
}

/// Sheet elements suppressed through `exclude=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectExclusion {
    NonexistentCells,
    FilteredOutRows,
    LinkInFromCellDetails,
    LinksOutToCellsDetails,
}

impl ObjectExclusion {
    pub const ALL: &'static [ObjectExclusion] = &[
        Self::NonexistentCells,
        Self::FilteredOutRows,
        Self::LinkInFromCellDetails,
        Self::LinksOutToCellsDetails,
    ];

    pub fn as_param(&self) -> &'static str {
        match self {
            Self::NonexistentCells => "nonexistentCells",
            Self::FilteredOutRows => "filteredOutRows",
            Self::LinkInFromCellDetails => "linkInFromCellDetails",
            Self::LinksOutToCellsDetails => "linksOutToCellsDetails",
        }
    }
}

/// What a sheet copy carries over from the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetCopyInclusion {
    Attachments,
    CellLinks,
    Data,
    Discussions,
    Filters,
    Forms,
    RuleRecipients,
    Rules,
    Shares,
}

impl SheetCopyInclusion {
    pub const ALL: &'static [SheetCopyInclusion] = &[
        Self::Attachments,
        Self::CellLinks,
        Self::Data,
        Self::Discussions,
        Self::Filters,
        Self::Forms,
        Self::RuleRecipients,
        Self::Rules,
        Self::Shares,
    ];

    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Attachments => "attachments",
            Self::CellLinks => "cellLinks",
            Self::Data => "data",
            Self::Discussions => "discussions",
            Self::Filters => "filters",
            Self::Forms => "forms",
            Self::RuleRecipients => "ruleRecipients",
            Self::Rules => "rules",
            Self::Shares => "shares",
        }
    }
}

/// Joins inclusion/exclusion flags into a comma separated query value.
pub fn join_params<T, F>(items: &[T], as_param: F) -> String
where
    F: Fn(&T) -> &'static str,
{
    items.iter().map(as_param).collect::<Vec<_>>().join(",")
}
