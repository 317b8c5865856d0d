use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Strong typing for Smartsheet object IDs with phantom types.
///
/// Smartsheet identifies every object with a positive 64-bit integer. The
/// marker keeps a row ID from being passed where a column ID is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: u64,
    _phantom: PhantomData<T>,
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SheetMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FolderMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkspaceMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttachmentMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiscussionMarker;

/// Type aliases for specific ID types
pub type SheetId = Id<SheetMarker>;
pub type RowId = Id<RowMarker>;
pub type ColumnId = Id<ColumnMarker>;
pub type FolderId = Id<FolderMarker>;
pub type WorkspaceId = Id<WorkspaceMarker>;
pub type AttachmentId = Id<AttachmentMarker>;
pub type DiscussionId = Id<DiscussionMarker>;

impl<T> Id<T> {
    pub const fn new(value: u64) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Parses a decimal ID as printed in Smartsheet URLs and API payloads.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        match trimmed.parse::<u64>() {
            Ok(0) => Err(ValidationError::InvalidId(
                "ID must be a positive integer".to_string(),
            )),
            Ok(value) => Ok(Self::new(value)),
            Err(_) => Err(ValidationError::InvalidId(format!(
                "Could not parse Smartsheet ID from: {}",
                input
            ))),
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Re-tags the ID. Folders and workspaces share the container ID space.
    pub fn cast<U>(self) -> Id<U> {
        Id::new(self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T> From<u64> for Id<T> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u64::deserialize(deserializer)?;
        Ok(Self::new(value))
    }
}
