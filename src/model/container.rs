use super::{AccessLevel, ContainerItem, Sheet};
use crate::types::{FolderId, Labeled, WorkspaceId};
use serde::{Deserialize, Serialize};

/// A folder, either in "Home" or inside a workspace.
///
/// Listings return folders with only id/name/permalink; `folders` stays
/// `None` until the folder itself is fetched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: Option<FolderId>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folders: Option<Vec<Folder>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheets: Option<Vec<Sheet>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reports: Option<Vec<ContainerItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sights: Option<Vec<ContainerItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<ContainerItem>>,
}

impl Folder {
    pub fn new(id: FolderId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether the folder's content lists have been loaded.
    pub fn is_populated(&self) -> bool {
        self.folders.is_some()
    }
}

impl Labeled for Folder {
    fn label(&self) -> String {
        match self.id {
            Some(id) => format!("{}(id:{})", self.name, id),
            None => self.name.clone(),
        }
    }
}

/// A workspace: a shared top-level container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: WorkspaceId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_level: Option<AccessLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folders: Option<Vec<Folder>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheets: Option<Vec<Sheet>>,
}

impl Workspace {
    pub fn new(id: WorkspaceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            access_level: None,
            permalink: None,
            favorite: None,
            folders: None,
            sheets: None,
        }
    }
}

impl Labeled for Workspace {
    fn label(&self) -> String {
        format!("{}(id:{})", self.name, self.id)
    }
}

/// Where a copied sheet should land.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Container<'a> {
    Folder(&'a Folder),
    Workspace(&'a Workspace),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationType {
    Home,
    Folder,
    Workspace,
}

/// Body of a copy/move request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDestination {
    pub destination_type: DestinationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<u64>,
    pub new_name: String,
}

impl ContainerDestination {
    /// Builds the destination; no container means the user's Home.
    pub fn new(container: Option<Container<'_>>, new_name: impl Into<String>) -> Self {
        let (destination_type, destination_id) = match container {
            Some(Container::Folder(folder)) => {
                (DestinationType::Folder, folder.id.map(|id| id.value()))
            }
            Some(Container::Workspace(workspace)) => {
                (DestinationType::Workspace, Some(workspace.id.value()))
            }
            None => (DestinationType::Home, None),
        };
        Self {
            destination_type,
            destination_id,
            new_name: new_name.into(),
        }
    }
}
