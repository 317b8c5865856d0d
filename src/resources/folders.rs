// src/resources/folders.rs
//! Home-folder lookups.

use crate::api::{collect_all, SmartsheetApi};
use crate::error::AppError;
use crate::model::Folder;
use crate::types::ValidationError;

/// The first home folder named exactly `name`, in listing order.
pub fn find_first_folder_by_name(
    api: &dyn SmartsheetApi,
    name: &str,
) -> Result<Option<Folder>, AppError> {
    Ok(list_home_folders(api)?
        .into_iter()
        .find(|folder| folder.name == name))
}

/// Every home folder named exactly `name`, in listing order.
pub fn find_folders_by_name(api: &dyn SmartsheetApi, name: &str) -> Result<Vec<Folder>, AppError> {
    Ok(list_home_folders(api)?
        .into_iter()
        .filter(|folder| folder.name == name)
        .collect())
}

/// Fills in a folder's contents if it came from a listing.
///
/// Listings return folders without children; a populated folder always
/// carries a (possibly empty) `folders` list, so that field decides.
pub fn populate_if_needed(api: &dyn SmartsheetApi, mut folder: Folder) -> Result<Folder, AppError> {
    if folder.is_populated() {
        return Ok(folder);
    }
    let folder_id = folder
        .id
        .ok_or(AppError::Validation(ValidationError::EmptyField("folder.id")))?;

    log::debug!("Populating folder '{}' ({})", folder.name, folder_id);
    let details = api.get_folder(folder_id)?;
    folder.favorite = details.favorite;
    folder.folders = Some(details.folders.unwrap_or_default());
    folder.reports = details.reports;
    folder.sheets = details.sheets;
    folder.sights = details.sights;
    folder.templates = details.templates;
    Ok(folder)
}

fn list_home_folders(api: &dyn SmartsheetApi) -> Result<Vec<Folder>, AppError> {
    collect_all(|request| api.list_folders(request), &api.pagination())
}
