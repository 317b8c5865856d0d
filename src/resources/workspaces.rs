// src/resources/workspaces.rs
use crate::api::{collect_all, SmartsheetApi};
use crate::error::AppError;
use crate::model::Workspace;

/// The first workspace named exactly `name`, in listing order.
pub fn find_workspace_by_name(
    api: &dyn SmartsheetApi,
    name: &str,
) -> Result<Option<Workspace>, AppError> {
    let workspaces = collect_all(|request| api.list_workspaces(request), &api.pagination())?;
    Ok(workspaces.into_iter().find(|workspace| workspace.name == name))
}
