// src/resources/attachments.rs
//! Attachment listing, upload and download.

use crate::api::{collect_all, AttachmentTarget, SmartsheetApi};
use crate::constants::CHARS_PER_ATTACHMENT_ESTIMATE;
use crate::error::AppError;
use crate::formatting::json::{to_json_string, JsonStyle};
use crate::model::{Attachment, Sheet};
use crate::types::{build_keyed_map, KeyedMap, Labeled, RowId, SheetId, ValidationError};
use std::fmt::{self, Write as _};
use std::fs::File;
use std::hash::Hash;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Lists every attachment of a sheet and keys them with `key_fn`.
pub fn attachment_map<K, F>(
    api: &dyn SmartsheetApi,
    sheet_id: SheetId,
    key_fn: F,
) -> Result<KeyedMap<K, Attachment>, AppError>
where
    K: Hash + Eq + fmt::Display,
    F: Fn(&Attachment) -> K,
{
    let attachments = collect_all(
        |request| api.list_attachments(sheet_id, request),
        &api.pagination(),
    )?;
    Ok(build_attachment_map(attachments, key_fn))
}

/// Like [`attachment_map`], but uses the attachments embedded in `sheet`
/// when it was fetched with them.
pub fn attachment_map_for_sheet<K, F>(
    api: &dyn SmartsheetApi,
    sheet: &Sheet,
    key_fn: F,
) -> Result<KeyedMap<K, Attachment>, AppError>
where
    K: Hash + Eq + fmt::Display,
    F: Fn(&Attachment) -> K,
{
    match &sheet.attachments {
        Some(attachments) => Ok(build_attachment_map(attachments.iter().cloned(), key_fn)),
        None => attachment_map(api, sheet.id, key_fn),
    }
}

/// Keys attachments with `key_fn`; on a collision the first one is kept.
pub fn build_attachment_map<K, I, F>(attachments: I, key_fn: F) -> KeyedMap<K, Attachment>
where
    I: IntoIterator<Item = Attachment>,
    K: Hash + Eq + fmt::Display,
    F: Fn(&Attachment) -> K,
{
    build_keyed_map(attachments, key_fn)
}

pub fn add_sheet_attachment(
    api: &dyn SmartsheetApi,
    sheet_id: SheetId,
    name: &str,
    source: &Path,
) -> Result<Attachment, AppError> {
    api.attach_file(AttachmentTarget::Sheet(sheet_id), name, source)
}

pub fn add_row_attachment(
    api: &dyn SmartsheetApi,
    sheet_id: SheetId,
    row_id: RowId,
    name: &str,
    source: &Path,
) -> Result<Attachment, AppError> {
    api.attach_file(AttachmentTarget::Row(sheet_id, row_id), name, source)
}

/// Downloads an attachment into `dir`, naming the file after the attachment.
///
/// `on_file` receives the target path before anything is transferred, so
/// callers can clean up after a failed download. Returns the bytes written.
pub fn download_to_dir<F>(
    api: &dyn SmartsheetApi,
    dir: &Path,
    attachment: &Attachment,
    on_file: F,
) -> Result<u64, AppError>
where
    F: FnOnce(&Path),
{
    let target = target_path(dir, attachment)?;
    on_file(&target);

    let url = attachment
        .url
        .as_deref()
        .ok_or_else(|| AppError::MissingAttachmentUrl {
            attachment: attachment.label(),
        })?;

    let mut source = api.open_download(url)?;
    let mut sink = BufWriter::new(File::create(&target)?);
    let copied = io::copy(&mut source, &mut sink)?;
    sink.flush()?;
    log::info!("Downloaded {} ({} bytes) to {}", attachment.name, copied, target.display());
    Ok(copied)
}

/// One `key:<compact json>` line per entry.
pub fn attachment_map_to_string<K>(map: &KeyedMap<K, Attachment>) -> String
where
    K: Hash + Eq + fmt::Display,
{
    let mut out = String::with_capacity(map.len() * CHARS_PER_ATTACHMENT_ESTIMATE);
    for (key, attachment) in map {
        let json = to_json_string(attachment, JsonStyle::Compact)
            .unwrap_or_else(|e| format!("<unserializable: {}>", e));
        let _ = writeln!(out, "{}:{}", key, json);
    }
    out
}

fn target_path(dir: &Path, attachment: &Attachment) -> Result<PathBuf, AppError> {
    // Only the final component is used so a name can't escape `dir`.
    let file_name = Path::new(&attachment.name)
        .file_name()
        .ok_or(ValidationError::EmptyField("attachment.name"))?;
    Ok(dir.join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AttachmentId;

    fn attachment(id: u64, name: &str) -> Attachment {
        Attachment::new(AttachmentId::new(id), name)
    }

    #[test]
    fn test_build_map_keeps_first_duplicate() {
        let map = build_attachment_map(
            vec![attachment(1, "a.pdf"), attachment(2, "a.pdf"), attachment(3, "b.pdf")],
            |a| a.name.clone(),
        );
        assert_eq!(map.len(), 2);
        assert_eq!(map["a.pdf"].id, AttachmentId::new(1));
        assert_eq!(map.duplicates().len(), 1);
    }

    #[test]
    fn test_map_to_string_lines() {
        let map = build_attachment_map(vec![attachment(1, "a.pdf"), attachment(2, "b.pdf")], |a| a.id);
        assert_eq!(
            attachment_map_to_string(&map),
            "1:{\"id\":1,\"name\":\"a.pdf\"}\n2:{\"id\":2,\"name\":\"b.pdf\"}\n"
        );
    }

    #[test]
    fn test_target_path_strips_directories() {
        let dir = Path::new("/tmp/out");
        let path = target_path(dir, &attachment(1, "../../etc/passwd")).unwrap();
        assert_eq!(path, Path::new("/tmp/out/passwd"));
        assert!(target_path(dir, &attachment(2, "")).is_err());
    }
}
