// src/formatting/json.rs
//! JSON dumps of model objects.

use crate::error::AppError;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Single line, no whitespace
    #[default]
    Compact,
    /// Indented, one field per line
    Pretty,
}

pub fn to_json_string<T>(value: &T, style: JsonStyle) -> Result<String, AppError>
where
    T: Serialize + ?Sized,
{
    let rendered = match style {
        JsonStyle::Compact => serde_json::to_string(value)?,
        JsonStyle::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(rendered)
}

/// Writes `value` to any writer; pretty output ends with a newline.
pub fn write_json<W, T>(mut writer: W, value: &T, style: JsonStyle) -> Result<(), AppError>
where
    W: Write,
    T: Serialize + ?Sized,
{
    match style {
        JsonStyle::Compact => serde_json::to_writer(&mut writer, value)?,
        JsonStyle::Pretty => {
            serde_json::to_writer_pretty(&mut writer, value)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Attachment;
    use crate::types::AttachmentId;

    #[test]
    fn test_compact_skips_absent_fields() {
        let attachment = Attachment::new(AttachmentId::new(5), "plan.pdf");
        assert_eq!(
            to_json_string(&attachment, JsonStyle::Compact).unwrap(),
            r#"{"id":5,"name":"plan.pdf"}"#
        );
    }

    #[test]
    fn test_write_pretty() {
        let mut out = Vec::new();
        write_json(&mut out, &serde_json::json!({"a": 1}), JsonStyle::Pretty).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"a\": 1\n}\n");
    }
}
