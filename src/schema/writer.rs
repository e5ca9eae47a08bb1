//! Schema persistence.
//!
//! Renders the graph schema as a JSON document with alphabetically sorted
//! keys and 4-space indentation, so regenerating the schema from an unchanged
//! model produces a byte-identical file and diffs stay minimal. The file is
//! written through a temporary sibling and renamed into place: a failed run
//! leaves no partial output at the final location.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use super::GraphSchema;

/// Schema persistence error types
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to serialize schema: {message}")]
    SerializeFailed { message: String },

    #[error("Failed to create output directory '{path}': {message}")]
    DirCreateFailed { path: String, message: String },

    #[error("Failed to write schema file '{path}': {message}")]
    IoFailed { path: String, message: String },
}

/// Render the schema as its canonical JSON document.
///
/// The schema is converted through `serde_json::Value` first: `Value` objects
/// are backed by a sorted map, so every object in the document ends up with
/// alphabetically ordered keys regardless of struct field order.
pub fn render_schema(schema: &GraphSchema) -> Result<String, WriteError> {
    let value = serde_json::to_value(schema).map_err(|e| WriteError::SerializeFailed {
        message: e.to_string(),
    })?;

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| WriteError::SerializeFailed {
            message: e.to_string(),
        })?;

    let mut rendered = String::from_utf8(buf).map_err(|e| WriteError::SerializeFailed {
        message: e.to_string(),
    })?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write the schema document to `path`, creating parent directories as
/// needed. The write goes through a `.tmp` sibling and an atomic rename.
pub fn write_schema(schema: &GraphSchema, path: &Path) -> Result<(), WriteError> {
    let rendered = render_schema(schema)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| WriteError::DirCreateFailed {
                path: parent.display().to_string(),
                message: e.to_string(),
            })?;
        }
    }

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &rendered).map_err(|e| WriteError::IoFailed {
        path: tmp_path.display().to_string(),
        message: e.to_string(),
    })?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        // Don't leave the temp sibling behind on a failed rename.
        let _ = fs::remove_file(&tmp_path);
        return Err(WriteError::IoFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        });
    }

    Ok(())
}
