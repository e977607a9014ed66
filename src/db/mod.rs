//! Flat-file persistence for the diary.
//!
//! A single JSON file is the source of truth for all users and entries. It is read
//! once at startup and rewritten whole after every mutation.

mod user_manager;

pub use user_manager::*;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;

use crate::errors::AppError;
use crate::models::Document;

/// Read the storage document, or an empty one if the file does not exist.
pub fn load_document(path: &Path) -> Result<Document, AppError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("No storage file at {:?}, starting empty", path);
            return Ok(Document::default());
        }
        Err(e) => return Err(e.into()),
    };

    let document: Document = serde_json::from_str(&raw)?;
    Ok(document)
}

/// Overwrite the storage file with the whole document.
///
/// Not atomic: a crash mid-write leaves a truncated file.
pub fn persist_document(path: &Path, document: &Document) -> Result<(), AppError> {
    // Ensure the parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;

    fs::write(path, buf)?;
    Ok(())
}
