//! Raw buffer and JSON helpers for the tool binary.
//!
//! - `read_raw_bgra`: read a headerless `width × height × 4` BGRA dump.
//! - `write_raw`: write bytes as-is (used for masks).
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::image::BGRA_CHANNELS;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub fn read_raw_bgra(path: &Path, width: usize, height: usize) -> Result<Vec<u8>, String> {
    let data = fs::read(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let expected = width * height * BGRA_CHANNELS;
    if data.len() != expected {
        return Err(format!(
            "{} holds {} bytes, expected {expected} for {width}x{height} BGRA",
            path.display(),
            data.len()
        ));
    }
    Ok(data)
}

pub fn write_raw(path: &Path, bytes: &[u8]) -> Result<(), String> {
    ensure_parent_dir(path)?;
    fs::write(path, bytes).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
