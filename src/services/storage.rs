use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::services::CartError;

pub const ARCHIVE_DIR: &str = "archives";

/// Directory the archive copies of `path` go to: `<dirname(path)>/archives`.
pub fn archive_dir(path: &Path) -> PathBuf {
    parent_dir(path).join(ARCHIVE_DIR)
}

fn parent_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new(""))
}

fn ensure_parent(path: &Path) -> Result<(), CartError> {
    let parent = parent_dir(path);
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Writes `value` as 2-space indented JSON, creating missing parent
/// directories and truncating any existing file.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), CartError> {
    ensure_parent(path)?;
    let raw = serde_json::to_string_pretty(value)?;
    fs::write(path, raw)?;
    Ok(())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CartError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
