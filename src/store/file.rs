//! JSON persistence for allow-lists.

use super::AllowList;
use crate::error::StoreError;
use std::path::Path;

/// Read an allow-list from a JSON file.
///
/// # Arguments
/// * `path` - The file to read
///
/// # Returns
/// * `Ok(AllowList)` - The parsed allow-list
/// * `Err` - If the file is missing, unreadable or not valid JSON
pub fn load(path: &Path) -> Result<AllowList, StoreError> {
    if !path.exists() {
        return Err(StoreError::Storage(format!(
            "Allow-list file does not exist: {}",
            path.display()
        )));
    }
    log::info!("Reading allow-list file: {}", path.display());
    let json = std::fs::read_to_string(path)
        .map_err(|e| StoreError::Storage(format!("Error reading {}: {e}", path.display())))?;
    let list: AllowList = serde_json::from_str(&json)
        .map_err(|e| StoreError::Storage(format!("Error parsing {}: {e}", path.display())))?;
    log::debug!("Loaded {} record(s) from {}", list.len(), path.display());
    Ok(list)
}

/// Read an allow-list, or start a new empty one named `name` if the file
/// does not exist yet.
pub fn load_or_new(path: &Path, name: &str) -> Result<AllowList, StoreError> {
    if path.exists() {
        load(path)
    } else {
        log::warn!(
            "Allow-list file not found: {}, starting empty list '{name}'",
            path.display()
        );
        Ok(AllowList::new(name, ""))
    }
}

/// Write an allow-list as pretty-printed JSON.
pub fn save(list: &AllowList, path: &Path) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(list)
        .map_err(|e| StoreError::Storage(format!("Error serializing allow-list: {e}")))?;
    log::info!(
        "Writing {} record(s) to allow-list file: {}",
        list.len(),
        path.display()
    );
    std::fs::write(path, json)
        .map_err(|e| StoreError::Storage(format!("Error writing {}: {e}", path.display())))?;
    Ok(())
}
