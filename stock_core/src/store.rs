//! Inventory file persistence.
//!
//! The inventory is stored as a pretty-printed JSON object mapping item
//! names to integer quantities, in insertion order.

use crate::{Error, Inventory, LedgerError, Reporter, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Inventory file used when no path is configured
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

const INDENT: &[u8] = b"    ";

/// Load an inventory from `path`.
///
/// A missing file yields [`LedgerError::StorageMissing`]. Unreadable or
/// undecodable content yields [`LedgerError::StorageCorrupt`].
pub fn load(path: &Path) -> std::result::Result<Inventory, LedgerError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(LedgerError::StorageMissing(path.to_path_buf()));
        }
        Err(e) => return Err(corrupt(path, e)),
    };

    let inventory: Inventory = serde_json::from_str(&contents).map_err(|e| corrupt(path, e))?;
    if inventory.contains("") {
        return Err(corrupt(path, "empty item name"));
    }

    tracing::debug!("Loaded {} items from {:?}", inventory.len(), path);
    Ok(inventory)
}

/// Load an inventory, substituting an empty one on any storage problem.
///
/// The problem is handed to `reporter` instead of being returned.
pub fn load_or_default<R: Reporter>(path: &Path, mut reporter: R) -> Inventory {
    match load(path) {
        Ok(inventory) => inventory,
        Err(diagnostic) => {
            reporter.report(&diagnostic);
            Inventory::default()
        }
    }
}

/// Save an inventory to `path`, replacing any existing content.
///
/// Atomically writes by:
/// 1. Writing to a temp file in the target directory
/// 2. Syncing to disk
/// 3. Renaming over the original
pub fn save(inventory: &Inventory, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = std::io::BufWriter::new(temp.as_file_mut());
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        inventory.serialize(&mut serializer)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::debug!("Saved {} items to {:?}", inventory.len(), path);
    Ok(())
}

fn corrupt(path: &Path, reason: impl ToString) -> LedgerError {
    LedgerError::StorageCorrupt {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
