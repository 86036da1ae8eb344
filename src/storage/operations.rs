//! Storage operations
//!
//! Filesystem wrappers behind the shell commands. Each operation checks its
//! preconditions in a fixed order, performs the filesystem call, updates the
//! permission store, and returns a typed result or a typed failure. The
//! advisory permission checks can be bypassed for one command with sudo.

use std::fs;
use std::path::Path;

use log::{error, info};

use crate::error::StorageError;
use crate::storage::permissions::{
    DIRECTORY_PERMISSION, PermissionStore, decode_mode, has_read_bit, has_write_bit,
};
use crate::storage::results::{
    ChmodResult, CopyResult, DeleteResult, ListEntry, ListResult, MkdirResult, MoveResult,
    PermResult, RmdirResult,
};

/// Lists the contents of the base directory.
///
/// Every entry is paired with its stored permission, or the fallback literal
/// for names the store has never seen. Entries come back in filesystem
/// iteration order.
pub fn list_directory(base: &Path, store: &PermissionStore) -> Result<ListResult, StorageError> {
    let mut entries = vec![];

    for entry in fs::read_dir(base)?.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        let permission = store.get(&name).to_string();
        entries.push(ListEntry { name, permission });
    }

    info!("Listed {} - {} entries", base.display(), entries.len());
    Ok(ListResult { entries })
}

/// Creates a directory and records the default directory permission.
pub fn make_directory(
    base: &Path,
    store: &mut PermissionStore,
    name: &str,
) -> Result<MkdirResult, StorageError> {
    if let Err(e) = fs::create_dir(base.join(name)) {
        error!("Failed to create directory {}: {}", name, e);
        return Err(StorageError::from(e));
    }

    store.set(name, DIRECTORY_PERMISSION);
    store.save()?;

    info!("Created directory {} ({})", name, DIRECTORY_PERMISSION);
    Ok(MkdirResult {
        name: name.to_string(),
        permission: DIRECTORY_PERMISSION.to_string(),
    })
}

/// Removes a directory if it exists and is empty, and erases its entry.
pub fn remove_directory(
    base: &Path,
    store: &mut PermissionStore,
    name: &str,
) -> Result<RmdirResult, StorageError> {
    let path = base.join(name);

    if !path.exists() {
        return Err(StorageError::NotFound(name.to_string()));
    }
    if !path.is_dir() {
        return Err(StorageError::NotADirectory(name.to_string()));
    }
    if fs::read_dir(&path)?.next().is_some() {
        return Err(StorageError::DirectoryNotEmpty(name.to_string()));
    }

    fs::remove_dir(&path)?;
    store.erase(name);
    store.save()?;

    info!("Removed directory {}", name);
    Ok(RmdirResult {
        name: name.to_string(),
    })
}

/// Deletes a file and erases its entry.
///
/// Without sudo the stored permission's write slot must be set. The fallback
/// permission is writable, so files never chmod'ed by this tool delete
/// without sudo.
pub fn delete_file(
    base: &Path,
    store: &mut PermissionStore,
    sudo: bool,
    name: &str,
) -> Result<DeleteResult, StorageError> {
    let path = base.join(name);

    if !path.exists() {
        return Err(StorageError::NotFound(name.to_string()));
    }
    if !sudo && !has_write_bit(store.get(name)) {
        return Err(StorageError::PermissionDenied(name.to_string()));
    }

    fs::remove_file(&path)?;
    store.erase(name);
    store.save()?;

    info!("Deleted {}", name);
    Ok(DeleteResult {
        name: name.to_string(),
    })
}

/// Recomputes the stored permission of an entry from a 3-character code.
pub fn change_mode(
    base: &Path,
    store: &mut PermissionStore,
    name: &str,
    code: &str,
) -> Result<ChmodResult, StorageError> {
    let path = base.join(name);

    if !path.exists() {
        return Err(StorageError::NotFound(name.to_string()));
    }

    let permission = decode_mode(code, path.is_dir())
        .ok_or_else(|| StorageError::InvalidMode(code.to_string()))?;

    store.set(name, &permission);
    store.save()?;

    info!("Changed permission of {} to {}", name, permission);
    Ok(ChmodResult {
        name: name.to_string(),
        permission,
    })
}

/// Looks up the effective permission of an existing entry.
pub fn show_permission(
    base: &Path,
    store: &PermissionStore,
    name: &str,
) -> Result<PermResult, StorageError> {
    if !base.join(name).exists() {
        return Err(StorageError::NotFound(name.to_string()));
    }

    Ok(PermResult {
        name: name.to_string(),
        permission: store.get(name).to_string(),
    })
}

/// Copies a file, overwriting the destination, and copies the source's
/// permission to the destination name.
///
/// Without sudo the source's read slot must be set. On denial or failure the
/// store is not touched.
pub fn copy_file(
    base: &Path,
    store: &mut PermissionStore,
    sudo: bool,
    src: &str,
    dest: &str,
) -> Result<CopyResult, StorageError> {
    if !base.join(src).exists() {
        return Err(StorageError::NotFound(src.to_string()));
    }
    if !sudo && !has_read_bit(store.get(src)) {
        return Err(StorageError::PermissionDenied(src.to_string()));
    }

    if let Err(e) = fs::copy(base.join(src), base.join(dest)) {
        error!("Failed to copy {} to {}: {}", src, dest, e);
        return Err(StorageError::from(e));
    }

    let permission = store.get(src).to_string();
    store.set(dest, &permission);
    store.save()?;

    info!("Copied {} to {}", src, dest);
    Ok(CopyResult {
        src: src.to_string(),
        dest: dest.to_string(),
        permission,
    })
}

/// Renames an entry and moves its permission entry to the new name.
///
/// Without sudo the source's write slot must be set.
pub fn move_entry(
    base: &Path,
    store: &mut PermissionStore,
    sudo: bool,
    src: &str,
    dest: &str,
) -> Result<MoveResult, StorageError> {
    if !base.join(src).exists() {
        return Err(StorageError::NotFound(src.to_string()));
    }
    if !sudo && !has_write_bit(store.get(src)) {
        return Err(StorageError::PermissionDenied(src.to_string()));
    }

    if let Err(e) = fs::rename(base.join(src), base.join(dest)) {
        error!("Failed to move {} to {}: {}", src, dest, e);
        return Err(StorageError::from(e));
    }

    let permission = store.get(src).to_string();
    store.set(dest, &permission);
    store.erase(src);
    store.save()?;

    info!("Moved {} to {}", src, dest);
    Ok(MoveResult {
        src: src.to_string(),
        dest: dest.to_string(),
        permission,
    })
}
