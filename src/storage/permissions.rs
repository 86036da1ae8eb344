//! Permission store
//!
//! Persistent mapping from entry name to a fabricated permission string.
//! Permissions here are advisory metadata consulted only by this program;
//! they never touch real OS permission bits.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::StoreError;

/// Permission string returned for any name absent from the store.
pub const FALLBACK_PERMISSION: &str = "-rw-r--r--";

/// Permission string assigned to newly created directories.
pub const DIRECTORY_PERMISSION: &str = "drwxr-xr-x";

/// Maps entry names to permission strings, backed by a flat dotfile.
///
/// The file holds whitespace-separated `name permission` pairs. It is read
/// once at startup and rewritten wholesale after every mutation. Entries
/// iterate in ascending name order.
pub struct PermissionStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl PermissionStore {
    /// Loads the store from `path`.
    ///
    /// A missing file yields an empty store; only a real read failure is an
    /// error. Pairs are consumed two tokens at a time, a trailing unpaired
    /// token is dropped, and the last occurrence of a duplicate name wins.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let mut entries = BTreeMap::new();

        if path.exists() {
            let contents = fs::read_to_string(path).map_err(StoreError::ReadFailed)?;
            let mut tokens = contents.split_whitespace();
            while let (Some(name), Some(perm)) = (tokens.next(), tokens.next()) {
                entries.insert(name.to_string(), perm.to_string());
            }
            info!(
                "Loaded {} permission entries from {}",
                entries.len(),
                path.display()
            );
        } else {
            debug!("No permission file at {}, starting empty", path.display());
        }

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Rewrites the entire backing file, one `name permission` line per entry.
    pub fn save(&self) -> Result<(), StoreError> {
        let mut contents = String::new();
        for (name, perm) in &self.entries {
            contents.push_str(name);
            contents.push(' ');
            contents.push_str(perm);
            contents.push('\n');
        }
        fs::write(&self.path, contents).map_err(StoreError::WriteFailed)
    }

    /// Returns the stored permission for `name`, or the fallback literal.
    /// Never fails and never inserts.
    pub fn get(&self, name: &str) -> &str {
        self.entries
            .get(name)
            .map(String::as_str)
            .unwrap_or(FALLBACK_PERMISSION)
    }

    /// Returns whether `name` has an explicit entry.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Sets the permission for `name`, replacing any previous value.
    pub fn set(&mut self, name: &str, permission: &str) {
        self.entries.insert(name.to_string(), permission.to_string());
    }

    /// Removes the entry for `name` if present.
    pub fn erase(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    /// Iterates entries in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, perm)| (name.as_str(), perm.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decodes a 3-character octal-style mode into a 12-character permission
/// string.
///
/// Each character decodes as `c - '0'` with bits 4/2/1 mapped to `r`/`w`/`x`,
/// prefixed by a type flag: `d` on the first group when the target is a
/// directory, `-` everywhere else. The three groups are decoded
/// independently rather than as one owner/group/other mode; that is the
/// observed behavior of this tool and is kept as-is. No validation is done
/// beyond the length check, so non-digit characters decode to arbitrary bits.
pub fn decode_mode(code: &str, is_dir: bool) -> Option<String> {
    if code.chars().count() != 3 {
        return None;
    }

    let mut perm = String::with_capacity(12);
    for (i, c) in code.chars().enumerate() {
        let n = (c as u8).wrapping_sub(b'0');
        perm.push(if i == 0 && is_dir { 'd' } else { '-' });
        perm.push(if n & 4 != 0 { 'r' } else { '-' });
        perm.push(if n & 2 != 0 { 'w' } else { '-' });
        perm.push(if n & 1 != 0 { 'x' } else { '-' });
    }
    Some(perm)
}

/// Whether the first group's read slot (byte index 1) is set.
pub fn has_read_bit(permission: &str) -> bool {
    permission.as_bytes().get(1) == Some(&b'r')
}

/// Whether the first group's write slot (byte index 2) is set.
pub fn has_write_bit(permission: &str) -> bool {
    permission.as_bytes().get(2) == Some(&b'w')
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_get_falls_back_for_unknown_names() {
        let dir = tempdir().unwrap();
        let store = PermissionStore::load(&dir.path().join(".permissions.txt")).unwrap();
        assert_eq!(store.get("never-seen"), FALLBACK_PERMISSION);
        assert!(!store.contains("never-seen"));
    }

    #[test]
    fn test_set_get_erase() {
        let dir = tempdir().unwrap();
        let mut store = PermissionStore::load(&dir.path().join(".permissions.txt")).unwrap();
        store.set("docs", DIRECTORY_PERMISSION);
        assert_eq!(store.get("docs"), "drwxr-xr-x");
        assert!(store.erase("docs"));
        assert!(!store.erase("docs"));
        assert_eq!(store.get("docs"), FALLBACK_PERMISSION);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".permissions.txt");

        let mut store = PermissionStore::load(&path).unwrap();
        store.set("a.txt", "-r---r---r--");
        store.set("docs", DIRECTORY_PERMISSION);
        store.save().unwrap();

        let reloaded = PermissionStore::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("a.txt"), "-r---r---r--");
        assert_eq!(reloaded.get("docs"), DIRECTORY_PERMISSION);
    }

    #[test]
    fn test_load_keeps_last_duplicate() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".permissions.txt");
        std::fs::write(&path, "a.txt -r-------- a.txt -rwx-rwx-rwx\n").unwrap();

        let store = PermissionStore::load(&path).unwrap();
        assert_eq!(store.get("a.txt"), "-rwx-rwx-rwx");
    }

    #[test]
    fn test_load_drops_trailing_unpaired_token() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".permissions.txt");
        std::fs::write(&path, "a.txt -rw-r--r-- orphan").unwrap();

        let store = PermissionStore::load(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("orphan"), FALLBACK_PERMISSION);
    }

    #[test]
    fn test_decode_mode_755_file() {
        assert_eq!(decode_mode("755", false).unwrap(), "-rwx-r-x-r-x");
    }

    #[test]
    fn test_decode_mode_700_directory() {
        let perm = decode_mode("700", true).unwrap();
        assert_eq!(perm, "drwx--------");
        assert!(perm.starts_with("drwx"));
    }

    #[test]
    fn test_decode_mode_rejects_wrong_length() {
        assert!(decode_mode("75", false).is_none());
        assert!(decode_mode("7555", false).is_none());
        assert!(decode_mode("", false).is_none());
    }

    #[test]
    fn test_permission_bit_probes() {
        assert!(has_read_bit(FALLBACK_PERMISSION));
        assert!(has_write_bit(FALLBACK_PERMISSION));
        assert!(!has_write_bit("-r---r---r--"));
        assert!(!has_read_bit("--w---------"));
    }
}
