//! Storage result types
//!
//! Defines result structures returned by storage operations.

/// One entry of a directory listing, paired with its advisory permission.
#[derive(Debug, Clone)]
pub struct ListEntry {
    pub name: String,
    pub permission: String,
}

/// Result of a directory listing operation
#[derive(Debug, Clone)]
pub struct ListResult {
    pub entries: Vec<ListEntry>,
}

/// Result of a directory creation operation
#[derive(Debug, Clone)]
pub struct MkdirResult {
    pub name: String,
    pub permission: String,
}

/// Result of a directory removal operation
#[derive(Debug, Clone)]
pub struct RmdirResult {
    pub name: String,
}

/// Result of a file deletion operation
#[derive(Debug, Clone)]
pub struct DeleteResult {
    pub name: String,
}

/// Result of a permission change operation
#[derive(Debug, Clone)]
pub struct ChmodResult {
    pub name: String,
    pub permission: String,
}

/// Result of a permission query operation
#[derive(Debug, Clone)]
pub struct PermResult {
    pub name: String,
    pub permission: String,
}

/// Result of a file copy operation
#[derive(Debug, Clone)]
pub struct CopyResult {
    pub src: String,
    pub dest: String,
    pub permission: String,
}

/// Result of a move/rename operation
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub src: String,
    pub dest: String,
    pub permission: String,
}
