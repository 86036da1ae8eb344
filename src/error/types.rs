//! Error types
//!
//! Defines domain-specific error types for each module of the explorer shell.

use std::fmt;
use std::io;

/// Storage module errors
///
/// Covers filesystem operations and the advisory permission checks that
/// guard them. Every command failure maps to exactly one of these.
#[derive(Debug)]
pub enum StorageError {
    NotFound(String),
    NotADirectory(String),
    DirectoryNotEmpty(String),
    PermissionDenied(String),
    InvalidMode(String),
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NotFound(p) => write!(f, "Not found: {}", p),
            StorageError::NotADirectory(p) => write!(f, "Not a directory: {}", p),
            StorageError::DirectoryNotEmpty(p) => write!(f, "Directory not empty: {}", p),
            StorageError::PermissionDenied(p) => write!(f, "Permission denied: {}", p),
            StorageError::InvalidMode(m) => write!(f, "Invalid permission code: {}", m),
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

impl From<StoreError> for StorageError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::ReadFailed(e) | StoreError::WriteFailed(e) => StorageError::IoError(e),
        }
    }
}

/// Permission store errors
///
/// The store only fails on real I/O problems; a missing store file on load
/// is an empty store, not an error.
#[derive(Debug)]
pub enum StoreError {
    ReadFailed(io::Error),
    WriteFailed(io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::ReadFailed(e) => write!(f, "Failed to read permission file: {}", e),
            StoreError::WriteFailed(e) => write!(f, "Failed to write permission file: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// General explorer shell error that encompasses all error types
#[derive(Debug)]
pub enum ExplorerError {
    Storage(StorageError),
    Store(StoreError),
    IoError(io::Error),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplorerError::Storage(e) => write!(f, "Storage error: {}", e),
            ExplorerError::Store(e) => write!(f, "Permission store error: {}", e),
            ExplorerError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ExplorerError {}

impl From<StorageError> for ExplorerError {
    fn from(error: StorageError) -> Self {
        ExplorerError::Storage(error)
    }
}

impl From<StoreError> for ExplorerError {
    fn from(error: StoreError) -> Self {
        ExplorerError::Store(error)
    }
}

impl From<io::Error> for ExplorerError {
    fn from(error: io::Error) -> Self {
        ExplorerError::IoError(error)
    }
}
