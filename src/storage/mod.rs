//! File system storage management
//!
//! Handles filesystem operations, the advisory permission store, and the
//! typed results the command handlers render.

pub mod operations;
pub mod permissions;
pub mod results;

pub use permissions::{DIRECTORY_PERMISSION, FALLBACK_PERMISSION, PermissionStore};
