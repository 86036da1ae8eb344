//! Error handling
//!
//! Defines error types and handling for the explorer shell.

pub mod types;

pub use types::*;
