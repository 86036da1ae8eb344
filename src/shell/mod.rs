//! Interactive shell
//!
//! The prompt/read/dispatch loop and its configuration.

pub mod config;
pub mod repl;

pub use config::ShellConfig;
pub use repl::Shell;
