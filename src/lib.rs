pub mod commands;
pub mod display;
pub mod error;
pub mod session;
pub mod shell;
pub mod storage;

pub use shell::Shell;
