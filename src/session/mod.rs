//! Session state management

pub mod state;

pub use state::Session;
