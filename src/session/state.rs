//! Module `session`
//!
//! Defines the `Session` struct holding the mutable state of one shell run:
//! the fixed user name, the one-shot sudo flag, and the permission store.
//! One instance is built at startup and passed by `&mut` through dispatch.

use crate::storage::PermissionStore;

/// Represents the state of a running shell session.
pub struct Session {
    current_user: String,
    sudo_mode: bool,
    store: PermissionStore,
}

impl Session {
    pub fn new(current_user: &str, store: PermissionStore) -> Self {
        Self {
            current_user: current_user.to_string(),
            sudo_mode: false,
            store,
        }
    }

    /// Returns the user name shown in the prompt. Never changes.
    pub fn current_user(&self) -> &str {
        &self.current_user
    }

    /// Returns whether the sudo override is armed for this iteration.
    pub fn is_sudo_active(&self) -> bool {
        self.sudo_mode
    }

    /// Arms the sudo override. The dispatch loop clears it again at the end
    /// of every iteration, so it lasts one command at most.
    pub fn arm_sudo(&mut self) {
        self.sudo_mode = true;
    }

    /// Clears the sudo override.
    pub fn clear_sudo(&mut self) {
        self.sudo_mode = false;
    }

    pub fn store(&self) -> &PermissionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PermissionStore {
        &mut self.store
    }
}
