//! Shell configuration
//!
//! Fixed settings for a shell run. The tool takes no flags and reads no
//! environment variables (besides `RUST_LOG` for the logger), so these only
//! change from the defaults in tests.

/// Shell configuration structure
pub struct ShellConfig {
    /// User name shown in the prompt and attached to the session.
    pub user: String,
    /// Host literal shown after the `@` in the prompt.
    pub host: String,
    /// Name of the permission dotfile kept in the base directory.
    pub permissions_file: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user: "user".to_string(),
            host: "explorer".to_string(),
            permissions_file: ".permissions.txt".to_string(),
        }
    }
}
