//! Explorer Shell - Entry Point
//!
//! An interactive file explorer with advisory, application-level permissions
//! persisted in a flat dotfile.

use log::{error, info};

use explorer_shell::Shell;

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching explorer shell...");

    // Command failures never set the exit status; they are reported at the
    // prompt and the process still ends with 0.
    match Shell::new() {
        Ok(mut shell) => {
            if let Err(e) = shell.run() {
                error!("Shell stopped: {}", e);
            }
        }
        Err(e) => error!("Failed to start shell: {}", e),
    }
}
