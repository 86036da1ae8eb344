//! Interactive loop
//!
//! Owns the session and runs the prompt/read/dispatch cycle: print the
//! prompt, read one line, parse it into a command, dispatch it, and clear
//! the sudo override. Blocking stdin/stdout throughout, one command at a
//! time. End of input is treated the same as `exit`.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use log::{debug, info};

use crate::commands::{CommandResult, handle_command, parse_command};
use crate::error::ExplorerError;
use crate::session::Session;
use crate::shell::config::ShellConfig;
use crate::storage::PermissionStore;

pub struct Shell {
    config: ShellConfig,
    base: PathBuf,
    session: Session,
}

impl Shell {
    /// Builds a shell rooted at the process working directory.
    pub fn new() -> Result<Self, ExplorerError> {
        let base = env::current_dir()?;
        Self::with_base(ShellConfig::default(), &base)
    }

    /// Builds a shell rooted at `base`, loading the permission store from
    /// the configured dotfile inside it.
    pub fn with_base(config: ShellConfig, base: &Path) -> Result<Self, ExplorerError> {
        let store = PermissionStore::load(&base.join(&config.permissions_file))?;
        let session = Session::new(&config.user, store);

        info!(
            "Shell rooted at {} ({} stored permissions)",
            base.display(),
            session.store().len()
        );

        Ok(Self {
            config,
            base: base.to_path_buf(),
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the loop until `exit` or end of input.
    pub fn run(&mut self) -> Result<(), ExplorerError> {
        self.print_banner();

        let stdin = io::stdin();
        let mut line = String::new();

        loop {
            self.print_prompt()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                // End of input, same as exit.
                debug!("stdin closed, leaving loop");
                break;
            }

            if self.dispatch_line(&line) == CommandResult::Exit {
                break;
            }
        }

        println!("{}", "Exiting. Goodbye!".yellow());
        Ok(())
    }

    /// Parses and dispatches one input line, then clears the sudo override.
    ///
    /// The override is cleared after every dispatched command, including
    /// `sudo` itself, unknown input, and empty lines.
    pub fn dispatch_line(&mut self, line: &str) -> CommandResult {
        let command = parse_command(line);
        debug!("Dispatching {:?}", command);

        let result = handle_command(&mut self.session, &self.base, command);
        if result == CommandResult::Continue {
            self.session.clear_sudo();
        }
        result
    }

    fn print_banner(&self) {
        println!("==============================");
        println!(" FILE EXPLORER Application");
        println!("==============================");
        println!("Current Directory: {}\n", self.base.display());
    }

    fn print_prompt(&self) -> io::Result<()> {
        let dir_name = self
            .base
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        print!(
            "{}@{} {} $ ",
            self.session.current_user(),
            self.config.host,
            dir_name
        );
        io::stdout().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn shell_at(base: &Path) -> Shell {
        Shell::with_base(ShellConfig::default(), base).unwrap()
    }

    #[test]
    fn test_sudo_lasts_one_dispatch_only() {
        let dir = tempdir().unwrap();
        let mut shell = shell_at(dir.path());

        // The override is armed by the handler and cleared by the loop, so
        // it is already gone once the sudo line itself has been dispatched.
        shell.dispatch_line("sudo");
        assert!(!shell.session().is_sudo_active());
    }

    #[test]
    fn test_sudo_resets_after_unknown_and_empty_input() {
        let dir = tempdir().unwrap();
        let mut shell = shell_at(dir.path());

        shell.dispatch_line("sudo");
        shell.dispatch_line("frobnicate");
        assert!(!shell.session().is_sudo_active());

        shell.dispatch_line("sudo");
        shell.dispatch_line("   ");
        assert!(!shell.session().is_sudo_active());
    }

    #[test]
    fn test_exit_stops_the_loop() {
        let dir = tempdir().unwrap();
        let mut shell = shell_at(dir.path());
        assert_eq!(shell.dispatch_line("exit"), CommandResult::Exit);
    }

    #[test]
    fn test_dispatch_drives_commands_end_to_end() {
        let dir = tempdir().unwrap();
        let mut shell = shell_at(dir.path());

        shell.dispatch_line("mkdir docs");
        assert!(dir.path().join("docs").is_dir());
        assert_eq!(shell.session().store().get("docs"), "drwxr-xr-x");

        shell.dispatch_line("chmod docs 700");
        assert_eq!(shell.session().store().get("docs"), "drwx--------");
    }

    #[test]
    fn test_store_survives_across_shell_instances() {
        let dir = tempdir().unwrap();

        let mut shell = shell_at(dir.path());
        shell.dispatch_line("mkdir docs");
        drop(shell);

        let reopened = shell_at(dir.path());
        assert_eq!(reopened.session().store().get("docs"), "drwxr-xr-x");
    }

    #[test]
    fn test_del_needs_sudo_in_the_same_iteration() {
        let dir = tempdir().unwrap();
        let mut shell = shell_at(dir.path());

        File::create(dir.path().join("locked.txt")).unwrap();
        shell.dispatch_line("chmod locked.txt 444");

        // Without the override the write check blocks deletion.
        shell.dispatch_line("del locked.txt");
        assert!(dir.path().join("locked.txt").exists());

        // sudo only covers the same dispatch, so issued on its own line it
        // has already been cleared before del runs.
        shell.dispatch_line("sudo");
        shell.dispatch_line("del locked.txt");
        assert!(dir.path().join("locked.txt").exists());
    }
}
