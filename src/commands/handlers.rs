//! Command handlers
//!
//! One handler per shell command. Handlers call into the storage operations,
//! map each typed failure to the message the user sees, and report the
//! outcome as a colored line. No command failure is fatal; the loop always
//! returns to the prompt.

use std::path::Path;

use colored::Colorize;
use log::warn;

use crate::commands::parser::{Command, CommandResult};
use crate::display;
use crate::error::StorageError;
use crate::session::Session;
use crate::storage::operations;

// Handle a single command against the session and base directory
pub fn handle_command(session: &mut Session, base: &Path, command: Command) -> CommandResult {
    match command {
        Command::List => handle_cmd_ls(session, base),
        Command::Mkdir(name) => handle_cmd_mkdir(session, base, &name),
        Command::Rmdir(name) => handle_cmd_rmdir(session, base, &name),
        Command::Del(name) => handle_cmd_del(session, base, &name),
        Command::Chmod(name, code) => handle_cmd_chmod(session, base, &name, &code),
        Command::Perm(name) => handle_cmd_perm(session, base, &name),
        Command::Cp(src, dest) => handle_cmd_cp(session, base, &src, &dest),
        Command::Mv(src, dest) => handle_cmd_mv(session, base, &src, &dest),
        Command::Sudo => handle_cmd_sudo(session),
        Command::Help => handle_cmd_help(),
        Command::Exit => CommandResult::Exit,
        Command::Empty => CommandResult::Continue,
        Command::Unknown(cmd) => handle_cmd_unknown(&cmd),
    }
}

// Command handler for ls
fn handle_cmd_ls(session: &mut Session, base: &Path) -> CommandResult {
    println!();
    match operations::list_directory(base, session.store()) {
        Ok(result) => {
            for entry in &result.entries {
                println!("{}", display::entry_line(&entry.permission, &entry.name));
            }
        }
        Err(e) => {
            warn!("ls failed: {}", e);
            println!("{}", "Failed to list directory.".red());
        }
    }
    CommandResult::Continue
}

// Command handler for mkdir
fn handle_cmd_mkdir(session: &mut Session, base: &Path, name: &str) -> CommandResult {
    match operations::make_directory(base, session.store_mut(), name) {
        Ok(result) => {
            println!("{}", format!("Directory created: {}", result.name).green());
        }
        Err(e) => {
            warn!("mkdir {} failed: {}", name, e);
            println!("{}", "Failed to create directory.".red());
        }
    }
    CommandResult::Continue
}

// Command handler for rmdir
fn handle_cmd_rmdir(session: &mut Session, base: &Path, name: &str) -> CommandResult {
    match operations::remove_directory(base, session.store_mut(), name) {
        Ok(_) => println!("{}", "Directory removed.".green()),
        Err(StorageError::NotFound(_)) => println!("{}", "Not found.".red()),
        Err(StorageError::NotADirectory(_)) => println!("{}", "Not a directory.".red()),
        Err(StorageError::DirectoryNotEmpty(_)) => {
            println!("{}", "Directory not empty.".yellow())
        }
        Err(e) => {
            warn!("rmdir {} failed: {}", name, e);
            println!("{}", "Failed to remove directory.".red());
        }
    }
    CommandResult::Continue
}

// Command handler for del
fn handle_cmd_del(session: &mut Session, base: &Path, name: &str) -> CommandResult {
    let sudo = session.is_sudo_active();
    match operations::delete_file(base, session.store_mut(), sudo, name) {
        Ok(result) => println!("{}", format!("Deleted: {}", result.name).green()),
        Err(StorageError::NotFound(_)) => println!("{}", "File not found.".red()),
        Err(StorageError::PermissionDenied(_)) => println!("{}", "Permission denied.".red()),
        Err(e) => {
            warn!("del {} failed: {}", name, e);
            println!("{}", "Delete failed.".red());
        }
    }
    CommandResult::Continue
}

// Command handler for chmod
fn handle_cmd_chmod(session: &mut Session, base: &Path, name: &str, code: &str) -> CommandResult {
    match operations::change_mode(base, session.store_mut(), name, code) {
        Ok(result) => println!(
            "{}",
            format!(
                "Changed permission of {} to {}",
                result.name, result.permission
            )
            .green()
        ),
        Err(StorageError::NotFound(_)) => println!("{}", "Not found.".red()),
        Err(StorageError::InvalidMode(_)) => println!("{}", "Use format like 755.".yellow()),
        Err(e) => {
            warn!("chmod {} failed: {}", name, e);
            println!("{}", "Failed to change permission.".red());
        }
    }
    CommandResult::Continue
}

// Command handler for perm
fn handle_cmd_perm(session: &mut Session, base: &Path, name: &str) -> CommandResult {
    match operations::show_permission(base, session.store(), name) {
        Ok(result) => println!(
            "{}",
            format!("{}: {}", result.name, result.permission).yellow()
        ),
        Err(_) => println!("{}", "Not found.".red()),
    }
    CommandResult::Continue
}

// Command handler for cp
fn handle_cmd_cp(session: &mut Session, base: &Path, src: &str, dest: &str) -> CommandResult {
    let sudo = session.is_sudo_active();
    match operations::copy_file(base, session.store_mut(), sudo, src, dest) {
        Ok(result) => println!(
            "{}",
            format!("Copied {} → {}", result.src, result.dest).green()
        ),
        Err(StorageError::NotFound(_)) => println!("{}", "Source not found.".red()),
        Err(StorageError::PermissionDenied(_)) => {
            println!("{}", "Permission denied (no read).".red())
        }
        Err(e) => {
            warn!("cp {} {} failed: {}", src, dest, e);
            println!("{}", "Copy failed.".red());
        }
    }
    CommandResult::Continue
}

// Command handler for mv
fn handle_cmd_mv(session: &mut Session, base: &Path, src: &str, dest: &str) -> CommandResult {
    let sudo = session.is_sudo_active();
    match operations::move_entry(base, session.store_mut(), sudo, src, dest) {
        Ok(result) => println!(
            "{}",
            format!("Moved {} → {}", result.src, result.dest).green()
        ),
        Err(StorageError::NotFound(_)) => println!("{}", "Source not found.".red()),
        Err(StorageError::PermissionDenied(_)) => {
            println!("{}", "Permission denied (no write).".red())
        }
        Err(e) => {
            warn!("mv {} {} failed: {}", src, dest, e);
            println!("{}", "Move failed.".red());
        }
    }
    CommandResult::Continue
}

// Command handler for sudo
fn handle_cmd_sudo(session: &mut Session) -> CommandResult {
    session.arm_sudo();
    println!("{}", "Sudo mode active (for one command).".yellow());
    CommandResult::Continue
}

// Command handler for help
fn handle_cmd_help() -> CommandResult {
    println!("\n==============================");
    println!(" Available Commands (Linux-style)");
    println!("==============================");
    println!("ls                  - List directory contents with color + permissions");
    println!("cd <dir>            - Change directory");
    println!("mkdir <name>        - Create directory");
    println!("rmdir <name>        - Remove directory (if empty)");
    println!("del <file>          - Delete a file");
    println!("chmod <file> <perm> - Change file permissions (rwx format)");
    println!("perm <file>         - Show permissions");
    println!("cp <src> <dest>     - Copy file to destination");
    println!("mv <src> <dest>     - Move (rename) file or directory");
    println!("sudo <cmd>          - Temporary permission override");
    println!("help                - Show this help menu");
    println!("exit                - Quit program");
    println!("==============================");
    CommandResult::Continue
}

// Command handler for unrecognized input
fn handle_cmd_unknown(cmd: &str) -> CommandResult {
    warn!("Unknown command: {}", cmd);
    println!("{}", "Unknown command.".red());
    CommandResult::Continue
}
