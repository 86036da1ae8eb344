//! Command parsing
//!
//! Splits a raw input line into a shell command. A line is at most three
//! whitespace-separated tokens: the command word and up to two arguments.
//! Extra tokens are silently discarded and missing arguments become empty
//! strings, matching how each handler validates its own input.

/// Command enum to represent shell commands
#[derive(Debug, PartialEq)]
pub enum Command {
    List,
    Mkdir(String),
    Rmdir(String),
    Del(String),
    Chmod(String, String),
    Perm(String),
    Cp(String, String),
    Mv(String, String),
    Sudo,
    Help,
    Exit,
    Empty,
    Unknown(String),
}

/// Outcome of dispatching one command.
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    Continue,
    Exit,
}

// Parse raw input line into Command enum
pub fn parse_command(raw: &str) -> Command {
    let mut parts = raw.split_whitespace();
    let cmd = parts.next().unwrap_or("");
    let arg1 = parts.next().unwrap_or("").to_string();
    let arg2 = parts.next().unwrap_or("").to_string();

    match cmd {
        "ls" => Command::List,
        "mkdir" => Command::Mkdir(arg1),
        "rmdir" => Command::Rmdir(arg1),
        "del" => Command::Del(arg1),
        "chmod" => Command::Chmod(arg1, arg2),
        "perm" => Command::Perm(arg1),
        "cp" => Command::Cp(arg1, arg2),
        "mv" => Command::Mv(arg1, arg2),
        "sudo" => Command::Sudo,
        "help" => Command::Help,
        "exit" => Command::Exit,
        "" => Command::Empty,
        other => Command::Unknown(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("ls"), Command::List);
        assert_eq!(parse_command("sudo"), Command::Sudo);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("exit"), Command::Exit);
    }

    #[test]
    fn test_parse_commands_with_args() {
        assert_eq!(
            parse_command("mkdir docs"),
            Command::Mkdir("docs".to_string())
        );
        assert_eq!(
            parse_command("del a.txt"),
            Command::Del("a.txt".to_string())
        );
        assert_eq!(
            parse_command("chmod a.txt 755"),
            Command::Chmod("a.txt".to_string(), "755".to_string())
        );
        assert_eq!(
            parse_command("cp src.txt dest.txt"),
            Command::Cp("src.txt".to_string(), "dest.txt".to_string())
        );
        assert_eq!(
            parse_command("mv src.txt dest.txt"),
            Command::Mv("src.txt".to_string(), "dest.txt".to_string())
        );
    }

    #[test]
    fn test_parse_missing_args_become_empty() {
        assert_eq!(parse_command("mkdir"), Command::Mkdir(String::new()));
        assert_eq!(
            parse_command("chmod a.txt"),
            Command::Chmod("a.txt".to_string(), String::new())
        );
    }

    #[test]
    fn test_parse_extra_tokens_discarded() {
        assert_eq!(
            parse_command("cp a b c d"),
            Command::Cp("a".to_string(), "b".to_string())
        );
        assert_eq!(parse_command("ls -la"), Command::List);
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(parse_command("  exit  "), Command::Exit);
        assert_eq!(
            parse_command("\tmkdir\t docs \t"),
            Command::Mkdir("docs".to_string())
        );
    }

    #[test]
    fn test_parse_empty_and_unknown() {
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("   "), Command::Empty);
        assert_eq!(
            parse_command("frobnicate a"),
            Command::Unknown("frobnicate".to_string())
        );
        // Command words are case-sensitive, like the rest of the shell.
        assert_eq!(parse_command("LS"), Command::Unknown("LS".to_string()));
        // cd shows up in the help text but was never implemented.
        assert_eq!(parse_command("cd docs"), Command::Unknown("cd".to_string()));
    }
}
