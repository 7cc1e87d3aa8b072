/// Built-in shell commands.
///
/// Each command is one namespace operation or a display action. Failures
/// are printed as a single line and leave the namespace as it was.
use log::warn;

use crate::config::MAX_TOKEN_LEN;
use crate::console::Console;
use crate::fs::{EntryKind, FsError, Namespace};

use super::parse::{Command, CommandLine};
use super::Flow;

pub const UNKNOWN: &str =
    "Unknown command or missing arguments. Type 'help' for available commands.";

pub const FAREWELL_HALT: &str = "Stopping the CPU. Bye!";
pub const FAREWELL_QUIT: &str = "Exiting shell. Bye!";

/// Dispatch a command line to the appropriate handler.
pub fn dispatch(line: &str, ns: &mut Namespace, console: &mut dyn Console) -> Flow {
    let parsed = CommandLine::parse(line);
    if parsed.truncated {
        warn!("token truncated in '{}'", line);
        writeln!(console, "Names are limited to {} characters; truncated", MAX_TOKEN_LEN);
    }

    let cmd = match parsed.command() {
        Some(c) => c,
        None => {
            writeln!(console, "{}", UNKNOWN);
            return Flow::Continue;
        }
    };

    match cmd {
        Command::Ls => cmd_ls(ns, console),
        Command::Mkdir(name) => cmd_mkdir(ns, name, console),
        Command::Rename(old, new) => cmd_rename(ns, old, new, console),
        Command::Touch(name) => cmd_touch(ns, name, console),
        Command::Rm(name) => cmd_rm(ns, name, console),
        Command::Clear => console.clear(),
        Command::Help => cmd_help(console),
        Command::Quit => {
            writeln!(console, "{}", FAREWELL_QUIT);
            return Flow::Halt;
        }
        Command::End => {
            writeln!(console, "{}", FAREWELL_HALT);
            return Flow::Halt;
        }
    }
    Flow::Continue
}

pub fn cmd_help(console: &mut dyn Console) {
    console.write_str("Available commands:\n");
    console.write_str("ls - List directory contents\n");
    console.write_str("mkdir <dirname> - Create a new directory\n");
    console.write_str("rename <oldname> <newname> - Rename a file/directory\n");
    console.write_str("touch <filename> - Create a new file\n");
    console.write_str("rm <name> - Remove a file or directory\n");
    console.write_str("clear - Clear the screen\n");
    console.write_str("help - Show this help message\n");
    console.write_str("quit - Exit the shell\n");
}

fn cmd_ls(ns: &Namespace, console: &mut dyn Console) {
    writeln!(console, "Contents of {}:", ns.current_path());
    for (_, entry) in ns.list(ns.current()) {
        writeln!(console, "{} {}", entry.kind().tag(), entry.name());
    }
}

fn cmd_mkdir(ns: &mut Namespace, name: &str, console: &mut dyn Console) {
    match ns.create(name, EntryKind::Directory, ns.current()) {
        Ok(_) => writeln!(console, "Directory created successfully"),
        Err(e) => writeln!(console, "{}", e),
    }
}

fn cmd_touch(ns: &mut Namespace, name: &str, console: &mut dyn Console) {
    match ns.create(name, EntryKind::File, ns.current()) {
        Ok(_) => writeln!(console, "File created successfully"),
        Err(FsError::AlreadyExists) => writeln!(console, "File already exists"),
        Err(e) => writeln!(console, "{}", e),
    }
}

fn cmd_rename(ns: &mut Namespace, old: &str, new: &str, console: &mut dyn Console) {
    match ns.rename(old, new) {
        Ok(_) => writeln!(console, "Entry renamed successfully"),
        Err(e) => writeln!(console, "{}", e),
    }
}

fn cmd_rm(ns: &mut Namespace, name: &str, console: &mut dyn Console) {
    match ns.remove(name) {
        Ok(_) => writeln!(console, "Entry deleted successfully"),
        Err(e) => writeln!(console, "{}", e),
    }
}
