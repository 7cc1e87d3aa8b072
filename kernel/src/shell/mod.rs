/// Interactive shell over a keyboard and a console.
///
/// The shell is fed one raw scancode at a time. Keystrokes accumulate in
/// the line editor; Enter hands the line to the command dispatcher, which
/// acts on the namespace and prints to the console. Nothing happens
/// between keystrokes, and each keystroke runs to completion before the
/// next one is accepted.
///
/// This is not a POSIX shell. The command set is fixed: `ls`, `mkdir`,
/// `rename`, `touch`, `rm`, `clear`, `help`, `quit` and `END`.
mod commands;
mod line;
mod parse;

use log::info;

use crate::config::PROMPT;
use crate::console::Console;
use crate::fs::Namespace;

pub use commands::{FAREWELL_HALT, FAREWELL_QUIT, UNKNOWN};
pub use line::{Line, LineEditor};
pub use parse::{Command, CommandLine, Token};

/// Whether the shell keeps running after a step.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The user asked to stop. The platform should halt.
    Halt,
}

/// Shell state: the line being typed and the namespace it acts on.
pub struct Shell {
    editor: LineEditor,
    namespace: Namespace,
    halted: bool,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            editor: LineEditor::new(),
            namespace: Namespace::new(),
            halted: false,
        }
    }

    /// Print the greeting, the command summary and the first prompt.
    pub fn start(&mut self, console: &mut dyn Console) {
        info!("shell started, {} entry slots", self.namespace.capacity());
        console.write_str("Welcome to OS Shell!\n");
        commands::cmd_help(console);
        console.write_str(PROMPT);
    }

    /// Feed one raw scancode from the keyboard.
    pub fn handle_scancode(&mut self, code: u8, console: &mut dyn Console) -> Flow {
        if self.halted {
            return Flow::Halt;
        }
        match self.editor.handle_key(code, console) {
            Some(line) => self.execute(&line, console),
            None => Flow::Continue,
        }
    }

    /// Act on a completed line and print the next prompt.
    ///
    /// A line that is exactly `quit` stops the shell before any parsing.
    /// Blank lines are skipped.
    pub fn execute(&mut self, line: &str, console: &mut dyn Console) -> Flow {
        if self.halted {
            return Flow::Halt;
        }

        let flow = if line == "quit" {
            writeln!(console, "{}", FAREWELL_HALT);
            Flow::Halt
        } else if line.trim().is_empty() {
            Flow::Continue
        } else {
            commands::dispatch(line, &mut self.namespace, console)
        };

        match flow {
            Flow::Continue => console.write_str(PROMPT),
            Flow::Halt => {
                info!("shell halted");
                self.halted = true;
            }
        }
        flow
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn namespace_mut(&mut self) -> &mut Namespace {
        &mut self.namespace
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
