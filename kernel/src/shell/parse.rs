/// Command-line tokenizer.
///
/// A line is split on whitespace into a command word and at most two
/// arguments; anything after the second argument is dropped. Each token is
/// held in a bounded buffer and cut at `MAX_TOKEN_LEN` characters, with the
/// cut recorded so the caller can say so.
use crate::config::MAX_TOKEN_LEN;

pub type Token = heapless::String<MAX_TOKEN_LEN>;

/// A tokenized line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommandLine {
    pub command: Token,
    pub arg1: Token,
    pub arg2: Token,
    /// At least one token was cut short.
    pub truncated: bool,
}

/// A recognized command with its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Ls,
    Mkdir(&'a str),
    Rename(&'a str, &'a str),
    Touch(&'a str),
    Rm(&'a str),
    Clear,
    Help,
    Quit,
    End,
}

impl CommandLine {
    pub fn parse(line: &str) -> Self {
        let mut parsed = Self::default();
        let mut words = line.split_whitespace();
        for slot in [&mut parsed.command, &mut parsed.arg1, &mut parsed.arg2] {
            match words.next() {
                Some(word) => parsed.truncated |= fill(slot, word),
                None => break,
            }
        }
        parsed
    }

    /// Resolve to a command, or `None` for an unknown verb or a missing
    /// argument. Commands that take no arguments must be given none.
    pub fn command(&self) -> Option<Command<'_>> {
        let arg1 = self.arg1.as_str();
        let arg2 = self.arg2.as_str();
        let bare = arg1.is_empty();

        let cmd = match self.command.as_str() {
            "ls" if bare => Command::Ls,
            "clear" if bare => Command::Clear,
            "help" if bare => Command::Help,
            "quit" if bare => Command::Quit,
            "END" if bare => Command::End,
            "mkdir" if !bare => Command::Mkdir(arg1),
            "touch" if !bare => Command::Touch(arg1),
            "rm" if !bare => Command::Rm(arg1),
            "rename" if !bare && !arg2.is_empty() => Command::Rename(arg1, arg2),
            _ => return None,
        };
        Some(cmd)
    }
}

/// Copy as much of `word` as fits. Returns true if it was cut.
fn fill(slot: &mut Token, word: &str) -> bool {
    for c in word.chars() {
        if slot.push(c).is_err() {
            return true;
        }
    }
    false
}
