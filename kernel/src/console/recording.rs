/// In-memory console for testing.
///
/// Keeps everything written so tests can assert on the transcript. Erases
/// remove the last character from the transcript, the same way a terminal
/// would, and are counted separately so a no-op backspace can be told apart
/// from an erase.
use alloc::string::String;

use super::Console;

/// Console that records output instead of displaying it.
#[derive(Default)]
pub struct RecordingConsole {
    output: String,
    erase_count: usize,
    clear_count: usize,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything currently "on screen" since the last clear.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// How many erase instructions were issued.
    pub fn erase_count(&self) -> usize {
        self.erase_count
    }

    /// How many times the display was cleared.
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    /// Drop the transcript, keeping the counters.
    pub fn take_output(&mut self) -> String {
        core::mem::take(&mut self.output)
    }
}

impl Console for RecordingConsole {
    fn write_str(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn backspace(&mut self) {
        self.output.pop();
        self.erase_count += 1;
    }

    fn clear(&mut self) {
        self.output.clear();
        self.clear_count += 1;
    }
}
