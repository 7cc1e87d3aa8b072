/// Line editor fed one scancode at a time.
///
/// Supports:
/// - Printable keys from the scancode tables, shifted or not
/// - Left/right shift press and release
/// - Backspace: delete the last character
/// - Enter: hand the line back and start a new one
///
/// Every call does a constant amount of work. Nothing here touches the
/// namespace; the caller acts on the line once Enter hands it back.
use log::{trace, warn};

use crate::config::MAX_LINE_LEN;
use crate::console::Console;
use crate::drivers::keyboard::{self, scancode, Key};

/// A completed line.
pub type Line = heapless::String<MAX_LINE_LEN>;

pub struct LineEditor {
    buf: Line,
    shift: bool,
    /// Set once a keystroke has been dropped on the current line.
    overflowed: bool,
}

impl LineEditor {
    pub fn new() -> Self {
        Self {
            buf: Line::new(),
            shift: false,
            overflowed: false,
        }
    }

    /// Feed one raw scancode. Returns the finished line on Enter.
    pub fn handle_key(&mut self, code: u8, console: &mut dyn Console) -> Option<Line> {
        match keyboard::decode(code, self.shift) {
            Key::ShiftPress => self.shift = true,
            Key::ShiftRelease => self.shift = false,
            Key::Backspace => {
                if self.buf.pop().is_some() {
                    console.backspace();
                }
            }
            Key::Enter => {
                console.write_str("\n");
                self.overflowed = false;
                return Some(core::mem::take(&mut self.buf));
            }
            Key::Char(c) => {
                if self.buf.push(c).is_ok() {
                    let mut utf8 = [0u8; 4];
                    console.write_str(c.encode_utf8(&mut utf8));
                } else if !self.overflowed {
                    warn!("line full at {} characters, dropping input", MAX_LINE_LEN);
                    self.overflowed = true;
                }
            }
            Key::Ignored => {
                trace!("ignored scancode {:#04x} ({})", code, scancode::key_name(code));
            }
        }
        None
    }

    /// The line typed so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn shift_active(&self) -> bool {
        self.shift
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::RecordingConsole;
    use crate::drivers::keyboard::{BACKSPACE, ENTER, LSHIFT, LSHIFT_RELEASE, RSHIFT, RSHIFT_RELEASE};

    const KEY_1: u8 = 0x02;
    const KEY_A: u8 = 0x1E;
    const KEY_B: u8 = 0x30;

    fn feed(editor: &mut LineEditor, con: &mut RecordingConsole, codes: &[u8]) -> Option<Line> {
        let mut done = None;
        for &code in codes {
            if let Some(line) = editor.handle_key(code, con) {
                done = Some(line);
            }
        }
        done
    }

    #[test]
    fn typed_keys_are_buffered_and_echoed() {
        let mut ed = LineEditor::new();
        let mut con = RecordingConsole::new();
        feed(&mut ed, &mut con, &[KEY_A, KEY_B, KEY_1]);
        assert_eq!(ed.as_str(), "ab1");
        assert_eq!(ed.len(), 3);
        assert_eq!(con.output(), "ab1");
    }

    #[test]
    fn shift_selects_shifted_table() {
        let mut ed = LineEditor::new();
        let mut con = RecordingConsole::new();
        feed(&mut ed, &mut con, &[LSHIFT, KEY_1, LSHIFT_RELEASE, KEY_1]);
        assert_eq!(ed.as_str(), "!1");
        assert!(!ed.shift_active());
    }

    #[test]
    fn either_release_clears_shift() {
        let mut ed = LineEditor::new();
        let mut con = RecordingConsole::new();
        feed(&mut ed, &mut con, &[LSHIFT, RSHIFT, RSHIFT_RELEASE, KEY_A]);
        assert_eq!(ed.as_str(), "a");
    }

    #[test]
    fn backspace_erases_last_character() {
        let mut ed = LineEditor::new();
        let mut con = RecordingConsole::new();
        feed(&mut ed, &mut con, &[KEY_A, KEY_B, BACKSPACE]);
        assert_eq!(ed.as_str(), "a");
        assert_eq!(con.output(), "a");
        assert_eq!(con.erase_count(), 1);
    }

    #[test]
    fn backspace_on_empty_line_is_a_no_op() {
        let mut ed = LineEditor::new();
        let mut con = RecordingConsole::new();
        feed(&mut ed, &mut con, &[BACKSPACE, BACKSPACE]);
        assert_eq!(ed.len(), 0);
        assert_eq!(con.erase_count(), 0);
        assert_eq!(con.output(), "");
    }

    #[test]
    fn enter_hands_back_line_and_resets() {
        let mut ed = LineEditor::new();
        let mut con = RecordingConsole::new();
        let line = feed(&mut ed, &mut con, &[KEY_A, KEY_B, ENTER]).unwrap();
        assert_eq!(line.as_str(), "ab");
        assert!(ed.is_empty());
        assert_eq!(con.output(), "ab\n");

        let line = feed(&mut ed, &mut con, &[ENTER]).unwrap();
        assert_eq!(line.as_str(), "");
    }

    #[test]
    fn unmapped_keys_append_question_mark() {
        let mut ed = LineEditor::new();
        let mut con = RecordingConsole::new();
        // Esc, Tab
        feed(&mut ed, &mut con, &[0x01, 0x0F]);
        assert_eq!(ed.as_str(), "??");
    }

    #[test]
    fn codes_past_table_are_ignored() {
        let mut ed = LineEditor::new();
        let mut con = RecordingConsole::new();
        // key releases and extended prefix
        feed(&mut ed, &mut con, &[0x9E, 0xE0, 0x3B, 0xFF]);
        assert!(ed.is_empty());
        assert_eq!(con.output(), "");
    }

    #[test]
    fn full_line_drops_extra_keys() {
        let mut ed = LineEditor::new();
        let mut con = RecordingConsole::new();
        for _ in 0..MAX_LINE_LEN + 10 {
            ed.handle_key(KEY_A, &mut con);
        }
        assert_eq!(ed.len(), MAX_LINE_LEN);
        assert_eq!(con.output().len(), MAX_LINE_LEN);

        // Editing still works once full.
        ed.handle_key(BACKSPACE, &mut con);
        ed.handle_key(KEY_B, &mut con);
        assert!(ed.as_str().ends_with('b'));
        let line = ed.handle_key(ENTER, &mut con).unwrap();
        assert_eq!(line.len(), MAX_LINE_LEN);
    }
}
