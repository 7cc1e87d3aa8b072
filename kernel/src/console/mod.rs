/// Output sink the shell draws on.
///
/// The shell only ever needs three things from a display: append text,
/// erase the last character it printed, and wipe everything. The serial
/// port, the hosted simulator's stdout and the test recorder all implement
/// this trait.
use core::fmt;

#[cfg(not(target_os = "none"))]
pub mod recording;

#[cfg(not(target_os = "none"))]
pub use recording::RecordingConsole;

/// Abstract character output for the shell.
pub trait Console {
    /// Append text at the cursor.
    fn write_str(&mut self, s: &str);

    /// Erase the last character shown.
    fn backspace(&mut self);

    /// Clear the whole display.
    fn clear(&mut self);

    /// Formatted output, so `write!` and `writeln!` work on a console.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        let _ = fmt::write(&mut Adapter(self), args);
    }
}

struct Adapter<'a, C: ?Sized>(&'a mut C);

impl<C: Console + ?Sized> fmt::Write for Adapter<'_, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_str(s);
        Ok(())
    }
}
