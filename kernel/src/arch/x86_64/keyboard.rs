/// PS/2 keyboard interrupt path.
///
/// IRQ1 delivers one scancode per event. The handler reads it from the
/// controller's data port and feeds the shell, which does all of its work
/// (echo, dispatch, output) before the handler returns.
use spin::Mutex;

use crate::shell::{Flow, Shell};

use super::serial::SerialConsole;

const PS2_DATA: u16 = 0x60;

/// The one shell instance, reachable from the interrupt handler.
static SHELL: Mutex<Option<Shell>> = Mutex::new(None);

/// Hand the shell to the interrupt path and print its banner.
///
/// Call once, before interrupts are enabled.
pub fn install(mut shell: Shell) {
    shell.start(&mut SerialConsole);
    *SHELL.lock() = Some(shell);
}

/// Read the pending scancode and run it through the shell.
pub fn on_interrupt() -> Flow {
    let code = super::inb(PS2_DATA);
    match SHELL.lock().as_mut() {
        Some(shell) => shell.handle_scancode(code, &mut SerialConsole),
        None => Flow::Continue,
    }
}
