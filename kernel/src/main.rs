//! Keyshell entry points.
//!
//! On bare metal the kernel is booted by Limine, takes keystrokes from the
//! PS/2 keyboard interrupt and prints on COM1. On any other target the
//! same shell runs as a simulator: text read from stdin is turned into the
//! scancodes a keyboard would have sent, and output goes to stdout.
#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod bare_metal {
    use core::panic::PanicInfo;

    use limine::request::{RequestsEndMarker, RequestsStartMarker};
    use limine::BaseRevision;

    use keyshell_kernel::arch::x86_64::{self, idt, keyboard, pic, serial};
    use keyshell_kernel::{serial_println, Shell};

    // ---- Limine requests ----
    // Must be #[used] and in .requests section for Limine to discover them.

    #[used]
    #[link_section = ".requests"]
    static BASE_REVISION: BaseRevision = BaseRevision::new();

    #[used]
    #[link_section = ".requests_start_marker"]
    static _START_MARKER: RequestsStartMarker = RequestsStartMarker::new();

    #[used]
    #[link_section = ".requests_end_marker"]
    static _END_MARKER: RequestsEndMarker = RequestsEndMarker::new();

    /// Kernel entry point, called by Limine in long mode with a stack.
    #[no_mangle]
    pub extern "C" fn kmain() -> ! {
        // 1. Serial console first, so everything after can report
        serial::SERIAL.lock().init();
        serial::init_logger(log::LevelFilter::Info);
        serial_println!("Keyshell v0.1.0 booting...");

        // 2. Verify Limine boot protocol
        assert!(BASE_REVISION.is_supported(), "Limine base revision not supported");
        serial_println!("[boot] Limine protocol OK");

        // 3. Interrupts: IDT first, then the PIC with only IRQ1 open
        unsafe { idt::init(); }
        serial_println!("[cpu] IDT loaded (exceptions + keyboard)");
        unsafe { pic::init(); }
        serial_println!("[cpu] PIC remapped (keyboard unmasked)");

        // 4. Shell, then let the keyboard in
        keyboard::install(Shell::new());
        x86_64::sti();

        loop {
            x86_64::hlt();
        }
    }

    #[panic_handler]
    fn panic(info: &PanicInfo) -> ! {
        serial_println!("!!! KERNEL PANIC !!!");
        serial_println!("{}", info);
        x86_64::halt_forever();
    }
}

#[cfg(not(target_os = "none"))]
mod hosted {
    use std::io::{self, BufRead, Write};

    use log::{debug, error};

    use keyshell_kernel::console::Console;
    use keyshell_kernel::drivers::keyboard::{scancode, BACKSPACE, ENTER, LSHIFT, LSHIFT_RELEASE};
    use keyshell_kernel::{Flow, Shell};

    /// Terminal output on stdout.
    struct StdoutConsole {
        out: io::Stdout,
    }

    impl Console for StdoutConsole {
        fn write_str(&mut self, s: &str) {
            let _ = self.out.write_all(s.as_bytes());
            let _ = self.out.flush();
        }

        fn backspace(&mut self) {
            self.write_str("\x08 \x08");
        }

        fn clear(&mut self) {
            self.write_str("\x1b[2J\x1b[H");
        }
    }

    /// Scancodes a US keyboard sends to type `c`.
    fn press(c: char, codes: &mut Vec<u8>) {
        match c {
            '\x08' | '\x7f' => codes.push(BACKSPACE),
            _ => match scancode::encode(c) {
                Some((code, true)) => codes.extend([LSHIFT, code, LSHIFT_RELEASE]),
                Some((code, false)) => codes.push(code),
                None => debug!("no key types {:?}, dropped", c),
            },
        }
    }

    /// Feed stdin to the shell line by line until it halts or input ends.
    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

        let mut console = StdoutConsole { out: io::stdout() };
        let mut shell = Shell::new();
        shell.start(&mut console);

        let mut codes = Vec::new();
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    error!("stdin: {}", e);
                    break;
                }
            };

            codes.clear();
            for c in line.chars() {
                press(c, &mut codes);
            }
            codes.push(ENTER);

            for &code in &codes {
                if shell.handle_scancode(code, &mut console) == Flow::Halt {
                    return;
                }
            }
        }
        console.write_str("\n");
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    hosted::run();
}
