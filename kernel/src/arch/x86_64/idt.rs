/// Interrupt Descriptor Table (IDT).
///
/// Installs reporting handlers for the CPU exceptions that would otherwise
/// triple-fault the machine, and the keyboard handler on the remapped IRQ1
/// vector:
/// - #DE (0)  Division by zero
/// - #UD (6)  Invalid opcode
/// - #DF (8)  Double fault
/// - #GP (13) General protection fault
/// - #PF (14) Page fault
/// - IRQ1 (33) PS/2 keyboard
use crate::shell::Flow;

use super::pic;

/// IDT entry (16 bytes on x86_64).
#[repr(C, packed)]
#[derive(Clone, Copy)]
pub struct IdtEntry {
    offset_low: u16,
    selector: u16,
    ist: u8,
    type_attr: u8,
    offset_mid: u16,
    offset_high: u32,
    _reserved: u32,
}

static_assertions::const_assert_eq!(core::mem::size_of::<IdtEntry>(), 16);

impl IdtEntry {
    pub const fn missing() -> Self {
        Self {
            offset_low: 0,
            selector: 0,
            ist: 0,
            type_attr: 0, // NOT present
            offset_mid: 0,
            offset_high: 0,
            _reserved: 0,
        }
    }

    /// Create a present interrupt gate entry (DPL=0).
    pub fn interrupt_gate(handler: u64, selector: u16) -> Self {
        Self {
            offset_low: handler as u16,
            selector,
            ist: 0,
            type_attr: 0x8E, // present | interrupt gate | DPL=0
            offset_mid: (handler >> 16) as u16,
            offset_high: (handler >> 32) as u32,
            _reserved: 0,
        }
    }
}

/// The IDT, 256 entries.
#[repr(C, align(16))]
pub struct Idt {
    pub entries: [IdtEntry; 256],
}

impl Idt {
    pub const fn new() -> Self {
        Self {
            entries: [IdtEntry::missing(); 256],
        }
    }

    /// Load this IDT into the CPU via LIDT.
    pub fn load(&'static self) {
        let ptr = IdtPointer {
            limit: (core::mem::size_of::<Self>() - 1) as u16,
            base: self as *const _ as u64,
        };

        unsafe {
            core::arch::asm!("lidt [{}]", in(reg) &ptr, options(nostack));
        }
    }
}

#[repr(C, packed)]
struct IdtPointer {
    limit: u16,
    base: u64,
}

/// Global IDT instance, initialized once during boot via spin::Once.
static IDT: spin::Once<Idt> = spin::Once::new();

/// Code segment the bootloader left us in; every gate uses it.
fn current_cs() -> u16 {
    let cs: u16;
    unsafe {
        core::arch::asm!("mov {0:x}, cs", out(reg) cs, options(nostack, nomem));
    }
    cs
}

/// Build the IDT and load it.
///
/// # Safety
/// Called once during boot, with interrupts disabled.
pub unsafe fn init() {
    let idt = IDT.call_once(|| {
        let cs = current_cs();
        let mut idt = Idt::new();

        idt.entries[0] = IdtEntry::interrupt_gate(isr_de as *const () as u64, cs);
        idt.entries[6] = IdtEntry::interrupt_gate(isr_ud as *const () as u64, cs);
        idt.entries[8] = IdtEntry::interrupt_gate(isr_df as *const () as u64, cs);
        idt.entries[13] = IdtEntry::interrupt_gate(isr_gp as *const () as u64, cs);
        idt.entries[14] = IdtEntry::interrupt_gate(isr_pf as *const () as u64, cs);

        let keyboard = (pic::IRQ_BASE + pic::IRQ_KEYBOARD) as usize;
        idt.entries[keyboard] = IdtEntry::interrupt_gate(isr_keyboard as *const () as u64, cs);

        idt
    });
    idt.load();
}

// ---- Exception frame passed by the CPU on interrupt ----

/// Interrupt stack frame pushed by the CPU before our handler runs.
#[repr(C)]
pub struct InterruptFrame {
    pub rip: u64,
    pub cs: u64,
    pub rflags: u64,
    pub rsp: u64,
    pub ss: u64,
}

// ---- Handlers ----

extern "x86-interrupt" fn isr_keyboard(_frame: InterruptFrame) {
    let flow = super::keyboard::on_interrupt();
    pic::send_eoi(pic::IRQ_KEYBOARD);
    if flow == Flow::Halt {
        super::halt_forever();
    }
}

extern "x86-interrupt" fn isr_de(frame: InterruptFrame) {
    exception_handler("Division by zero (#DE)", &frame, None);
}

extern "x86-interrupt" fn isr_ud(frame: InterruptFrame) {
    exception_handler("Invalid opcode (#UD)", &frame, None);
}

extern "x86-interrupt" fn isr_df(frame: InterruptFrame, error_code: u64) {
    exception_handler("Double fault (#DF)", &frame, Some(error_code));
}

extern "x86-interrupt" fn isr_gp(frame: InterruptFrame, error_code: u64) {
    exception_handler("General protection fault (#GP)", &frame, Some(error_code));
}

extern "x86-interrupt" fn isr_pf(frame: InterruptFrame, error_code: u64) {
    let cr2: u64;
    unsafe { core::arch::asm!("mov {}, cr2", out(reg) cr2, options(nostack, nomem)); }
    crate::serial_println!("  Faulting address: {:#x}", cr2);
    exception_handler("Page fault (#PF)", &frame, Some(error_code));
}

/// Common exception reporting. Never returns.
fn exception_handler(name: &str, frame: &InterruptFrame, error_code: Option<u64>) -> ! {
    crate::serial_println!("!!! CPU EXCEPTION: {} !!!", name);
    if let Some(code) = error_code {
        crate::serial_println!("  Error code: {:#x}", code);
    }
    crate::serial_println!("  RIP:     {:#x}", frame.rip);
    crate::serial_println!("  CS:      {:#x}", frame.cs);
    crate::serial_println!("  RFLAGS:  {:#x}", frame.rflags);
    crate::serial_println!("  RSP:     {:#x}", frame.rsp);
    super::halt_forever();
}
