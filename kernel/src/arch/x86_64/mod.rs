/// x86_64 architecture support.
///
/// This module provides:
/// - Port I/O (in/out instructions)
/// - Serial console (COM1) for shell output and log records
/// - 8259 PIC setup with only the keyboard line unmasked
/// - Interrupt descriptor table with the keyboard handler
pub mod idt;
pub mod keyboard;
pub mod pic;
pub mod serial;

/// Halt the CPU until the next interrupt.
#[inline(always)]
pub fn hlt() {
    unsafe { core::arch::asm!("hlt", options(nostack, nomem)); }
}

/// Disable interrupts.
#[inline(always)]
pub fn cli() {
    unsafe { core::arch::asm!("cli", options(nostack, nomem)); }
}

/// Enable interrupts.
#[inline(always)]
pub fn sti() {
    unsafe { core::arch::asm!("sti", options(nostack, nomem)); }
}

/// Stop the CPU for good: interrupts off, then halt forever.
pub fn halt_forever() -> ! {
    cli();
    loop {
        hlt();
    }
}

/// Write a byte to an I/O port.
#[inline(always)]
pub fn outb(port: u16, val: u8) {
    unsafe {
        core::arch::asm!(
            "out dx, al",
            in("dx") port,
            in("al") val,
            options(nostack, preserves_flags),
        );
    }
}

/// Read a byte from an I/O port.
#[inline(always)]
pub fn inb(port: u16) -> u8 {
    let val: u8;
    unsafe {
        core::arch::asm!(
            "in al, dx",
            in("dx") port,
            out("al") val,
            options(nostack, preserves_flags),
        );
    }
    val
}
