/// 8259 PIC (Programmable Interrupt Controller): remap and mask.
///
/// The legacy PIC maps IRQ 0-7 to interrupts 8-15, which collides with
/// CPU exceptions. We remap IRQs to 32-47 and leave only the keyboard
/// line (IRQ1) unmasked; the shell is the only interrupt consumer.

const PIC1_CMD: u16 = 0x20;
const PIC1_DATA: u16 = 0x21;
const PIC2_CMD: u16 = 0xA0;
const PIC2_DATA: u16 = 0xA1;

const ICW1_INIT: u8 = 0x11; // initialization + ICW4 needed
const ICW4_8086: u8 = 0x01; // 8086 mode

const EOI: u8 = 0x20;

/// First vector used by the master PIC after remapping.
pub const IRQ_BASE: u8 = 32;

/// PS/2 keyboard line.
pub const IRQ_KEYBOARD: u8 = 1;

/// Remap the PIC so IRQs don't collide with CPU exceptions, then mask
/// every line except the keyboard.
///
/// # Safety
/// Must be called during early boot, with interrupts disabled.
pub unsafe fn init() {
    use super::outb;

    // ICW1: start initialization sequence
    outb(PIC1_CMD, ICW1_INIT);
    io_wait();
    outb(PIC2_CMD, ICW1_INIT);
    io_wait();

    // ICW2: vector offsets
    outb(PIC1_DATA, IRQ_BASE); // IRQ 0-7  → INT 32-39
    io_wait();
    outb(PIC2_DATA, IRQ_BASE + 8); // IRQ 8-15 → INT 40-47
    io_wait();

    // ICW3: tell PICs about each other
    outb(PIC1_DATA, 4); // slave on IRQ2
    io_wait();
    outb(PIC2_DATA, 2); // cascade identity
    io_wait();

    // ICW4: 8086 mode
    outb(PIC1_DATA, ICW4_8086);
    io_wait();
    outb(PIC2_DATA, ICW4_8086);
    io_wait();

    // Keyboard only
    outb(PIC1_DATA, !(1u8 << IRQ_KEYBOARD));
    outb(PIC2_DATA, 0xFF);
}

/// Send End-of-Interrupt for `irq`.
pub fn send_eoi(irq: u8) {
    if irq >= 8 {
        super::outb(PIC2_CMD, EOI);
    }
    super::outb(PIC1_CMD, EOI);
}

/// Small I/O delay for PIC initialization.
fn io_wait() {
    // Writing to port 0x80 is a common way to add a small delay
    super::outb(0x80, 0);
}
