//! Fixed memory locations the CPU core reads and writes directly, independent
//! of whatever the bus maps everywhere else.

/// Low byte of the stack page, $0100-$01FF.
pub const STACK_PAGE: u8 = 0x01;

#[rustfmt::skip]
pub enum InterruptVector {
    /// Non-Maskable Interrupt vector, $FFFA/$FFFB.
    Nmi   = 0xFFFA,
    /// Reset vector, $FFFC/$FFFD.
    Reset = 0xFFFC,
    /// IRQ/BRK vector, $FFFE/$FFFF.
    IrqBrk = 0xFFFE,
}
