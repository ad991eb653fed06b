use bitflags::bitflags;

bitflags! {
    /// "P" - Status register.
    ///
    /// http://wiki.nesdev.com/w/index.php/Status_flags
    ///
    ///   7  bit  0
    /// ---- ----
    /// NV-BDIZC
    /// |||| ||||
    /// |||| |||+- Carry
    /// |||| ||+-- Zero
    /// |||| |+--- Interrupt Disable
    /// |||| +---- Decimal
    /// |||+------ Break
    /// ||+------- Unused, always reads as 1
    /// |+-------- Overflow
    /// +--------- Negative
    pub struct StatusFlags: u8 {
        const CARRY             = 0b0000_0001;
        const ZERO              = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL           = 0b0000_1000;
        const BREAK             = 0b0001_0000;
        const UNUSED            = 0b0010_0000;
        const OVERFLOW          = 0b0100_0000;
        const NEGATIVE          = 0b1000_0000;

        /// What `p` is set to on reset: 0b0010_0000, bit 5 sticky-high.
        const RESET = Self::UNUSED.bits;
    }
}

impl Default for StatusFlags {
    fn default() -> Self {
        StatusFlags::RESET
    }
}

impl StatusFlags {
    /// Update Z and N together, as almost every ALU/register-writing opcode does.
    pub fn set_zero_and_negative(&mut self, value: u8) {
        self.set(StatusFlags::ZERO, value == 0);
        self.set(StatusFlags::NEGATIVE, value & 0b1000_0000 != 0);
    }

    /// `p` as observed externally (pushed to the stack, read by PHP/BRK): bit 5
    /// always reads high regardless of how it was last written.
    pub fn to_pushed_byte(self) -> u8 {
        (self | StatusFlags::UNUSED).bits()
    }
}
