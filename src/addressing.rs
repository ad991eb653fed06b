//! Addressing-mode resolver: turns the current PC plus a decoded
//! `AddressingMode` into either an immediate value or an effective address,
//! reading 0-2 operand bytes from the bus and advancing PC as it goes.

use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::decode::AddressingMode;

/// What an addressing mode resolves to: a value that can be used directly
/// (Immediate, Accumulator), or an address the kernel must read/write
/// through the bus.
#[derive(Debug, Clone, Copy)]
pub enum Operand {
    Value(u8),
    Address(u16),
}

impl<'bus, B: Bus> Cpu<'bus, B> {
    /// Read the byte at PC and advance PC by one.
    pub(crate) fn next_u8(&mut self) -> u8 {
        let value = self.bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Read the little-endian word at PC and advance PC by two.
    pub(crate) fn next_u16(&mut self) -> u16 {
        let value = self.bus.read_u16(self.pc);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    /// Read a little-endian word from `address`, reproducing the hardware
    /// bug where a pointer whose low byte is $FF wraps the high-byte fetch
    /// back to the start of the *same* page instead of crossing into the
    /// next one.
    fn read_u16_page_wrapped(&mut self, address: u16) -> u16 {
        let low = self.bus.read(address) as u16;
        let high_address = (address & 0xFF00) | (address.wrapping_add(1) & 0x00FF);
        let high = self.bus.read(high_address) as u16;
        (high << 8) | low
    }

    /// Resolve `mode`, consuming whatever operand bytes it needs from PC.
    pub(crate) fn resolve_operand(&mut self, mode: AddressingMode) -> Operand {
        use AddressingMode::*;
        match mode {
            Implied => Operand::Value(0),
            Accumulator => Operand::Value(self.a),
            Immediate => {
                let address = self.pc;
                self.pc = self.pc.wrapping_add(1);
                Operand::Value(self.bus.read(address))
            }
            ZeroPage => Operand::Address(self.next_u8() as u16),
            ZeroPageX => Operand::Address(self.next_u8().wrapping_add(self.x) as u16),
            ZeroPageY => Operand::Address(self.next_u8().wrapping_add(self.y) as u16),
            Relative => {
                let offset = self.next_u8() as i8;
                Operand::Address(self.pc.wrapping_add(offset as i16 as u16))
            }
            Absolute => Operand::Address(self.next_u16()),
            AbsoluteX => Operand::Address(self.next_u16().wrapping_add(self.x as u16)),
            AbsoluteY => Operand::Address(self.next_u16().wrapping_add(self.y as u16)),
            Indirect => {
                let pointer = self.next_u16();
                Operand::Address(self.read_u16_page_wrapped(pointer))
            }
            IndirectX => {
                let zero_page = self.next_u8().wrapping_add(self.x);
                Operand::Address(self.read_u16_page_wrapped(zero_page as u16))
            }
            IndirectY => {
                let zero_page = self.next_u8();
                let base = self.read_u16_page_wrapped(zero_page as u16);
                Operand::Address(base.wrapping_add(self.y as u16))
            }
        }
    }

    /// Resolve the operand and, if it names an address, read the byte there.
    /// Used by kernels that only ever read their operand (Argument,
    /// AccumulatorWrite's read half).
    pub(crate) fn resolve_value(&mut self, mode: AddressingMode) -> u8 {
        match self.resolve_operand(mode) {
            Operand::Value(value) => value,
            Operand::Address(address) => self.bus.read(address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::RamBus;
    use crate::cpu::Cpu;

    #[test]
    fn indirect_reproduces_page_boundary_bug() {
        let mut bus = RamBus::new();
        // The pointer word itself, read from the operand bytes at PC.
        bus.write(0x0000, 0xFF);
        bus.write(0x0001, 0x10);
        // $10FF -> low byte of the target address.
        bus.write(0x10FF, 0x34);
        // Hardware bug: the high byte wraps to $1000, not $1100.
        bus.write(0x1000, 0x12);
        bus.write(0x1100, 0x56);

        let mut cpu = Cpu::new(&mut bus);
        cpu.pc = 0x0000;
        let result = cpu.resolve_operand(AddressingMode::Indirect);
        match result {
            Operand::Address(addr) => assert_eq!(addr, 0x1234),
            _ => panic!("expected an address"),
        }
    }

    #[test]
    fn zero_page_x_wraps_within_zero_page() {
        let mut bus = RamBus::new();
        let mut cpu = Cpu::new(&mut bus);
        cpu.bus.write(0x2000, 0xFF);
        cpu.pc = 0x2000;
        cpu.x = 0x02;
        let result = cpu.resolve_operand(AddressingMode::ZeroPageX);
        match result {
            Operand::Address(addr) => assert_eq!(addr, 0x0001),
            _ => panic!("expected an address"),
        }
    }
}
