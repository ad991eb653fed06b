use crate::addressing::Operand;
use crate::bus::Bus;
use crate::constants::{InterruptVector, STACK_PAGE};
use crate::decode::{self, Category};
use crate::diagnostics::{CpuError, UnofficialOpcodeHook};
use crate::flags::StatusFlags;
use crate::kernels::{accumulator_write, argument, branch, command, memory_write};

#[cfg(test)]
mod test_helpers;


/// This struct implements the MOS Technology 6502 central processing unit.
///
/// http://www.6502.org/
/// https://en.wikipedia.org/wiki/MOS_Technology_6502
/// http://wiki.nesdev.com/w/index.php/CPU
pub struct Cpu<'bus, B: Bus> {
    pub(crate) bus: &'bus mut B,

    pub(crate) a: u8,
    pub(crate) x: u8,
    pub(crate) y: u8,
    pub(crate) s: u8,
    pub(crate) pc: u16,
    pub(crate) p: StatusFlags,

    on_unofficial_opcode: Option<UnofficialOpcodeHook>,
}

impl<'bus, B: Bus> Cpu<'bus, B> {
    /// Bind to a bus and read the reset vector to seed PC, mirroring what
    /// real hardware does on power-on. Call `reset()` explicitly afterward
    /// if the host wants the full reset sequence (it also zeroes A/X/Y and
    /// reinitializes S/P).
    pub fn new(bus: &'bus mut B) -> Cpu<'bus, B> {
        let pc = bus.read_u16(InterruptVector::Reset as u16);
        Cpu {
            bus,
            a: 0,
            x: 0,
            y: 0,
            s: 0xFF,
            pc,
            p: StatusFlags::RESET,
            on_unofficial_opcode: None,
        }
    }

    /// Install a diagnostic hook for unofficial/illegal opcodes. Replaces
    /// any previously installed hook.
    pub fn on_unofficial_opcode<F>(&mut self, hook: F)
    where
        F: FnMut(u8, u16) + 'static,
    {
        self.on_unofficial_opcode = Some(Box::new(hook));
    }

    // --- Debug accessors -------------------------------------------------

    pub fn a(&self) -> u8 {
        self.a
    }
    pub fn x(&self) -> u8 {
        self.x
    }
    pub fn y(&self) -> u8 {
        self.y
    }
    pub fn s(&self) -> u8 {
        self.s
    }
    pub fn pc(&self) -> u16 {
        self.pc
    }
    pub fn p(&self) -> u8 {
        self.p.to_pushed_byte()
    }
    pub fn status(&self, flag: StatusFlags) -> bool {
        self.p.contains(flag)
    }

    // --- Signal entry points ----------------------------------------------

    /// `reset`: A=X=Y=0, S=0xFF, P=0b00100000, PC <- word at $FFFC/$FFFD.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.s = 0xFF;
        self.p = StatusFlags::UNUSED;
        self.pc = self.bus.read_u16(InterruptVector::Reset as u16);
    }

    /// `irq`: maskable interrupt. No-op (returns `false`) if I is set.
    /// Otherwise pushes PC and P, sets I, and jumps through the IRQ/BRK
    /// vector.
    pub fn irq(&mut self) -> bool {
        if self.p.contains(StatusFlags::INTERRUPT_DISABLE) {
            return false;
        }
        self.push_u16(self.pc);
        self.p.remove(StatusFlags::BREAK);
        // Pushed before I is set, so the pulled byte carries I=0, as real hardware does.
        self.push_u8(self.p.to_pushed_byte());
        self.p.insert(StatusFlags::INTERRUPT_DISABLE);
        self.pc = self.bus.read_u16(InterruptVector::IrqBrk as u16);
        true
    }

    /// `nmi`: non-maskable interrupt. Unconditional.
    pub fn nmi(&mut self) {
        self.push_u16(self.pc);
        self.p.remove(StatusFlags::BREAK);
        self.push_u8(self.p.to_pushed_byte());
        self.p.insert(StatusFlags::INTERRUPT_DISABLE);
        self.pc = self.bus.read_u16(InterruptVector::Nmi as u16);
    }

    // --- Stack helpers -----------------------------------------------------

    pub(crate) fn push_u8(&mut self, value: u8) {
        let address = u16::from_le_bytes([self.s, STACK_PAGE]);
        self.bus.write(address, value);
        self.s = self.s.wrapping_sub(1);
    }

    pub(crate) fn pop_u8(&mut self) -> u8 {
        self.s = self.s.wrapping_add(1);
        let address = u16::from_le_bytes([self.s, STACK_PAGE]);
        self.bus.read(address)
    }

    /// Pushes the high byte first, then the low byte, so the low byte ends
    /// up at the lower address (this is what real 6502 JSR/BRK/interrupt
    /// entry do), and `pop_u16` mirrors it on the way back out.
    pub(crate) fn push_u16(&mut self, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push_u8(high);
        self.push_u8(low);
    }

    pub(crate) fn pop_u16(&mut self) -> u16 {
        let low = self.pop_u8();
        let high = self.pop_u8();
        u16::from_le_bytes([low, high])
    }

    // --- Dispatch ------------------------------------------------------

    /// Execute one instruction. Returns the base cycle count (2-7 for legal
    /// opcodes, 1 for an unrecognised one). Page-crossing and branch-taken
    /// penalties are not modeled; see the crate-level docs.
    pub fn step(&mut self) -> u8 {
        match self.try_step() {
            Ok(cycles) => cycles,
            Err(err) => panic!("{}", err),
        }
    }

    /// Same as `step`, but surfaces `CpuError::InvalidDispatch` instead of
    /// panicking. The built-in decode table never produces this error; it
    /// exists for hosts that substitute their own table.
    pub fn try_step(&mut self) -> Result<u8, CpuError> {
        let opcode = self.next_u8();

        let info = match decode::decode(opcode) {
            Some(info) => info,
            None => {
                if let Some(hook) = self.on_unofficial_opcode.as_mut() {
                    hook(opcode, self.pc);
                }
                return Ok(1);
            }
        };

        match info.mnemonic.category() {
            Category::Command => command::execute(self, info.mnemonic),
            Category::Branch => {
                let target = match self.resolve_operand(info.mode) {
                    Operand::Address(addr) => addr,
                    Operand::Value(_) => return Err(CpuError::InvalidDispatch { opcode }),
                };
                branch::execute(self, info.mnemonic, target);
            }
            Category::Argument => {
                let value = self.resolve_value(info.mode);
                argument::execute(self, info.mnemonic, value);
            }
            Category::MemoryWrite => {
                let address = match self.resolve_operand(info.mode) {
                    Operand::Address(addr) => addr,
                    Operand::Value(_) => return Err(CpuError::InvalidDispatch { opcode }),
                };
                memory_write::execute(self, info.mnemonic, address);
            }
            Category::AccumulatorWrite => {
                let operand = self.resolve_operand(info.mode);
                accumulator_write::execute(self, info.mnemonic, operand);
            }
        }

        Ok(info.cycles)
    }
}
