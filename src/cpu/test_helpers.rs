use crate::bus::{Bus, RamBus};
use crate::constants::InterruptVector;
use crate::flags::StatusFlags;

pub const C: StatusFlags = StatusFlags::CARRY;
pub const Z: StatusFlags = StatusFlags::ZERO;
pub const V: StatusFlags = StatusFlags::OVERFLOW;
pub const N: StatusFlags = StatusFlags::NEGATIVE;

/// Write `bytes` starting at `origin` and point the reset vector at it, so
/// a freshly-constructed `Cpu` starts executing the program immediately.
pub fn load_program(bus: &mut RamBus, origin: u16, bytes: &[u8]) {
    for (offset, byte) in bytes.iter().enumerate() {
        bus.write(origin.wrapping_add(offset as u16), *byte);
    }
    bus.write(InterruptVector::Reset as u16, origin as u8);
    bus.write(InterruptVector::Reset as u16 + 1, (origin >> 8) as u8);
}
