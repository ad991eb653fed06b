use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::decode::Mnemonic;

/// Apply a MemoryWrite-category opcode against the already-resolved
/// `address` (either a jump target or the location to read-modify-write or
/// store into).
pub fn execute<B: Bus>(cpu: &mut Cpu<'_, B>, mnemonic: Mnemonic, address: u16) {
    use Mnemonic::*;
    match mnemonic {
        JMP => cpu.pc = address,
        JSR => {
            // JSR pushes the address of its own last byte, not the byte
            // after it; RTS adds the 1 back.
            let return_address = cpu.pc.wrapping_sub(1);
            cpu.push_u16(return_address);
            cpu.pc = address;
        }

        INC => {
            let result = cpu.bus.read(address).wrapping_add(1);
            cpu.p.set_zero_and_negative(result);
            cpu.bus.write(address, result);
        }
        DEC => {
            let result = cpu.bus.read(address).wrapping_sub(1);
            cpu.p.set_zero_and_negative(result);
            cpu.bus.write(address, result);
        }

        STA => cpu.bus.write(address, cpu.a),
        STX => cpu.bus.write(address, cpu.x),
        STY => cpu.bus.write(address, cpu.y),

        _ => unreachable!("{:?} is not a MemoryWrite mnemonic", mnemonic),
    }
}
