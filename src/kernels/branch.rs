use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::decode::Mnemonic;
use crate::flags::StatusFlags;

/// Apply a relative-mode Branch opcode. `target` is the address the
/// addressing resolver already computed from PC plus the signed
/// displacement; branches that don't take simply leave PC where dispatch's
/// operand-byte consumption left it.
pub fn execute<B: Bus>(cpu: &mut Cpu<'_, B>, mnemonic: Mnemonic, target: u16) {
    use Mnemonic::*;
    let taken = match mnemonic {
        BCC => !cpu.status(StatusFlags::CARRY),
        BCS => cpu.status(StatusFlags::CARRY),
        BEQ => cpu.status(StatusFlags::ZERO),
        BNE => !cpu.status(StatusFlags::ZERO),
        BPL => !cpu.status(StatusFlags::NEGATIVE),
        BMI => cpu.status(StatusFlags::NEGATIVE),
        BVC => !cpu.status(StatusFlags::OVERFLOW),
        BVS => cpu.status(StatusFlags::OVERFLOW),
        _ => unreachable!("{:?} is not a Branch mnemonic", mnemonic),
    };

    if taken {
        cpu.pc = target;
    }
}
