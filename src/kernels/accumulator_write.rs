use crate::addressing::Operand;
use crate::bits::{rotate_left, rotate_right};
use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::decode::Mnemonic;
use crate::flags::StatusFlags;

/// Apply a shift/rotate opcode. `operand` is either `Value(a)` (Accumulator
/// mode, the result is written back to A) or `Address(addr)` (every other
/// mode, the byte is read from, then written back to, that address).
///
/// Carry always comes from the bit shifted out of the operand, never from
/// a "result > 255" check (that check belongs to ADC/SBC's 9-bit adder,
/// not to these single-bit shifts).
pub fn execute<B: Bus>(cpu: &mut Cpu<'_, B>, mnemonic: Mnemonic, operand: Operand) {
    use Mnemonic::*;

    let input = match operand {
        Operand::Value(value) => value,
        Operand::Address(address) => cpu.bus.read(address),
    };

    let carry_in = cpu.status(StatusFlags::CARRY);
    let (result, carry_out) = match mnemonic {
        ASL => (input << 1, input & 0b1000_0000 != 0),
        LSR => (input >> 1, input & 0b0000_0001 != 0),
        ROL => rotate_left(input, carry_in),
        ROR => rotate_right(input, carry_in),
        _ => unreachable!("{:?} is not an AccumulatorWrite mnemonic", mnemonic),
    };

    cpu.p.set_zero_and_negative(result);
    cpu.p.set(StatusFlags::CARRY, carry_out);

    match operand {
        Operand::Value(_) => cpu.a = result,
        Operand::Address(address) => cpu.bus.write(address, result),
    }
}
