use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::decode::Mnemonic;
use crate::flags::StatusFlags;

/// Add `operand` (plus carry) into A, setting C/V/N/Z. Shared by ADC and
/// SBC, since SBC feeds in the bitwise complement of its operand and relies
/// on the caller having set C appropriately (conventionally via SEC), which
/// is the classic 6502 two's-complement-via-carry trick.
fn add_with_carry<B: Bus>(cpu: &mut Cpu<'_, B>, operand: u8) {
    let carry_in = cpu.status(StatusFlags::CARRY) as u16;
    let sum = cpu.a as u16 + operand as u16 + carry_in;
    let result = sum as u8;

    let overflow = (cpu.a ^ result) & (operand ^ result) & 0b1000_0000 != 0;

    cpu.p.set_zero_and_negative(result);
    cpu.p.set(StatusFlags::CARRY, sum > 0xFF);
    cpu.p.set(StatusFlags::OVERFLOW, overflow);
    cpu.a = result;
}

/// Apply an Argument-category opcode against the already-resolved `value`.
pub fn execute<B: Bus>(cpu: &mut Cpu<'_, B>, mnemonic: Mnemonic, value: u8) {
    use Mnemonic::*;
    match mnemonic {
        ADC => add_with_carry(cpu, value),
        // Subtracting M is the same adder run on M's ones' complement; the
        // borrow-as-inverted-carry convention means `1 - C` falls out for free.
        SBC => add_with_carry(cpu, !value),

        AND => {
            cpu.a &= value;
            cpu.p.set_zero_and_negative(cpu.a);
        }
        EOR => {
            cpu.a ^= value;
            cpu.p.set_zero_and_negative(cpu.a);
        }
        ORA => {
            cpu.a |= value;
            cpu.p.set_zero_and_negative(cpu.a);
        }

        BIT => {
            cpu.p.set(StatusFlags::NEGATIVE, value & 0b1000_0000 != 0);
            cpu.p.set(StatusFlags::OVERFLOW, value & 0b0100_0000 != 0);
            cpu.p.set(StatusFlags::ZERO, cpu.a & value == 0);
        }

        CMP => {
            let register = cpu.a;
            compare(cpu, register, value);
        }
        CPX => {
            let register = cpu.x;
            compare(cpu, register, value);
        }
        CPY => {
            let register = cpu.y;
            compare(cpu, register, value);
        }

        LDA => {
            cpu.a = value;
            cpu.p.set_zero_and_negative(cpu.a);
        }
        LDX => {
            cpu.x = value;
            cpu.p.set_zero_and_negative(cpu.x);
        }
        LDY => {
            cpu.y = value;
            cpu.p.set_zero_and_negative(cpu.y);
        }

        _ => unreachable!("{:?} is not an Argument mnemonic", mnemonic),
    }
}

/// http://6502.org/tutorials/compare_instructions.html
fn compare<B: Bus>(cpu: &mut Cpu<'_, B>, register: u8, value: u8) {
    cpu.p.set_zero_and_negative(register.wrapping_sub(value));
    cpu.p.set(StatusFlags::CARRY, register >= value);
}
