use crate::bus::Bus;
use crate::constants::InterruptVector;
use crate::cpu::Cpu;
use crate::decode::Mnemonic;
use crate::flags::StatusFlags;

/// Apply an implied-mode Command opcode. None of these read an operand.
pub fn execute<B: Bus>(cpu: &mut Cpu<'_, B>, mnemonic: Mnemonic) {
    use Mnemonic::*;
    match mnemonic {
        CLC => cpu.p.remove(StatusFlags::CARRY),
        CLD => cpu.p.remove(StatusFlags::DECIMAL),
        CLI => cpu.p.remove(StatusFlags::INTERRUPT_DISABLE),
        CLV => cpu.p.remove(StatusFlags::OVERFLOW),
        SEC => cpu.p.insert(StatusFlags::CARRY),
        SED => cpu.p.insert(StatusFlags::DECIMAL),
        SEI => cpu.p.insert(StatusFlags::INTERRUPT_DISABLE),

        DEX => {
            cpu.x = cpu.x.wrapping_sub(1);
            cpu.p.set_zero_and_negative(cpu.x);
        }
        DEY => {
            cpu.y = cpu.y.wrapping_sub(1);
            cpu.p.set_zero_and_negative(cpu.y);
        }
        INX => {
            cpu.x = cpu.x.wrapping_add(1);
            cpu.p.set_zero_and_negative(cpu.x);
        }
        INY => {
            cpu.y = cpu.y.wrapping_add(1);
            cpu.p.set_zero_and_negative(cpu.y);
        }

        TAX => {
            cpu.x = cpu.a;
            cpu.p.set_zero_and_negative(cpu.x);
        }
        TAY => {
            cpu.y = cpu.a;
            cpu.p.set_zero_and_negative(cpu.y);
        }
        TXA => {
            cpu.a = cpu.x;
            cpu.p.set_zero_and_negative(cpu.a);
        }
        TYA => {
            cpu.a = cpu.y;
            cpu.p.set_zero_and_negative(cpu.a);
        }
        TSX => {
            cpu.x = cpu.s;
            cpu.p.set_zero_and_negative(cpu.x);
        }
        // TXS does not touch the flags: S is not a value register.
        TXS => cpu.s = cpu.x,

        NOP => {}

        PHA => cpu.push_u8(cpu.a),
        PHP => {
            let pushed = cpu.p.to_pushed_byte() | StatusFlags::BREAK.bits();
            cpu.push_u8(pushed);
        }
        PLA => {
            cpu.a = cpu.pop_u8();
            cpu.p.set_zero_and_negative(cpu.a);
        }
        PLP => cpu.p = StatusFlags::from_bits_truncate(cpu.pop_u8()),

        BRK => {
            cpu.push_u16(cpu.pc);
            cpu.p.insert(StatusFlags::BREAK);
            let pushed = cpu.p.to_pushed_byte();
            cpu.push_u8(pushed);
            cpu.p.insert(StatusFlags::INTERRUPT_DISABLE);
            cpu.pc = cpu.bus.read_u16(InterruptVector::IrqBrk as u16);
        }
        RTI => {
            // Hardware simply pulls P as-is; no toggling of B afterward.
            cpu.p = StatusFlags::from_bits_truncate(cpu.pop_u8());
            cpu.pc = cpu.pop_u16();
        }
        RTS => {
            // Compensates for JSR having pushed PC-1.
            cpu.pc = cpu.pop_u16().wrapping_add(1);
        }

        _ => unreachable!("{:?} is not a Command mnemonic", mnemonic),
    }
}
