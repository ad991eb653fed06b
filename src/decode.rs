//! Static decode tables: opcode -> (mnemonic, addressing mode, base cycles),
//! addressing mode -> operand byte count, and mnemonic -> semantic category.
//!
//! These are built once, behind `once_cell::sync::Lazy`, and never mutated
//! afterward, since the 6502 instruction set is fixed at compile time and
//! there is no reason to pay for per-CPU-instance copies of it.

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Relative,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode byte.
    pub fn operand_bytes(self) -> u8 {
        use AddressingMode::*;
        match self {
            Implied | Accumulator => 0,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectX | IndirectY => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }
}

/// The semantic group an opcode's implementation falls into. Dispatch uses
/// this, not the mnemonic itself, to decide how to feed the resolved operand
/// into the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Implied-mode register/flag/stack operations: CLC, SEI, PHA, BRK, ...
    Command,
    /// Relative-mode conditional jumps: BCC, BEQ, ...
    Branch,
    /// Reads the operand, never writes memory back: ADC, CMP, LDA, BIT, ...
    Argument,
    /// Writes to the resolved address (or jumps to it): JMP, JSR, STA, INC, ...
    MemoryWrite,
    /// Reads, transforms, writes back either memory or the accumulator:
    /// ASL, LSR, ROL, ROR.
    AccumulatorWrite,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum Mnemonic {
    ADC, AND, ASL, BCC, BCS, BEQ, BIT, BMI, BNE, BPL, BRK, BVC, BVS,
    CLC, CLD, CLI, CLV, CMP, CPX, CPY, DEC, DEX, DEY, EOR, INC, INX, INY,
    JMP, JSR, LDA, LDX, LDY, LSR, NOP, ORA, PHA, PHP, PLA, PLP,
    ROL, ROR, RTI, RTS, SBC, SEC, SED, SEI, STA, STX, STY,
    TAX, TAY, TSX, TXA, TXS, TYA,
}

impl Mnemonic {
    pub fn category(self) -> Category {
        use Mnemonic::*;
        match self {
            CLC | CLD | CLI | CLV | SEC | SED | SEI | DEX | DEY | INX | INY | TAX | TAY | TXA
            | TYA | TSX | TXS | NOP | PHA | PHP | PLA | PLP | BRK | RTI | RTS => Category::Command,
            BCC | BCS | BEQ | BMI | BNE | BPL | BVC | BVS => Category::Branch,
            ADC | AND | BIT | CMP | CPX | CPY | EOR | LDA | LDX | LDY | ORA | SBC => {
                Category::Argument
            }
            JMP | JSR | INC | DEC | STA | STX | STY => Category::MemoryWrite,
            ASL | LSR | ROL | ROR => Category::AccumulatorWrite,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    pub cycles: u8,
}

macro_rules! op {
    ($mnemonic:ident, $mode:ident, $cycles:expr) => {
        Some(OpcodeInfo {
            mnemonic: Mnemonic::$mnemonic,
            mode: AddressingMode::$mode,
            cycles: $cycles,
        })
    };
}

type OpcodeTable = [Option<OpcodeInfo>; 256];

fn build_opcode_table() -> OpcodeTable {
    let mut table: OpcodeTable = [None; 256];

    macro_rules! set {
        ($opcode:expr, $mnemonic:ident, $mode:ident, $cycles:expr) => {
            table[$opcode] = op!($mnemonic, $mode, $cycles);
        };
    }

    // ADC
    set!(0x69, ADC, Immediate, 2);
    set!(0x65, ADC, ZeroPage, 3);
    set!(0x75, ADC, ZeroPageX, 4);
    set!(0x6D, ADC, Absolute, 4);
    set!(0x7D, ADC, AbsoluteX, 4);
    set!(0x79, ADC, AbsoluteY, 4);
    set!(0x61, ADC, IndirectX, 6);
    set!(0x71, ADC, IndirectY, 5);

    // AND
    set!(0x29, AND, Immediate, 2);
    set!(0x25, AND, ZeroPage, 3);
    set!(0x35, AND, ZeroPageX, 4);
    set!(0x2D, AND, Absolute, 4);
    set!(0x3D, AND, AbsoluteX, 4);
    set!(0x39, AND, AbsoluteY, 4);
    set!(0x21, AND, IndirectX, 6);
    set!(0x31, AND, IndirectY, 5);

    // ASL
    set!(0x0A, ASL, Accumulator, 2);
    set!(0x06, ASL, ZeroPage, 5);
    set!(0x16, ASL, ZeroPageX, 6);
    set!(0x0E, ASL, Absolute, 6);
    set!(0x1E, ASL, AbsoluteX, 7);

    // Branches
    set!(0x90, BCC, Relative, 2);
    set!(0xB0, BCS, Relative, 2);
    set!(0xF0, BEQ, Relative, 2);
    set!(0x30, BMI, Relative, 2);
    set!(0xD0, BNE, Relative, 2);
    set!(0x10, BPL, Relative, 2);
    set!(0x50, BVC, Relative, 2);
    set!(0x70, BVS, Relative, 2);

    // BIT
    set!(0x24, BIT, ZeroPage, 3);
    set!(0x2C, BIT, Absolute, 4);

    set!(0x00, BRK, Implied, 7);

    // Flag clear/set
    set!(0x18, CLC, Implied, 2);
    set!(0xD8, CLD, Implied, 2);
    set!(0x58, CLI, Implied, 2);
    set!(0xB8, CLV, Implied, 2);
    set!(0x38, SEC, Implied, 2);
    set!(0xF8, SED, Implied, 2);
    set!(0x78, SEI, Implied, 2);

    // CMP
    set!(0xC9, CMP, Immediate, 2);
    set!(0xC5, CMP, ZeroPage, 3);
    set!(0xD5, CMP, ZeroPageX, 4);
    set!(0xCD, CMP, Absolute, 4);
    set!(0xDD, CMP, AbsoluteX, 4);
    set!(0xD9, CMP, AbsoluteY, 4);
    set!(0xC1, CMP, IndirectX, 6);
    set!(0xD1, CMP, IndirectY, 5);

    // CPX / CPY
    set!(0xE0, CPX, Immediate, 2);
    set!(0xE4, CPX, ZeroPage, 3);
    set!(0xEC, CPX, Absolute, 4);
    set!(0xC0, CPY, Immediate, 2);
    set!(0xC4, CPY, ZeroPage, 3);
    set!(0xCC, CPY, Absolute, 4);

    // DEC / INC
    set!(0xC6, DEC, ZeroPage, 5);
    set!(0xD6, DEC, ZeroPageX, 6);
    set!(0xCE, DEC, Absolute, 6);
    set!(0xDE, DEC, AbsoluteX, 7);
    set!(0xE6, INC, ZeroPage, 5);
    set!(0xF6, INC, ZeroPageX, 6);
    set!(0xEE, INC, Absolute, 6);
    set!(0xFE, INC, AbsoluteX, 7);

    // DEX / DEY / INX / INY
    set!(0xCA, DEX, Implied, 2);
    set!(0x88, DEY, Implied, 2);
    set!(0xE8, INX, Implied, 2);
    set!(0xC8, INY, Implied, 2);

    // EOR
    set!(0x49, EOR, Immediate, 2);
    set!(0x45, EOR, ZeroPage, 3);
    set!(0x55, EOR, ZeroPageX, 4);
    set!(0x4D, EOR, Absolute, 4);
    set!(0x5D, EOR, AbsoluteX, 4);
    set!(0x59, EOR, AbsoluteY, 4);
    set!(0x41, EOR, IndirectX, 6);
    set!(0x51, EOR, IndirectY, 5);

    // JMP / JSR
    set!(0x4C, JMP, Absolute, 3);
    set!(0x6C, JMP, Indirect, 5);
    set!(0x20, JSR, Absolute, 6);

    // LDA
    set!(0xA9, LDA, Immediate, 2);
    set!(0xA5, LDA, ZeroPage, 3);
    set!(0xB5, LDA, ZeroPageX, 4);
    set!(0xAD, LDA, Absolute, 4);
    set!(0xBD, LDA, AbsoluteX, 4);
    set!(0xB9, LDA, AbsoluteY, 4);
    set!(0xA1, LDA, IndirectX, 6);
    set!(0xB1, LDA, IndirectY, 5);

    // LDX
    set!(0xA2, LDX, Immediate, 2);
    set!(0xA6, LDX, ZeroPage, 3);
    set!(0xB6, LDX, ZeroPageY, 4);
    set!(0xAE, LDX, Absolute, 4);
    set!(0xBE, LDX, AbsoluteY, 4);

    // LDY
    set!(0xA0, LDY, Immediate, 2);
    set!(0xA4, LDY, ZeroPage, 3);
    set!(0xB4, LDY, ZeroPageX, 4);
    set!(0xAC, LDY, Absolute, 4);
    set!(0xBC, LDY, AbsoluteX, 4);

    // LSR
    set!(0x4A, LSR, Accumulator, 2);
    set!(0x46, LSR, ZeroPage, 5);
    set!(0x56, LSR, ZeroPageX, 6);
    set!(0x4E, LSR, Absolute, 6);
    set!(0x5E, LSR, AbsoluteX, 7);

    set!(0xEA, NOP, Implied, 2);

    // ORA
    set!(0x09, ORA, Immediate, 2);
    set!(0x05, ORA, ZeroPage, 3);
    set!(0x15, ORA, ZeroPageX, 4);
    set!(0x0D, ORA, Absolute, 4);
    set!(0x1D, ORA, AbsoluteX, 4);
    set!(0x19, ORA, AbsoluteY, 4);
    set!(0x01, ORA, IndirectX, 6);
    set!(0x11, ORA, IndirectY, 5);

    // Stack
    set!(0x48, PHA, Implied, 3);
    set!(0x08, PHP, Implied, 3);
    set!(0x68, PLA, Implied, 4);
    set!(0x28, PLP, Implied, 4);

    // ROL / ROR
    set!(0x2A, ROL, Accumulator, 2);
    set!(0x26, ROL, ZeroPage, 5);
    set!(0x36, ROL, ZeroPageX, 6);
    set!(0x2E, ROL, Absolute, 6);
    set!(0x3E, ROL, AbsoluteX, 7);
    set!(0x6A, ROR, Accumulator, 2);
    set!(0x66, ROR, ZeroPage, 5);
    set!(0x76, ROR, ZeroPageX, 6);
    set!(0x6E, ROR, Absolute, 6);
    set!(0x7E, ROR, AbsoluteX, 7);

    set!(0x40, RTI, Implied, 6);
    set!(0x60, RTS, Implied, 6);

    // SBC
    set!(0xE9, SBC, Immediate, 2);
    set!(0xE5, SBC, ZeroPage, 3);
    set!(0xF5, SBC, ZeroPageX, 4);
    set!(0xED, SBC, Absolute, 4);
    set!(0xFD, SBC, AbsoluteX, 4);
    set!(0xF9, SBC, AbsoluteY, 4);
    set!(0xE1, SBC, IndirectX, 6);
    set!(0xF1, SBC, IndirectY, 5);

    // STA
    set!(0x85, STA, ZeroPage, 3);
    set!(0x95, STA, ZeroPageX, 4);
    set!(0x8D, STA, Absolute, 4);
    set!(0x9D, STA, AbsoluteX, 5);
    set!(0x99, STA, AbsoluteY, 5);
    set!(0x81, STA, IndirectX, 6);
    set!(0x91, STA, IndirectY, 6);

    // STX / STY
    set!(0x86, STX, ZeroPage, 3);
    set!(0x96, STX, ZeroPageY, 4);
    set!(0x8E, STX, Absolute, 4);
    set!(0x84, STY, ZeroPage, 3);
    set!(0x94, STY, ZeroPageX, 4);
    set!(0x8C, STY, Absolute, 4);

    // Register transfers
    set!(0xAA, TAX, Implied, 2);
    set!(0xA8, TAY, Implied, 2);
    set!(0xBA, TSX, Implied, 2);
    set!(0x8A, TXA, Implied, 2);
    set!(0x9A, TXS, Implied, 2);
    set!(0x98, TYA, Implied, 2);

    table
}

static OPCODE_TABLE: Lazy<OpcodeTable> = Lazy::new(build_opcode_table);

/// Look up the decode entry for `opcode`. `None` means the opcode is
/// unofficial/illegal and is out of this core's scope.
pub fn decode(opcode: u8) -> Option<OpcodeInfo> {
    OPCODE_TABLE[opcode as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_exactly_151_legal_opcodes() {
        let count = (0u16..256).filter(|&op| decode(op as u8).is_some()).count();
        assert_eq!(count, 151);
    }

    #[test]
    fn lda_immediate_decodes() {
        let info = decode(0xA9).unwrap();
        assert_eq!(info.mnemonic, Mnemonic::LDA);
        assert_eq!(info.mode, AddressingMode::Immediate);
        assert_eq!(info.cycles, 2);
    }

    #[test]
    fn unofficial_opcode_is_absent() {
        // 0x02 (KIL/JAM) is not a legal, documented 6502 opcode.
        assert!(decode(0x02).is_none());
    }

    #[test]
    fn every_mode_reports_a_byte_count() {
        use AddressingMode::*;
        assert_eq!(Implied.operand_bytes(), 0);
        assert_eq!(Accumulator.operand_bytes(), 0);
        assert_eq!(Immediate.operand_bytes(), 1);
        assert_eq!(Relative.operand_bytes(), 1);
        assert_eq!(IndirectX.operand_bytes(), 1);
        assert_eq!(IndirectY.operand_bytes(), 1);
        assert_eq!(Absolute.operand_bytes(), 2);
        assert_eq!(AbsoluteX.operand_bytes(), 2);
        assert_eq!(AbsoluteY.operand_bytes(), 2);
        assert_eq!(Indirect.operand_bytes(), 2);
    }
}
