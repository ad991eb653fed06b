//! Non-fatal and fatal conditions the core can report. Unofficial opcodes are
//! routine enough (illegal opcodes show up in real NES cartridges, accidental
//! jumps into data, etc.) that they go through a pluggable hook rather than a
//! panic or an `Err`; a decode table that disagrees with itself is a bug in
//! the table, not something a running program can trigger, so it is fatal.

use std::fmt;

/// A callback invoked from `Cpu::step` when the fetched opcode has no entry
/// in the decode table. Arguments are the raw opcode byte and the PC it was
/// fetched from (post-increment, i.e. pointing at the next byte).
pub type UnofficialOpcodeHook = Box<dyn FnMut(u8, u16)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// A decode-table entry names a `Category` its `AddressingMode` cannot
    /// support (e.g. an `Argument` mnemonic paired with `Implied` mode).
    /// Indicates a corrupted or hand-edited decode table, never the
    /// built-in one.
    InvalidDispatch { opcode: u8 },
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuError::InvalidDispatch { opcode } => {
                write!(f, "decode table entry for opcode {:#04x} dispatches to a category its addressing mode cannot support", opcode)
            }
        }
    }
}

impl std::error::Error for CpuError {}
