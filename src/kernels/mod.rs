//! The five semantic groups an opcode's implementation falls into, matching
//! `decode::Category`. Each module owns the mnemonics in its group and is
//! handed exactly the operand shape dispatch already resolved for it:
//! `command` gets nothing, `branch` gets a target address, `argument` gets
//! a value, `memory_write` gets an address, `accumulator_write` gets
//! whichever `Operand` the addressing mode produced.

pub mod accumulator_write;
pub mod argument;
pub mod branch;
pub mod command;
pub mod memory_write;
