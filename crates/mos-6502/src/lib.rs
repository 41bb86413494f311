//! MOS 6502 CPU instruction-set emulator.
//!
//! Instruction-level emulation with table-driven dispatch: each opcode
//! byte indexes a 256-entry descriptor table giving its base cycle cost,
//! addressing mode and operation. The tick that starts an instruction
//! fetches, resolves the addressing mode and executes the operation in
//! one go; the remaining ticks of the instruction only count down.
//!
//! Cycle costs are flat per opcode — taken-branch and page-crossing
//! penalties are not modeled. Decimal mode is not implemented: the D
//! flag can be set and cleared but ADC/SBC always compute in binary.

mod addressing;
mod cpu;
pub mod flags;
mod opcodes;
mod registers;

pub use addressing::{AddressingMode, Operand};
pub use cpu::Mos6502;
pub use flags::Status;
pub use opcodes::{decode, Opcode, Operation};
pub use registers::Registers;
