//! 6502 addressing modes.
//!
//! The 6502 has 13 addressing modes:
//! - Implicit: No operand (e.g., CLC, RTS)
//! - Accumulator: Operates on A register (e.g., ASL A)
//! - Immediate: #$nn (literal value)
//! - Zero Page: $nn (8-bit address in page zero)
//! - Zero Page,X: $nn,X (8-bit address + X, wraps in page zero)
//! - Zero Page,Y: $nn,Y (8-bit address + Y, wraps in page zero)
//! - Relative: Branch offset (-128 to +127)
//! - Absolute: $nnnn (16-bit address)
//! - Absolute,X: $nnnn,X (16-bit address + X)
//! - Absolute,Y: $nnnn,Y (16-bit address + Y)
//! - Indirect: ($nnnn) (JMP only)
//! - Indexed Indirect: ($nn,X) (pointer in zero page indexed by X)
//! - Indirect Indexed: ($nn),Y (zero page pointer, then + Y)
//!
//! The resolver consumes the instruction-stream bytes for the mode
//! (advancing PC) and produces an [`Operand`]: the effective address
//! and, for every mode with a memory operand, the byte read from it.

use emu_core::Bus;

use crate::Mos6502;

/// Operand location rule for one opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implicit,
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
    IndexedIndirect,
    IndirectIndexed,
}

/// Resolved operand context, passed from the addressing resolver to the
/// instruction handler. Which fields are meaningful depends on the mode:
/// Implicit sets neither, Immediate/Accumulator only `value`, Relative
/// and Indirect only `addr`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Operand {
    /// Effective address the mode resolved to.
    pub addr: u16,
    /// Byte read from the effective address (or the immediate/accumulator
    /// value). Read-modify-write handlers re-read through the bus rather
    /// than trusting this, since a read may have bus side effects.
    pub value: u8,
}

impl Mos6502 {
    /// Fetch the next instruction-stream byte and advance PC.
    pub(crate) fn fetch<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Fetch a 16-bit little-endian word from the instruction stream.
    pub(crate) fn fetch_word<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let low = self.fetch(bus);
        let high = self.fetch(bus);
        u16::from_le_bytes([low, high])
    }

    /// Read a 16-bit little-endian word from memory.
    ///
    /// The high byte comes from `addr + 1` with the full 16-bit address
    /// wrapping at $FFFF; the JMP (ind) page-boundary hardware bug is not
    /// reproduced.
    pub(crate) fn read_word<B: Bus>(&self, bus: &mut B, addr: u16) -> u16 {
        let low = bus.read(addr);
        let high = bus.read(addr.wrapping_add(1));
        u16::from_le_bytes([low, high])
    }

    /// Resolve an addressing mode into its operand context.
    pub(crate) fn resolve<B: Bus>(&mut self, mode: AddressingMode, bus: &mut B) -> Operand {
        match mode {
            AddressingMode::Implicit => Operand::default(),
            AddressingMode::Accumulator => Operand {
                addr: 0,
                value: self.regs.a,
            },
            AddressingMode::Immediate => Operand {
                addr: 0,
                value: self.fetch(bus),
            },
            AddressingMode::ZeroPage => {
                let addr = u16::from(self.fetch(bus));
                Operand {
                    addr,
                    value: bus.read(addr),
                }
            }
            AddressingMode::ZeroPageX => {
                let addr = u16::from(self.fetch(bus).wrapping_add(self.regs.x));
                Operand {
                    addr,
                    value: bus.read(addr),
                }
            }
            AddressingMode::ZeroPageY => {
                let addr = u16::from(self.fetch(bus).wrapping_add(self.regs.y));
                Operand {
                    addr,
                    value: bus.read(addr),
                }
            }
            AddressingMode::Relative => {
                // PC is already past the offset byte when the target is
                // computed: target = PC - 1 + offset.
                let offset = self.fetch(bus) as i8;
                Operand {
                    addr: self.regs.pc.wrapping_sub(1).wrapping_add(offset as u16),
                    value: 0,
                }
            }
            AddressingMode::Absolute => {
                let addr = self.fetch_word(bus);
                Operand {
                    addr,
                    value: bus.read(addr),
                }
            }
            AddressingMode::AbsoluteX => {
                let addr = self.fetch_word(bus).wrapping_add(u16::from(self.regs.x));
                Operand {
                    addr,
                    value: bus.read(addr),
                }
            }
            AddressingMode::AbsoluteY => {
                let addr = self.fetch_word(bus).wrapping_add(u16::from(self.regs.y));
                Operand {
                    addr,
                    value: bus.read(addr),
                }
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word(bus);
                Operand {
                    addr: self.read_word(bus, ptr),
                    value: 0,
                }
            }
            AddressingMode::IndexedIndirect => {
                // Pointer lives in page zero, wrapped before dereference.
                let ptr = u16::from(self.fetch(bus).wrapping_add(self.regs.x));
                let addr = self.read_word(bus, ptr);
                Operand {
                    addr,
                    value: bus.read(addr),
                }
            }
            AddressingMode::IndirectIndexed => {
                let ptr = u16::from(self.fetch(bus));
                let addr = self.read_word(bus, ptr).wrapping_add(u16::from(self.regs.y));
                Operand {
                    addr,
                    value: bus.read(addr),
                }
            }
        }
    }
}
