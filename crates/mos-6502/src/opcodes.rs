//! Opcode dispatch table.
//!
//! Each of the 256 opcode bytes maps to a descriptor giving its base
//! cycle cost, addressing mode and operation tag. Slots with no
//! documented mnemonic decode to [`Operation::Nop`]; that shared mapping
//! is the entire notion of "illegal opcode" — there is no separate
//! classification, and undocumented opcode semantics are not modeled.

use crate::AddressingMode;

/// Instruction operation tag, one per handler.
///
/// Shifts and rotates have separate accumulator-targeting variants since
/// they mutate a register instead of going through the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Adc,
    And,
    Asl,
    AslA,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    LsrA,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    RolA,
    Ror,
    RorA,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

/// One dispatch table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Base cycle cost, 1-7. Flat: taken-branch and page-crossing
    /// penalties are not modeled.
    pub cycles: u8,
    /// Addressing mode the resolver runs before the handler.
    pub mode: AddressingMode,
    /// Handler tag.
    pub op: Operation,
}

impl Opcode {
    /// True if this slot decodes to the shared no-op handler.
    #[must_use]
    pub const fn is_illegal(&self) -> bool {
        matches!(self.op, Operation::Nop)
    }
}

/// Look up the descriptor for an opcode byte.
#[must_use]
pub const fn decode(opcode: u8) -> Opcode {
    TABLE[opcode as usize]
}

const fn entry(cycles: u8, mode: AddressingMode, op: Operation) -> Opcode {
    Opcode { cycles, mode, op }
}

/// Default entry for every unassigned slot: 2-cycle no-op.
const ILLEGAL: Opcode = entry(2, AddressingMode::Implicit, Operation::Nop);

const TABLE: [Opcode; 256] = build_table();

#[rustfmt::skip]
const fn build_table() -> [Opcode; 256] {
    use AddressingMode::{
        Absolute, AbsoluteX, AbsoluteY, Accumulator, Immediate, Implicit, IndexedIndirect,
        Indirect, IndirectIndexed, Relative, ZeroPage, ZeroPageX, ZeroPageY,
    };
    use Operation::{
        Adc, And, Asl, AslA, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc, Cld, Cli,
        Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr,
        LsrA, Nop, Ora, Pha, Php, Pla, Plp, Rol, RolA, Ror, RorA, Rti, Rts, Sbc, Sec, Sed, Sei,
        Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
    };

    let mut t = [ILLEGAL; 256];

    t[0x00] = entry(7, Implicit,        Brk);
    t[0x01] = entry(6, IndexedIndirect, Ora);
    t[0x05] = entry(3, ZeroPage,        Ora);
    t[0x06] = entry(5, ZeroPage,        Asl);
    t[0x08] = entry(3, Implicit,        Php);
    t[0x09] = entry(2, Immediate,       Ora);
    t[0x0A] = entry(2, Accumulator,     AslA);
    t[0x0D] = entry(4, Absolute,        Ora);
    t[0x0E] = entry(6, Absolute,        Asl);
    t[0x10] = entry(2, Relative,        Bpl);
    t[0x11] = entry(5, IndirectIndexed, Ora);
    t[0x15] = entry(4, ZeroPageX,       Ora);
    t[0x16] = entry(6, ZeroPageX,       Asl);
    t[0x18] = entry(2, Implicit,        Clc);
    t[0x19] = entry(4, AbsoluteY,       Ora);
    t[0x1D] = entry(4, AbsoluteX,       Ora);
    t[0x1E] = entry(7, AbsoluteX,       Asl);
    t[0x20] = entry(6, Absolute,        Jsr);
    t[0x21] = entry(6, IndexedIndirect, And);
    t[0x24] = entry(3, ZeroPage,        Bit);
    t[0x25] = entry(3, ZeroPage,        And);
    t[0x26] = entry(5, ZeroPage,        Rol);
    t[0x28] = entry(4, Implicit,        Plp);
    t[0x29] = entry(2, Immediate,       And);
    t[0x2A] = entry(2, Accumulator,     RolA);
    t[0x2C] = entry(4, Absolute,        Bit);
    t[0x2D] = entry(4, Absolute,        And);
    t[0x2E] = entry(6, Absolute,        Rol);
    t[0x30] = entry(2, Relative,        Bmi);
    t[0x31] = entry(5, IndirectIndexed, And);
    t[0x35] = entry(4, ZeroPageX,       And);
    t[0x36] = entry(6, ZeroPageX,       Rol);
    t[0x38] = entry(2, Implicit,        Sec);
    t[0x39] = entry(4, AbsoluteY,       And);
    t[0x3D] = entry(4, AbsoluteX,       And);
    t[0x3E] = entry(7, AbsoluteX,       Rol);
    t[0x40] = entry(6, Implicit,        Rti);
    t[0x41] = entry(6, IndexedIndirect, Eor);
    t[0x45] = entry(3, ZeroPage,        Eor);
    t[0x46] = entry(5, ZeroPage,        Lsr);
    t[0x48] = entry(3, Implicit,        Pha);
    t[0x49] = entry(2, Immediate,       Eor);
    t[0x4A] = entry(2, Accumulator,     LsrA);
    t[0x4C] = entry(3, Absolute,        Jmp);
    t[0x4D] = entry(4, Absolute,        Eor);
    t[0x4E] = entry(6, Absolute,        Lsr);
    t[0x50] = entry(2, Relative,        Bvc);
    t[0x51] = entry(5, IndirectIndexed, Eor);
    t[0x55] = entry(4, ZeroPageX,       Eor);
    t[0x56] = entry(6, ZeroPageX,       Lsr);
    t[0x58] = entry(2, Implicit,        Cli);
    t[0x59] = entry(4, AbsoluteY,       Eor);
    t[0x5D] = entry(4, AbsoluteX,       Eor);
    t[0x5E] = entry(7, AbsoluteX,       Lsr);
    t[0x60] = entry(6, Implicit,        Rts);
    t[0x61] = entry(6, IndexedIndirect, Adc);
    t[0x65] = entry(3, ZeroPage,        Adc);
    t[0x66] = entry(5, ZeroPage,        Ror);
    t[0x68] = entry(4, Implicit,        Pla);
    t[0x69] = entry(2, Immediate,       Adc);
    t[0x6A] = entry(2, Accumulator,     RorA);
    t[0x6C] = entry(5, Indirect,        Jmp);
    t[0x6D] = entry(4, Absolute,        Adc);
    t[0x6E] = entry(6, Absolute,        Ror);
    t[0x70] = entry(2, Relative,        Bvs);
    t[0x71] = entry(5, IndirectIndexed, Adc);
    t[0x75] = entry(4, ZeroPageX,       Adc);
    t[0x76] = entry(6, ZeroPageX,       Ror);
    t[0x78] = entry(2, Implicit,        Sei);
    t[0x79] = entry(4, AbsoluteY,       Adc);
    t[0x7D] = entry(4, AbsoluteX,       Adc);
    t[0x7E] = entry(7, AbsoluteX,       Ror);
    t[0x81] = entry(6, IndexedIndirect, Sta);
    t[0x84] = entry(3, ZeroPage,        Sty);
    t[0x85] = entry(3, ZeroPage,        Sta);
    t[0x86] = entry(3, ZeroPage,        Stx);
    t[0x88] = entry(2, Implicit,        Dey);
    t[0x8A] = entry(2, Implicit,        Txa);
    t[0x8C] = entry(4, Absolute,        Sty);
    t[0x8D] = entry(4, Absolute,        Sta);
    t[0x8E] = entry(4, Absolute,        Stx);
    t[0x90] = entry(2, Relative,        Bcc);
    t[0x91] = entry(6, IndirectIndexed, Sta);
    t[0x94] = entry(4, ZeroPageX,       Sty);
    t[0x95] = entry(4, ZeroPageX,       Sta);
    t[0x96] = entry(4, ZeroPageY,       Stx);
    t[0x98] = entry(2, Implicit,        Tya);
    t[0x99] = entry(5, AbsoluteY,       Sta);
    t[0x9A] = entry(2, Implicit,        Txs);
    t[0x9D] = entry(5, AbsoluteX,       Sta);
    t[0xA0] = entry(2, Immediate,       Ldy);
    t[0xA1] = entry(6, IndexedIndirect, Lda);
    t[0xA2] = entry(2, Immediate,       Ldx);
    t[0xA4] = entry(3, ZeroPage,        Ldy);
    t[0xA5] = entry(3, ZeroPage,        Lda);
    t[0xA6] = entry(3, ZeroPage,        Ldx);
    t[0xA8] = entry(2, Implicit,        Tay);
    t[0xA9] = entry(2, Immediate,       Lda);
    t[0xAA] = entry(2, Implicit,        Tax);
    t[0xAC] = entry(4, Absolute,        Ldy);
    t[0xAD] = entry(4, Absolute,        Lda);
    t[0xAE] = entry(4, Absolute,        Ldx);
    t[0xB0] = entry(2, Relative,        Bcs);
    t[0xB1] = entry(5, IndirectIndexed, Lda);
    t[0xB4] = entry(4, ZeroPageX,       Ldy);
    t[0xB5] = entry(4, ZeroPageX,       Lda);
    t[0xB6] = entry(4, ZeroPageY,       Ldx);
    t[0xB8] = entry(2, Implicit,        Clv);
    t[0xB9] = entry(4, AbsoluteY,       Lda);
    t[0xBA] = entry(2, Implicit,        Tsx);
    t[0xBC] = entry(4, AbsoluteX,       Ldy);
    t[0xBD] = entry(4, AbsoluteX,       Lda);
    t[0xBE] = entry(4, AbsoluteY,       Ldx);
    t[0xC0] = entry(2, Immediate,       Cpy);
    t[0xC1] = entry(6, IndexedIndirect, Cmp);
    t[0xC4] = entry(3, ZeroPage,        Cpy);
    t[0xC5] = entry(3, ZeroPage,        Cmp);
    t[0xC6] = entry(5, ZeroPage,        Dec);
    t[0xC8] = entry(2, Implicit,        Iny);
    t[0xC9] = entry(2, Immediate,       Cmp);
    t[0xCA] = entry(2, Implicit,        Dex);
    t[0xCC] = entry(4, Absolute,        Cpy);
    t[0xCD] = entry(4, Absolute,        Cmp);
    t[0xCE] = entry(6, Absolute,        Dec);
    t[0xD0] = entry(2, Relative,        Bne);
    t[0xD1] = entry(5, IndirectIndexed, Cmp);
    t[0xD5] = entry(4, ZeroPageX,       Cmp);
    t[0xD6] = entry(6, ZeroPageX,       Dec);
    t[0xD8] = entry(2, Implicit,        Cld);
    t[0xD9] = entry(4, AbsoluteY,       Cmp);
    t[0xDD] = entry(4, AbsoluteX,       Cmp);
    t[0xDE] = entry(7, AbsoluteX,       Dec);
    t[0xE0] = entry(2, Immediate,       Cpx);
    t[0xE1] = entry(6, IndexedIndirect, Sbc);
    t[0xE4] = entry(3, ZeroPage,        Cpx);
    t[0xE5] = entry(3, ZeroPage,        Sbc);
    t[0xE6] = entry(5, ZeroPage,        Inc);
    t[0xE8] = entry(2, Implicit,        Inx);
    t[0xE9] = entry(2, Immediate,       Sbc);
    t[0xEA] = entry(2, Implicit,        Nop);
    t[0xEC] = entry(4, Absolute,        Cpx);
    t[0xED] = entry(4, Absolute,        Sbc);
    t[0xEE] = entry(6, Absolute,        Inc);
    t[0xF0] = entry(2, Relative,        Beq);
    t[0xF1] = entry(5, IndirectIndexed, Sbc);
    t[0xF5] = entry(4, ZeroPageX,       Sbc);
    t[0xF6] = entry(6, ZeroPageX,       Inc);
    t[0xF8] = entry(2, Implicit,        Sed);
    t[0xF9] = entry(4, AbsoluteY,       Sbc);
    t[0xFD] = entry(4, AbsoluteX,       Sbc);
    t[0xFE] = entry(7, AbsoluteX,       Inc);

    t
}
