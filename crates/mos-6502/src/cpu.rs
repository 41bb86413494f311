//! 6502 CPU implementation.
//!
//! Instruction-level emulation: the tick that finds no instruction in
//! flight fetches the opcode, runs the addressing-mode resolver and the
//! handler in one go, and loads the instruction's flat cycle cost.
//! Every tick decrements the countdown, so an instruction occupies
//! exactly `cycles` ticks of wall-clock emulation time even though its
//! bus effects all land on the first one.

use emu_core::{Bus, Cpu, Ticks};

use crate::addressing::Operand;
use crate::flags::{C, D, I, N, V, Z};
use crate::opcodes::{self, Operation};
use crate::registers::SP_INIT;
use crate::{Registers, Status};

/// NMI vector location (little-endian).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector location (little-endian).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector location (little-endian).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// The MOS 6502 CPU.
///
/// Owns the register file and the remaining-cycles counter of the
/// in-flight instruction. The memory bus is supplied by the embedder on
/// every call and never owned or validated here: any 16-bit address goes
/// straight to the bus.
#[derive(Debug)]
pub struct Mos6502 {
    /// CPU registers.
    pub regs: Registers,

    /// Cycles remaining for the in-flight instruction. Zero means the
    /// next tick fetches a new opcode.
    cycles: u8,

    /// Total cycles executed (for debugging and drivers).
    total: Ticks,
}

impl Default for Mos6502 {
    fn default() -> Self {
        Self::new()
    }
}

impl Mos6502 {
    /// Create a new 6502 in power-on state. Call [`Cpu::reset`] before
    /// ticking so the program counter is loaded from the reset vector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            regs: Registers::new(),
            cycles: 0,
            total: Ticks::ZERO,
        }
    }

    /// Total cycles ticked since power-on.
    #[must_use]
    pub fn total_cycles(&self) -> Ticks {
        self.total
    }

    /// Peek the opcode byte at PC (without consuming it) and report
    /// whether it decodes to the shared no-op handler.
    ///
    /// Only meaningful between instructions; while an instruction is in
    /// flight PC points at the next opcode's successor bytes, so this
    /// returns false.
    pub fn is_current_opcode_illegal<B: Bus>(&self, bus: &mut B) -> bool {
        self.cycles == 0 && opcodes::decode(bus.read(self.regs.pc)).is_illegal()
    }

    // ========================================================================
    // Stack and interrupt plumbing
    // ========================================================================

    fn push<B: Bus>(&mut self, bus: &mut B, value: u8) {
        let addr = self.regs.push();
        bus.write(addr, value);
    }

    fn pop<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let addr = self.regs.pop();
        bus.read(addr)
    }

    /// Common IRQ/NMI entry: push return address high-then-low, push
    /// status, jump through the vector. The break bit is pushed set,
    /// unlike real hardware, which clears it for hardware interrupts.
    fn interrupt<B: Bus>(&mut self, bus: &mut B, vector: u16) {
        self.push(bus, (self.regs.pc >> 8) as u8);
        self.push(bus, self.regs.pc as u8);
        self.push(bus, self.regs.p.to_byte_brk());
        self.regs.pc = self.read_word(bus, vector);
        self.cycles = 7;
    }

    // ========================================================================
    // ALU helpers
    // ========================================================================

    /// Binary add with carry-in. Decimal correction is not implemented:
    /// the D flag has no effect on the result.
    fn adc(&mut self, value: u8) {
        let a = self.regs.a;
        let carry = u16::from(self.regs.p.is_set(C));
        let sum = u16::from(a) + u16::from(value) + carry;
        let result = sum as u8;

        self.regs.p.set_if(C, sum > 0xFF);
        self.regs
            .p
            .set_if(V, (a ^ result) & (value ^ result) & 0x80 != 0);
        self.regs.a = result;
        self.regs.p.update_nz(result);
    }

    /// Unsigned compare: C = reg >= operand, Z/N from the difference.
    /// Never mutates the compared register.
    fn compare(&mut self, reg: u8, value: u8) {
        self.regs.p.set_if(C, reg >= value);
        self.regs.p.update_nz(reg.wrapping_sub(value));
    }

    fn asl(&mut self, value: u8) -> u8 {
        self.regs.p.set_if(C, value & 0x80 != 0);
        let result = value << 1;
        self.regs.p.update_nz(result);
        result
    }

    fn lsr(&mut self, value: u8) -> u8 {
        self.regs.p.set_if(C, value & 0x01 != 0);
        let result = value >> 1;
        self.regs.p.update_nz(result);
        result
    }

    fn rol(&mut self, value: u8) -> u8 {
        let carry = u8::from(self.regs.p.is_set(C));
        self.regs.p.set_if(C, value & 0x80 != 0);
        let result = (value << 1) | carry;
        self.regs.p.update_nz(result);
        result
    }

    fn ror(&mut self, value: u8) -> u8 {
        let carry = if self.regs.p.is_set(C) { 0x80 } else { 0 };
        self.regs.p.set_if(C, value & 0x01 != 0);
        let result = (value >> 1) | carry;
        self.regs.p.update_nz(result);
        result
    }

    /// Read-modify-write through the bus. Issues a fresh read rather than
    /// reusing the resolver's value: the double read is observable when
    /// the bus has side-effecting (I/O-mapped) reads.
    fn modify<B: Bus>(&mut self, bus: &mut B, addr: u16, op: fn(&mut Self, u8) -> u8) {
        let value = bus.read(addr);
        let result = op(self, value);
        bus.write(addr, result);
    }

    /// Conditionally take a branch. Flat cycle cost: the taken/not-taken
    /// difference and page-cross penalty are not modeled.
    fn branch(&mut self, condition: bool, target: u16) {
        if condition {
            self.regs.pc = target;
        }
    }

    // ========================================================================
    // Instruction dispatch
    // ========================================================================

    fn execute<B: Bus>(&mut self, op: Operation, operand: Operand, bus: &mut B) {
        match op {
            // Arithmetic
            Operation::Adc => self.adc(operand.value),
            // SBC is ADC with the operand inverted: borrow falls out of
            // the one's complement, no separate subtract path.
            Operation::Sbc => self.adc(!operand.value),
            Operation::Cmp => self.compare(self.regs.a, operand.value),
            Operation::Cpx => self.compare(self.regs.x, operand.value),
            Operation::Cpy => self.compare(self.regs.y, operand.value),

            // Logical
            Operation::And => {
                self.regs.a &= operand.value;
                self.regs.p.update_nz(self.regs.a);
            }
            Operation::Ora => {
                self.regs.a |= operand.value;
                self.regs.p.update_nz(self.regs.a);
            }
            Operation::Eor => {
                self.regs.a ^= operand.value;
                self.regs.p.update_nz(self.regs.a);
            }
            Operation::Bit => {
                // Z from the AND, N/V straight from operand bits 7/6.
                self.regs.p.set_if(Z, self.regs.a & operand.value == 0);
                self.regs.p.set_if(N, operand.value & 0x80 != 0);
                self.regs.p.set_if(V, operand.value & 0x40 != 0);
            }

            // Shifts and rotates
            Operation::AslA => self.regs.a = self.asl(operand.value),
            Operation::LsrA => self.regs.a = self.lsr(operand.value),
            Operation::RolA => self.regs.a = self.rol(operand.value),
            Operation::RorA => self.regs.a = self.ror(operand.value),
            Operation::Asl => self.modify(bus, operand.addr, Self::asl),
            Operation::Lsr => self.modify(bus, operand.addr, Self::lsr),
            Operation::Rol => self.modify(bus, operand.addr, Self::rol),
            Operation::Ror => self.modify(bus, operand.addr, Self::ror),

            // Increment / decrement
            Operation::Inc => self.modify(bus, operand.addr, |cpu, v| {
                let result = v.wrapping_add(1);
                cpu.regs.p.update_nz(result);
                result
            }),
            Operation::Dec => self.modify(bus, operand.addr, |cpu, v| {
                let result = v.wrapping_sub(1);
                cpu.regs.p.update_nz(result);
                result
            }),
            Operation::Inx => {
                self.regs.x = self.regs.x.wrapping_add(1);
                self.regs.p.update_nz(self.regs.x);
            }
            Operation::Dex => {
                self.regs.x = self.regs.x.wrapping_sub(1);
                self.regs.p.update_nz(self.regs.x);
            }
            Operation::Iny => {
                self.regs.y = self.regs.y.wrapping_add(1);
                self.regs.p.update_nz(self.regs.y);
            }
            Operation::Dey => {
                self.regs.y = self.regs.y.wrapping_sub(1);
                self.regs.p.update_nz(self.regs.y);
            }

            // Loads and stores
            Operation::Lda => {
                self.regs.a = operand.value;
                self.regs.p.update_nz(self.regs.a);
            }
            Operation::Ldx => {
                self.regs.x = operand.value;
                self.regs.p.update_nz(self.regs.x);
            }
            Operation::Ldy => {
                self.regs.y = operand.value;
                self.regs.p.update_nz(self.regs.y);
            }
            Operation::Sta => bus.write(operand.addr, self.regs.a),
            Operation::Stx => bus.write(operand.addr, self.regs.x),
            Operation::Sty => bus.write(operand.addr, self.regs.y),

            // Branches: direct single-flag tests
            Operation::Bcc => self.branch(!self.regs.p.is_set(C), operand.addr),
            Operation::Bcs => self.branch(self.regs.p.is_set(C), operand.addr),
            Operation::Bne => self.branch(!self.regs.p.is_set(Z), operand.addr),
            Operation::Beq => self.branch(self.regs.p.is_set(Z), operand.addr),
            Operation::Bpl => self.branch(!self.regs.p.is_set(N), operand.addr),
            Operation::Bmi => self.branch(self.regs.p.is_set(N), operand.addr),
            Operation::Bvc => self.branch(!self.regs.p.is_set(V), operand.addr),
            Operation::Bvs => self.branch(self.regs.p.is_set(V), operand.addr),

            // Jumps and calls
            Operation::Jmp => self.regs.pc = operand.addr,
            Operation::Jsr => {
                // Push PC-1; RTS undoes this with its +1.
                let ret = self.regs.pc.wrapping_sub(1);
                self.push(bus, (ret >> 8) as u8);
                self.push(bus, ret as u8);
                self.regs.pc = operand.addr;
            }
            Operation::Rts => {
                let low = self.pop(bus);
                let high = self.pop(bus);
                self.regs.pc = u16::from_le_bytes([low, high]).wrapping_add(1);
            }
            Operation::Brk => {
                // Skip the padding byte: the pushed return address is
                // opcode + 2, the byte after it.
                self.regs.pc = self.regs.pc.wrapping_add(1);
                self.push(bus, (self.regs.pc >> 8) as u8);
                self.push(bus, self.regs.pc as u8);
                self.push(bus, self.regs.p.to_byte_brk());
                self.regs.p.set(I);
                self.regs.pc = self.read_word(bus, IRQ_VECTOR);
            }
            Operation::Rti => {
                // Status first; the break bit on the stack is discarded.
                let status = self.pop(bus);
                self.regs.p = Status::from_byte(status);
                let low = self.pop(bus);
                let high = self.pop(bus);
                self.regs.pc = u16::from_le_bytes([low, high]);
            }

            // Stack
            Operation::Pha => self.push(bus, self.regs.a),
            Operation::Php => {
                let status = self.regs.p.to_byte_brk();
                self.push(bus, status);
            }
            Operation::Pla => {
                self.regs.a = self.pop(bus);
                self.regs.p.update_nz(self.regs.a);
            }
            Operation::Plp => {
                let status = self.pop(bus);
                self.regs.p = Status::from_byte(status);
            }

            // Transfers
            Operation::Tax => {
                self.regs.x = self.regs.a;
                self.regs.p.update_nz(self.regs.x);
            }
            Operation::Tay => {
                self.regs.y = self.regs.a;
                self.regs.p.update_nz(self.regs.y);
            }
            Operation::Txa => {
                self.regs.a = self.regs.x;
                self.regs.p.update_nz(self.regs.a);
            }
            Operation::Tya => {
                self.regs.a = self.regs.y;
                self.regs.p.update_nz(self.regs.a);
            }
            Operation::Tsx => {
                self.regs.x = self.regs.s;
                self.regs.p.update_nz(self.regs.x);
            }
            Operation::Txs => self.regs.s = self.regs.x,

            // Flag sets and clears
            Operation::Clc => self.regs.p.clear(C),
            Operation::Sec => self.regs.p.set(C),
            Operation::Cli => self.regs.p.clear(I),
            Operation::Sei => self.regs.p.set(I),
            Operation::Cld => self.regs.p.clear(D),
            Operation::Sed => self.regs.p.set(D),
            Operation::Clv => self.regs.p.clear(V),

            // Shared handler for the real NOP and every unassigned slot.
            // The opcode fetch already advanced PC; nothing else happens.
            Operation::Nop => {}
        }
    }
}

impl Cpu for Mos6502 {
    type Registers = Registers;

    fn tick<B: Bus>(&mut self, bus: &mut B) {
        if self.cycles == 0 {
            let opcode = self.fetch(bus);
            let descriptor = opcodes::decode(opcode);
            self.cycles = descriptor.cycles;
            let operand = self.resolve(descriptor.mode, bus);
            self.execute(descriptor.op, operand, bus);
        }
        self.cycles -= 1;
        self.total += Ticks::new(1);
    }

    /// Power-on reset: no stack traffic, registers and flags zeroed,
    /// PC loaded from the reset vector, 7-cycle cost.
    fn reset<B: Bus>(&mut self, bus: &mut B) {
        self.regs.pc = self.read_word(bus, RESET_VECTOR);
        self.regs.a = 0;
        self.regs.x = 0;
        self.regs.y = 0;
        self.regs.s = SP_INIT;
        self.regs.p = Status::new();
        self.cycles = 7;
    }

    fn irq<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.p.is_set(I) {
            return;
        }
        self.interrupt(bus, IRQ_VECTOR);
    }

    fn nmi<B: Bus>(&mut self, bus: &mut B) {
        self.interrupt(bus, NMI_VECTOR);
    }

    fn is_instruction_complete(&self) -> bool {
        self.cycles == 0
    }

    fn pc(&self) -> u16 {
        self.regs.pc
    }

    fn registers(&self) -> Registers {
        self.regs
    }
}
