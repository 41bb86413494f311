//! 6502 CPU registers.

use crate::Status;

/// Base address of the hardware stack page.
pub(crate) const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after reset.
pub(crate) const SP_INIT: u8 = 0xFD;

/// 6502 CPU register set.
///
/// The 6502 has minimal registers:
/// - A: 8-bit accumulator
/// - X, Y: 8-bit index registers
/// - S: 8-bit stack pointer (stack is at $0100-$01FF)
/// - PC: 16-bit program counter
/// - P: 8-bit processor status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Stack pointer (next free location in $0100-$01FF, wraps silently).
    pub s: u8,
    /// Program counter.
    pub pc: u16,
    /// Processor status flags.
    pub p: Status,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// Create registers in power-on state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            s: SP_INIT,
            pc: 0,
            p: Status::new(),
        }
    }

    /// Claim a stack slot for a push: returns the address to write, then
    /// decrements S. No overflow detection — S wraps within the stack page.
    pub fn push(&mut self) -> u16 {
        let addr = STACK_BASE | u16::from(self.s);
        self.s = self.s.wrapping_sub(1);
        addr
    }

    /// Release a stack slot for a pop: increments S, then returns the
    /// address to read.
    pub fn pop(&mut self) -> u16 {
        self.s = self.s.wrapping_add(1);
        STACK_BASE | u16::from(self.s)
    }
}
