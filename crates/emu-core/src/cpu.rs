//! CPU core trait.

use crate::Bus;

/// A CPU core driven one clock tick at a time.
///
/// Ticking is the only primitive for forward progress: the tick that finds
/// no instruction in flight fetches, decodes and executes the next one and
/// loads its cycle cost; every other tick just burns a cycle. Callers that
/// want whole-instruction stepping tick until [`Cpu::is_instruction_complete`]
/// holds, then tick once more to begin the next instruction.
///
/// The bus is passed into every entry point, not owned, so it can be shared
/// with other components. The CPU assumes exclusive access for the duration
/// of one call; any multi-threaded embedding must serialize externally.
pub trait Cpu {
    /// The type used for register inspection.
    type Registers;

    /// Advance the CPU by one clock tick.
    fn tick<B: Bus>(&mut self, bus: &mut B);

    /// Reset the CPU: load the program counter from the reset vector and
    /// return registers to their power-on state.
    fn reset<B: Bus>(&mut self, bus: &mut B);

    /// Request a maskable interrupt. Ignored while interrupts are disabled.
    fn irq<B: Bus>(&mut self, bus: &mut B);

    /// Request a non-maskable interrupt.
    fn nmi<B: Bus>(&mut self, bus: &mut B);

    /// Returns true when no instruction is in flight.
    fn is_instruction_complete(&self) -> bool;

    /// Returns the current program counter.
    fn pc(&self) -> u16;

    /// Returns a snapshot of all registers for inspection.
    fn registers(&self) -> Self::Registers;
}
