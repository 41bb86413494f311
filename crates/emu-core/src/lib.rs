//! Core traits and types for CPU emulation.
//!
//! A CPU core owns its registers and cycle bookkeeping; everything else —
//! memory, I/O, vectors — lives behind the [`Bus`] trait and is supplied
//! by the embedding machine.

mod bus;
mod cpu;
mod ticks;

pub use bus::{Bus, SimpleBus};
pub use cpu::Cpu;
pub use ticks::Ticks;
