//! Memory and I/O bus interface.

use std::fs;
use std::io;
use std::path::Path;

/// Memory and I/O bus interface.
///
/// Components access memory and peripherals through this trait. The bus
/// handles address decoding and routing to the appropriate device. Reads
/// take `&mut self` because a read may have observable side effects on
/// I/O-mapped devices; the CPU never assumes reads are pure.
///
/// The bus owns address validation. The CPU hands over any 16-bit address
/// and expects a byte back; wraparound or mirroring is bus policy.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u16, value: u8);
}

/// Flat 64 KB RAM bus.
///
/// The simplest possible backing store: every address reads and writes a
/// plain byte, no mirroring, no mapped devices. Used by tests and by the
/// runner for raw memory images.
pub struct SimpleBus {
    ram: Box<[u8; 0x10000]>,
}

impl Default for SimpleBus {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleBus {
    /// Create a bus with all memory zeroed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ram: Box::new([0; 0x10000]),
        }
    }

    /// Copy `bytes` into memory starting at `address`, wrapping at 64 KB.
    pub fn load(&mut self, address: u16, bytes: &[u8]) {
        let mut addr = address;
        for &byte in bytes {
            self.ram[usize::from(addr)] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Load a raw memory image from a file at address 0.
    ///
    /// Images larger than 64 KB are truncated. Returns the number of
    /// bytes loaded.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> io::Result<usize> {
        let image = fs::read(path)?;
        let len = image.len().min(self.ram.len());
        self.ram[..len].copy_from_slice(&image[..len]);
        Ok(len)
    }

    /// Inspect a byte without going through the bus interface.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        self.ram[usize::from(address)]
    }
}

impl Bus for SimpleBus {
    fn read(&mut self, address: u16) -> u8 {
        self.ram[usize::from(address)]
    }

    fn write(&mut self, address: u16, value: u8) {
        self.ram[usize::from(address)] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_wraps_at_end_of_memory() {
        let mut bus = SimpleBus::new();
        bus.load(0xFFFF, &[0xAA, 0xBB]);
        assert_eq!(bus.peek(0xFFFF), 0xAA);
        assert_eq!(bus.peek(0x0000), 0xBB);
    }

    #[test]
    fn read_write_round_trip() {
        let mut bus = SimpleBus::new();
        bus.write(0x1234, 0x42);
        assert_eq!(bus.read(0x1234), 0x42);
    }
}
