//! Thin driver around the 6502 core.
//!
//! Loads a raw memory image (up to 64 KB, including the vectors at
//! $FFFA-$FFFF) into a flat RAM bus, resets the CPU, and clocks it until
//! the tick budget runs out or the program traps (jumps to itself — the
//! usual way 6502 test binaries signal completion). Prints a register
//! dump on exit.

use std::env;
use std::process;

use emu_core::{Cpu, SimpleBus};
use mos_6502::{Mos6502, Registers};

const DEFAULT_TICKS: u64 = 100_000_000;

/// Consecutive instructions at the same PC before we call it a trap.
const TRAP_THRESHOLD: u32 = 3;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (image, max_ticks) = match args.as_slice() {
        [_, image] => (image.clone(), DEFAULT_TICKS),
        [_, image, ticks] => match ticks.parse() {
            Ok(n) => (image.clone(), n),
            Err(_) => usage(&args[0]),
        },
        _ => usage(&args[0]),
    };

    let mut bus = SimpleBus::new();
    let loaded = match bus.load_file(&image) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("{image}: {e}");
            process::exit(1);
        }
    };
    eprintln!("Loaded {loaded} bytes from {image}");

    let mut cpu = Mos6502::new();
    cpu.reset(&mut bus);

    let mut prev_pc = cpu.pc();
    let mut same_pc_count = 0u32;

    while cpu.total_cycles().get() < max_ticks {
        // Run one whole instruction.
        cpu.tick(&mut bus);
        while !cpu.is_instruction_complete() {
            cpu.tick(&mut bus);
        }

        let pc = cpu.pc();
        if pc == prev_pc {
            same_pc_count += 1;
            if same_pc_count >= TRAP_THRESHOLD {
                eprintln!("Trapped at ${pc:04X} after {} ticks", cpu.total_cycles());
                break;
            }
        } else {
            same_pc_count = 0;
            prev_pc = pc;
        }
    }

    dump(&cpu.registers(), cpu.total_cycles().get());
}

fn dump(regs: &Registers, ticks: u64) {
    println!(
        "PC=${:04X} A=${:02X} X=${:02X} Y=${:02X} S=${:02X} P=${:02X} [{}]  ticks={ticks}",
        regs.pc,
        regs.a,
        regs.x,
        regs.y,
        regs.s,
        regs.p.to_byte(),
        flag_string(regs.p.to_byte()),
    );
}

/// Render the status byte as `NV-BDIZC`, uppercase for set bits.
fn flag_string(p: u8) -> String {
    "NV-BDIZC"
        .chars()
        .enumerate()
        .map(|(i, c)| if p & (0x80 >> i) != 0 { c } else { '.' })
        .collect()
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <image> [max-ticks]");
    process::exit(2);
}
