/*!
mos6502-core - a cycle-accurate core for the MOS 6502 8-bit microprocessor.

This crate models the architectural state of the chip (accumulator and two
index registers, a program counter, a stack pointer, a processor-status
register) over a flat 64 KiB address space, and interprets a stream of
documented 6502 instructions, charging cycles exactly as the real part
would for the 151 opcodes it supports.

What this crate does NOT do (see `cpu` module docs for the full list):
illegal/undocumented opcodes, decimal-mode arithmetic, hardware IRQ/NMI,
I/O-mapped devices, or the JMP (indirect) page-boundary hardware bug.

Typical usage:
```
use mos6502_core::Cpu;

let mut cpu = Cpu::new();
cpu.reset();
let program = [0x00, 0x10, 0xA9, 0xFF, 0x00]; // load addr $1000, LDA #$FF, BRK
let load_addr = cpu.load_program(&program);
cpu.reset_to(load_addr);
let cycles_used = cpu.execute(2).expect("no unsupported opcode");
assert_eq!(cpu.a(), 0xFF);
assert_eq!(cycles_used, 2);
```
*/

pub mod cpu;
pub mod error;
pub mod memory;

pub use cpu::core::Cpu;
pub use error::CpuError;
pub use memory::Memory;
