/*!
rmw.rs - Shift / rotate / memory increment-decrement opcode family handler

Covered Opcodes
---------------
Shifts / Rotates
  ASL: 0x0A (A), 0x06 (zp), 0x16 (zp,X), 0x0E (abs), 0x1E (abs,X)
  LSR: 0x4A (A), 0x46 (zp), 0x56 (zp,X), 0x4E (abs), 0x5E (abs,X)
  ROL: 0x2A (A), 0x26 (zp), 0x36 (zp,X), 0x2E (abs), 0x3E (abs,X)
  ROR: 0x6A (A), 0x66 (zp), 0x76 (zp,X), 0x6E (abs), 0x7E (abs,X)

Memory Increment / Decrement
  INC: 0xE6 (zp), 0xF6 (zp,X), 0xEE (abs), 0xFE (abs,X)
  DEC: 0xC6 (zp), 0xD6 (zp,X), 0xCE (abs), 0xDE (abs,X)

Absolute,X forms never carry a page-cross penalty: the real chip always
performs the dummy read on the wrong page before the fix-up, so the cost
is already fixed in `base_cycles` regardless of crossing. `asl_mem` and
friends need `&mut Memory`, so `handle` takes a concrete `&mut CpuState`.
*/

use crate::cpu::addressing::{addr_abs, addr_abs_x, addr_zp, addr_zp_x};
use crate::cpu::execute::{
    asl_acc, asl_mem, dec_mem, inc_mem, lsr_acc, lsr_mem, rol_acc, rol_mem, ror_acc, ror_mem,
};
use crate::cpu::state::CpuState;
use crate::memory::Memory;

/// Attempt to execute a shift/rotate/INC/DEC opcode. Never touches `*cycles`:
/// `base_cycles` already includes the RMW microcycle, and absolute,X forms
/// never get a page-cross penalty.
pub(crate) fn handle(opcode: u8, cpu: &mut CpuState, mem: &mut Memory, _cycles: &mut u32) -> bool {
    match opcode {
        // -------- ASL --------
        0x0A => asl_acc(cpu),
        0x06 => {
            let a = addr_zp(cpu, mem);
            asl_mem(cpu, mem, a);
        }
        0x16 => {
            let a = addr_zp_x(cpu, mem);
            asl_mem(cpu, mem, a);
        }
        0x0E => {
            let a = addr_abs(cpu, mem);
            asl_mem(cpu, mem, a);
        }
        0x1E => {
            let a = addr_abs_x(cpu, mem);
            asl_mem(cpu, mem, a);
        }

        // -------- LSR --------
        0x4A => lsr_acc(cpu),
        0x46 => {
            let a = addr_zp(cpu, mem);
            lsr_mem(cpu, mem, a);
        }
        0x56 => {
            let a = addr_zp_x(cpu, mem);
            lsr_mem(cpu, mem, a);
        }
        0x4E => {
            let a = addr_abs(cpu, mem);
            lsr_mem(cpu, mem, a);
        }
        0x5E => {
            let a = addr_abs_x(cpu, mem);
            lsr_mem(cpu, mem, a);
        }

        // -------- ROL --------
        0x2A => rol_acc(cpu),
        0x26 => {
            let a = addr_zp(cpu, mem);
            rol_mem(cpu, mem, a);
        }
        0x36 => {
            let a = addr_zp_x(cpu, mem);
            rol_mem(cpu, mem, a);
        }
        0x2E => {
            let a = addr_abs(cpu, mem);
            rol_mem(cpu, mem, a);
        }
        0x3E => {
            let a = addr_abs_x(cpu, mem);
            rol_mem(cpu, mem, a);
        }

        // -------- ROR --------
        0x6A => ror_acc(cpu),
        0x66 => {
            let a = addr_zp(cpu, mem);
            ror_mem(cpu, mem, a);
        }
        0x76 => {
            let a = addr_zp_x(cpu, mem);
            ror_mem(cpu, mem, a);
        }
        0x6E => {
            let a = addr_abs(cpu, mem);
            ror_mem(cpu, mem, a);
        }
        0x7E => {
            let a = addr_abs_x(cpu, mem);
            ror_mem(cpu, mem, a);
        }

        // -------- INC (memory) --------
        0xE6 => {
            let a = addr_zp(cpu, mem);
            inc_mem(cpu, mem, a);
        }
        0xF6 => {
            let a = addr_zp_x(cpu, mem);
            inc_mem(cpu, mem, a);
        }
        0xEE => {
            let a = addr_abs(cpu, mem);
            inc_mem(cpu, mem, a);
        }
        0xFE => {
            let a = addr_abs_x(cpu, mem);
            inc_mem(cpu, mem, a);
        }

        // -------- DEC (memory) --------
        0xC6 => {
            let a = addr_zp(cpu, mem);
            dec_mem(cpu, mem, a);
        }
        0xD6 => {
            let a = addr_zp_x(cpu, mem);
            dec_mem(cpu, mem, a);
        }
        0xCE => {
            let a = addr_abs(cpu, mem);
            dec_mem(cpu, mem, a);
        }
        0xDE => {
            let a = addr_abs_x(cpu, mem);
            dec_mem(cpu, mem, a);
        }

        _ => return false,
    }
    true
}
