/*!
execute.rs - 6502 instruction semantic helpers (ALU, flags, stack, RMW)

Centralizes the side-effect logic for every instruction so both dispatch
strategies (the exhaustive match in `cpu::dispatch` and the feature-gated
table-driven one in `cpu::table`) share a single implementation.

Two families of helper live here:
  - Pure register/flag helpers, generic over `CpuRegs` (lda, adc, sbc,
    cmp_generic, the accumulator shift/rotate family, transfers, BIT,
    branch displacement math, ...). These never touch memory, so they
    can be unit-tested against a bare `CpuState` with no `Memory` in
    scope at all.
  - Memory-touching helpers (stack push/pop, the RMW shift/rotate/inc/dec
    family, branch_cond) that take a concrete `&mut CpuState` plus
    `&mut Memory`. Kept concrete rather than generic since bus access is
    deliberately excluded from `CpuRegs` (see `cpu::regs`).

None of the memory-touching helpers charge cycles. `cpu::cycles::base_cycles`
already bakes in the extra read-modify-write microcycle for every RMW
opcode, so `rmw_memory` only needs to preserve the real chip's
read -> write-old-back -> write-new ordering (observable on hardware via
memory-mapped I/O), not re-tick anything.
*/

#![allow(dead_code)]

use crate::cpu::bus;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{BREAK, CARRY, CpuState, DECIMAL, NEGATIVE, OVERFLOW, UNUSED, ZERO};
use crate::memory::Memory;

// ---------------------------------------------------------------------------
// Flag helpers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn set_flag<C: CpuRegs>(cpu: &mut C, mask: u8, on: bool) {
    cpu.assign_flag(mask, on);
}

#[inline]
pub(crate) fn get_flag<C: CpuRegs>(cpu: &C, mask: u8) -> bool {
    cpu.is_flag_set(mask)
}

#[inline]
pub(crate) fn update_zn<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.update_zn(v);
}

// ---------------------------------------------------------------------------
// Stack helpers
// ---------------------------------------------------------------------------

/// Push P with control over Break flag semantics (BRK/PHP vs IRQ/NMI).
#[inline]
pub(crate) fn push_status_with_break(cpu: &mut CpuState, mem: &mut Memory, set_break: bool) {
    let v = cpu.compose_status_for_push(set_break);
    bus::push_byte(cpu, mem, v);
}

#[inline]
pub(crate) fn php(cpu: &mut CpuState, mem: &mut Memory) {
    push_status_with_break(cpu, mem, true);
}

#[inline]
pub(crate) fn plp(cpu: &mut CpuState, mem: &mut Memory) {
    let v = bus::pop_byte(cpu, mem);
    cpu.set_status(v & !(UNUSED | BREAK));
}

#[inline]
pub(crate) fn pha(cpu: &mut CpuState, mem: &mut Memory) {
    let a = cpu.a();
    bus::push_byte(cpu, mem, a);
}

#[inline]
pub(crate) fn pla(cpu: &mut CpuState, mem: &mut Memory) {
    let val = bus::pop_byte(cpu, mem);
    cpu.set_a(val);
    update_zn(cpu, val);
}

// ---------------------------------------------------------------------------
// Loads / Stores / Transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(v);
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn ldx<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_x(v);
    update_zn(cpu, cpu.x());
}

#[inline]
pub(crate) fn ldy<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_y(v);
    update_zn(cpu, cpu.y());
}

#[inline]
pub(crate) fn tax<C: CpuRegs>(cpu: &mut C) {
    cpu.set_x(cpu.a());
    update_zn(cpu, cpu.x());
}

#[inline]
pub(crate) fn tay<C: CpuRegs>(cpu: &mut C) {
    cpu.set_y(cpu.a());
    update_zn(cpu, cpu.y());
}

#[inline]
pub(crate) fn txa<C: CpuRegs>(cpu: &mut C) {
    cpu.set_a(cpu.x());
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn tya<C: CpuRegs>(cpu: &mut C) {
    cpu.set_a(cpu.y());
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn tsx<C: CpuRegs>(cpu: &mut C) {
    cpu.set_x(cpu.sp());
    update_zn(cpu, cpu.x());
}

#[inline]
pub(crate) fn txs<C: CpuRegs>(cpu: &mut C) {
    cpu.set_sp(cpu.x());
}

// ---------------------------------------------------------------------------
// Logical / Bit
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(cpu.a() & v);
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn ora<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(cpu.a() | v);
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn eor<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(cpu.a() ^ v);
    update_zn(cpu, cpu.a());
}

/// BIT: N/V come from the operand's own bits 7/6; Z comes from A & operand.
/// Does not otherwise touch A.
#[inline]
pub(crate) fn bit<C: CpuRegs>(cpu: &mut C, v: u8) {
    set_flag(cpu, ZERO, (cpu.a() & v) == 0);
    set_flag(cpu, NEGATIVE, (v & 0x80) != 0);
    set_flag(cpu, OVERFLOW, (v & 0x40) != 0);
}

// ---------------------------------------------------------------------------
// Increment / Decrement (register)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx<C: CpuRegs>(cpu: &mut C) {
    cpu.set_x(cpu.x().wrapping_add(1));
    update_zn(cpu, cpu.x());
}

#[inline]
pub(crate) fn iny<C: CpuRegs>(cpu: &mut C) {
    cpu.set_y(cpu.y().wrapping_add(1));
    update_zn(cpu, cpu.y());
}

#[inline]
pub(crate) fn dex<C: CpuRegs>(cpu: &mut C) {
    cpu.set_x(cpu.x().wrapping_sub(1));
    update_zn(cpu, cpu.x());
}

#[inline]
pub(crate) fn dey<C: CpuRegs>(cpu: &mut C) {
    cpu.set_y(cpu.y().wrapping_sub(1));
    update_zn(cpu, cpu.y());
}

// ---------------------------------------------------------------------------
// Shifts / Rotates - Accumulator
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl_acc<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    set_flag(cpu, CARRY, (v & 0x80) != 0);
    cpu.set_a(v << 1);
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn lsr_acc<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    set_flag(cpu, CARRY, (v & 0x01) != 0);
    cpu.set_a(v >> 1);
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn rol_acc<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    let carry_in = if get_flag(cpu, CARRY) { 1 } else { 0 };
    set_flag(cpu, CARRY, (v & 0x80) != 0);
    cpu.set_a((v << 1) | carry_in);
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn ror_acc<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    let carry_in = if get_flag(cpu, CARRY) { 0x80 } else { 0 };
    set_flag(cpu, CARRY, (v & 0x01) != 0);
    cpu.set_a((v >> 1) | carry_in);
    update_zn(cpu, cpu.a());
}

// ---------------------------------------------------------------------------
// ADC / SBC
// ---------------------------------------------------------------------------

/// This core never engages decimal mode: SED/CLD are implemented as plain
/// flag mutators (so D can be set), but ADC/SBC always perform binary
/// arithmetic regardless, matching the NMOS 6502's actual behavior on the
/// systems (including the NES) that wire D out entirely. The debug
/// assertion below is this crate's one `InvariantViolation` site: D being
/// set here would mean a bug in this core, not a caller mistake.
#[inline]
pub(crate) fn adc<C: CpuRegs>(cpu: &mut C, v: u8) {
    debug_assert!(
        !get_flag(cpu, DECIMAL),
        "decimal mode must never be engaged during ADC/SBC"
    );
    let a = cpu.a();
    let carry_in = if get_flag(cpu, CARRY) { 1 } else { 0 };
    let sum16 = a as u16 + v as u16 + carry_in as u16;
    let result = sum16 as u8;

    set_flag(cpu, CARRY, sum16 > 0xFF);
    set_flag(cpu, OVERFLOW, ((!(a ^ v)) & (a ^ result) & 0x80) != 0);

    cpu.set_a(result);
    update_zn(cpu, cpu.a());
}

/// SBC is ADC of the operand's one's complement; carry-as-not-borrow falls
/// out of that identity for free.
#[inline]
pub(crate) fn sbc<C: CpuRegs>(cpu: &mut C, v: u8) {
    adc(cpu, v ^ 0xFF);
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

/// CMP/CPX/CPY: `reg - v` without writing the result back to `reg`.
#[inline]
pub(crate) fn cmp_generic<C: CpuRegs>(cpu: &mut C, reg: u8, v: u8) {
    set_flag(cpu, CARRY, reg >= v);
    let r = reg.wrapping_sub(v);
    update_zn(cpu, r);
}

// ---------------------------------------------------------------------------
// Read-Modify-Write (memory) choreography
// ---------------------------------------------------------------------------

/// Canonical 6502 RMW sequence: read, write the unmodified value back,
/// then write the transformed value. Returns the final value.
pub(crate) fn rmw_memory<F>(cpu: &mut CpuState, mem: &mut Memory, addr: u16, transform: F) -> u8
where
    F: FnOnce(&mut CpuState, u8) -> u8,
{
    let old = bus::read_byte(mem, addr);
    bus::write_byte(mem, addr, old);
    let newv = transform(cpu, old);
    bus::write_byte(mem, addr, newv);
    newv
}

// ---------------------------------------------------------------------------
// Shifts / Rotates - Memory
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl_mem(cpu: &mut CpuState, mem: &mut Memory, addr: u16) {
    let r = rmw_memory(cpu, mem, addr, |c, old| {
        set_flag(c, CARRY, (old & 0x80) != 0);
        old << 1
    });
    update_zn(cpu, r);
}

#[inline]
pub(crate) fn lsr_mem(cpu: &mut CpuState, mem: &mut Memory, addr: u16) {
    let r = rmw_memory(cpu, mem, addr, |c, old| {
        set_flag(c, CARRY, (old & 0x01) != 0);
        old >> 1
    });
    update_zn(cpu, r);
}

#[inline]
pub(crate) fn rol_mem(cpu: &mut CpuState, mem: &mut Memory, addr: u16) {
    let r = rmw_memory(cpu, mem, addr, |c, old| {
        let carry_in = if get_flag(c, CARRY) { 1 } else { 0 };
        set_flag(c, CARRY, (old & 0x80) != 0);
        (old << 1) | carry_in
    });
    update_zn(cpu, r);
}

#[inline]
pub(crate) fn ror_mem(cpu: &mut CpuState, mem: &mut Memory, addr: u16) {
    let r = rmw_memory(cpu, mem, addr, |c, old| {
        let carry_in = if get_flag(c, CARRY) { 0x80 } else { 0 };
        set_flag(c, CARRY, (old & 0x01) != 0);
        (old >> 1) | carry_in
    });
    update_zn(cpu, r);
}

// ---------------------------------------------------------------------------
// INC / DEC memory
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inc_mem(cpu: &mut CpuState, mem: &mut Memory, addr: u16) {
    let r = rmw_memory(cpu, mem, addr, |_, old| old.wrapping_add(1));
    update_zn(cpu, r);
}

#[inline]
pub(crate) fn dec_mem(cpu: &mut CpuState, mem: &mut Memory, addr: u16) {
    let r = rmw_memory(cpu, mem, addr, |_, old| old.wrapping_sub(1));
    update_zn(cpu, r);
}

// ---------------------------------------------------------------------------
// Branch helpers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn branch_offset<C: CpuRegs>(cpu: &mut C, offset: i8) {
    let new_pc = (cpu.pc() as i16).wrapping_add(offset as i16) as u16;
    cpu.set_pc(new_pc);
}

/// Fetch the displacement byte, optionally apply it, and return the extra
/// cycles (0, 1, or 2) the dispatcher should add on top of the base cycle
/// count: +1 if the branch is taken, +1 more if that branch crosses a
/// page boundary.
pub(crate) fn branch_cond(cpu: &mut CpuState, mem: &Memory, take: bool) -> u32 {
    let raw = bus::fetch_byte(cpu, mem);
    let offset = raw as i8;

    if !take {
        return 0;
    }

    let old_pc = cpu.pc();
    branch_offset(cpu, offset);
    let mut extra = 1;
    if (old_pc & 0xFF00) != (cpu.pc() & 0xFF00) {
        extra += 1;
    }
    extra
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adc_overflow_and_carry() {
        let mut cpu = CpuState::new();
        cpu.set_a(0x50);
        adc(&mut cpu, 0x50); // 0x50 + 0x50 = 0xA0 (signed overflow)
        assert!(get_flag(&cpu, OVERFLOW));
        assert!(!get_flag(&cpu, CARRY));
        cpu.set_a(0xF0);
        adc(&mut cpu, 0x20); // 0xF0 + 0x20 = 0x110
        assert!(get_flag(&cpu, CARRY));
    }

    #[test]
    fn sbc_basic() {
        let mut cpu = CpuState::new();
        cpu.set_a(0x10);
        set_flag(&mut cpu, CARRY, true); // carry set = no borrow going in
        sbc(&mut cpu, 0x01);
        assert_eq!(cpu.a(), 0x0F);
        assert!(get_flag(&cpu, CARRY)); // no borrow resulted
    }

    #[test]
    fn sbc_with_borrow() {
        let mut cpu = CpuState::new();
        cpu.set_a(0x00);
        set_flag(&mut cpu, CARRY, true);
        sbc(&mut cpu, 0x01);
        assert_eq!(cpu.a(), 0xFF);
        assert!(!get_flag(&cpu, CARRY)); // borrow occurred
    }

    #[test]
    fn cmp_does_not_modify_register() {
        let mut cpu = CpuState::new();
        cpu.set_a(0x10);
        cmp_generic(&mut cpu, cpu.a(), 0x10);
        assert_eq!(cpu.a(), 0x10);
        assert!(get_flag(&cpu, ZERO));
        assert!(get_flag(&cpu, CARRY));
    }

    #[test]
    fn inc_mem_sequence() {
        let mut cpu = CpuState::new();
        let mut mem = Memory::new();
        let addr = 0x0200;
        mem.write_byte(addr, 0x0F);
        inc_mem(&mut cpu, &mut mem, addr);
        assert_eq!(mem.read_byte(addr), 0x10);
    }

    #[test]
    fn asl_mem_sets_carry_from_old_bit_seven() {
        let mut cpu = CpuState::new();
        let mut mem = Memory::new();
        mem.write_byte(0x0300, 0x81);
        asl_mem(&mut cpu, &mut mem, 0x0300);
        assert_eq!(mem.read_byte(0x0300), 0x02);
        assert!(get_flag(&cpu, CARRY));
    }

    #[test]
    fn branch_cond_not_taken_has_no_extra_cycles() {
        let mut cpu = CpuState::new();
        let mut mem = Memory::new();
        cpu.set_pc(0x8000);
        mem.write_byte(0x8000, 0x10);
        let extra = branch_cond(&mut cpu, &mem, false);
        assert_eq!(extra, 0);
        assert_eq!(cpu.pc(), 0x8001);
    }

    #[test]
    fn branch_cond_taken_same_page_costs_one_extra() {
        let mut cpu = CpuState::new();
        let mut mem = Memory::new();
        cpu.set_pc(0x8000);
        mem.write_byte(0x8000, 0x02);
        let extra = branch_cond(&mut cpu, &mem, true);
        assert_eq!(extra, 1);
        assert_eq!(cpu.pc(), 0x8003);
    }

    #[test]
    fn branch_cond_taken_across_page_costs_two_extra() {
        let mut cpu = CpuState::new();
        let mut mem = Memory::new();
        cpu.set_pc(0x80FF);
        mem.write_byte(0x80FF, 0x02);
        let extra = branch_cond(&mut cpu, &mem, true);
        assert_eq!(extra, 2);
        assert_eq!(cpu.pc(), 0x8102);
    }

    #[test]
    fn generic_register_ops() {
        let mut cpu = CpuState::new();
        lda(&mut cpu, 0x10);
        ldx(&mut cpu, 0x01);
        inx(&mut cpu);
        assert_eq!(cpu.x(), 0x02);
        and(&mut cpu, 0x00);
        assert_eq!(cpu.a(), 0x00);
        assert!(get_flag(&cpu, ZERO));
        ora(&mut cpu, 0x80);
        assert_eq!(cpu.a(), 0x80);
        assert!(get_flag(&cpu, NEGATIVE));
        rol_acc(&mut cpu); // 0x80 -> sets carry, A becomes 0x00
        assert_eq!(cpu.a(), 0x00);
        assert!(get_flag(&cpu, CARRY));
        assert!(get_flag(&cpu, ZERO));
    }

    #[test]
    fn bit_reads_flags_from_operand_not_result() {
        let mut cpu = CpuState::new();
        cpu.set_a(0xFF);
        bit(&mut cpu, 0xC0); // bits 7 and 6 set, A & v != 0
        assert!(get_flag(&cpu, NEGATIVE));
        assert!(get_flag(&cpu, OVERFLOW));
        assert!(!get_flag(&cpu, ZERO));
        assert_eq!(cpu.a(), 0xFF); // A untouched
    }
}
