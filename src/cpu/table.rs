/*!
table.rs - Feature-gated table-driven opcode metadata + lightweight dispatcher.

Purpose
=======
A compact, data-driven alternative to the exhaustive-match dispatcher in
`dispatch::step`. It covers only a small subset of opcodes (LDA's
addressing-mode family plus a couple of flag ops and NOP); anything else
returns `None`, and `dispatch::step` falls back to the match-based family
handlers. With the `table_dispatch` feature off, `try_table_step` is a
zero-cost stub that always returns `None`, so the match dispatcher handles
every opcode -- this module is a prototype kept around for whoever picks
up the "grow this table until it replaces the match dispatcher" work.

Cycle Handling
==============
Base cycles plus a +1 page-cross penalty for the indexed addressing modes
that carry one. No RMW rows are populated yet, so the RMW micro-cycle
question does not come up here.
*/

#![allow(dead_code)]

use crate::cpu::regs::CpuRegs;
use crate::memory::Memory;

#[cfg(feature = "table_dispatch")]
use crate::cpu::{
    addressing::{
        addr_abs, addr_abs_x_pc, addr_abs_y_pc, addr_ind_x, addr_ind_y_pc, addr_zp, addr_zp_x,
        fetch_byte,
    },
    execute::{lda, set_flag},
    state::CARRY,
};

/// Attempt a table-dispatch of `opcode`. Returns `Some(cycles_consumed)` if
/// handled, `None` if the caller should fall back to the match dispatcher.
#[cfg(feature = "table_dispatch")]
pub(crate) fn try_table_step<C: CpuRegs>(cpu: &mut C, mem: &mut Memory, opcode: u8) -> Option<u32> {
    let entry = &EXEC_TABLE[opcode as usize];
    if matches!(entry.kind, ExecKind::Fallback) {
        return None;
    }

    let mut cycles = entry.base as u32;
    let mut page_crossed = false;

    let operand_kind = entry.mode;
    let resolved_value: Option<u8>;
    let mut effective_addr: Option<u16> = None;

    use AddrMode::*;
    resolved_value = match operand_kind {
        Implied | Acc => None,
        Imm => Some(fetch_byte(cpu, mem)),
        Zp => {
            effective_addr = Some(addr_zp(cpu, mem));
            None
        }
        ZpX => {
            effective_addr = Some(addr_zp_x(cpu, mem));
            None
        }
        ZpY => {
            // Not migrated yet; no opcode in EXEC_TABLE currently selects this.
            return None;
        }
        Abs => {
            effective_addr = Some(addr_abs(cpu, mem));
            None
        }
        AbsX => {
            let (a, crossed) = addr_abs_x_pc(cpu, mem);
            effective_addr = Some(a);
            page_crossed = crossed;
            None
        }
        AbsY => {
            let (a, crossed) = addr_abs_y_pc(cpu, mem);
            effective_addr = Some(a);
            page_crossed = crossed;
            None
        }
        Ind => return None, // JMP (ind) not table-migrated
        IndX => {
            effective_addr = Some(addr_ind_x(cpu, mem));
            None
        }
        IndY => {
            let (a, crossed) = addr_ind_y_pc(cpu, mem);
            effective_addr = Some(a);
            page_crossed = crossed;
            None
        }
        Rel => return None, // branch operands not table-migrated
    };

    if entry.page_cross_penalty && page_crossed {
        cycles += 1;
    }

    use ExecKind::*;
    match entry.kind {
        Lda => {
            if let Some(v) = resolved_value {
                lda(cpu, v);
            } else if let Some(addr) = effective_addr {
                let v = mem.read_byte(addr);
                lda(cpu, v);
            } else {
                return None;
            }
        }
        Clc => set_flag(cpu, CARRY, false),
        Sec => set_flag(cpu, CARRY, true),
        Nop => {}
        _ => return None,
    }

    Some(cycles)
}

#[cfg(not(feature = "table_dispatch"))]
pub(crate) fn try_table_step<C: CpuRegs>(
    _cpu: &mut C,
    _mem: &mut Memory,
    _opcode: u8,
) -> Option<u32> {
    None
}

#[cfg(feature = "table_dispatch")]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum AddrMode {
    Implied,
    Acc,
    Imm,
    Zp,
    ZpX,
    ZpY,
    Abs,
    AbsX,
    AbsY,
    Ind,
    IndX,
    IndY,
    Rel,
}

#[cfg(feature = "table_dispatch")]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum ExecKind {
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    And,
    Ora,
    Eor,
    Bit,
    Adc,
    Sbc,
    Inx,
    Iny,
    Dex,
    Dey,
    Tax,
    Tay,
    Txa,
    Tya,
    Tsx,
    Txs,
    Asl,
    Lsr,
    Rol,
    Ror,
    Inc,
    Dec,
    CmpA,
    CmpX,
    CmpY,
    Clc,
    Sec,
    Cli,
    Sei,
    Cld,
    Sed,
    Clv,
    Branch,
    JmpAbs,
    JmpInd,
    Jsr,
    Rts,
    Brk,
    Rti,
    Nop,
    Fallback,
}

#[cfg(feature = "table_dispatch")]
#[derive(Copy, Clone, Debug)]
struct OpInfo {
    mode: AddrMode,
    kind: ExecKind,
    base: u8,
    page_cross_penalty: bool,
    rmw: bool,
    branch: bool,
}

#[cfg(feature = "table_dispatch")]
impl OpInfo {
    const fn new(
        mode: AddrMode,
        kind: ExecKind,
        base: u8,
        page_cross_penalty: bool,
        rmw: bool,
        branch: bool,
    ) -> Self {
        Self {
            mode,
            kind,
            base,
            page_cross_penalty,
            rmw,
            branch,
        }
    }
    const fn fb() -> Self {
        Self::new(
            AddrMode::Implied,
            ExecKind::Fallback,
            2,
            false,
            false,
            false,
        )
    }
}

#[cfg(feature = "table_dispatch")]
static EXEC_TABLE: [OpInfo; 256] = {
    use AddrMode::*;
    use ExecKind::*;
    let mut t: [OpInfo; 256] = [OpInfo::fb(); 256];

    // LDA variants
    t[0xA9] = OpInfo::new(Imm, Lda, 2, false, false, false);
    t[0xA5] = OpInfo::new(Zp, Lda, 3, false, false, false);
    t[0xB5] = OpInfo::new(ZpX, Lda, 4, false, false, false);
    t[0xAD] = OpInfo::new(Abs, Lda, 4, false, false, false);
    t[0xBD] = OpInfo::new(AbsX, Lda, 4, true, false, false); // +1 if page cross
    t[0xB9] = OpInfo::new(AbsY, Lda, 4, true, false, false);
    t[0xA1] = OpInfo::new(IndX, Lda, 6, false, false, false);
    t[0xB1] = OpInfo::new(IndY, Lda, 5, true, false, false);

    // Flag ops sample
    t[0x18] = OpInfo::new(Implied, Clc, 2, false, false, false);
    t[0x38] = OpInfo::new(Implied, Sec, 2, false, false, false);

    // NOP
    t[0xEA] = OpInfo::new(Implied, Nop, 2, false, false, false);

    t
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::core::Cpu;

    #[test]
    #[cfg(feature = "table_dispatch")]
    fn lda_imm_table_cycles() {
        let mut cpu = Cpu::new();
        cpu.reset();
        let load_addr = cpu.load_program(&[0x00, 0x10, 0xA9, 0x10, 0xEA, 0x00]);
        cpu.reset_to(load_addr);
        let (state, mem) = cpu.state_and_mem_mut();
        let op1 = mem.read_byte(state.pc());
        assert_eq!(op1, 0xA9);
        state.advance_pc_one();
        let c = try_table_step(state, mem, op1).unwrap();
        assert_eq!(c, 2);
        assert_eq!(state.a(), 0x10);
    }

    #[test]
    #[cfg(not(feature = "table_dispatch"))]
    fn table_disabled_returns_none() {
        let mut cpu = Cpu::new();
        cpu.reset();
        let (state, mem) = cpu.state_and_mem_mut();
        assert!(try_table_step(state, mem, 0xA9).is_none());
    }
}
