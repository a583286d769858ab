/*!
dispatch - Orchestrator for a single 6502 CPU step.

Overview
========
`step` performs one complete instruction: fetch the opcode, advance PC past
it, look up its baseline cycle count, then hand it to the matching
opcode-family handler (load/store, logical, arithmetic, compare, branches,
rmw, control_flow, misc). A handler that claims the opcode may push extra
cycles onto the running total (page-cross, branch-taken penalties); none of
them tick anything themselves, since there is no bus to tick -- `Memory` is
inert and the caller (`Cpu::execute`) is the only place cycle totals matter.

An opcode no family claims is `CpuError::UnsupportedOpcode`: this core
implements only the 151 documented 6502 opcodes (see module docs on
`cycles::base_cycles`), so illegal/undocumented opcodes surface as an error
rather than silently doing something.
*/

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;

use crate::cpu::cycles::base_cycles;
use crate::cpu::state::CpuState;
use crate::error::CpuError;
use crate::memory::Memory;

/// Execute exactly one instruction. Returns the number of cycles it consumed
/// (base cost plus any dynamic penalty), or `Err` if the opcode is not one
/// of the 151 documented 6502 instructions.
pub(crate) fn step(cpu: &mut CpuState, mem: &mut Memory) -> Result<u32, CpuError> {
    let opcode = mem.read_byte(cpu.pc());
    cpu.advance_pc_one();

    let mut cycles = base_cycles(opcode);

    if let Some(table_cycles) = crate::cpu::table::try_table_step(cpu, mem, opcode) {
        return Ok(table_cycles);
    }

    let handled = load_store::handle(opcode, cpu, mem, &mut cycles)
        || logical::handle(opcode, cpu, mem, &mut cycles)
        || arithmetic::handle(opcode, cpu, mem, &mut cycles)
        || compare::handle(opcode, cpu, mem, &mut cycles)
        || branches::handle(opcode, cpu, mem, &mut cycles)
        || rmw::handle(opcode, cpu, mem, &mut cycles)
        || control_flow::handle(opcode, cpu, mem, &mut cycles)
        || misc::handle(opcode, cpu, mem, &mut cycles);

    if handled {
        Ok(cycles)
    } else {
        Err(CpuError::UnsupportedOpcode(opcode))
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::core::Cpu;
    use crate::error::CpuError;

    #[test]
    fn unknown_opcode_surfaces_error_without_advancing_further() {
        let mut cpu = Cpu::new();
        cpu.reset();
        let load_addr = cpu.load_program(&[0x00, 0x10, 0x02]); // 0x02 is unimplemented
        cpu.reset_to(load_addr);
        let err = cpu.execute(1).unwrap_err();
        assert_eq!(err, CpuError::UnsupportedOpcode(0x02));
        // PC has advanced past the opcode byte even though it was rejected.
        assert_eq!(cpu.pc(), load_addr.wrapping_add(1));
    }

    #[test]
    fn full_instruction_mix_runs_to_brk() {
        // LDA #$05; CLC; ADC #$03; STA $10; LDX $10; BRK
        let program = [
            0x00, 0x10, 0xA9, 0x05, 0x18, 0x69, 0x03, 0x85, 0x10, 0xA6, 0x10, 0x00,
        ];
        let mut cpu = Cpu::new();
        cpu.reset();
        let load_addr = cpu.load_program(&program);
        cpu.reset_to(load_addr);
        cpu.execute(2 + 2 + 2 + 3 + 3 + 7).unwrap();
        assert_eq!(cpu.x(), 0x08);
    }
}
