/*!
misc.rs - Transfers / Stack / Flags / register Inc-Dec / NOP opcode handler

Transfers:
  TAX (0xAA), TAY (0xA8), TXA (0x8A), TYA (0x98), TSX (0xBA), TXS (0x9A)

Stack:
  PHA (0x48), PLA (0x68), PHP (0x08), PLP (0x28)

Flags:
  CLC (0x18), SEC (0x38), CLI (0x58), SEI (0x78),
  CLD (0xD8), SED (0xF8), CLV (0xB8)

Register increment/decrement:
  INX (0xE8), INY (0xC8), DEX (0xCA), DEY (0x88)

No-op:
  NOP (0xEA)

Everything here has a fixed base cycle count; this handler never touches
`*cycles`. Stack opcodes need `&mut Memory`, so `handle` takes a concrete
`&mut CpuState`.
*/

use crate::cpu::execute::{
    dex, dey, inx, iny, pha, php, pla, plp, set_flag, tax, tay, tsx, txa, txs, tya,
};
use crate::cpu::state::{CARRY, CpuState, DECIMAL, IRQ_DISABLE, OVERFLOW};
use crate::memory::Memory;

pub(crate) fn handle(opcode: u8, cpu: &mut CpuState, mem: &mut Memory, _cycles: &mut u32) -> bool {
    match opcode {
        // -------- Transfers --------
        0xAA => tax(cpu),
        0xA8 => tay(cpu),
        0x8A => txa(cpu),
        0x98 => tya(cpu),
        0xBA => tsx(cpu),
        0x9A => txs(cpu),

        // -------- Stack --------
        0x48 => pha(cpu, mem),
        0x68 => pla(cpu, mem),
        0x08 => php(cpu, mem),
        0x28 => plp(cpu, mem),

        // -------- Flags --------
        0x18 => set_flag(cpu, CARRY, false),
        0x38 => set_flag(cpu, CARRY, true),
        0x58 => set_flag(cpu, IRQ_DISABLE, false),
        0x78 => set_flag(cpu, IRQ_DISABLE, true),
        0xD8 => set_flag(cpu, DECIMAL, false),
        0xF8 => set_flag(cpu, DECIMAL, true),
        0xB8 => set_flag(cpu, OVERFLOW, false),

        // -------- Register Inc/Dec --------
        0xE8 => inx(cpu),
        0xC8 => iny(cpu),
        0xCA => dex(cpu),
        0x88 => dey(cpu),

        // -------- NOP --------
        0xEA => {}

        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::cpu::core::Cpu;
    use crate::cpu::cycles::base_cycles;
    use crate::cpu::state::CARRY;

    fn cpu_at(program: &[u8]) -> Cpu {
        let mut cpu = Cpu::new();
        cpu.reset();
        let load_addr = cpu.load_program(program);
        cpu.reset_to(load_addr);
        cpu
    }

    #[test]
    fn transfers_sequence() {
        // LDA #$05; TAX; TAY; TXA; TYA; TSX; TXS; BRK
        let mut cpu = cpu_at(&[
            0x00, 0x10, 0xA9, 0x05, 0xAA, 0xA8, 0x8A, 0x98, 0xBA, 0x9A, 0x00,
        ]);
        let total = 2
            + base_cycles(0xAA)
            + base_cycles(0xA8)
            + base_cycles(0x8A)
            + base_cycles(0x98)
            + base_cycles(0xBA)
            + base_cycles(0x9A)
            + 7;
        let used = cpu.execute(total).unwrap();
        assert_eq!(used, total);
        assert_eq!(cpu.a(), 0x05);
        assert_eq!(cpu.x(), 0x05); // TSX/TXS round trip through SP, X still 0x05
    }

    #[test]
    fn stack_push_pop_round_trips_accumulator() {
        // LDA #$AB; PHA; LDA #$00; PLA; BRK
        let mut cpu = cpu_at(&[0x00, 0x10, 0xA9, 0xAB, 0x48, 0xA9, 0x00, 0x68, 0x00]);
        let total = 2 + base_cycles(0x48) + 2 + base_cycles(0x68) + 7;
        let used = cpu.execute(total).unwrap();
        assert_eq!(used, total);
        assert_eq!(cpu.a(), 0xAB);
    }

    #[test]
    fn php_plp_round_trip_flags() {
        // SEC; PHP; CLC; PLP; BRK -- PLP restores carry set by SEC
        let mut cpu = cpu_at(&[0x00, 0x10, 0x38, 0x08, 0x18, 0x28, 0x00]);
        let total =
            base_cycles(0x38) + base_cycles(0x08) + base_cycles(0x18) + base_cycles(0x28) + 7;
        cpu.execute(total).unwrap();
        assert!(cpu.get_flag(CARRY));
    }

    #[test]
    fn flag_ops_clear_and_set() {
        let mut cpu = cpu_at(&[0x00, 0x10, 0x38, 0x18, 0x00]);
        let total = base_cycles(0x38) + base_cycles(0x18) + 7;
        cpu.execute(total).unwrap();
        assert!(!cpu.get_flag(CARRY));
    }

    #[test]
    fn register_inc_dec_and_nop() {
        // LDX #$05; INX; DEX; DEX; NOP; BRK
        let mut cpu = cpu_at(&[0x00, 0x10, 0xA2, 0x05, 0xE8, 0xCA, 0xCA, 0xEA, 0x00]);
        let total = 2 + base_cycles(0xE8) + base_cycles(0xCA) * 2 + base_cycles(0xEA) + 7;
        let used = cpu.execute(total).unwrap();
        assert_eq!(used, total);
        assert_eq!(cpu.x(), 0x04);
    }
}
