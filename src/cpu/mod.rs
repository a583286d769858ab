/*!
cpu::mod - Public façade for the 6502 CPU core.

Layout
======
    state.rs        - Architectural register/flag state (`CpuState`).
    regs.rs          - `CpuRegs` trait implemented by `CpuState`; lets the
                        addressing/execute/dispatch helpers stay generic.
    bus.rs           - Fetch/read/write/stack primitives over `Memory`.
    addressing.rs    - The eight addressing-mode evaluators.
    execute.rs       - Instruction semantic helpers (ALU, transfers, stack,
                        RMW, branch).
    cycles.rs        - Per-opcode base cycle counts for the documented
                        instruction set.
    table.rs         - Table-driven alternative to the exhaustive-match
                        dispatcher, tried first by `dispatch::step`; its
                        interesting bits are feature-gated on
                        `table_dispatch` and it is a no-op fallback
                        (always returns `None`) otherwise.
    dispatch/        - Opcode-family handlers plus the orchestrator that
                        ties fetch -> decode -> execute together.
    core/            - `Cpu`, the public facade wrapping `CpuState` and
                        `Memory`.

Only `Cpu` and the flag-mask constants are expected to be used from outside
this crate; the submodule split exists to keep each concern (addressing
math, ALU semantics, timing, dispatch) independently testable.

Feature flags:
    table_dispatch  - Swap the exhaustive-match dispatcher for a 256-entry
                      table-driven one. Both implement identical semantics;
                      this only changes how an opcode byte is routed.
*/

pub mod addressing;
pub mod bus;
pub mod core;
pub mod cycles;
pub mod dispatch;
pub mod execute;
pub mod regs;
pub mod state;
pub mod table;

pub use regs::CpuRegs;
pub use state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, UNUSED, ZERO,
};
