/*!
error.rs - Error taxonomy for the 6502 core.

Kept as a small hand-written enum rather than pulling in an error-derive
crate: the core only has one fatal, caller-visible error condition
(an opcode outside the 151 documented instructions), and the rest of this
crate's fallibility is expressed as assertions (`InvariantViolation`,
e.g. decimal mode engaged during ADC/SBC) rather than `Result` plumbing,
since those conditions indicate a bug in this crate, not a caller mistake.

Budget overrun (an `execute` call running past its requested cycle count
because the last instruction dispatched was atomic) is not an error at
all; it is reported via `Cpu::execute`'s return value.
*/

use std::fmt;

/// Fatal conditions surfaced by [`crate::cpu::core::Cpu::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// The decoder fetched a byte outside the 151 documented 6502 opcodes.
    /// Execution stops immediately; the CPU's `pc` points one byte past the
    /// offending opcode and all other state reflects instructions executed
    /// prior to it.
    UnsupportedOpcode(u8),
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuError::UnsupportedOpcode(op) => {
                write!(f, "unsupported opcode ${op:02X}")
            }
        }
    }
}

impl std::error::Error for CpuError {}
