//! Errors that can come out of decoding and execution.
//!
//! Decode failures are tolerated by the cycle engine (logged, then treated
//! as a no-op), while faults end the run.

use thiserror::Error;

/// No opcode pattern matches the fetched instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no opcode matches instruction {0:#06X}")]
pub struct DecodeError(pub u16);

/// A program logic error the machine cannot recover from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// 00EE was executed with nothing on the call stack.
    #[error("return with empty call stack at pc {pc:#06X}")]
    StackUnderflow { pc: u16 },

    /// PC, I or a memory range computed from them left [0, 4096).
    #[error("memory access out of bounds at address {addr:#06X}")]
    OutOfBounds { addr: u16 },
}
