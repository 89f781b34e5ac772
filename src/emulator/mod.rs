//! The CHIP-8 virtual machine: machine state, instruction decoding,
//! and the fetch-decode-execute cycle engine.

pub mod emulator;
pub mod error;
pub mod instruction;
pub mod machine;

pub use emulator::Emulator;
pub use error::{DecodeError, Fault};
pub use machine::{Framebuffer, Machine, SCREEN_HEIGHT, SCREEN_WIDTH};
