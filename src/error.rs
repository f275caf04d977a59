use std::io;
use thiserror::Error;

/// Everything that can go wrong inside the machine. Decode misses are not
/// here: an undefined opcode is a no-op, not an error.
#[derive(Debug, Error)]
pub enum Chip8Error {
    #[error("program image is {size} bytes but only {capacity} bytes of RAM are available")]
    ProgramTooLarge { size: usize, capacity: usize },

    /// subroutine call with all 16 stack slots in use
    #[error("call stack overflow at pc {pc:#06x}")]
    StackOverflow { pc: u16 },

    /// subroutine return with nothing on the stack
    #[error("call stack underflow at pc {pc:#06x}")]
    StackUnderflow { pc: u16 },

    #[error(transparent)]
    Io(#[from] io::Error),
}
