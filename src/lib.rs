//! A CHIP-8 virtual machine, split into an interpreter core and thin
//! front-end layers.
//!
//! ## Design
//!
//! * the core is a plain synchronous step function: one `cycle()` call is
//!   one fetch/decode/execute plus a timer tick, with no blocking anywhere;
//!   pacing (cycles per second, timers vs. wall clock) belongs to whoever
//!   drives the loop
//! * instruction words decode into a tagged `Instruction` enum matched once
//!   per cycle; the two ambiguous opcode families disambiguate on a second
//!   nibble or byte, and undefined patterns become explicit no-ops
//! * machine state (RAM, registers, stack, timers, framebuffer, key vector,
//!   RNG) is owned by one `Chip8Interpreter` value; front ends get borrowed
//!   views, so independent machines can coexist (e.g. in tests)
//! * screens, keyboards and buzzers hide behind `Display`, `Input` and
//!   `Sound` traits, each with a terminal implementation and a dummy one
//!   for headless use
//! * stack overflow/underflow fault with a typed error instead of silently
//!   corrupting memory; it's the caller's decision whether that's fatal
//!
//! ## Running a program
//!
//! ```no_run
//! use vip8::interpreter::Chip8Interpreter;
//!
//! let mut machine = Chip8Interpreter::new();
//! let mut program: &[u8] = &[0x60, 0x05, 0xa2, 0x50];
//! machine.load_program(&mut program).unwrap();
//! machine.cycle().unwrap();
//! // render machine.framebuffer(), feed machine.press_key(..), repeat
//! ```
pub mod display;
pub mod error;
pub mod input;
pub mod instruction;
pub mod interpreter;
pub mod memory;
pub mod sound;

pub use error::Chip8Error;
pub use instruction::Instruction;
pub use interpreter::Chip8Interpreter;
