//! Wire format for Blueprint script bytecode.
//!
//! This crate contains:
//! - The opcode table (`ExprToken`) and nested sub-discriminants
//! - Bounds-checked primitive readers over a script buffer (`ScriptReader`)
//! - Opaque reference tokens (`ObjectRef`, `ScriptName`)
//!
//! It knows nothing about rendering or symbol resolution; those live in the
//! disassembler crate.

pub mod error;
pub mod kinds;
pub mod opcode;
pub mod reader;
pub mod refs;

#[cfg(test)]
mod reader_tests;

// Re-export commonly used items at crate root
pub use error::TruncatedError;
pub use kinds::{InstrumentationKind, TextKind, conversion_label};
pub use opcode::ExprToken;
pub use reader::ScriptReader;
pub use refs::{ObjectRef, SCRIPT_NAME_SIZE, ScriptName};
