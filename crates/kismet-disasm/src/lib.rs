//! Recursive-descent disassembler for Blueprint script bytecode.
//!
//! This crate contains:
//! - The decoded instruction tree (`Expr`, one variant per opcode category)
//! - The decoder itself (`Disassembler`), single-pass over a borrowed
//!   buffer, depth-bounded, emitting rendered lines in pre-order
//! - The capability seams: `SymbolResolver` for reference display names and
//!   `RenderSink` for output
//!
//! The decoder never executes bytecode and never dereferences the opaque
//! reference tokens it reads; it only renders structure.

pub mod decoder;
pub mod error;
pub mod expr;
pub mod render;
pub mod resolve;

#[cfg(test)]
mod resolve_tests;
#[cfg(test)]
mod test_utils;

// Re-export commonly used items at crate root
pub use decoder::{Disassembler, Disassembly, Limits};
pub use error::DecodeError;
pub use expr::{
    CallExpr, Callee, ContainerExpr, ContainerKind, Expr, ExprKind, Literal, SwitchCase,
    TextLiteral,
};
pub use render::{NullSink, RenderSink, StringSink, WriteSink};
pub use resolve::{NullResolver, SymbolEntry, SymbolResolver, SymbolTable, SymbolTableError};
