//! Structural decode errors.
//!
//! Unknown opcodes and unresolved references are *not* errors: they degrade
//! the pass (diagnostic node, sentinel name) and are reported through
//! [`crate::Disassembly::degraded`]. Everything here is fatal to the pass.

use kismet_bytecode::{ExprToken, TruncatedError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A primitive read would have crossed the end of the buffer.
    #[error(transparent)]
    Truncated(#[from] TruncatedError),

    /// A terminator-seeking loop exhausted the buffer without finding its
    /// terminator opcode.
    #[error(
        "unterminated sequence: no {} before end of script (sequence opened at {opened_at:#x})",
        .terminator.name()
    )]
    Unterminated {
        /// Offset of the instruction that opened the sequence.
        opened_at: usize,
        /// The terminator the loop was looking for.
        terminator: ExprToken,
    },

    /// A text-literal string field was not prefixed by a string-const
    /// opcode.
    #[error("expected a string constant at {offset:#x}, found byte {found:#04x}")]
    BadStringToken { offset: usize, found: u8 },

    /// The text-literal kind byte is not one of the five known kinds.
    #[error("unknown text-literal kind {found} at {offset:#x}")]
    UnknownTextKind { offset: usize, found: u8 },

    /// Expression nesting exceeded the configured bound.
    #[error("expression nesting exceeds limit of {limit} at {offset:#x}")]
    TooDeep { offset: usize, limit: usize },
}

impl DecodeError {
    /// Byte offset the error was raised at (for `Unterminated`, where the
    /// sequence was opened).
    pub fn offset(&self) -> usize {
        match self {
            Self::Truncated(e) => e.offset,
            Self::Unterminated { opened_at, .. } => *opened_at,
            Self::BadStringToken { offset, .. }
            | Self::UnknownTextKind { offset, .. }
            | Self::TooDeep { offset, .. } => *offset,
        }
    }
}
