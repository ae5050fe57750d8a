//! Errors raised by the primitive readers.

use thiserror::Error;

/// A primitive read would have crossed the end of the script buffer.
///
/// Reads are all-or-nothing: the cursor is left where the failing read
/// started, never inside a partially consumed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("script truncated: needed {needed} byte(s) at offset {offset:#x}, script is {len} bytes")]
pub struct TruncatedError {
    /// Offset the failing read started at.
    pub offset: usize,
    /// Bytes the read required.
    pub needed: usize,
    /// Total script length.
    pub len: usize,
}
