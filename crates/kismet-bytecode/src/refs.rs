//! Opaque reference tokens embedded in the bytecode.
//!
//! The decoder never dereferences these; they are forwarded to a symbol
//! resolver for display and otherwise treated as plain data.

use serde::Serialize;

/// An 8-byte object reference (a pointer in the producing process, opaque
/// here).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ObjectRef(u64);

impl ObjectRef {
    pub const NULL: ObjectRef = ObjectRef(0);

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// A 12-byte name token: two table indices plus a disambiguating number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ScriptName {
    /// Index into the name table used for comparison.
    pub index: i32,
    /// Index used when case-preserving display names are kept separately.
    pub display_index: i32,
    /// Instance number; zero means the bare name.
    pub number: u32,
}

/// Wire width of a [`ScriptName`].
pub const SCRIPT_NAME_SIZE: usize = 12;

impl ScriptName {
    pub fn new(index: i32, display_index: i32, number: u32) -> Self {
        Self {
            index,
            display_index,
            number,
        }
    }

    /// Stable placeholder used when no resolver entry exists for the token.
    pub fn fallback_string(&self) -> String {
        if self.number == 0 {
            format!("Name_{}", self.index)
        } else {
            format!("Name_{}_{}", self.index, self.number)
        }
    }
}
