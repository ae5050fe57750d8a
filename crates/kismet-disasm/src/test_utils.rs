//! Shared helpers for assembling script buffers by hand in tests.

use kismet_bytecode::ExprToken;

/// Incremental little-endian script assembler.
#[derive(Default)]
pub struct ScriptBuilder {
    bytes: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn op(mut self, token: ExprToken) -> Self {
        self.bytes.push(token.byte());
        self
    }

    pub fn byte(mut self, value: u8) -> Self {
        self.bytes.push(value);
        self
    }

    pub fn word(mut self, value: u16) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn int(mut self, value: i32) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn int64(mut self, value: i64) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn uint64(mut self, value: u64) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn float(mut self, value: f32) -> Self {
        self.bytes
            .extend_from_slice(&value.to_bits().to_le_bytes());
        self
    }

    pub fn skip(mut self, value: u32) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn object_ref(mut self, address: u64) -> Self {
        self.bytes.extend_from_slice(&address.to_le_bytes());
        self
    }

    pub fn script_name(mut self, index: i32, number: u32) -> Self {
        self.bytes.extend_from_slice(&index.to_le_bytes());
        self.bytes.extend_from_slice(&index.to_le_bytes());
        self.bytes.extend_from_slice(&number.to_le_bytes());
        self
    }

    /// Narrow string payload including its zero terminator.
    pub fn str8(mut self, text: &str) -> Self {
        self.bytes.extend_from_slice(text.as_bytes());
        self.bytes.push(0);
        self
    }

    /// Wide string payload including its zero terminator.
    pub fn str16(mut self, text: &str) -> Self {
        for unit in text.encode_utf16() {
            self.bytes.extend_from_slice(&unit.to_le_bytes());
        }
        self.bytes.extend_from_slice(&0u16.to_le_bytes());
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}
