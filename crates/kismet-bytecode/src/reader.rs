//! Bounds-checked primitive readers over a script buffer.
//!
//! One `ScriptReader` is the single read head for a whole decode pass: every
//! read advances the cursor by the exact width of the value, and a failed
//! read leaves the cursor untouched. All multi-byte values are
//! little-endian.

use crate::error::TruncatedError;
use crate::refs::{ObjectRef, SCRIPT_NAME_SIZE, ScriptName};

/// Cursor over an immutable script buffer.
#[derive(Debug)]
pub struct ScriptReader<'a> {
    script: &'a [u8],
    pos: usize,
}

impl<'a> ScriptReader<'a> {
    pub fn new(script: &'a [u8]) -> Self {
        Self { script, pos: 0 }
    }

    /// Current cursor offset.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Total buffer length.
    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.script.len() - self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.script.len()
    }

    /// Consume exactly `n` bytes.
    fn take(&mut self, n: usize) -> Result<&'a [u8], TruncatedError> {
        if self.remaining() < n {
            return Err(TruncatedError {
                offset: self.pos,
                needed: n,
                len: self.script.len(),
            });
        }
        let slice = &self.script[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_byte(&mut self) -> Result<u8, TruncatedError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_word(&mut self) -> Result<u16, TruncatedError> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_int(&mut self) -> Result<i32, TruncatedError> {
        let b = self.take(4)?;
        Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_int64(&mut self) -> Result<i64, TruncatedError> {
        let b = self.take(8)?;
        Ok(i64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    pub fn read_uint64(&mut self) -> Result<u64, TruncatedError> {
        let b = self.take(8)?;
        Ok(u64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    /// IEEE-754 single, bit-reinterpreted from the 4-byte integer encoding.
    pub fn read_float(&mut self) -> Result<f32, TruncatedError> {
        let bits = self.read_int()?;
        Ok(f32::from_bits(bits as u32))
    }

    /// 4-byte code offset used by branch and context instructions.
    pub fn read_skip_count(&mut self) -> Result<u32, TruncatedError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// 8-byte opaque object reference.
    pub fn read_object_ref(&mut self) -> Result<ObjectRef, TruncatedError> {
        Ok(ObjectRef::new(self.read_uint64()?))
    }

    /// 12-byte name token: comparison index, display index, number.
    pub fn read_script_name(&mut self) -> Result<ScriptName, TruncatedError> {
        let b = self.take(SCRIPT_NAME_SIZE)?;
        Ok(ScriptName {
            index: i32::from_le_bytes([b[0], b[1], b[2], b[3]]),
            display_index: i32::from_le_bytes([b[4], b[5], b[6], b[7]]),
            number: u32::from_le_bytes([b[8], b[9], b[10], b[11]]),
        })
    }

    /// Narrow string: single-byte units up to and including a zero byte.
    ///
    /// Units are treated as Latin-1 for display. The terminator is consumed
    /// but not part of the returned text.
    pub fn read_str8(&mut self) -> Result<String, TruncatedError> {
        let start = self.pos;
        let mut text = String::new();
        loop {
            let unit = match self.read_byte() {
                Ok(unit) => unit,
                Err(mut e) => {
                    self.pos = start;
                    e.offset = start;
                    return Err(e);
                }
            };
            if unit == 0 {
                return Ok(text);
            }
            text.push(unit as char);
        }
    }

    /// Wide string: two-byte units up to and including a zero unit.
    ///
    /// Unpaired surrogate units are replaced with U+FFFD.
    pub fn read_str16(&mut self) -> Result<String, TruncatedError> {
        let start = self.pos;
        let mut units = Vec::new();
        loop {
            let unit = match self.read_word() {
                Ok(unit) => unit,
                Err(mut e) => {
                    self.pos = start;
                    e.offset = start;
                    return Err(e);
                }
            };
            if unit == 0 {
                return Ok(String::from_utf16_lossy(&units));
            }
            units.push(unit);
        }
    }
}

