//! Tests for the primitive readers.

use crate::error::TruncatedError;
use crate::reader::ScriptReader;
use crate::refs::{ObjectRef, ScriptName};

#[test]
fn scalar_widths() {
    let data = [
        0x2A, // byte
        0x34, 0x12, // word
        0xFF, 0xFF, 0xFF, 0xFF, // int (-1)
        0x00, 0x00, 0x80, 0x3F, // float 1.0
    ];
    let mut r = ScriptReader::new(&data);
    assert_eq!(r.read_byte().unwrap(), 0x2A);
    assert_eq!(r.pos(), 1);
    assert_eq!(r.read_word().unwrap(), 0x1234);
    assert_eq!(r.pos(), 3);
    assert_eq!(r.read_int().unwrap(), -1);
    assert_eq!(r.pos(), 7);
    assert_eq!(r.read_float().unwrap(), 1.0);
    assert_eq!(r.pos(), 11);
    assert!(r.at_end());
}

#[test]
fn wide_scalars() {
    let mut data = Vec::new();
    data.extend_from_slice(&(-5i64).to_le_bytes());
    data.extend_from_slice(&u64::MAX.to_le_bytes());
    let mut r = ScriptReader::new(&data);
    assert_eq!(r.read_int64().unwrap(), -5);
    assert_eq!(r.read_uint64().unwrap(), u64::MAX);
    assert_eq!(r.pos(), 16);
}

#[test]
fn skip_count_is_unsigned() {
    let data = 0xFFFF_FFF0u32.to_le_bytes();
    let mut r = ScriptReader::new(&data);
    assert_eq!(r.read_skip_count().unwrap(), 0xFFFF_FFF0);
}

#[test]
fn object_ref_and_name() {
    let mut data = Vec::new();
    data.extend_from_slice(&0xDEAD_BEEFu64.to_le_bytes());
    data.extend_from_slice(&7i32.to_le_bytes());
    data.extend_from_slice(&8i32.to_le_bytes());
    data.extend_from_slice(&2u32.to_le_bytes());
    let mut r = ScriptReader::new(&data);
    assert_eq!(r.read_object_ref().unwrap(), ObjectRef::new(0xDEAD_BEEF));
    let name = r.read_script_name().unwrap();
    assert_eq!(name, ScriptName::new(7, 8, 2));
    assert_eq!(r.pos(), 20);
}

#[test]
fn narrow_string_consumes_terminator() {
    let data = b"Hi\0rest";
    let mut r = ScriptReader::new(data);
    assert_eq!(r.read_str8().unwrap(), "Hi");
    assert_eq!(r.pos(), 3);
}

#[test]
fn wide_string_consumes_terminator() {
    let data = [0x48, 0x00, 0x69, 0x00, 0x00, 0x00, 0xAA];
    let mut r = ScriptReader::new(&data);
    assert_eq!(r.read_str16().unwrap(), "Hi");
    assert_eq!(r.pos(), 6);
}

#[test]
fn truncated_read_reports_offset_and_keeps_cursor() {
    let data = [0x01, 0x02];
    let mut r = ScriptReader::new(&data);
    r.read_byte().unwrap();
    let err = r.read_int().unwrap_err();
    assert_eq!(
        err,
        TruncatedError {
            offset: 1,
            needed: 4,
            len: 2
        }
    );
    assert_eq!(r.pos(), 1);
}

#[test]
fn unterminated_string_is_truncated() {
    let data = b"abc";
    let mut r = ScriptReader::new(data);
    let err = r.read_str8().unwrap_err();
    assert_eq!(err.offset, 0);
    assert_eq!(r.pos(), 0);

    let data = [0x41, 0x00]; // one unit, no terminator
    let mut r = ScriptReader::new(&data);
    assert!(r.read_str16().is_err());
    assert_eq!(r.pos(), 0);
}

#[test]
fn latin1_narrow_string() {
    let data = [0xE9, 0x00]; // é in Latin-1
    let mut r = ScriptReader::new(&data);
    assert_eq!(r.read_str8().unwrap(), "\u{e9}");
}
