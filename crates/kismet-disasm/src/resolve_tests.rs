//! Tests for symbol resolution.

use kismet_bytecode::{ObjectRef, ScriptName};

use crate::resolve::{NullResolver, SymbolEntry, SymbolResolver, SymbolTable, SymbolTableError};

#[test]
fn null_resolver_resolves_nothing() {
    let name = ScriptName::new(1, 1, 0);
    assert_eq!(NullResolver.resolve_object(ObjectRef::new(0x10)), None);
    assert_eq!(NullResolver.resolve_outer(ObjectRef::new(0x10)), None);
    assert_eq!(NullResolver.resolve_name(&name), None);
}

#[test]
fn table_lookups() {
    let mut table = SymbolTable::new();
    table.insert_object(
        0x10,
        SymbolEntry {
            name: "Health".into(),
            outer: Some("PlayerState".into()),
        },
    );
    table.insert_name(3, 0, "BeginPlay");
    table.insert_name(3, 2, "BeginPlay_2");

    assert_eq!(
        table.resolve_object(ObjectRef::new(0x10)),
        Some("Health".into())
    );
    assert_eq!(
        table.resolve_outer(ObjectRef::new(0x10)),
        Some("PlayerState".into())
    );
    assert_eq!(table.resolve_object(ObjectRef::new(0x11)), None);

    assert_eq!(
        table.resolve_name(&ScriptName::new(3, 3, 0)),
        Some("BeginPlay".into())
    );
    assert_eq!(
        table.resolve_name(&ScriptName::new(3, 3, 2)),
        Some("BeginPlay_2".into())
    );
    assert_eq!(table.resolve_name(&ScriptName::new(4, 4, 0)), None);
}

#[test]
fn json_symbol_file_round_trip() {
    let table = SymbolTable::from_json(
        r#"{
            "objects": {
                "0x7ff6a1b20040": { "name": "GetHealth", "outer": "PlayerCharacter" },
                "4096": { "name": "Damage" }
            },
            "names": {
                "102": "Fire",
                "103:2": "Fire_2"
            }
        }"#,
    )
    .unwrap();

    assert_eq!(
        table.resolve_object(ObjectRef::new(0x7ff6_a1b2_0040)),
        Some("GetHealth".into())
    );
    assert_eq!(
        table.resolve_outer(ObjectRef::new(0x7ff6_a1b2_0040)),
        Some("PlayerCharacter".into())
    );
    assert_eq!(
        table.resolve_object(ObjectRef::new(4096)),
        Some("Damage".into())
    );
    assert_eq!(table.resolve_outer(ObjectRef::new(4096)), None);
    assert_eq!(
        table.resolve_name(&ScriptName::new(102, 102, 0)),
        Some("Fire".into())
    );
    assert_eq!(
        table.resolve_name(&ScriptName::new(103, 103, 2)),
        Some("Fire_2".into())
    );
}

#[test]
fn empty_sections_are_optional() {
    let table = SymbolTable::from_json("{}").unwrap();
    assert!(table.is_empty());

    let table = SymbolTable::from_json(r#"{ "names": { "1": "A" } }"#).unwrap();
    assert!(!table.is_empty());
}

#[test]
fn bad_keys_are_rejected() {
    let err = SymbolTable::from_json(r#"{ "objects": { "zzz": { "name": "X" } } }"#).unwrap_err();
    assert!(matches!(err, SymbolTableError::BadAddress { .. }));

    let err = SymbolTable::from_json(r#"{ "names": { "1:2:3": "X" } }"#).unwrap_err();
    assert!(matches!(err, SymbolTableError::BadNameKey { .. }));

    let err = SymbolTable::from_json("not json").unwrap_err();
    assert!(matches!(err, SymbolTableError::Json(_)));
}

#[test]
fn fallback_name_strings() {
    assert_eq!(ScriptName::new(7, 7, 0).fallback_string(), "Name_7");
    assert_eq!(ScriptName::new(7, 7, 3).fallback_string(), "Name_7_3");
}
