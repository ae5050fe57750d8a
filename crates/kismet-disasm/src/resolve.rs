//! Symbol resolution: mapping opaque reference tokens to display names.
//!
//! The decoder takes a resolver as an injected capability; there is no
//! ambient global state. Resolution failure is expected (disassembly is a
//! best-effort diagnostic tool) and never aborts a pass — the decoder falls
//! back to stable sentinel strings.

use std::collections::HashMap;

use kismet_bytecode::{ObjectRef, ScriptName};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Resolves reference tokens embedded in the bytecode to display names.
///
/// Implementations must be cheap to query; the decoder calls them once per
/// reference, synchronously, with no caching of its own.
pub trait SymbolResolver {
    /// Display name for an object reference.
    fn resolve_object(&self, object: ObjectRef) -> Option<String>;

    /// Name of the object's enclosing scope (class or package), used for
    /// `Scope::Function` call rendering.
    fn resolve_outer(&self, object: ObjectRef) -> Option<String>;

    /// String form of a name token.
    fn resolve_name(&self, name: &ScriptName) -> Option<String>;
}

/// Resolves nothing. Output falls back to raw token sentinels everywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullResolver;

impl SymbolResolver for NullResolver {
    fn resolve_object(&self, _object: ObjectRef) -> Option<String> {
        None
    }

    fn resolve_outer(&self, _object: ObjectRef) -> Option<String> {
        None
    }

    fn resolve_name(&self, _name: &ScriptName) -> Option<String> {
        None
    }
}

/// One object entry of a symbol table file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub name: String,
    /// Enclosing scope (class/package) name, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer: Option<String>,
}

/// In-memory symbol table, loadable from a JSON file.
///
/// File layout:
///
/// ```json
/// {
///   "objects": {
///     "0x7ff6a1b20040": { "name": "GetHealth", "outer": "PlayerCharacter" }
///   },
///   "names": {
///     "102": "Damage",
///     "103:2": "Damage_2"
///   }
/// }
/// ```
///
/// Object keys are addresses (hex with `0x` prefix, or decimal); name keys
/// are `index` or `index:number`.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    objects: HashMap<u64, SymbolEntry>,
    names: HashMap<(i32, u32), String>,
}

#[derive(Debug, Error)]
pub enum SymbolTableError {
    #[error("malformed symbol file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bad object address {key:?} in symbol file")]
    BadAddress { key: String },

    #[error("bad name key {key:?} in symbol file (expected `index` or `index:number`)")]
    BadNameKey { key: String },
}

/// Serde mirror of the on-disk layout.
#[derive(Deserialize)]
struct SymbolFile {
    #[serde(default)]
    objects: HashMap<String, SymbolEntry>,
    #[serde(default)]
    names: HashMap<String, String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.names.is_empty()
    }

    pub fn insert_object(&mut self, address: u64, entry: SymbolEntry) {
        self.objects.insert(address, entry);
    }

    pub fn insert_name(&mut self, index: i32, number: u32, text: impl Into<String>) {
        self.names.insert((index, number), text.into());
    }

    /// Parse the JSON symbol-file layout.
    pub fn from_json(text: &str) -> Result<Self, SymbolTableError> {
        let file: SymbolFile = serde_json::from_str(text)?;
        let mut table = Self::new();

        for (key, entry) in file.objects {
            let address =
                parse_address(&key).ok_or_else(|| SymbolTableError::BadAddress { key })?;
            table.objects.insert(address, entry);
        }

        for (key, text) in file.names {
            let (index, number) =
                parse_name_key(&key).ok_or_else(|| SymbolTableError::BadNameKey { key })?;
            table.names.insert((index, number), text);
        }

        Ok(table)
    }
}

fn parse_address(key: &str) -> Option<u64> {
    if let Some(hex) = key.strip_prefix("0x").or_else(|| key.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else {
        key.parse().ok()
    }
}

fn parse_name_key(key: &str) -> Option<(i32, u32)> {
    match key.split_once(':') {
        Some((index, number)) => Some((index.parse().ok()?, number.parse().ok()?)),
        None => Some((key.parse().ok()?, 0)),
    }
}

impl SymbolResolver for SymbolTable {
    fn resolve_object(&self, object: ObjectRef) -> Option<String> {
        self.objects.get(&object.raw()).map(|e| e.name.clone())
    }

    fn resolve_outer(&self, object: ObjectRef) -> Option<String> {
        self.objects
            .get(&object.raw())
            .and_then(|e| e.outer.clone())
    }

    fn resolve_name(&self, name: &ScriptName) -> Option<String> {
        self.names.get(&(name.index, name.number)).cloned()
    }
}
