use std::fs;
use std::io::{self, Read};
use std::path::Path;

use kismet_disasm::SymbolTable;

/// Read a raw script buffer from a file, or stdin for `-`.
pub fn read_script(path: &Path) -> Result<Vec<u8>, String> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| format!("failed to read stdin: {e}"))?;
        return Ok(buf);
    }
    fs::read(path).map_err(|e| format!("failed to read {}: {e}", path.display()))
}

/// Load a JSON symbol table.
pub fn load_symbols(path: &Path) -> Result<SymbolTable, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    SymbolTable::from_json(&text).map_err(|e| e.to_string())
}
