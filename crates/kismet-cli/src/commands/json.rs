use std::path::PathBuf;

use kismet_disasm::{Disassembler, Limits, NullSink, SymbolTable};

use crate::util::{load_symbols, read_script};

pub struct JsonArgs {
    pub script_path: PathBuf,
    pub symbols: Option<PathBuf>,
    pub max_depth: Option<usize>,
    pub compact: bool,
}

pub fn run(args: JsonArgs) {
    let script = match read_script(&args.script_path) {
        Ok(script) => script,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    let table = match args.symbols {
        Some(ref path) => match load_symbols(path) {
            Ok(table) => table,
            Err(msg) => {
                eprintln!("error: {msg}");
                std::process::exit(1);
            }
        },
        None => SymbolTable::new(),
    };

    let mut limits = Limits::new();
    if let Some(depth) = args.max_depth {
        limits = limits.max_depth(depth);
    }

    let mut sink = NullSink;
    let disassembly =
        match Disassembler::with_limits(&table, &mut sink, limits).disassemble(&script) {
            Ok(disassembly) => disassembly,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        };

    let rendered = if args.compact {
        serde_json::to_string(&disassembly)
    } else {
        serde_json::to_string_pretty(&disassembly)
    };
    match rendered {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("error: failed to serialize disassembly: {e}");
            std::process::exit(1);
        }
    }
}
