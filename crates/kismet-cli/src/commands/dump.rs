use std::path::PathBuf;

use kismet_disasm::{Disassembler, Limits, StringSink, SymbolTable};

use crate::util::{load_symbols, read_script};

pub struct DumpArgs {
    pub script_path: PathBuf,
    pub symbols: Option<PathBuf>,
    pub max_depth: Option<usize>,
}

pub fn run(args: DumpArgs) {
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

    let mut sink = StringSink::new();
    let result = Disassembler::with_limits(&table, &mut sink, limits).disassemble(&script);

    // Partial output is still useful when the pass dies mid-buffer.
    print!("{}", sink.as_str());

    match result {
        Ok(disassembly) => {
            if disassembly.degraded {
                eprintln!(
                    "warning: unrecognized opcode(s) encountered; output may be unreliable"
                );
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
