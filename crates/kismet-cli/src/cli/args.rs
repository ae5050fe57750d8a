//! Shared argument builders for the CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

pub fn script_path_arg() -> Arg {
    Arg::new("script_path")
        .value_name("SCRIPT")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Raw script bytecode file (use '-' for stdin)")
}

pub fn symbols_arg() -> Arg {
    Arg::new("symbols")
        .short('s')
        .long("symbols")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON symbol table for resolving object and name references")
}

pub fn max_depth_arg() -> Arg {
    Arg::new("max_depth")
        .long("max-depth")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Maximum expression nesting depth (default 256)")
}

pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Emit compact JSON instead of pretty-printed")
}
