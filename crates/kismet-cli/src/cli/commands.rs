//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("kismet")
        .about("Disassembler for Blueprint script bytecode")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(dump_command())
        .subcommand(json_command())
        .subcommand(opcodes_command())
}

/// Disassemble a script buffer to human-readable text.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Disassemble a raw script buffer to text")
        .after_help(
            r#"EXAMPLES:
  kismet dump func.bin                      # unresolved references as raw tokens
  kismet dump func.bin -s symbols.json      # resolve names through a symbol table
  kismet dump - < func.bin                  # read the script from stdin"#,
        )
        .arg(script_path_arg())
        .arg(symbols_arg())
        .arg(max_depth_arg())
}

/// Disassemble to a structured instruction tree.
pub fn json_command() -> Command {
    Command::new("json")
        .about("Disassemble to a JSON instruction tree")
        .after_help(
            r#"EXAMPLES:
  kismet json func.bin | jq '.exprs[].kind'
  kismet json func.bin --compact"#,
        )
        .arg(script_path_arg())
        .arg(symbols_arg())
        .arg(max_depth_arg())
        .arg(compact_arg())
}

/// List the opcode table.
pub fn opcodes_command() -> Command {
    Command::new("opcodes").about("List the known opcode bytes and their names")
}
