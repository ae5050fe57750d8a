mod cli;
mod commands;
mod util;

use cli::{DumpParams, JsonParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("json", m)) => {
            let params = JsonParams::from_matches(m);
            commands::json::run(params.into());
        }
        Some(("opcodes", _)) => {
            commands::opcodes::run();
        }
        _ => unreachable!("clap should have caught this"),
    }
}
