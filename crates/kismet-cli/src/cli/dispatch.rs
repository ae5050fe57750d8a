//! Dispatch logic: extract params from ArgMatches and convert to command
//! args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::dump::DumpArgs;
use crate::commands::json::JsonArgs;

pub struct DumpParams {
    pub script_path: PathBuf,
    pub symbols: Option<PathBuf>,
    pub max_depth: Option<usize>,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            script_path: m
                .get_one::<PathBuf>("script_path")
                .expect("script_path is required")
                .clone(),
            symbols: m.get_one::<PathBuf>("symbols").cloned(),
            max_depth: m.get_one::<usize>("max_depth").copied(),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            script_path: p.script_path,
            symbols: p.symbols,
            max_depth: p.max_depth,
        }
    }
}

pub struct JsonParams {
    pub script_path: PathBuf,
    pub symbols: Option<PathBuf>,
    pub max_depth: Option<usize>,
    pub compact: bool,
}

impl JsonParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            script_path: m
                .get_one::<PathBuf>("script_path")
                .expect("script_path is required")
                .clone(),
            symbols: m.get_one::<PathBuf>("symbols").cloned(),
            max_depth: m.get_one::<usize>("max_depth").copied(),
            compact: m.get_flag("compact"),
        }
    }
}

impl From<JsonParams> for JsonArgs {
    fn from(p: JsonParams) -> Self {
        Self {
            script_path: p.script_path,
            symbols: p.symbols,
            max_depth: p.max_depth,
            compact: p.compact,
        }
    }
}
