//! Tests for CLI argument parsing and param extraction.

use std::path::PathBuf;

use super::commands::build_cli;
use super::dispatch::{DumpParams, JsonParams};

#[test]
fn dump_parses_paths_and_limits() {
    let matches = build_cli()
        .try_get_matches_from([
            "kismet",
            "dump",
            "func.bin",
            "--symbols",
            "syms.json",
            "--max-depth",
            "64",
        ])
        .unwrap();
    let (_, m) = matches.subcommand().unwrap();
    let params = DumpParams::from_matches(m);

    assert_eq!(params.script_path, PathBuf::from("func.bin"));
    assert_eq!(params.symbols, Some(PathBuf::from("syms.json")));
    assert_eq!(params.max_depth, Some(64));
}

#[test]
fn dump_defaults() {
    let matches = build_cli()
        .try_get_matches_from(["kismet", "dump", "-"])
        .unwrap();
    let (_, m) = matches.subcommand().unwrap();
    let params = DumpParams::from_matches(m);

    assert_eq!(params.script_path, PathBuf::from("-"));
    assert_eq!(params.symbols, None);
    assert_eq!(params.max_depth, None);
}

#[test]
fn json_compact_flag() {
    let matches = build_cli()
        .try_get_matches_from(["kismet", "json", "func.bin", "--compact"])
        .unwrap();
    let (_, m) = matches.subcommand().unwrap();
    let params = JsonParams::from_matches(m);
    assert!(params.compact);

    let matches = build_cli()
        .try_get_matches_from(["kismet", "json", "func.bin"])
        .unwrap();
    let (_, m) = matches.subcommand().unwrap();
    let params = JsonParams::from_matches(m);
    assert!(!params.compact);
}

#[test]
fn script_path_is_required() {
    assert!(build_cli().try_get_matches_from(["kismet", "dump"]).is_err());
}

#[test]
fn opcodes_takes_no_args() {
    assert!(
        build_cli()
            .try_get_matches_from(["kismet", "opcodes"])
            .is_ok()
    );
}
