//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, emit_command, exports_command};
use crate::commands::emit::EmitArgs;

#[test]
fn emit_defaults() {
    let m = emit_command()
        .try_get_matches_from(["emit", "program.json"])
        .unwrap();
    let params = EmitParams::from_matches(&m);

    assert_eq!(params.program_path, PathBuf::from("program.json"));
    assert_eq!(params.output, None);
    assert_eq!(params.root, None);
    assert!(params.entry_points.is_empty());
    assert!(!params.no_module_alias);
    assert!(!params.inline_interfaces);
    assert!(!params.debug);
}

#[test]
fn emit_all_flags() {
    let m = emit_command()
        .try_get_matches_from([
            "emit",
            "program.json",
            "-o",
            "out.d.ts",
            "--root",
            "my.internal",
            "--module-prefix",
            "pkg",
            "--entry-point",
            "a.X",
            "--entry-point",
            "a.Y",
            "--no-module-alias",
            "--inline-interfaces",
            "--debug",
        ])
        .unwrap();
    let params = EmitParams::from_matches(&m);

    assert_eq!(params.output, Some(PathBuf::from("out.d.ts")));
    assert_eq!(params.root.as_deref(), Some("my.internal"));
    assert_eq!(params.module_prefix.as_deref(), Some("pkg"));
    assert_eq!(params.entry_points, ["a.X", "a.Y"]);
    assert!(params.debug);

    let args: EmitArgs = params.into();
    assert!(!args.module_alias);
    assert!(args.inline_interfaces);
}

#[test]
fn emit_requires_program() {
    let result = emit_command().try_get_matches_from(["emit"]);
    assert!(result.is_err());
}

#[test]
fn check_accepts_debug() {
    let m = check_command()
        .try_get_matches_from(["check", "-", "--debug"])
        .unwrap();
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.program_path, PathBuf::from("-"));
    assert!(params.debug);
}

#[test]
fn exports_rejects_emit_flags() {
    let result = exports_command().try_get_matches_from(["exports", "p.json", "-o", "x"]);
    assert!(result.is_err());

    let m = exports_command()
        .try_get_matches_from(["exports", "p.json"])
        .unwrap();
    assert_eq!(
        ExportsParams::from_matches(&m).program_path,
        PathBuf::from("p.json")
    );
}

#[test]
fn build_cli_requires_subcommand() {
    assert!(build_cli().try_get_matches_from(["declgen"]).is_err());
    let m = build_cli()
        .try_get_matches_from(["declgen", "check", "p.json"])
        .unwrap();
    assert_eq!(m.subcommand_name(), Some("check"));
}
