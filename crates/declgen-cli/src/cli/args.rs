//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Program dump (positional).
pub fn program_path_arg() -> Arg {
    Arg::new("program_path")
        .value_name("PROGRAM")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON program dump (use \"-\" for stdin)")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Internal root namespace (--root).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .long("root")
        .value_name("NS")
        .help("Internal root namespace hosting the declarations")
}

/// Module name prefix (--module-prefix).
pub fn module_prefix_arg() -> Arg {
    Arg::new("module_prefix")
        .long("module-prefix")
        .value_name("PREFIX")
        .help("Prefix of declared module names (default: goog)")
}

/// Restrict to entry points (--entry-point, repeatable).
pub fn entry_point_arg() -> Arg {
    Arg::new("entry_point")
        .long("entry-point")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Only emit this export (repeatable)")
}

/// Export the namespace directly (--no-module-alias).
pub fn no_module_alias_arg() -> Arg {
    Arg::new("no_module_alias")
        .long("no-module-alias")
        .action(ArgAction::SetTrue)
        .help("Export the namespace directly instead of through an import alias")
}

/// Inline interfaces as type aliases (--inline-interfaces).
pub fn inline_interfaces_arg() -> Arg {
    Arg::new("inline_interfaces")
        .long("inline-interfaces")
        .action(ArgAction::SetTrue)
        .help("Project interfaces as structural type aliases")
}

/// Debug logging (--debug).
pub fn debug_arg() -> Arg {
    Arg::new("debug")
        .long("debug")
        .action(ArgAction::SetTrue)
        .help("Log projection decisions to stderr (RUST_LOG overrides)")
}
