//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields
//! - `Into<*Args>` impls bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::check::CheckArgs;
use crate::commands::emit::EmitArgs;
use crate::commands::exports::ExportsArgs;

pub struct EmitParams {
    pub program_path: PathBuf,
    pub output: Option<PathBuf>,
    pub root: Option<String>,
    pub module_prefix: Option<String>,
    pub entry_points: Vec<String>,
    pub no_module_alias: bool,
    pub inline_interfaces: bool,
    pub debug: bool,
}

impl EmitParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: program_path(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            root: m.get_one::<String>("root").cloned(),
            module_prefix: m.get_one::<String>("module_prefix").cloned(),
            entry_points: m
                .get_many::<String>("entry_point")
                .map(|names| names.cloned().collect())
                .unwrap_or_default(),
            no_module_alias: m.get_flag("no_module_alias"),
            inline_interfaces: m.get_flag("inline_interfaces"),
            debug: m.get_flag("debug"),
        }
    }
}

impl From<EmitParams> for EmitArgs {
    fn from(p: EmitParams) -> Self {
        Self {
            program_path: p.program_path,
            output: p.output,
            root: p.root,
            module_prefix: p.module_prefix,
            entry_points: p.entry_points,
            module_alias: !p.no_module_alias,
            inline_interfaces: p.inline_interfaces,
        }
    }
}

pub struct CheckParams {
    pub program_path: PathBuf,
    pub debug: bool,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: program_path(m),
            debug: m.get_flag("debug"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            program_path: p.program_path,
        }
    }
}

pub struct ExportsParams {
    pub program_path: PathBuf,
    pub debug: bool,
}

impl ExportsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: program_path(m),
            debug: m.get_flag("debug"),
        }
    }
}

impl From<ExportsParams> for ExportsArgs {
    fn from(p: ExportsParams) -> Self {
        Self {
            program_path: p.program_path,
        }
    }
}

/// The positional is required, so clap has already rejected a missing one.
fn program_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("program_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}
