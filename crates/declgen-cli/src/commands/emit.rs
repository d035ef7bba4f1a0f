use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use declgen_lib::typegen::typescript::{self, Config, InterfaceProjection, ModuleShim, PolicyTable};

use super::program_loader::load_program;
use super::{CliError, exit_with};

pub struct EmitArgs {
    pub program_path: PathBuf,
    pub output: Option<PathBuf>,
    pub root: Option<String>,
    pub module_prefix: Option<String>,
    pub entry_points: Vec<String>,
    pub module_alias: bool,
    pub inline_interfaces: bool,
}

pub fn run(args: EmitArgs) {
    if let Err(err) = execute(&args) {
        exit_with(err);
    }
}

pub fn execute(args: &EmitArgs) -> Result<(), CliError> {
    let program = load_program(&args.program_path)?;
    let output = typescript::emit_with_config(&program, program.exports(), config(args))?;

    match &args.output {
        Some(path) => write_file(path, &output),
        None => io::stdout()
            .write_all(output.as_bytes())
            .map_err(|source| CliError::Write {
                path: PathBuf::from("<stdout>"),
                source,
            }),
    }
}

pub fn config(args: &EmitArgs) -> Config {
    let mut config = Config::new();
    if let Some(root) = &args.root {
        config = config.internal_root(root.as_str());
    }
    if let Some(prefix) = &args.module_prefix {
        config = config.module_prefix(prefix.as_str());
    }
    if !args.entry_points.is_empty() {
        config = config.entry_points(args.entry_points.iter().cloned());
    }

    let mut policy = PolicyTable::new();
    if !args.module_alias {
        policy = policy.module_shim(ModuleShim::DirectExport);
    }
    if args.inline_interfaces {
        policy = policy
            .interface(true, InterfaceProjection::Inline)
            .interface(false, InterfaceProjection::Inline);
    }
    config.policy(policy)
}

fn write_file(path: &Path, output: &str) -> Result<(), CliError> {
    fs::write(path, output).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
