use std::io::{self, Write};
use std::path::PathBuf;

use declgen_core::{ProgramGraph, TypedProgram};
use declgen_lib::Error;
use declgen_lib::typegen::typescript::is_default_export;

use super::program_loader::load_program;
use super::{CliError, exit_with};

pub struct ExportsArgs {
    pub program_path: PathBuf,
}

pub fn run(args: ExportsArgs) {
    let listing = load_program(&args.program_path).and_then(|program| list(&program));
    match listing {
        Ok(text) => {
            if let Err(source) = io::stdout().write_all(text.as_bytes()) {
                exit_with(CliError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                });
            }
        }
        Err(err) => exit_with(err),
    }
}

/// One tab-separated line per export: name, namespace, classification.
pub fn list(program: &ProgramGraph) -> Result<String, CliError> {
    let mut out = String::new();
    for export in program.exports() {
        let symbol = program
            .resolve(export)
            .ok_or_else(|| Error::UnresolvedExport(export.to_string()))?;
        let ty = symbol
            .ty()
            .ok_or_else(|| Error::UntypedSymbol(export.to_string()))?;

        let (namespace, kind) = if is_default_export(ty) {
            (symbol.namespace(), "default")
        } else {
            (symbol.name(), "namespace")
        };
        let namespace = if namespace.is_empty() {
            "<global>"
        } else {
            namespace
        };
        out.push_str(&format!("{export}\t{namespace}\t{kind}\n"));
    }
    Ok(out)
}
