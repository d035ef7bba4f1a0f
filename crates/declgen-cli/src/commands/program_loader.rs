use std::fs;
use std::io::{self, Read};
use std::path::Path;

use declgen_core::ProgramGraph;
use tracing::debug;

use super::CliError;

/// Load a program dump from a file, or from stdin when the path is `-`.
pub fn load_program(path: &Path) -> Result<ProgramGraph, CliError> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };

    let program = ProgramGraph::from_json(&json)?;
    debug!(
        path = %path.display(),
        symbols = program.len(),
        exports = program.exports().count(),
        "loaded program"
    );
    Ok(program)
}
