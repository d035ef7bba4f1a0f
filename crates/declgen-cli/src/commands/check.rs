use std::path::PathBuf;

use declgen_lib::typegen::typescript;

use super::program_loader::load_program;
use super::{CliError, exit_with};

pub struct CheckArgs {
    pub program_path: PathBuf,
}

pub fn run(args: CheckArgs) {
    if let Err(err) = execute(&args) {
        exit_with(err);
    }

    // Silent on success (like cargo check)
}

pub fn execute(args: &CheckArgs) -> Result<(), CliError> {
    let program = load_program(&args.program_path)?;
    typescript::emit(&program, program.exports())?;
    Ok(())
}
