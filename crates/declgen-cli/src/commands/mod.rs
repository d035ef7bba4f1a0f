pub mod check;
pub mod emit;
pub mod exports;
pub mod program_loader;


use std::path::PathBuf;

/// Failures surfaced by the command runners.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Model(#[from] declgen_core::ModelError),

    #[error(transparent)]
    Emit(#[from] declgen_lib::Error),
}

/// Report a failed command and exit.
pub fn exit_with(err: CliError) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
