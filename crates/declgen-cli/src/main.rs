mod cli;
mod commands;
mod logging;

use cli::{CheckParams, EmitParams, ExportsParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("emit", m)) => {
            let params = EmitParams::from_matches(m);
            logging::init(params.debug);
            commands::emit::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            logging::init(params.debug);
            commands::check::run(params.into());
        }
        Some(("exports", m)) => {
            let params = ExportsParams::from_matches(m);
            logging::init(params.debug);
            commands::exports::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
