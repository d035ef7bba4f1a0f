//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("declgen")
        .about("Ambient TypeScript declarations from a typed program dump")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(emit_command())
        .subcommand(check_command())
        .subcommand(exports_command())
}

/// Generate declarations.
pub fn emit_command() -> Command {
    Command::new("emit")
        .about("Generate a .d.ts document from a program dump")
        .after_help(
            r#"EXAMPLES:
  declgen emit program.json                      # print to stdout
  declgen emit program.json -o out.d.ts          # write to file
  declgen emit program.json --entry-point app.Main
  declgen emit - --root my.internal < program.json"#,
        )
        .arg(program_path_arg())
        .arg(output_file_arg())
        .arg(root_arg())
        .arg(module_prefix_arg())
        .arg(entry_point_arg())
        .arg(no_module_alias_arg())
        .arg(inline_interfaces_arg())
        .arg(debug_arg())
}

/// Validate a program dump.
///
/// Runs the whole projection and discards the document.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate that a program dump projects cleanly")
        .after_help(
            r#"EXAMPLES:
  declgen check program.json"#,
        )
        .arg(program_path_arg())
        .arg(debug_arg())
}

/// List exports with their namespace and classification.
pub fn exports_command() -> Command {
    Command::new("exports")
        .about("List exported identifiers in emission order")
        .after_help(
            r#"EXAMPLES:
  declgen exports program.json"#,
        )
        .arg(program_path_arg())
        .arg(debug_arg())
}
