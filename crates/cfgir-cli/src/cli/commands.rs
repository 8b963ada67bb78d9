//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("cfgir")
        .about("Inspect the IR type lattice")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(types_command())
        .subcommand(size_command())
}

/// List every scalar kind and builtin reference.
pub fn types_command() -> Command {
    Command::new("types")
        .about("List the type lattice")
        .after_help(
            r#"EXAMPLES:
  cfgir types                 # full table
  cfgir types --scalars       # scalar kinds only
  cfgir types --json          # machine-readable rows"#,
        )
        .arg(scalars_arg())
        .arg(references_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Parse type names and print their sizes.
pub fn size_command() -> Command {
    Command::new("size")
        .about("Print the byte size of each type")
        .override_usage("  cfgir size <TYPE>...")
        .after_help(
            r#"EXAMPLES:
  cfgir size int long
  cfgir size 'ptr<string>' 'ptr<class Foo>'
  cfgir size char --json"#,
        )
        .arg(type_names_arg())
        .arg(json_arg())
}
