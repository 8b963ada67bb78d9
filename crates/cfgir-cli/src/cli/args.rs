//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use clap::{Arg, ArgAction};

/// Type names to measure (positional, one or more).
pub fn type_names_arg() -> Arg {
    Arg::new("type_names")
        .value_name("TYPE")
        .num_args(1..)
        .required(true)
        .help("Type names, e.g. int or 'ptr<class Foo>'")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print rows as JSON")
}

/// Only the scalar kinds (--scalars).
pub fn scalars_arg() -> Arg {
    Arg::new("scalars")
        .long("scalars")
        .action(ArgAction::SetTrue)
        .conflicts_with("references")
        .help("Show only scalar kinds")
}

/// Only the builtin references (--references).
pub fn references_arg() -> Arg {
    Arg::new("references")
        .long("references")
        .action(ArgAction::SetTrue)
        .help("Show only builtin references")
}

/// Log verbosity (-v, repeatable).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
}
