//! Dispatch logic: extract params from ArgMatches and convert to command args.

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::size::SizeArgs;
use crate::commands::types::TypesArgs;

pub struct TypesParams {
    pub scalars: bool,
    pub references: bool,
    pub json: bool,
    pub color: ColorChoice,
}

impl TypesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let only_scalars = m.get_flag("scalars");
        let only_references = m.get_flag("references");

        Self {
            scalars: !only_references,
            references: !only_scalars,
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<TypesParams> for TypesArgs {
    fn from(p: TypesParams) -> Self {
        Self {
            scalars: p.scalars,
            references: p.references,
            json: p.json,
            // JSON output is never colored.
            color: !p.json && p.color.should_colorize(),
        }
    }
}

pub struct SizeParams {
    pub type_names: Vec<String>,
    pub json: bool,
}

impl SizeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            type_names: m
                .get_many::<String>("type_names")
                .map(|names| names.cloned().collect())
                .unwrap_or_default(),
            json: m.get_flag("json"),
        }
    }
}

impl From<SizeParams> for SizeArgs {
    fn from(p: SizeParams) -> Self {
        Self {
            type_names: p.type_names,
            json: p.json,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(String::as_str) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
