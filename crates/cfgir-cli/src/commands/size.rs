use std::fmt::Write as _;

use cfgir_types::{Entry, ParseTypeError, Type};

pub struct SizeArgs {
    pub type_names: Vec<String>,
    pub json: bool,
}

pub fn run(args: SizeArgs) {
    let entries = match measure(&args.type_names) {
        Ok(entries) => entries,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&entries) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", render(&entries));
}

/// Parse every name, stopping at the first one that is not a lattice type.
pub fn measure(type_names: &[String]) -> Result<Vec<Entry>, String> {
    type_names
        .iter()
        .map(|name| {
            let ty = name
                .parse::<Type>()
                .map_err(|e: ParseTypeError| format!("{e} in `{name}`"))?;
            log::debug!("{name:?} parsed as {ty} ({} bytes)", ty.byte_size());
            Ok(Entry::from(&ty))
        })
        .collect()
}

/// One `name  size` line per entry, names left-aligned.
pub fn render(entries: &[Entry]) -> String {
    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for entry in entries {
        writeln!(out, "{:<width$}  {}", entry.name, entry.size).unwrap();
    }
    out
}
