mod cli;
mod commands;

use cli::{SizeParams, TypesParams, build_cli};
use env_logger::Env;
use log::LevelFilter;

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("types", m)) => {
            let params = TypesParams::from_matches(m);
            commands::types::run(params.into());
        }
        Some(("size", m)) => {
            let params = SizeParams::from_matches(m);
            commands::size::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_level.as_str()));
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
