use cfgir_types::{Config, dump, lattice_entries};

pub struct TypesArgs {
    pub scalars: bool,
    pub references: bool,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: TypesArgs) {
    let config = Config::new()
        .scalars(args.scalars)
        .references(args.references)
        .colored(args.color);

    if args.json {
        let entries = lattice_entries(&config);
        log::debug!("listing {} lattice entries as JSON", entries.len());
        match serde_json::to_string_pretty(&entries) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", dump(&config));
}
