use std::path::PathBuf;

use clap::{crate_description, crate_name, crate_version, value_parser, Arg, Command};

use utils::{add_log_args, init_log, parse_cli};

use crate::config::Config;

/// Set up definition of command options for clap
fn cli_model() -> Command {
    add_log_args(
        Command::new(crate_name!())
            .about(crate_description!())
            .version(crate_version!()),
    )
    .arg(
        Arg::new("output")
            .short('o')
            .long("output")
            .value_parser(value_parser!(PathBuf))
            .value_name("PATH")
            .help("Set output file [default: <stdout>]"),
    )
    .arg(
        Arg::new("kmers1")
            .value_parser(value_parser!(PathBuf))
            .value_name("KMERS1")
            .required(true)
            .help("First k-mer file (whitespace separated k-mers)"),
    )
    .arg(
        Arg::new("kmers2")
            .value_parser(value_parser!(PathBuf))
            .value_name("KMERS2")
            .required(true)
            .help("Second k-mer file"),
    )
}

/// Handle command line options.  Set up Config structure
pub fn handle_cli() -> anyhow::Result<Config> {
    // Get matches from command line
    let m = parse_cli(cli_model());

    // Setup logging
    init_log(&m)?;

    debug!("Processing command line options");

    let get_path = |id: &str| {
        m.get_one::<PathBuf>(id)
            .expect("Missing k-mer file")
            .to_owned()
    };
    let kmer_files = [get_path("kmers1"), get_path("kmers2")];
    let output = m.get_one::<PathBuf>("output").map(|p| p.to_owned());

    Ok(Config::new(kmer_files, output))
}
