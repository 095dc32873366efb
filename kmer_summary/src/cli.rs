use std::path::PathBuf;

use clap::{crate_description, crate_name, crate_version, value_parser, Arg, ArgAction, Command};

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
        Arg::new("skani")
            .short('s')
            .long("skani")
            .action(ArgAction::Append)
            .num_args(1..)
            .value_parser(value_parser!(PathBuf))
            .value_name("SKANI_FILE")
            .help("skani reports named <f1>_<x>_<f2>_N<n>.ani"),
    )
    .arg(
        Arg::new("output")
            .value_parser(value_parser!(PathBuf))
            .value_name("OUTPUT_CSV")
            .required(true)
            .help("Output summary CSV file"),
    )
    .arg(
        Arg::new("jaccard")
            .action(ArgAction::Append)
            .num_args(1..)
            .value_parser(value_parser!(PathBuf))
            .value_name("JACCARD_FILE")
            .help("Jaccard score files named <f1>_<x>_<f2>_N<n>_K<k>.txt"),
    )
}

fn get_paths(m: &clap::ArgMatches, id: &str) -> Vec<PathBuf> {
    m.get_many::<PathBuf>(id)
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

/// Handle command line options.  Set up Config structure
pub fn handle_cli() -> anyhow::Result<Config> {
    // Get matches from command line
    let m = parse_cli(cli_model());

    // Setup logging
    init_log(&m)?;

    debug!("Processing command line options");

    let output = m
        .get_one::<PathBuf>("output")
        .expect("Missing output file")
        .to_owned();
    let jaccard_files = get_paths(&m, "jaccard");
    let skani_files = get_paths(&m, "skani");

    debug!(
        "{} jaccard files and {} skani files",
        jaccard_files.len(),
        skani_files.len()
    );

    Ok(Config::new(output, jaccard_files, skani_files))
}
