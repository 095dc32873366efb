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
        Arg::new("input")
            .value_parser(value_parser!(PathBuf))
            .value_name("INPUT_CSV")
            .required(true)
            .help("Input CSV file with Size_MB, N and k columns"),
    )
    .arg(
        Arg::new("output")
            .value_parser(value_parser!(PathBuf))
            .value_name("OUTPUT_IMAGE")
            .required(true)
            .help("Output image file (png, jpg or bmp)"),
    )
}

/// Handle command line options.  Set up Config structure
pub fn handle_cli() -> anyhow::Result<Config> {
    // Get matches from command line
    let m = parse_cli(cli_model());

    // Setup logging
    init_log(&m)?;

    debug!("Processing command line options");

    let input = m
        .get_one::<PathBuf>("input")
        .expect("Missing input file")
        .to_owned();

    let output = m
        .get_one::<PathBuf>("output")
        .expect("Missing output file")
        .to_owned();

    Ok(Config::new(input, output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_is_consistent() {
        cli_model().debug_assert();
    }

    #[test]
    fn both_paths_required() {
        assert!(cli_model()
            .try_get_matches_from(["kmer_index_plot", "in.csv"])
            .is_err());
        let m = cli_model()
            .try_get_matches_from(["kmer_index_plot", "in.csv", "out.png"])
            .unwrap();
        assert_eq!(
            m.get_one::<PathBuf>("output").unwrap(),
            &PathBuf::from("out.png")
        );
    }
}
