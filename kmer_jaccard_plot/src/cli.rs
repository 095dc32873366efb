use std::path::PathBuf;

use clap::{crate_description, crate_name, crate_version, value_parser, Arg, Command};

use utils::{add_log_args, init_log, parse_cli};

use crate::config::*;

/// Set up definition of command options for clap
fn cli_model() -> Command {
    add_log_args(
        Command::new(crate_name!())
            .about(crate_description!())
            .version(crate_version!()),
    )
    .arg(
        Arg::new("output_dir")
            .short('d')
            .long("output-dir")
            .value_parser(value_parser!(PathBuf))
            .value_name("PATH")
            .help(format!(
                "Set output directory for plots [default: {}]",
                DEFAULT_OUTPUT_DIR
            )),
    )
    .arg(
        Arg::new("summary")
            .value_parser(value_parser!(PathBuf))
            .value_name("SUMMARY_CSV")
            .required(true)
            .help("Summary CSV with fasta1, fasta2, n, k, jaccard_score and skani_dist columns"),
    )
}

/// Handle command line options.  Set up Config structure
pub fn handle_cli() -> anyhow::Result<Config> {
    // Get matches from command line
    let m = parse_cli(cli_model());

    // Setup logging
    init_log(&m)?;

    debug!("Processing command line options");

    let mut cfg = Config::new(
        m.get_one::<PathBuf>("summary")
            .expect("Missing summary file")
            .to_owned(),
    );

    if let Some(p) = m.get_one::<PathBuf>("output_dir") {
        cfg.set_output_dir(p.to_owned())
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_is_consistent() {
        cli_model().debug_assert();
    }

    #[test]
    fn summary_required() {
        assert!(cli_model()
            .try_get_matches_from(["kmer_jaccard_plot"])
            .is_err());
        let m = cli_model()
            .try_get_matches_from(["kmer_jaccard_plot", "-d", "plots", "summary.csv"])
            .unwrap();
        assert_eq!(
            m.get_one::<PathBuf>("output_dir").unwrap(),
            &PathBuf::from("plots")
        );
    }
}
