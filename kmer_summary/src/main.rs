mod cli;
mod config;
mod io;
mod process;
mod result_file;

#[macro_use]
extern crate log;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let cfg = cli::handle_cli().with_context(|| "Error processing command line arguments")?;
    process::make_summary(&cfg)
}
