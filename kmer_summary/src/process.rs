use anyhow::Context;
use compress_io::compress::CompressIo;

use crate::{config::Config, io};

pub fn make_summary(cfg: &Config) -> anyhow::Result<()> {
    let jaccard = io::read_jaccard_files(cfg.jaccard_files());
    let skani = io::read_skani_files(cfg.skani_files());

    let wrt = CompressIo::new()
        .path(cfg.output())
        .bufwriter()
        .with_context(|| format!("Cannot open output file {}", cfg.output().display()))?;

    io::write_summary(wrt, &jaccard, &skani)
        .with_context(|| format!("Error writing summary to {}", cfg.output().display()))?;

    info!(
        "Wrote {} rows to {}",
        jaccard.len(),
        cfg.output().display()
    );
    Ok(())
}
