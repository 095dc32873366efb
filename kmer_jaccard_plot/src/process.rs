use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use utils::plot::KmerChart;

use crate::{
    config::Config,
    io::{self, PairData},
};

/// 7x5 inches at 150 dpi
const CHART_SIZE: (u32, u32) = (1050, 750);

pub fn plot_path(dir: &Path, pd: &PairData) -> PathBuf {
    dir.join(format!("jaccard_{}_{}.png", pd.fasta1(), pd.fasta2()))
}

/// Jaccard score against k, one line per sketch size n, with the ANI
/// (scaled to 0..1) as a horizontal reference line if we have it
pub fn pair_chart(pd: &PairData) -> KmerChart {
    let mut chart = KmerChart::new(
        format!("Jaccard vs K for {}_{}", pd.fasta1(), pd.fasta2()),
        "K Values",
        "Jaccard Score",
        CHART_SIZE,
    );
    for (n, ks) in pd.scores().iter() {
        let points = ks.iter().map(|(k, j)| (*k as f64, *j)).collect();
        chart.add_series(format!("N={}", n), points)
    }
    if let Some(ani) = pd.ani() {
        chart.set_reference(format!("ANI = {:?}", ani), ani / 100.0)
    }
    chart
}

pub fn plot_pairs(cfg: &Config) -> anyhow::Result<()> {
    let summary = io::read_summary_file(cfg.input())?;

    let dir = cfg.output_dir();
    fs::create_dir_all(dir)
        .with_context(|| format!("Error creating output directory {}", dir.display()))?;

    for pd in summary.pairs() {
        let opath = plot_path(dir, pd);
        debug!(
            "Plotting {} series for {} {}",
            pd.scores().len(),
            pd.fasta1(),
            pd.fasta2()
        );
        pair_chart(pd)
            .render(&opath)
            .with_context(|| format!("Error writing plot to {}", opath.display()))?;
        println!("[+] Created plot: {}", opath.display());
    }
    Ok(())
}
