use std::collections::BTreeMap;

use anyhow::Context;
use utils::plot::KmerChart;

use crate::{
    config::Config,
    io::{self, IndexSize},
};

/// Output image size in pixels
const CHART_SIZE: (u32, u32) = (1000, 600);

/// Partition rows on N.  Each partition holds (k, size) pairs sorted on k.
pub fn group_by_n(rows: &[IndexSize]) -> BTreeMap<i64, Vec<(i64, f64)>> {
    let mut bt: BTreeMap<i64, Vec<(i64, f64)>> = BTreeMap::new();
    for r in rows.iter() {
        bt.entry(r.n).or_default().push((r.k, r.size_mb))
    }
    for v in bt.values_mut() {
        v.sort_by_key(|(k, _)| *k)
    }
    bt
}

/// One series per value of N, in ascending order of N
pub fn index_chart(groups: &BTreeMap<i64, Vec<(i64, f64)>>) -> KmerChart {
    let mut chart = KmerChart::new(
        "Index Size vs k-mer Size",
        "k-mer size (k)",
        "Index size (MB)",
        CHART_SIZE,
    );
    for (n, v) in groups.iter() {
        let points = v.iter().map(|(k, s)| (*k as f64, *s)).collect();
        chart.add_series(format!("N = {}", n), points)
    }
    chart
}

pub fn plot_index_sizes(cfg: &Config) -> anyhow::Result<()> {
    debug!("Loading data from {}", cfg.input().display());
    let raw = io::load_table(cfg.input()).map_err(|e| anyhow!("Error loading file: {:#}", e))?;

    let rows = io::coerce_rows(&raw)?;
    let groups = group_by_n(&rows);
    debug!("Found {} distinct values of N", groups.len());

    index_chart(&groups)
        .render(cfg.output())
        .with_context(|| format!("Error writing plot to {}", cfg.output().display()))?;

    println!("Plot saved as {}", cfg.output().display());
    Ok(())
}
