use std::{
    collections::HashSet,
    io::{BufRead, Write},
    path::Path,
};

use anyhow::Context;
use compress_io::compress::CompressIo;

use crate::config::Config;

/// Collect the set of whitespace separated k-mers from a reader
pub fn read_kmer_set<R: BufRead>(rdr: R) -> anyhow::Result<HashSet<String>> {
    let mut set = HashSet::new();
    for (ix, line) in rdr.lines().enumerate() {
        let line = line.with_context(|| format!("Error reading line {}", ix + 1))?;
        for kmer in line.split_whitespace() {
            if !set.contains(kmer) {
                set.insert(kmer.to_owned());
            }
        }
    }
    Ok(set)
}

pub fn read_kmer_file(p: &Path) -> anyhow::Result<HashSet<String>> {
    debug!("Reading k-mers from {}", p.display());
    let rdr = CompressIo::new()
        .path(p)
        .bufreader()
        .with_context(|| format!("Could not open k-mer file {}", p.display()))?;
    let set = read_kmer_set(rdr).with_context(|| format!("Error reading from {}", p.display()))?;
    debug!("{} distinct k-mers in {}", set.len(), p.display());
    Ok(set)
}

/// |A ∩ B| / |A ∪ B|, or 0 if both sets are empty
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|k| large.contains(*k)).count();
    let union = a.len() + b.len() - intersection;
    if union > 0 {
        intersection as f64 / union as f64
    } else {
        0.0
    }
}

/// Format with 6 significant digits, dropping trailing zeros.  Scientific
/// notation is used for exponents below -4 or above 5 (as with printf's %g).
pub fn format_score(x: f64) -> String {
    if x == 0.0 || !x.is_finite() {
        return format!("{}", x);
    }
    let sci = format!("{:.5e}", x);
    let (mant, exp) = sci.split_once('e').unwrap_or((&sci, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let trim = |s: &str| -> String {
        if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.').to_owned()
        } else {
            s.to_owned()
        }
    };
    if (-4..6).contains(&exp) {
        trim(&format!("{:.*}", (5 - exp) as usize, x))
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim(mant), sign, exp.abs())
    }
}

pub fn process_pair(cfg: &Config) -> anyhow::Result<()> {
    let [p1, p2] = cfg.kmer_files();
    let a = read_kmer_file(p1)?;
    let b = read_kmer_file(p2)?;
    let j = jaccard(&a, &b);
    info!("Jaccard index {} - {}: {}", p1.display(), p2.display(), j);

    let mut wrt = CompressIo::new()
        .opt_path(cfg.output_file())
        .bufwriter()
        .with_context(|| "Failed to open output file")?;
    writeln!(wrt, "{}", format_score(j)).with_context(|| "Error writing output")?;
    wrt.flush().with_context(|| "Error writing output")
}
