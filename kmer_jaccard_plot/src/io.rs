use std::{
    collections::{hash_map::Entry, BTreeMap, HashMap},
    io::Read,
    path::Path,
};

use anyhow::Context;
use compress_io::compress::CompressIo;
use serde::Deserialize;

/// Written by kmer_summary when no ANI was found for a pair
const MISSING_VALUE: &str = "NA";

/// One row of the summary file
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryRow {
    pub fasta1: String,
    pub fasta2: String,
    pub n: i64,
    pub k: i64,
    pub jaccard_score: f64,
    pub skani_dist: String,
}

impl SummaryRow {
    /// ANI percentage, None if it was not available
    pub fn ani(&self) -> anyhow::Result<Option<f64>> {
        let s = self.skani_dist.as_str();
        if s.is_empty() || s == MISSING_VALUE {
            Ok(None)
        } else {
            s.parse::<f64>()
                .map(Some)
                .with_context(|| format!("Invalid skani_dist value '{}'", s))
        }
    }
}

/// All results for one pair of genomes
///
/// scores - jaccard score by sketch size n and then k
/// ani - first ANI value seen for the pair
#[derive(Debug)]
pub struct PairData {
    fasta1: String,
    fasta2: String,
    scores: BTreeMap<i64, BTreeMap<i64, f64>>,
    ani: Option<f64>,
}

impl PairData {
    fn new(fasta1: String, fasta2: String) -> Self {
        Self {
            fasta1,
            fasta2,
            scores: BTreeMap::new(),
            ani: None,
        }
    }

    pub fn fasta1(&self) -> &str {
        &self.fasta1
    }

    pub fn fasta2(&self) -> &str {
        &self.fasta2
    }

    pub fn scores(&self) -> &BTreeMap<i64, BTreeMap<i64, f64>> {
        &self.scores
    }

    pub fn ani(&self) -> Option<f64> {
        self.ani
    }
}

/// Results grouped by genome pair, pairs kept in the order they were first seen
#[derive(Debug, Default)]
pub struct Summary {
    pairs: Vec<PairData>,
    index: HashMap<(String, String), usize>,
}

impl Summary {
    pub fn pairs(&self) -> &[PairData] {
        &self.pairs
    }

    /// Add a row.  A later score for the same (pair, n, k) replaces an earlier
    /// one, while the ANI for a pair is only taken from the first row that has one.
    pub fn add_row(&mut self, row: SummaryRow) -> anyhow::Result<()> {
        let ani = row.ani()?;
        let SummaryRow {
            fasta1,
            fasta2,
            n,
            k,
            jaccard_score,
            ..
        } = row;

        let ix = match self.index.entry((fasta1, fasta2)) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                let (f1, f2) = e.key().clone();
                trace!("New pair {} {}", f1, f2);
                let l = self.pairs.len();
                self.pairs.push(PairData::new(f1, f2));
                e.insert(l);
                l
            }
        };

        let pd = &mut self.pairs[ix];
        pd.scores.entry(n).or_default().insert(k, jaccard_score);
        if pd.ani.is_none() {
            pd.ani = ani
        }
        Ok(())
    }
}

pub fn read_summary_file(p: &Path) -> anyhow::Result<Summary> {
    debug!("Reading summary data from {}", p.display());
    let rdr = CompressIo::new()
        .path(p)
        .bufreader()
        .with_context(|| format!("Could not open summary file {}", p.display()))?;
    read_summary(rdr).with_context(|| format!("Error reading from {}", p.display()))
}

pub fn read_summary<R: Read>(rdr: R) -> anyhow::Result<Summary> {
    let mut csv_rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);
    let mut summary = Summary::default();
    let mut line = 0;
    for rec in csv_rdr.deserialize() {
        line += 1;
        let row: SummaryRow = rec.with_context(|| format!("Error reading data row {}", line))?;
        summary
            .add_row(row)
            .with_context(|| format!("Error in data row {}", line))?;
    }
    debug!(
        "Finished reading {} rows; found {} pairs",
        line,
        summary.pairs.len()
    );
    Ok(summary)
}
