use std::{
    collections::{BTreeMap, HashMap},
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use compress_io::compress::CompressIo;

use crate::result_file::*;

const HEADER: [&str; 6] = ["fasta1", "fasta2", "n", "k", "jaccard_score", "skani_dist"];

fn file_name(p: &Path) -> Option<&str> {
    p.file_name().and_then(|s| s.to_str())
}

fn read_value<F>(p: &Path, f: F) -> anyhow::Result<String>
where
    F: FnOnce(&mut dyn BufRead) -> anyhow::Result<String>,
{
    trace!("Opening {} for reading", p.display());
    let mut rdr = CompressIo::new()
        .path(p)
        .bufreader()
        .with_context(|| format!("Could not open {}", p.display()))?;
    f(&mut rdr).with_context(|| format!("Error reading from {}", p.display()))
}

/// Collect jaccard scores.  Files that can not be read or where the name
/// can not be parsed are skipped with a warning.
pub fn read_jaccard_files(files: &[PathBuf]) -> BTreeMap<JaccardKey, String> {
    let mut bt = BTreeMap::new();
    for p in files.iter() {
        let key = match file_name(p).and_then(parse_jaccard_name) {
            Some(k) => k,
            None => {
                warn!("Could not parse jaccard file name {}", p.display());
                continue;
            }
        };
        match read_value(p, |r| read_jaccard_value(r)) {
            Ok(v) => {
                bt.insert(key, v);
            }
            Err(e) => warn!("Skipping jaccard file: {:#}", e),
        }
    }
    debug!("Read {} jaccard scores", bt.len());
    bt
}

/// Collect ANI values from skani reports, skipping files as for jaccard files
pub fn read_skani_files(files: &[PathBuf]) -> HashMap<SkaniKey, String> {
    let mut h = HashMap::new();
    for p in files.iter() {
        let key = match file_name(p).and_then(parse_skani_name) {
            Some(k) => k,
            None => {
                warn!("Could not parse skani file name {}", p.display());
                continue;
            }
        };
        match read_value(p, |r| read_skani_value(r)) {
            Ok(v) => {
                h.insert(key, v);
            }
            Err(e) => warn!("Skipping skani file: {:#}", e),
        }
    }
    debug!("Read {} ANI values", h.len());
    h
}

/// Write one line per jaccard score in key order, adding the ANI for the
/// pair and sketch size if we have one
pub fn write_summary<W: Write>(
    wrt: W,
    jaccard: &BTreeMap<JaccardKey, String>,
    skani: &HashMap<SkaniKey, String>,
) -> anyhow::Result<()> {
    let mut csv_wrt = csv::Writer::from_writer(wrt);
    csv_wrt.write_record(HEADER)?;
    for (key, score) in jaccard.iter() {
        let ani = skani
            .get(&key.skani_key())
            .map(|s| s.as_str())
            .unwrap_or(MISSING_VALUE);
        csv_wrt.write_record([
            key.f1.as_str(),
            key.f2.as_str(),
            key.n.as_str(),
            key.k.as_str(),
            score.as_str(),
            ani,
        ])?;
    }
    csv_wrt.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(f1: &str, f2: &str, n: &str, k: &str) -> JaccardKey {
        JaccardKey {
            f1: f1.to_owned(),
            f2: f2.to_owned(),
            n: n.to_owned(),
            k: k.to_owned(),
        }
    }

    #[test]
    fn summary_sorted_with_ani_lookup() {
        let mut jaccard = BTreeMap::new();
        jaccard.insert(key("b", "c", "1", "21"), "0.2".to_owned());
        jaccard.insert(key("a", "b", "1", "31"), "0.3".to_owned());
        jaccard.insert(key("a", "b", "1", "21"), "0.4".to_owned());
        let mut skani = HashMap::new();
        skani.insert(key("a", "b", "1", "").skani_key(), "97.5".to_owned());

        let mut out = Vec::new();
        write_summary(&mut out, &jaccard, &skani).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "fasta1,fasta2,n,k,jaccard_score,skani_dist\n\
             a,b,1,21,0.4,97.5\n\
             a,b,1,31,0.3,97.5\n\
             b,c,1,21,0.2,NA\n"
        );
    }

    #[test]
    fn header_only_when_empty() {
        let mut out = Vec::new();
        write_summary(&mut out, &BTreeMap::new(), &HashMap::new()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "fasta1,fasta2,n,k,jaccard_score,skani_dist\n"
        );
    }
}
