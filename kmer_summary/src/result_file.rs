//! Experiment result files: the key fields are encoded in the file names
//! (`<f1>_<x>_<f2>_N<n>_K<k>.txt` for jaccard scores,
//! `<f1>_<x>_<f2>_N<n>.ani` for skani reports) and the values in the contents.

use std::io::BufRead;

use anyhow::Context;
use utils::get_next_line;

/// Written in place of a value that could not be found
pub const MISSING_VALUE: &str = "NA";

/// Jaccard results are keyed on genome pair, sketch size and k.  The derived
/// ordering sorts on the fields in that order (lexically, as strings).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JaccardKey {
    pub f1: String,
    pub f2: String,
    pub n: String,
    pub k: String,
}

/// skani results do not depend on k
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkaniKey {
    pub f1: String,
    pub f2: String,
    pub n: String,
}

impl JaccardKey {
    pub fn skani_key(&self) -> SkaniKey {
        SkaniKey {
            f1: self.f1.clone(),
            f2: self.f2.clone(),
            n: self.n.clone(),
        }
    }
}

/// Cut off everything from the last occurrence of ext
fn strip_ext<'a>(name: &'a str, ext: &str) -> &'a str {
    name.rfind(ext).map(|i| &name[..i]).unwrap_or(name)
}

/// "N12" -> "12".  Fields without the tag (or with nothing after it) give an empty string.
fn strip_tag(field: &str, tag: char) -> String {
    match field.strip_prefix(tag) {
        Some(s) if !s.is_empty() => s.to_owned(),
        _ => String::new(),
    }
}

pub fn parse_jaccard_name(name: &str) -> Option<JaccardKey> {
    let parts: Vec<_> = strip_ext(name, ".txt").split('_').collect();
    if parts.len() < 5 {
        None
    } else {
        Some(JaccardKey {
            f1: parts[0].to_owned(),
            f2: parts[2].to_owned(),
            n: strip_tag(parts[3], 'N'),
            k: strip_tag(parts[4], 'K'),
        })
    }
}

pub fn parse_skani_name(name: &str) -> Option<SkaniKey> {
    let parts: Vec<_> = strip_ext(name, ".ani").split('_').collect();
    if parts.len() < 4 {
        None
    } else {
        Some(SkaniKey {
            f1: parts[0].to_owned(),
            f2: parts[2].to_owned(),
            n: strip_tag(parts[3], 'N'),
        })
    }
}

/// The jaccard score is the first line of the file
pub fn read_jaccard_value<R: BufRead + ?Sized>(rdr: &mut R) -> anyhow::Result<String> {
    let mut buf = String::new();
    if rdr.read_line(&mut buf)? == 0 {
        Ok(MISSING_VALUE.to_owned())
    } else {
        Ok(buf.trim_end_matches(&['\n', '\r'][..]).to_owned())
    }
}

/// The ANI is the third column of the first data line of a skani report.
/// Empty lines and the header line (starting with Ref_file) are skipped.
/// Columns are tab separated, although space separated input is also accepted.
pub fn read_skani_value<R: BufRead + ?Sized>(rdr: &mut R) -> anyhow::Result<String> {
    let mut buf = String::new();
    let mut line = 0;
    while let Some(fields) = get_next_line(rdr, &mut buf)
        .with_context(|| format!("Error after reading {} lines", line))?
    {
        line += 1;
        if fields[0].is_empty() || fields[0].starts_with("Ref_file") {
            continue;
        }
        let fields: Vec<_> = if fields.len() < 3 {
            fields.iter().flat_map(|&f| f.split(' ')).collect()
        } else {
            fields
        };
        // Only the first data line is looked at
        return Ok(fields
            .get(2)
            .map(|s| s.to_string())
            .unwrap_or_else(|| MISSING_VALUE.to_owned()));
    }
    Ok(MISSING_VALUE.to_owned())
}
