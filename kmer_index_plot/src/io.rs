use std::{io::Read, path::Path};

use anyhow::Context;
use compress_io::compress::CompressIo;
use serde::Deserialize;

/// Columns that must be present in the input file
const REQUIRED_COLUMNS: [&str; 3] = ["Size_MB", "N", "k"];

/// Suffix removed from the k column (values look like "31.log")
const K_SUFFIX: &str = ".log";

/// Input row as it appears in the file, before any type conversion
#[derive(Debug, Clone, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Size_MB")]
    size_mb: String,
    #[serde(rename = "N")]
    n: String,
    k: String,
}

/// Index size (in MB) for sketch size n and k-mer size k
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexSize {
    pub n: i64,
    pub k: i64,
    pub size_mb: f64,
}

impl RawRow {
    /// An empty Size_MB is a missing value (NaN).  Rows with an empty N can not
    /// be assigned to a series and give None.
    fn coerce(&self) -> anyhow::Result<Option<IndexSize>> {
        if self.n.is_empty() {
            return Ok(None);
        }
        let size_mb = if self.size_mb.is_empty() {
            f64::NAN
        } else {
            self.size_mb.parse::<f64>().with_context(|| {
                format!("Invalid numeric value '{}' in column Size_MB", self.size_mb)
            })?
        };
        let n = self
            .n
            .parse::<i64>()
            .with_context(|| format!("Invalid integer value '{}' in column N", self.n))?;
        let k = parse_k(&self.k)?;
        Ok(Some(IndexSize { n, k, size_mb }))
    }
}

/// Remove every ".log" from a k value and parse what is left as an integer
pub fn parse_k(s: &str) -> anyhow::Result<i64> {
    s.replace(K_SUFFIX, "")
        .trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid value '{}' in column k", s))
}

pub fn load_table(p: &Path) -> anyhow::Result<Vec<RawRow>> {
    trace!("Opening {} for reading", p.display());
    let rdr = CompressIo::new()
        .path(p)
        .bufreader()
        .with_context(|| format!("Could not open {}", p.display()))?;
    read_table(rdr).with_context(|| format!("Error reading from {}", p.display()))
}

/// Read all rows from a CSV file with a header line.  Columns other than
/// Size_MB, N and k are ignored.
pub fn read_table<R: Read>(rdr: R) -> anyhow::Result<Vec<RawRow>> {
    let mut csv_rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let headers = csv_rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(anyhow!("No columns to parse from file"));
    }
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(anyhow!("Missing column {}", col));
        }
    }

    let mut v = Vec::new();
    for (ix, rec) in csv_rdr.deserialize().enumerate() {
        let row: RawRow = rec.with_context(|| format!("Error reading data row {}", ix + 1))?;
        v.push(row)
    }
    debug!("Read {} data rows", v.len());
    Ok(v)
}

/// Convert all rows to numeric values.  Fails on the first row that does not convert.
/// Rows without a value for N are skipped.
pub fn coerce_rows(rows: &[RawRow]) -> anyhow::Result<Vec<IndexSize>> {
    let mut v = Vec::with_capacity(rows.len());
    for (ix, r) in rows.iter().enumerate() {
        match r
            .coerce()
            .with_context(|| format!("Error converting data row {}", ix + 1))?
        {
            Some(x) => v.push(x),
            None => debug!("Skipping data row {} with no value for N", ix + 1),
        }
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k_suffix_removed() {
        assert_eq!(parse_k("21.log").unwrap(), 21);
        assert_eq!(parse_k("31.log").unwrap(), 31);
        assert_eq!(parse_k("41").unwrap(), 41);
        assert!(parse_k("21.txt").is_err());
        assert!(parse_k("k21.log").is_err());
    }

    #[test]
    fn rows_read_and_coerced() {
        let data = "Size_MB,N,k,extra\n1.5,1,21.log,x\n2.25,2,31.log,y\n";
        let raw = read_table(data.as_bytes()).unwrap();
        assert_eq!(raw.len(), 2);
        let rows = coerce_rows(&raw).unwrap();
        assert_eq!(
            rows,
            vec![
                IndexSize {
                    n: 1,
                    k: 21,
                    size_mb: 1.5
                },
                IndexSize {
                    n: 2,
                    k: 31,
                    size_mb: 2.25
                },
            ]
        );
    }

    #[test]
    fn column_order_does_not_matter() {
        let data = "k,N,Size_MB\n51.log,4,10\n";
        let rows = coerce_rows(&read_table(data.as_bytes()).unwrap()).unwrap();
        assert_eq!(rows[0].k, 51);
        assert_eq!(rows[0].n, 4);
        assert_eq!(rows[0].size_mb, 10.0);
    }

    #[test]
    fn missing_column_is_load_error() {
        let err = read_table("Size_MB,N\n1,2\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Missing column k"));
    }

    #[test]
    fn empty_file_is_load_error() {
        assert!(read_table("".as_bytes()).is_err());
    }

    #[test]
    fn non_numeric_values_fail_coercion() {
        let raw = read_table("Size_MB,N,k\nbig,1,21.log\n".as_bytes()).unwrap();
        let err = coerce_rows(&raw).unwrap_err();
        assert!(format!("{:#}", err).contains("Size_MB"));

        let raw = read_table("Size_MB,N,k\n1.0,one,21.log\n".as_bytes()).unwrap();
        assert!(coerce_rows(&raw).is_err());
    }

    #[test]
    fn empty_cells_are_missing_values() {
        let raw = read_table("Size_MB,N,k
,1,21.log
2.0,,31.log
3.0,1,31.log
".as_bytes()).unwrap();
        let rows = coerce_rows(&raw).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].size_mb.is_nan());
        assert_eq!((rows[0].n, rows[0].k), (1, 21));
        assert_eq!(rows[1].size_mb, 3.0);
    }
}
