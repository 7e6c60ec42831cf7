//! Butterfly Results Reader — testbench dump ingestion
//!
//! Parses the CSV the RTL testbench dumps after running the butterfly stage:
//! a header row naming the columns `pair,y0_r,y0_i,y1_r,y1_i`, then one
//! integer record per checked pair. Columns are matched by name, not
//! position, so a reordered dump still parses. Pair indices are taken
//! literally from each row; they are not required to be contiguous.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fftv_core::results_file::read_results;
//!
//! let cases = read_results("top_fft_pair_results.csv".as_ref()).unwrap();
//! println!("{} pairs dumped", cases.len());
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use num_complex::Complex;

use crate::types::{ButterflyCase, VerifyError, VerifyResult};

const COLUMNS: [&str; 5] = ["pair", "y0_r", "y0_i", "y1_r", "y1_i"];

/// Read all butterfly cases from a testbench results dump.
///
/// Returns the cases in file order. A missing header column yields
/// [`VerifyError::MissingColumn`]; an unparsable field yields
/// [`VerifyError::MalformedRecord`] with its 1-based line number. An empty
/// data section returns an empty vector; rejecting it is the checker's job.
pub fn read_results(path: &Path) -> VerifyResult<Vec<ButterflyCase>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines().enumerate();

    let header = loop {
        match lines.next() {
            Some((_, line)) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => return Ok(Vec::new()),
        }
    };

    let names: Vec<String> = header.split(',').map(|s| s.trim().to_string()).collect();
    // position of each required column in this dump
    let mut index = [0usize; 5];
    for (slot, col) in COLUMNS.iter().enumerate() {
        index[slot] = names
            .iter()
            .position(|n| n == col)
            .ok_or_else(|| VerifyError::MissingColumn(col.to_string()))?;
    }

    let mut cases = Vec::new();
    for (idx, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split(',').map(|s| s.trim()).collect();

        let mut values = [0i64; 5];
        for (slot, col) in COLUMNS.iter().enumerate() {
            let field = fields.get(index[slot]).ok_or_else(|| {
                VerifyError::MalformedRecord {
                    line: line_no,
                    reason: format!("missing field '{}'", col),
                }
            })?;
            values[slot] = field.parse().map_err(|_| VerifyError::MalformedRecord {
                line: line_no,
                reason: format!("invalid integer '{}' in column '{}'", field, col),
            })?;
        }

        let pair = u32::try_from(values[0]).map_err(|_| VerifyError::MalformedRecord {
            line: line_no,
            reason: format!("pair index {} out of range", values[0]),
        })?;

        let component = |slot: usize| {
            i32::try_from(values[slot]).map_err(|_| VerifyError::MalformedRecord {
                line: line_no,
                reason: format!("value {} out of range in column '{}'", values[slot], COLUMNS[slot]),
            })
        };

        cases.push(ButterflyCase {
            pair,
            y0: Complex::new(component(1)?, component(2)?),
            y1: Complex::new(component(3)?, component(4)?),
        });
    }

    tracing::debug!("read {} butterfly cases from {}", cases.len(), path.display());
    Ok(cases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parses_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "results.csv",
            "pair,y0_r,y0_i,y1_r,y1_i\n0,1,0,-1,0\n1,5,0,-1,0\n",
        );

        let cases = read_results(&path).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].pair, 0);
        assert_eq!(cases[0].y0, Complex::new(1, 0));
        assert_eq!(cases[0].y1, Complex::new(-1, 0));
        assert_eq!(cases[1].pair, 1);
        assert_eq!(cases[1].y0.re, 5);
    }

    #[test]
    fn test_columns_matched_by_name() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "reordered.csv",
            "y1_i,y1_r,y0_i,y0_r,pair\n0,-1,0,13,3\n",
        );

        let cases = read_results(&path).unwrap();
        assert_eq!(cases[0].pair, 3);
        assert_eq!(cases[0].y0, Complex::new(13, 0));
        assert_eq!(cases[0].y1, Complex::new(-1, 0));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "extra.csv",
            "pair,cycle,y0_r,y0_i,y1_r,y1_i\n0,812,1,0,-1,0\n",
        );

        let cases = read_results(&path).unwrap();
        assert_eq!(cases[0].y0.re, 1);
    }

    #[test]
    fn test_missing_column_named_in_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "short.csv", "pair,y0_r,y0_i,y1_r\n0,1,0,-1\n");

        let err = read_results(&path).unwrap_err();
        match err {
            VerifyError::MissingColumn(name) => assert_eq!(name, "y1_i"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_integer_reports_line() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "bad.csv",
            "pair,y0_r,y0_i,y1_r,y1_i\n0,1,0,-1,0\n1,one,0,-1,0\n",
        );

        let err = read_results(&path).unwrap_err();
        match err {
            VerifyError::MalformedRecord { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("y0_r"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_pair_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "neg.csv", "pair,y0_r,y0_i,y1_r,y1_i\n-1,1,0,-1,0\n");
        assert!(matches!(
            read_results(&path),
            Err(VerifyError::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn test_header_only_reads_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.csv", "pair,y0_r,y0_i,y1_r,y1_i\n");
        assert!(read_results(&path).unwrap().is_empty());
    }
}
