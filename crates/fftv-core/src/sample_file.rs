//! Oscilloscope Sample Reader — WaveForms CSV ingestion
//!
//! Reads voltage samples from a Digilent WaveForms oscilloscope export:
//! a block of metadata lines, a column-title row, then one comma-separated
//! record per sample with the voltage in the second column.
//!
//! The output length is a hard guarantee: captures shorter than `n_samples`
//! are zero-padded, longer ones truncated, so the downstream `.mem` image
//! always matches the hardware's sample memory depth.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fftv_core::sample_file::{read_samples, SampleFileConfig};
//!
//! let samples = read_samples("capture.csv".as_ref(), &SampleFileConfig::default()).unwrap();
//! assert_eq!(samples.len(), 8192);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::types::{Sample, VerifyError, VerifyResult};

/// Configuration for the sample file reader.
#[derive(Debug, Clone)]
pub struct SampleFileConfig {
    /// Metadata lines before the column-title row (default: 9, WaveForms)
    pub header_lines: usize,
    /// 0-based index of the voltage column (default: 1)
    pub column: usize,
    /// Fixed output length, padded or truncated to (default: 8192)
    pub n_samples: usize,
}

impl Default for SampleFileConfig {
    fn default() -> Self {
        Self {
            header_lines: 9,
            column: 1,
            n_samples: 8192,
        }
    }
}

/// Read voltage samples from a WaveForms CSV export.
///
/// Skips the metadata block and the column-title row, then parses the
/// configured column of every record. Returns exactly `n_samples` values,
/// zero-padded or truncated as needed. A record whose voltage field is
/// missing or unparsable yields [`VerifyError::MalformedRecord`] with its
/// 1-based line number.
pub fn read_samples(path: &Path, config: &SampleFileConfig) -> VerifyResult<Vec<Sample>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut samples = Vec::new();
    // metadata block plus the column-title row
    let skip = config.header_lines + 1;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if idx < skip || line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;

        let field = line.split(',').nth(config.column).ok_or_else(|| {
            VerifyError::MalformedRecord {
                line: line_no,
                reason: format!("missing column {}", config.column + 1),
            }
        })?;

        let voltage: Sample =
            field
                .trim()
                .parse()
                .map_err(|_| VerifyError::MalformedRecord {
                    line: line_no,
                    reason: format!("invalid voltage '{}'", field.trim()),
                })?;

        samples.push(voltage);
    }

    if samples.len() > config.n_samples {
        tracing::debug!(
            "truncating {} samples to {}",
            samples.len(),
            config.n_samples
        );
        samples.truncate(config.n_samples);
    } else if samples.len() < config.n_samples {
        tracing::warn!(
            "only {} samples captured, zero-padding to {}",
            samples.len(),
            config.n_samples
        );
        samples.resize(config.n_samples, 0.0);
    }

    Ok(samples)
}
