//! Mem File Writer/Reader — Verilog `$readmemh` hex images
//!
//! Writes and reads the plain-text memory-initialization format consumed by
//! the hardware tooling: one record per line, each record exactly 4
//! lowercase hex digits of the word's unsigned 16-bit pattern, no header.
//! Negative words appear as their two's-complement bit pattern.
//!
//! ## Example
//!
//! ```rust
//! use fftv_core::mem_file::{read_mem, write_mem};
//!
//! let words = vec![0i16, 13, -1, -32768];
//! let tmp = std::env::temp_dir().join("fftv_doc_mem_file.mem");
//! write_mem(&tmp, &words).unwrap();
//! assert_eq!(read_mem(&tmp).unwrap(), words);
//! std::fs::remove_file(&tmp).ok();
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::fixed_point::{from_hex4, to_hex4};
use crate::types::{FixedPointWord, VerifyError, VerifyResult};

/// Streaming mem image writer.
pub struct MemWriter {
    writer: BufWriter<File>,
    records_written: usize,
}

impl MemWriter {
    /// Create a mem file for writing, truncating any existing file.
    pub fn create(path: &Path) -> VerifyResult<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            records_written: 0,
        })
    }

    /// Append words, one hex record per line.
    pub fn write(&mut self, words: &[FixedPointWord]) -> VerifyResult<()> {
        for &word in words {
            writeln!(self.writer, "{}", to_hex4(word))?;
        }
        self.records_written += words.len();
        Ok(())
    }

    /// Records written so far.
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Flush and close the file.
    pub fn close(mut self) -> VerifyResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Write a complete mem image in one call.
pub fn write_mem(path: &Path, words: &[FixedPointWord]) -> VerifyResult<()> {
    let mut writer = MemWriter::create(path)?;
    writer.write(words)?;
    writer.close()
}

/// Read a complete mem image back into words.
///
/// A record that is not exactly 4 hex digits yields
/// [`VerifyError::MalformedRecord`] with its 1-based line number.
pub fn read_mem(path: &Path) -> VerifyResult<Vec<FixedPointWord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut words = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }
        let word = from_hex4(record).map_err(|e| VerifyError::MalformedRecord {
            line: idx + 1,
            reason: e.to_string(),
        })?;
        words.push(word);
    }
    Ok(words)
}
