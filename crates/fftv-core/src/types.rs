//! Core types for butterfly stage verification
//!
//! This module defines the fundamental types shared across the codec, the
//! reference model, the checker, and the file adapters.
//!
//! Hardware words are 16-bit two's-complement integers in a Q fixed-point
//! format (Q2.14 by default). Butterfly outputs are complex pairs of such
//! words, widened to `i32` because the testbench dumps them as plain decimal
//! integers and a sum/difference of two 16-bit words does not fit in 16 bits.

use num_complex::Complex;
use std::io;

/// A real-valued sample (e.g. a captured voltage).
pub type Sample = f64;

/// A 16-bit two's-complement fixed-point word as stored in hardware memory.
pub type FixedPointWord = i16;

/// A complex value whose components are integer hardware words.
pub type ComplexWord = Complex<i32>;

/// Result type for verification operations
pub type VerifyResult<T> = Result<T, VerifyError>;

/// Errors that can occur during verification tool operations
///
/// Tolerance violations are *not* errors: a failing hardware design is the
/// expected, designed outcome of a check run and is reported as data in
/// [`crate::CheckReport`]. Only structural problems with the input dataset or
/// the configuration surface here.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// The results file contained no data rows
    #[error("results file is empty, no butterfly pairs to check")]
    EmptyResults,

    /// A data row could not be parsed
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// The results file header is missing a required column
    #[error("missing required column '{0}' in results header")]
    MissingColumn(String),

    /// Invalid codec or generator parameters
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A hex record does not encode a 16-bit word
    #[error("invalid hex record '{0}'")]
    InvalidHex(String),

    /// File I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One hardware-reported butterfly result, keyed by its pair index.
///
/// Parsed from a single testbench dump row; consumed exactly once by the
/// checker. `y0` is the sum output, `y1` the difference output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButterflyCase {
    /// 0-based butterfly pair index as reported by the testbench
    pub pair: u32,
    /// Hardware output y0 = x0 + w*x1
    pub y0: ComplexWord,
    /// Hardware output y1 = x0 - w*x1
    pub y1: ComplexWord,
}

impl ButterflyCase {
    /// Components in dump order: `(y0_r, y0_i, y1_r, y1_i)`.
    pub fn components(&self) -> [i32; 4] {
        [self.y0.re, self.y0.im, self.y1.re, self.y1.im]
    }
}
