//! Fixed-Point Codec — Q-format encode/decode for hardware memory images
//!
//! Bidirectional, bit-exact mapping between real-valued samples and 16-bit
//! two's-complement fixed-point words. The default format is Q2.14 (2 integer
//! bits including sign, 14 fractional bits, scale 2^14 = 16384), the format
//! consumed by the butterfly stage under test. Out-of-range inputs saturate
//! to the word boundaries; they never wrap and never fail.
//!
//! Rounding is half-away-from-zero (`f64::round`). It is applied identically
//! on the sample path and in the LUT generator, so every on-disk word and
//! every test oracle share one deterministic quantizer.
//!
//! ## Example
//!
//! ```rust
//! use fftv_core::fixed_point::{to_hex4, QFormat};
//!
//! let q = QFormat::default(); // Q2.14
//! assert_eq!(q.encode(0.5), 8192);
//! assert_eq!(q.encode(10.0), 32767); // saturated, not wrapped
//! assert_eq!(to_hex4(q.encode(-1.0)), "c000");
//!
//! // Round trip is exact to within one quantization step
//! let x = 0.123456;
//! assert!((q.decode(q.encode(x)) - x).abs() <= q.resolution());
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{FixedPointWord, Sample, VerifyError, VerifyResult};

/// Total bits of a hardware word, sign included.
pub const WORD_BITS: u32 = 16;

/// Signed fixed-point format for a 16-bit hardware word.
///
/// `int_bits` counts the sign bit, so `int_bits + frac_bits == 16`. The
/// default is Q2.14; Q1.15 and friends are expressible by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QFormat {
    /// Integer bits including sign (default: 2)
    pub int_bits: u32,
    /// Fractional bits (default: 14)
    pub frac_bits: u32,
}

impl Default for QFormat {
    fn default() -> Self {
        Self::Q2_14
    }
}

impl QFormat {
    /// Q2.14: the butterfly stage's native sample format.
    pub const Q2_14: Self = Self {
        int_bits: 2,
        frac_bits: 14,
    };

    /// Q1.15: full-scale ±1.0 variant used by some DSP IP.
    pub const Q1_15: Self = Self {
        int_bits: 1,
        frac_bits: 15,
    };

    /// Create a format, validating that it fills a 16-bit word.
    pub fn new(int_bits: u32, frac_bits: u32) -> VerifyResult<Self> {
        if int_bits == 0 {
            return Err(VerifyError::InvalidConfig(
                "Q format needs at least the sign bit".to_string(),
            ));
        }
        if int_bits + frac_bits != WORD_BITS {
            return Err(VerifyError::InvalidConfig(format!(
                "Q{}.{} does not fill a {}-bit word",
                int_bits, frac_bits, WORD_BITS
            )));
        }
        Ok(Self {
            int_bits,
            frac_bits,
        })
    }

    /// Scale factor 2^frac_bits.
    pub fn scale(&self) -> f64 {
        (1u32 << self.frac_bits) as f64
    }

    /// One least-significant-bit step in real-value terms.
    pub fn resolution(&self) -> f64 {
        1.0 / self.scale()
    }

    /// Largest representable real value (e.g. 1.999938… for Q2.14).
    pub fn max_value(&self) -> Sample {
        FixedPointWord::MAX as f64 / self.scale()
    }

    /// Most negative representable real value (e.g. -2.0 for Q2.14).
    pub fn min_value(&self) -> Sample {
        FixedPointWord::MIN as f64 / self.scale()
    }

    /// Encode a real value into a fixed-point word.
    ///
    /// Scales, rounds half-away-from-zero, and saturates to the word range.
    /// Total: out-of-range inputs clip to the nearest boundary.
    pub fn encode(&self, x: Sample) -> FixedPointWord {
        (x * self.scale())
            .round()
            .clamp(FixedPointWord::MIN as f64, FixedPointWord::MAX as f64) as FixedPointWord
    }

    /// Decode a fixed-point word back to a real value.
    pub fn decode(&self, word: FixedPointWord) -> Sample {
        word as f64 / self.scale()
    }
}

/// Format a word as exactly 4 lowercase hex digits of its unsigned 16-bit
/// pattern. This is the literal record format of `.mem` memory images.
pub fn to_hex4(word: FixedPointWord) -> String {
    format!("{:04x}", word as u16)
}

/// Parse a 4-digit hex record back into a word.
pub fn from_hex4(s: &str) -> VerifyResult<FixedPointWord> {
    if s.len() != 4 {
        return Err(VerifyError::InvalidHex(s.to_string()));
    }
    u16::from_str_radix(s, 16)
        .map(|bits| bits as FixedPointWord)
        .map_err(|_| VerifyError::InvalidHex(s.to_string()))
}
