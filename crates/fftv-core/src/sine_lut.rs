//! Sine LUT Generator — twiddle ROM images
//!
//! Evaluates one period segment of `sin(2π·k/n)` and encodes each value
//! through the shared fixed-point codec, producing the word sequence for the
//! hardware's twiddle ROM. The defaults store the first quarter period of an
//! 8192-point FFT (2048 entries); period length, entry count, and fixed-point
//! scale are all free parameters of the generator.
//!
//! ## Example
//!
//! ```rust
//! use fftv_core::fixed_point::QFormat;
//! use fftv_core::sine_lut::LutConfig;
//!
//! let config = LutConfig { n: 8, lut_size: 8 };
//! let lut = config.generate(&QFormat::default()).unwrap();
//! assert_eq!(lut[2], 16384); // sin(π/2) at full scale
//! assert_eq!(lut[6], -16384);
//! ```

use std::f64::consts::PI;

use crate::fixed_point::QFormat;
use crate::types::{FixedPointWord, VerifyError, VerifyResult};

/// Configuration for the sine LUT generator.
#[derive(Debug, Clone, Copy)]
pub struct LutConfig {
    /// Full sine period length in samples (default: 8192)
    pub n: usize,
    /// Number of LUT entries to generate (default: 2048)
    pub lut_size: usize,
}

impl Default for LutConfig {
    fn default() -> Self {
        Self {
            n: 8192,
            lut_size: 2048,
        }
    }
}

impl LutConfig {
    /// Generate the LUT words `encode(sin(2π·k/n))` for `k in 0..lut_size`.
    ///
    /// Uses the same rounding and saturation as the sample path, so the ROM
    /// image and the sample memory share one quantizer.
    pub fn generate(&self, format: &QFormat) -> VerifyResult<Vec<FixedPointWord>> {
        if self.n == 0 || self.lut_size == 0 {
            return Err(VerifyError::InvalidConfig(
                "LUT period and size must be nonzero".to_string(),
            ));
        }

        let lut = (0..self.lut_size)
            .map(|k| {
                let angle = 2.0 * PI * k as f64 / self.n as f64;
                format.encode(angle.sin())
            })
            .collect();
        Ok(lut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lut_first_entries() {
        let lut = LutConfig::default().generate(&QFormat::default()).unwrap();
        assert_eq!(lut.len(), 2048);
        assert_eq!(lut[0], 0);
        // sin(2π/8192) * 16384 = 12.566… rounds to 13
        assert_eq!(lut[1], 13);
        // non-decreasing over the first quarter period
        assert!(lut.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_full_period_hits_extremes() {
        let config = LutConfig { n: 8, lut_size: 8 };
        let lut = config.generate(&QFormat::default()).unwrap();
        assert_eq!(lut, vec![0, 11585, 16384, 11585, 0, -11585, -16384, -11585]);
    }

    #[test]
    fn test_scale_follows_format() {
        let config = LutConfig { n: 8, lut_size: 3 };
        let lut = config.generate(&QFormat::Q1_15).unwrap();
        // sin(π/2) = 1.0 saturates at Q1.15 full scale
        assert_eq!(lut[2], 32767);
    }

    #[test]
    fn test_zero_config_rejected() {
        assert!(LutConfig { n: 0, lut_size: 4 }
            .generate(&QFormat::default())
            .is_err());
        assert!(LutConfig { n: 8, lut_size: 0 }
            .generate(&QFormat::default())
            .is_err());
    }
}
