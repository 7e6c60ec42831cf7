//! Reference Model — analytic golden outputs for the 2-point DIT butterfly
//!
//! Computes the mathematically expected output pair for a butterfly index,
//! given the synthetic test-vector convention the testbench drives the
//! hardware with. For a 2-point stage the twiddle factor is identically 1,
//! so there is no complex rotation: `y0 = x0 + x1`, `y1 = x0 - x1`, and the
//! imaginary outputs are structurally zero for real stimulus.
//!
//! The stimulus convention is an explicit strategy ([`Stimulus`]) rather
//! than a hard-coded formula: the golden model must stay in lockstep with
//! whatever generator produced the hardware's input vectors, and swapping
//! testbenches must not require touching the checker.
//!
//! ## Example
//!
//! ```rust
//! use fftv_core::reference_model::{expected, RampStimulus};
//!
//! // Ramp stimulus: x0 = 2p, x1 = 2p + 1, so y0 = 4p + 1 and y1 = -1
//! let out = expected(&RampStimulus, 5);
//! assert_eq!(out.y0.re, 21);
//! assert_eq!(out.y1.re, -1);
//! assert_eq!((out.y0.im, out.y1.im), (0, 0));
//! ```

use num_complex::Complex;

use crate::types::ComplexWord;

/// Test-vector convention: the real-valued input pair fed to butterfly `pair`.
///
/// Implementations must match the testbench's stimulus generator exactly;
/// the checker compares hardware output against whatever this produces.
pub trait Stimulus {
    /// Input samples `(x0, x1)` for the given 0-based pair index.
    fn inputs(&self, pair: u32) -> (i32, i32);
}

/// The harness's synthetic ramp stimulus: `x0 = 2*pair`, `x1 = 2*pair + 1`.
///
/// Under this convention the expected outputs have the closed form
/// `y0 = 4*pair + 1`, `y1 = -1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RampStimulus;

impl Stimulus for RampStimulus {
    fn inputs(&self, pair: u32) -> (i32, i32) {
        let x0 = 2 * pair as i32;
        (x0, x0 + 1)
    }
}

/// Expected butterfly output pair, derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedOutput {
    pub y0: ComplexWord,
    pub y1: ComplexWord,
}

impl ExpectedOutput {
    /// Components in dump order: `(y0_r, y0_i, y1_r, y1_i)`.
    pub fn components(&self) -> [i32; 4] {
        [self.y0.re, self.y0.im, self.y1.re, self.y1.im]
    }
}

/// Expected output of butterfly `pair` under the given stimulus.
///
/// Pure and total: every pair index has a defined expected output.
pub fn expected(stimulus: &dyn Stimulus, pair: u32) -> ExpectedOutput {
    let (x0, x1) = stimulus.inputs(pair);
    ExpectedOutput {
        y0: Complex::new(x0 + x1, 0),
        y1: Complex::new(x0 - x1, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_closed_form() {
        // expected(p) = (4p+1, 0, -1, 0)
        for pair in [0u32, 1, 2, 17, 4095] {
            let out = expected(&RampStimulus, pair);
            assert_eq!(out.components(), [4 * pair as i32 + 1, 0, -1, 0]);
        }
    }

    #[test]
    fn test_ramp_inputs() {
        assert_eq!(RampStimulus.inputs(0), (0, 1));
        assert_eq!(RampStimulus.inputs(7), (14, 15));
    }

    #[test]
    fn test_custom_stimulus_is_injectable() {
        // A DC stimulus: both inputs are the same constant
        struct DcStimulus(i32);
        impl Stimulus for DcStimulus {
            fn inputs(&self, _pair: u32) -> (i32, i32) {
                (self.0, self.0)
            }
        }

        let out = expected(&DcStimulus(42), 9);
        assert_eq!(out.y0.re, 84);
        assert_eq!(out.y1.re, 0);
    }
}
