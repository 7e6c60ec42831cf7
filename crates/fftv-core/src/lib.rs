//! # FFT Butterfly Verification Core
//!
//! This crate provides the numeric core for verifying a hardware 2-point
//! radix-2 DIT FFT butterfly stage against a software golden model. It covers
//! the full tool-side data path of a hardware bring-up:
//!
//! - **Fixed-Point Codec**: bit-exact Q2.14 encode/decode between real-valued
//!   samples and the 16-bit two's-complement words the hardware consumes
//! - **Reference Model**: analytic expected outputs for each butterfly pair
//! - **Butterfly Checker**: per-case and aggregate error statistics with an
//!   LSB tolerance and a pass/fail verdict
//! - **File Adapters**: oscilloscope CSV ingestion, Verilog `.mem` memory
//!   images, and testbench result dumps
//! - **Sine LUT Generator**: twiddle ROM images through the same codec
//!
//! ## Data Flow
//!
//! ```text
//! Producer: scope CSV → SampleFile → QFormat::encode → MemWriter → .mem
//! Checker:  results CSV → ResultsFile → run_check ← RampStimulus (golden)
//!                                          ↓
//!                                     CheckReport (PASS/FAIL + stats)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fftv_core::{run_check, CheckConfig, RampStimulus};
//! use fftv_core::types::ButterflyCase;
//! use num_complex::Complex;
//!
//! // One hardware-reported case that matches the golden model exactly
//! let cases = vec![ButterflyCase {
//!     pair: 0,
//!     y0: Complex::new(1, 0),
//!     y1: Complex::new(-1, 0),
//! }];
//!
//! let report = run_check(&cases, &RampStimulus, &CheckConfig::default()).unwrap();
//! assert!(report.passed);
//! assert_eq!(report.max_abs_err, 0);
//! ```

pub mod checker;
pub mod fixed_point;
pub mod mem_file;
pub mod reference_model;
pub mod results_file;
pub mod sample_file;
pub mod sine_lut;
pub mod types;

pub use checker::{run_check, CheckConfig, CheckReport, Mismatch};
pub use fixed_point::{from_hex4, to_hex4, QFormat};
pub use mem_file::{read_mem, write_mem, MemWriter};
pub use reference_model::{expected, ExpectedOutput, RampStimulus, Stimulus};
pub use results_file::read_results;
pub use sample_file::{read_samples, SampleFileConfig};
pub use sine_lut::LutConfig;
pub use types::{ButterflyCase, ComplexWord, FixedPointWord, Sample, VerifyError, VerifyResult};
