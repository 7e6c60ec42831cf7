//! Butterfly Checker — hardware results vs. golden model
//!
//! Consumes a sequence of hardware-reported butterfly cases, evaluates the
//! reference model per case, and aggregates per-component absolute errors
//! into a pass/fail [`CheckReport`]. A failing design is not an error: the
//! checker always completes the full pass over all cases and reports
//! tolerance violations as data. Only an empty case sequence aborts the run.
//!
//! The tolerance is an integer count of fixed-point LSBs, applied uniformly
//! to real and imaginary components. The pass boundary is strict: a row
//! fails when its worst component error is *greater than* the tolerance, so
//! an error exactly equal to the tolerance still passes.
//!
//! ## Example
//!
//! ```rust
//! use fftv_core::checker::{run_check, CheckConfig};
//! use fftv_core::reference_model::RampStimulus;
//! use fftv_core::types::ButterflyCase;
//! use num_complex::Complex;
//!
//! let cases = vec![ButterflyCase {
//!     pair: 0,
//!     y0: Complex::new(5, 0), // expected 1: off by 4 LSB
//!     y1: Complex::new(-1, 0),
//! }];
//!
//! let report = run_check(&cases, &RampStimulus, &CheckConfig { tolerance_lsb: 2 }).unwrap();
//! assert!(!report.passed);
//! assert_eq!(report.fail_count, 1);
//! assert_eq!(report.mismatches[0].max_abs_err, 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::reference_model::{expected, Stimulus};
use crate::types::{ButterflyCase, VerifyError, VerifyResult};

/// Number of mismatches surfaced in the text report.
const MISMATCH_DISPLAY_LIMIT: usize = 5;

/// Configuration for a check run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Pass/fail tolerance in fixed-point LSBs (default: 2)
    pub tolerance_lsb: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self { tolerance_lsb: 2 }
    }
}

/// One case whose worst component error exceeded the tolerance.
///
/// Components are in dump order: `(y0_r, y0_i, y1_r, y1_i)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mismatch {
    pub pair: u32,
    pub expected: [i32; 4],
    pub actual: [i32; 4],
    /// Worst component absolute error of this case, in LSBs
    pub max_abs_err: u64,
}

/// Aggregate verdict of one check run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// True when no case exceeded the tolerance
    pub passed: bool,
    /// Number of butterfly cases checked
    pub pairs_checked: usize,
    /// Worst component absolute error across all cases, in LSBs
    pub max_abs_err: u64,
    /// Mean of squared per-component errors over all components of all cases
    pub mse: f64,
    /// Root of `mse`
    pub rmse: f64,
    /// Number of cases whose worst component error exceeded the tolerance
    pub fail_count: usize,
    /// Failing cases, in input order
    pub mismatches: Vec<Mismatch>,
}

impl CheckReport {
    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Render as human-readable text with up to 5 mismatch lines.
    pub fn to_text(&self) -> String {
        let mut s = String::new();

        s.push_str("Butterfly Stage Check\n");
        s.push_str("=====================\n\n");

        s.push_str(&format!("Pairs checked:  {}\n", self.pairs_checked));
        s.push_str(&format!("Max abs error:  {} LSB\n", self.max_abs_err));
        s.push_str(&format!("MSE:            {:.3}\n", self.mse));
        s.push_str(&format!("RMSE:           {:.3}\n", self.rmse));
        s.push_str(&format!("Fail count:     {}\n", self.fail_count));
        s.push_str(&format!(
            "Status:         {}\n",
            if self.passed { "PASS" } else { "FAIL" }
        ));

        if !self.mismatches.is_empty() {
            s.push_str("\nFirst mismatches\n");
            s.push_str("----------------\n");
            for mm in self.mismatches.iter().take(MISMATCH_DISPLAY_LIMIT) {
                s.push_str(&format!(
                    "  pair={} exp=({}, {}, {}, {}) got=({}, {}, {}, {}) max_err={}\n",
                    mm.pair,
                    mm.expected[0],
                    mm.expected[1],
                    mm.expected[2],
                    mm.expected[3],
                    mm.actual[0],
                    mm.actual[1],
                    mm.actual[2],
                    mm.actual[3],
                    mm.max_abs_err,
                ));
            }
        }

        s
    }
}

/// Check hardware cases against the golden model under the given stimulus.
///
/// Always completes the full pass and returns a complete report; failures
/// are communicated via `passed`/`fail_count`, never by aborting early.
/// Returns [`VerifyError::EmptyResults`] when there are no cases to check.
pub fn run_check(
    cases: &[ButterflyCase],
    stimulus: &dyn Stimulus,
    config: &CheckConfig,
) -> VerifyResult<CheckReport> {
    if cases.is_empty() {
        return Err(VerifyError::EmptyResults);
    }

    let mut max_abs_err = 0u64;
    let mut sum_sq_err = 0.0f64;
    let mut component_count = 0usize;
    let mut fail_count = 0usize;
    let mut mismatches = Vec::new();

    for case in cases {
        let exp = expected(stimulus, case.pair).components();
        let got = case.components();

        let mut row_max_err = 0u64;
        for (e, g) in exp.iter().zip(got.iter()) {
            let err = (i64::from(*g) - i64::from(*e)).unsigned_abs();
            row_max_err = row_max_err.max(err);
            sum_sq_err += (err as f64) * (err as f64);
            component_count += 1;
        }

        max_abs_err = max_abs_err.max(row_max_err);

        if row_max_err > config.tolerance_lsb {
            fail_count += 1;
            tracing::debug!(
                "pair {} exceeded tolerance: max err {} LSB",
                case.pair,
                row_max_err
            );
            mismatches.push(Mismatch {
                pair: case.pair,
                expected: exp,
                actual: got,
                max_abs_err: row_max_err,
            });
        }
    }

    let mse = sum_sq_err / component_count as f64;

    Ok(CheckReport {
        passed: fail_count == 0,
        pairs_checked: cases.len(),
        max_abs_err,
        mse,
        rmse: mse.sqrt(),
        fail_count,
        mismatches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference_model::RampStimulus;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex;

    fn case(pair: u32, y0_r: i32, y0_i: i32, y1_r: i32, y1_i: i32) -> ButterflyCase {
        ButterflyCase {
            pair,
            y0: Complex::new(y0_r, y0_i),
            y1: Complex::new(y1_r, y1_i),
        }
    }

    /// Ramp-exact cases for the given pair indices.
    fn exact_cases(pairs: &[u32]) -> Vec<ButterflyCase> {
        pairs
            .iter()
            .map(|&p| case(p, 4 * p as i32 + 1, 0, -1, 0))
            .collect()
    }

    #[test]
    fn test_exact_match_passes_with_zero_tolerance() {
        let cases = exact_cases(&[0]);
        let config = CheckConfig { tolerance_lsb: 0 };
        let report = run_check(&cases, &RampStimulus, &config).unwrap();

        assert!(report.passed);
        assert_eq!(report.pairs_checked, 1);
        assert_eq!(report.fail_count, 0);
        assert_eq!(report.max_abs_err, 0);
        assert_eq!(report.mse, 0.0);
        assert_eq!(report.rmse, 0.0);
        assert!(report.mismatches.is_empty());
    }

    #[test]
    fn test_error_beyond_tolerance_fails() {
        // expected y0_r is 1; reporting 5 puts the row 4 LSB off
        let cases = vec![case(0, 5, 0, -1, 0)];
        let config = CheckConfig { tolerance_lsb: 2 };
        let report = run_check(&cases, &RampStimulus, &config).unwrap();

        assert!(!report.passed);
        assert_eq!(report.fail_count, 1);
        assert_eq!(report.max_abs_err, 4);
        assert_eq!(report.mismatches.len(), 1);

        let mm = &report.mismatches[0];
        assert_eq!(mm.pair, 0);
        assert_eq!(mm.expected, [1, 0, -1, 0]);
        assert_eq!(mm.actual, [5, 0, -1, 0]);
        assert_eq!(mm.max_abs_err, 4);
    }

    #[test]
    fn test_error_equal_to_tolerance_passes() {
        // strict > boundary: exactly 2 LSB off passes at tolerance 2
        let cases = vec![case(0, 3, 0, -1, 0)];
        let config = CheckConfig { tolerance_lsb: 2 };
        let report = run_check(&cases, &RampStimulus, &config).unwrap();

        assert!(report.passed);
        assert_eq!(report.fail_count, 0);
        assert_eq!(report.max_abs_err, 2);
    }

    #[test]
    fn test_empty_cases_is_a_configuration_error() {
        let result = run_check(&[], &RampStimulus, &CheckConfig::default());
        assert!(matches!(result, Err(VerifyError::EmptyResults)));
    }

    #[test]
    fn test_mse_over_all_components() {
        // errors [0,0,0,0] and [2,0,0,0] -> mse = 4/8 = 0.5
        let mut cases = exact_cases(&[0]);
        cases.push(case(1, 7, 0, -1, 0)); // expected y0_r = 5
        let report = run_check(&cases, &RampStimulus, &CheckConfig::default()).unwrap();

        assert_abs_diff_eq!(report.mse, 0.5);
        assert_abs_diff_eq!(report.rmse, 0.5f64.sqrt(), epsilon = 1e-12);
        // 2 LSB does not exceed the default tolerance
        assert!(report.passed);
    }

    #[test]
    fn test_full_pass_despite_many_failures() {
        // every case fails, yet all are checked and reported
        let cases: Vec<_> = (0..10).map(|p| case(p, 100, 0, -1, 0)).collect();
        let report = run_check(&cases, &RampStimulus, &CheckConfig::default()).unwrap();

        assert!(!report.passed);
        assert_eq!(report.pairs_checked, 10);
        assert_eq!(report.fail_count, 10);
        assert_eq!(report.mismatches.len(), 10);
    }

    #[test]
    fn test_imaginary_components_count() {
        // nonzero imaginary output must fail like a real one
        let cases = vec![case(0, 1, 3, -1, 0)];
        let report = run_check(&cases, &RampStimulus, &CheckConfig { tolerance_lsb: 2 }).unwrap();

        assert!(!report.passed);
        assert_eq!(report.max_abs_err, 3);
    }

    #[test]
    fn test_text_report_limits_mismatch_lines() {
        let cases: Vec<_> = (0..8).map(|p| case(p, 100, 0, -1, 0)).collect();
        let report = run_check(&cases, &RampStimulus, &CheckConfig::default()).unwrap();

        let text = report.to_text();
        assert!(text.contains("Status:         FAIL"));
        assert_eq!(text.matches("pair=").count(), MISMATCH_DISPLAY_LIMIT);
        // full set stays available in the report itself
        assert_eq!(report.mismatches.len(), 8);
    }

    #[test]
    fn test_text_report_pass() {
        let report = run_check(&exact_cases(&[0, 1, 2]), &RampStimulus, &CheckConfig::default())
            .unwrap();
        let text = report.to_text();
        assert!(text.contains("Status:         PASS"));
        assert!(text.contains("Pairs checked:  3"));
        assert!(!text.contains("First mismatches"));
    }

    #[test]
    fn test_json_report_fields() {
        let report = run_check(&exact_cases(&[0]), &RampStimulus, &CheckConfig::default())
            .unwrap();
        let json = report.to_json();
        assert!(json.contains("\"passed\": true"));
        assert!(json.contains("\"pairs_checked\": 1"));
        assert!(json.contains("\"rmse\""));
        assert!(json.contains("\"mismatches\""));
    }

    #[test]
    fn test_pairs_need_not_be_contiguous() {
        // keyed by the literal pair value in each row
        let report = run_check(
            &exact_cases(&[0, 4, 9]),
            &RampStimulus,
            &CheckConfig { tolerance_lsb: 0 },
        )
        .unwrap();
        assert!(report.passed);
        assert_eq!(report.pairs_checked, 3);
    }
}
