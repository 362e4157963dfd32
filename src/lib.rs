//! Mission Reliability - Spacecraft Reliability Library
//!
//! Estimates the probability that every subsystem of a mission works, two ways:
//! a Monte Carlo estimator ([`monte_carlo`]) and the exact product formula
//! ([`analytical`]). The [`simulator`] module runs both on the same inputs and
//! builds a comparison report.

pub mod analytical;
pub mod build_info;
pub mod constants;
pub mod error;
pub mod monte_carlo;
pub mod simulator;

pub use analytical::exact;
pub use error::{ReliabilityError, Result};
pub use monte_carlo::{estimate, run_trials, McEstimate, TrialOutcome};

/// Check every failure probability lies in `[0, 1]`.
///
/// NaN fails the check. The reported index is the first offending subsystem.
pub fn validate_failure_probs(failure_probs: &[f64]) -> Result<()> {
    match failure_probs
        .iter()
        .position(|p| !(0.0..=1.0).contains(p))
    {
        Some(index) => Err(ReliabilityError::ProbabilityOutOfRange {
            index,
            value: failure_probs[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_bounds() {
        assert!(validate_failure_probs(&[0.0, 1.0, 0.5]).is_ok());
        assert!(validate_failure_probs(&[]).is_ok());
    }

    #[test]
    fn test_validate_reports_first_bad_index() {
        let err = validate_failure_probs(&[0.1, 1.5, -0.2]).unwrap_err();
        match err {
            ReliabilityError::ProbabilityOutOfRange { index, value } => {
                assert_eq!(index, 1);
                assert_eq!(value, 1.5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_rejects_nan() {
        assert!(matches!(
            validate_failure_probs(&[0.1, f64::NAN]),
            Err(ReliabilityError::ProbabilityOutOfRange { index: 1, .. })
        ));
    }
}
