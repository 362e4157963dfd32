//! Error types for reliability computations.

use thiserror::Error;

/// Errors raised by the estimators and the simulation harness.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReliabilityError {
    #[error("Failure probability {value} for subsystem {index} is out of range [0.0, 1.0]")]
    ProbabilityOutOfRange { index: usize, value: f64 },

    #[error("Invalid sample count {n_samples}: at least one sample is required")]
    InvalidSampleCount { n_samples: u64 },

    #[error("Invalid run count {runs}: at least one run is required")]
    InvalidRunCount { runs: u32 },

    #[error("Verification tolerance {value} must be finite and positive")]
    InvalidTolerance { value: f64 },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReliabilityError>;
