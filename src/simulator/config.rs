//! Simulation configuration.

use crate::constants::{
    DEFAULT_FAILURE_PROBS, DEFAULT_RUNS, DEFAULT_SAMPLES, VERIFICATION_TOLERANCE,
};
use crate::error::{ReliabilityError, Result};
use crate::validate_failure_probs;

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Failure probability per subsystem, in subsystem order
    pub failure_probs: Vec<f64>,

    /// Monte Carlo trials per run
    pub n_samples: u64,

    /// Number of independent runs to perform
    pub num_runs: u32,

    /// Base seed for reproducibility (None = entropy). Run `i` uses `seed + i`.
    pub seed: Option<u64>,

    /// Absolute error below which verification passes
    pub tolerance: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            failure_probs: DEFAULT_FAILURE_PROBS.to_vec(),
            n_samples: DEFAULT_SAMPLES,
            num_runs: DEFAULT_RUNS,
            seed: None,
            tolerance: VERIFICATION_TOLERANCE,
        }
    }
}

impl SimConfig {
    /// Config for a given mission with default sampling.
    pub fn for_mission(failure_probs: Vec<f64>) -> Self {
        Self {
            failure_probs,
            ..Default::default()
        }
    }

    /// Quick config for a fast sanity check
    pub fn quick_check() -> Self {
        Self {
            n_samples: 10_000,
            tolerance: 0.01,
            ..Default::default()
        }
    }

    /// Config for checking convergence across repeated large runs
    pub fn convergence_check() -> Self {
        Self {
            n_samples: 1_000_000,
            num_runs: 10,
            ..Default::default()
        }
    }

    /// Reject configs the runner cannot execute.
    pub fn validate(&self) -> Result<()> {
        validate_failure_probs(&self.failure_probs)?;
        if self.n_samples == 0 {
            return Err(ReliabilityError::InvalidSampleCount {
                n_samples: self.n_samples,
            });
        }
        if self.num_runs == 0 {
            return Err(ReliabilityError::InvalidRunCount {
                runs: self.num_runs,
            });
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ReliabilityError::InvalidTolerance {
                value: self.tolerance,
            });
        }
        Ok(())
    }

    /// Seed for run `run_idx`, if seeded.
    pub fn run_seed(&self, run_idx: u32) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(run_idx as u64))
    }
}
