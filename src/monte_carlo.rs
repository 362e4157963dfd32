//! Monte Carlo estimation of mission reliability.
//!
//! Each trial walks the subsystems in order and draws one uniform value in
//! `[0, 1)` per subsystem. A draw strictly below the subsystem's failure
//! probability fails the trial and the remaining subsystems are skipped.
//!
//! Random stream consumption: a trial uses `k` draws, where `k` is the
//! 1-based position of the first failing subsystem, or the subsystem count
//! when every subsystem works. With a seeded generator the estimate is
//! reproducible bit for bit.

use log::trace;
use rand::Rng;
use serde::Serialize;

use crate::error::{ReliabilityError, Result};
use crate::validate_failure_probs;

/// Outcome of a single simulated mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialOutcome {
    Success,
    /// Index of the first subsystem that failed.
    Failure { subsystem: usize },
}

/// Tallies from a batch of Monte Carlo trials.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct McEstimate {
    pub n_samples: u64,
    pub successes: u64,
    /// Random numbers drawn across all trials
    pub draws: u64,
    /// How often each subsystem was the one that ended a trial
    pub first_failures: Vec<u64>,
}

impl McEstimate {
    /// Empirical success fraction.
    pub fn reliability(&self) -> f64 {
        self.successes as f64 / self.n_samples as f64
    }

    pub fn failures(&self) -> u64 {
        self.n_samples - self.successes
    }

    /// Binomial standard error `sqrt(p(1-p)/n)`.
    pub fn std_error(&self) -> f64 {
        let p = self.reliability();
        (p * (1.0 - p) / self.n_samples as f64).sqrt()
    }

    /// Normal-approximation interval `p ± z·se`, clamped to `[0, 1]`.
    pub fn confidence_interval(&self, z: f64) -> (f64, f64) {
        let p = self.reliability();
        let half_width = z * self.std_error();
        ((p - half_width).max(0.0), (p + half_width).min(1.0))
    }

    /// Share of failed trials attributed to each subsystem.
    pub fn first_failure_shares(&self) -> Vec<f64> {
        let failures = self.failures();
        self.first_failures
            .iter()
            .map(|&count| {
                if failures == 0 {
                    0.0
                } else {
                    count as f64 / failures as f64
                }
            })
            .collect()
    }
}

/// Simulate one mission. Stops drawing at the first failed subsystem.
///
/// Probabilities are assumed valid; use [`run_trials`] for checked input.
pub fn simulate_trial<R: Rng + ?Sized>(failure_probs: &[f64], rng: &mut R) -> TrialOutcome {
    for (subsystem, &fail_prob) in failure_probs.iter().enumerate() {
        if rng.gen::<f64>() < fail_prob {
            return TrialOutcome::Failure { subsystem };
        }
    }
    TrialOutcome::Success
}

/// Run `n_samples` independent trials and collect the tallies.
pub fn run_trials<R: Rng + ?Sized>(
    failure_probs: &[f64],
    n_samples: u64,
    rng: &mut R,
) -> Result<McEstimate> {
    if n_samples == 0 {
        return Err(ReliabilityError::InvalidSampleCount { n_samples });
    }
    validate_failure_probs(failure_probs)?;

    let mut successes = 0u64;
    let mut draws = 0u64;
    let mut first_failures = vec![0u64; failure_probs.len()];

    for _ in 0..n_samples {
        match simulate_trial(failure_probs, rng) {
            TrialOutcome::Success => {
                successes += 1;
                draws += failure_probs.len() as u64;
            }
            TrialOutcome::Failure { subsystem } => {
                first_failures[subsystem] += 1;
                draws += subsystem as u64 + 1;
            }
        }
    }

    trace!(
        "{} trials over {} subsystems: {} successes, {} draws",
        n_samples,
        failure_probs.len(),
        successes,
        draws
    );

    Ok(McEstimate {
        n_samples,
        successes,
        draws,
        first_failures,
    })
}

/// Estimate mission reliability as the fraction of successful trials.
pub fn estimate<R: Rng + ?Sized>(
    failure_probs: &[f64],
    n_samples: u64,
    rng: &mut R,
) -> Result<f64> {
    Ok(run_trials(failure_probs, n_samples, rng)?.reliability())
}
