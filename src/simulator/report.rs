//! Simulation report generation.

use serde::Serialize;

use super::config::SimConfig;
use crate::analytical::subsystem_reliabilities;
use crate::build_info::version_string;
use crate::constants::CONFIDENCE_Z_95;
use crate::error::{ReliabilityError, Result};
use crate::monte_carlo::McEstimate;

/// Result of one Monte Carlo run.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub run_index: u32,
    pub seed: Option<u64>,
    pub reliability: f64,
    pub abs_error: f64,
    pub estimate: McEstimate,
}

impl RunStats {
    pub fn new(run_index: u32, seed: Option<u64>, estimate: McEstimate, analytical: f64) -> Self {
        let reliability = estimate.reliability();
        Self {
            run_index,
            seed,
            reliability,
            abs_error: (reliability - analytical).abs(),
            estimate,
        }
    }
}

/// Per-subsystem breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct SubsystemRow {
    pub index: usize,
    pub failure_prob: f64,
    pub reliability: f64,
    /// Failed trials this subsystem ended, pooled over all runs
    pub first_failures: u64,
    pub first_failure_share: f64,
}

/// Aggregated comparison of Monte Carlo and analytical reliability.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub version: String,
    pub generated_at: String,

    // Inputs
    pub num_subsystems: usize,
    pub failure_probs: Vec<f64>,
    pub n_samples: u64,
    pub num_runs: u32,
    pub seed: Option<u64>,
    pub tolerance: f64,

    // Pooled comparison
    pub analytical_reliability: f64,
    pub mc_reliability: f64,
    pub std_error: f64,
    pub ci95_low: f64,
    pub ci95_high: f64,
    pub abs_error: f64,
    /// Percent; None when the exact reliability is zero
    pub relative_error_pct: Option<f64>,
    pub verification_passed: bool,

    // Spread across runs
    pub mean_estimate: f64,
    pub std_dev_estimate: f64,
    pub min_estimate: f64,
    pub max_estimate: f64,
    pub mean_abs_error: f64,

    pub subsystems: Vec<SubsystemRow>,
    pub runs: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed runs.
    pub fn from_runs(config: &SimConfig, analytical: f64, runs: Vec<RunStats>) -> Result<Self> {
        if runs.is_empty() {
            return Err(ReliabilityError::InvalidRunCount { runs: 0 });
        }
        let num_runs = runs.len() as u32;
        let pooled = pool_estimates(&runs, config.failure_probs.len());

        let mc_reliability = pooled.reliability();
        let (ci95_low, ci95_high) = pooled.confidence_interval(CONFIDENCE_Z_95);
        let abs_error = (mc_reliability - analytical).abs();
        let relative_error_pct = if analytical > 0.0 {
            Some(abs_error / analytical * 100.0)
        } else {
            None
        };

        let estimates: Vec<f64> = runs.iter().map(|r| r.reliability).collect();
        let mean_estimate = estimates.iter().sum::<f64>() / num_runs as f64;
        let std_dev_estimate = if estimates.len() > 1 {
            let var = estimates
                .iter()
                .map(|e| (e - mean_estimate).powi(2))
                .sum::<f64>()
                / (estimates.len() - 1) as f64;
            var.sqrt()
        } else {
            0.0
        };
        let min_estimate = estimates.iter().copied().fold(f64::INFINITY, f64::min);
        let max_estimate = estimates.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean_abs_error = runs.iter().map(|r| r.abs_error).sum::<f64>() / num_runs as f64;

        let shares = pooled.first_failure_shares();
        let subsystems = subsystem_reliabilities(&config.failure_probs)?
            .into_iter()
            .enumerate()
            .map(|(index, reliability)| SubsystemRow {
                index,
                failure_prob: config.failure_probs[index],
                reliability,
                first_failures: pooled.first_failures[index],
                first_failure_share: shares[index],
            })
            .collect();

        Ok(Self {
            version: version_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            num_subsystems: config.failure_probs.len(),
            failure_probs: config.failure_probs.clone(),
            n_samples: config.n_samples,
            num_runs,
            seed: config.seed,
            tolerance: config.tolerance,
            analytical_reliability: analytical,
            mc_reliability,
            std_error: pooled.std_error(),
            ci95_low,
            ci95_high,
            abs_error,
            relative_error_pct,
            verification_passed: abs_error < config.tolerance,
            mean_estimate,
            std_dev_estimate,
            min_estimate,
            max_estimate,
            mean_abs_error,
            subsystems,
            runs,
        })
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("              SPACECRAFT RELIABILITY REPORT\n");
        report.push_str(&format!("              v{}\n", self.version));
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str("── CONFIGURATION ────────────────────────────────────────────────\n");
        report.push_str(&format!("  Subsystems:          {}\n", self.num_subsystems));
        report.push_str(&format!("  Failure probs:       {:?}\n", self.failure_probs));
        report.push_str(&format!(
            "  Samples per run:     {}\n",
            group_thousands(self.n_samples)
        ));
        report.push_str(&format!("  Runs:                {}\n", self.num_runs));
        if let Some(seed) = self.seed {
            report.push_str(&format!("  Seed:                {}\n", seed));
        }
        report.push('\n');

        report.push_str("── RESULTS ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Monte Carlo estimate: {:.6} ({:.2}%)\n",
            self.mc_reliability,
            self.mc_reliability * 100.0
        ));
        report.push_str(&format!(
            "  Analytical solution:  {:.6} ({:.2}%)\n",
            self.analytical_reliability,
            self.analytical_reliability * 100.0
        ));
        report.push_str(&format!("  Absolute error:       {:.6}\n", self.abs_error));
        match self.relative_error_pct {
            Some(pct) => report.push_str(&format!("  Relative error:       {:.3}%\n", pct)),
            None => report.push_str("  Relative error:       n/a (exact reliability is zero)\n"),
        }
        report.push_str(&format!("  Standard error:       {:.6}\n", self.std_error));
        report.push_str(&format!(
            "  95% CI:               [{:.6}, {:.6}]\n\n",
            self.ci95_low, self.ci95_high
        ));

        report.push_str("── INTERPRETATION ───────────────────────────────────────────────\n");
        report.push_str("  With these failure rates, the spacecraft has approximately\n");
        report.push_str(&format!(
            "  a {:.1}% chance of mission success.\n\n",
            self.mc_reliability * 100.0
        ));

        report.push_str("── SUBSYSTEMS ───────────────────────────────────────────────────\n");
        report.push_str("  #    P(fail)    R(works)   First failures   Share\n");
        report.push_str("  ──   ───────    ────────   ──────────────   ─────\n");
        for row in &self.subsystems {
            report.push_str(&format!(
                "  {:<2}   {:>7.4}    {:>8.4}   {:>14}   {:>5.1}%\n",
                row.index + 1,
                row.failure_prob,
                row.reliability,
                row.first_failures,
                row.first_failure_share * 100.0
            ));
        }
        report.push('\n');

        if self.num_runs > 1 {
            report.push_str("── RUN SPREAD ───────────────────────────────────────────────────\n");
            report.push_str(&format!("  Mean estimate:       {:.6}\n", self.mean_estimate));
            report.push_str(&format!("  Std dev:             {:.6}\n", self.std_dev_estimate));
            report.push_str(&format!("  Min estimate:        {:.6}\n", self.min_estimate));
            report.push_str(&format!("  Max estimate:        {:.6}\n", self.max_estimate));
            report.push_str(&format!("  Mean abs error:      {:.6}\n\n", self.mean_abs_error));
        }

        report.push_str("── VERIFICATION ─────────────────────────────────────────────────\n");
        if self.verification_passed {
            report.push_str("  ✓ VERIFICATION PASSED: MC estimate matches analytical solution!\n");
        } else {
            report.push_str(&format!(
                "  ⚠ Large error (>= {}) - consider increasing samples\n",
                self.tolerance
            ));
        }

        report.push_str("═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Sum the tallies of every run into one estimate.
fn pool_estimates(runs: &[RunStats], num_subsystems: usize) -> McEstimate {
    let mut pooled = McEstimate {
        n_samples: 0,
        successes: 0,
        draws: 0,
        first_failures: vec![0; num_subsystems],
    };
    for run in runs {
        pooled.n_samples += run.estimate.n_samples;
        pooled.successes += run.estimate.successes;
        pooled.draws += run.estimate.draws;
        for (total, count) in pooled.first_failures.iter_mut().zip(&run.estimate.first_failures) {
            *total += count;
        }
    }
    pooled
}

/// `100000` -> `100,000`
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
