//! Integration test: Simulation harness end to end
//!
//! Config → runs → report, for seeded and repeated simulations.

use reliability::simulator::{run_simulation, SimConfig};
use reliability::ReliabilityError;

#[test]
fn test_reference_simulation_report() {
    let config = SimConfig {
        seed: Some(42),
        ..Default::default()
    };
    let report = run_simulation(&config).unwrap();

    assert_eq!(report.num_subsystems, 5);
    assert_eq!(report.n_samples, 100_000);
    assert!(report.abs_error < 0.01);
    assert!(report.ci95_low <= report.mc_reliability && report.mc_reliability <= report.ci95_high);
    assert_eq!(
        report.verification_passed,
        report.abs_error < config.tolerance
    );

    let failures: u64 = report.subsystems.iter().map(|s| s.first_failures).sum();
    assert_eq!(
        failures,
        report.runs[0].estimate.n_samples - report.runs[0].estimate.successes
    );

    let text = report.to_text();
    assert!(text.contains("Monte Carlo estimate:"));
    assert!(text.contains("Analytical solution:  0.922438"));
    assert!(text.contains("Samples per run:     100,000"));
    assert!(text.contains("Seed:                42"));
}

#[test]
fn test_convergence_preset_tightens_spread() {
    let config = SimConfig {
        n_samples: 200_000,
        num_runs: 5,
        seed: Some(7),
        ..SimConfig::convergence_check()
    };
    let report = run_simulation(&config).unwrap();

    assert_eq!(report.runs.len(), 5);
    assert!(report.min_estimate <= report.mean_estimate);
    assert!(report.mean_estimate <= report.max_estimate);
    assert!(report.std_dev_estimate < 0.005);
    assert!(report.mean_abs_error < 0.005);
    // Pooled over 1M trials
    assert!(report.abs_error < 0.003);
}

#[test]
fn test_certain_failure_mission() {
    let config = SimConfig {
        failure_probs: vec![0.0, 1.0],
        n_samples: 1_000,
        seed: Some(1),
        ..Default::default()
    };
    let report = run_simulation(&config).unwrap();

    assert_eq!(report.mc_reliability, 0.0);
    assert_eq!(report.analytical_reliability, 0.0);
    assert_eq!(report.relative_error_pct, None);
    assert!(report.verification_passed);
    assert_eq!(report.subsystems[1].first_failures, 1_000);
}

#[test]
fn test_json_report_round_trips_key_fields() {
    let config = SimConfig {
        n_samples: 2_000,
        num_runs: 2,
        seed: Some(3),
        ..SimConfig::quick_check()
    };
    let report = run_simulation(&config).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();

    assert_eq!(json["num_runs"], 2);
    assert_eq!(json["seed"], 3);
    assert_eq!(json["runs"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["failure_probs"].as_array().map(Vec::len), Some(5));
}

#[test]
fn test_invalid_configs() {
    let bad_prob = SimConfig::for_mission(vec![0.2, 1.2]);
    assert!(matches!(
        run_simulation(&bad_prob),
        Err(ReliabilityError::ProbabilityOutOfRange { index: 1, .. })
    ));

    let bad_runs = SimConfig {
        num_runs: 0,
        ..Default::default()
    };
    assert!(matches!(
        run_simulation(&bad_runs),
        Err(ReliabilityError::InvalidRunCount { runs: 0 })
    ));

    let bad_tolerance = SimConfig {
        tolerance: -1.0,
        ..Default::default()
    };
    assert!(matches!(
        run_simulation(&bad_tolerance),
        Err(ReliabilityError::InvalidTolerance { .. })
    ));
}
