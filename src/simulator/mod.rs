//! Reliability cross-check simulator.
//!
//! Runs the Monte Carlo estimator one or more times on a mission, computes
//! the analytical reliability for the same inputs, and reports:
//! - Estimate vs exact value, absolute and relative error
//! - Standard error and 95% confidence interval
//! - Which subsystems end failed missions
//! - Spread of estimates across repeated runs

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport, SubsystemRow};
pub use runner::run_simulation;
