//! Closed-form mission reliability for independent subsystems.
//!
//! R = (1 - p1) * (1 - p2) * ... * (1 - pn)
//!
//! Independence between subsystems is assumed, not checked.

use crate::error::Result;
use crate::validate_failure_probs;

/// Exact probability that every subsystem works.
///
/// An empty subsystem list yields `1.0`.
pub fn exact(failure_probs: &[f64]) -> Result<f64> {
    validate_failure_probs(failure_probs)?;
    Ok(failure_probs.iter().map(|p| 1.0 - p).product())
}

/// Per-subsystem reliability `1 - p`, in input order.
pub fn subsystem_reliabilities(failure_probs: &[f64]) -> Result<Vec<f64>> {
    validate_failure_probs(failure_probs)?;
    Ok(failure_probs.iter().map(|p| 1.0 - p).collect())
}
