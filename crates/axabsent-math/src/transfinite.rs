// ─────────────────────────────────────────────────────────────────────
// AxAbsEnt Kernel — Transfinite Helpers
// ─────────────────────────────────────────────────────────────────────
//! Finite stand-ins for ω-indexed constructions: a symbolic ω, truncated
//! ω-sums, and limit estimation over ordinal-indexed sequences.

use nalgebra::DVector;

use axabsent_types::{AxError, AxResult};

/// Symbolic ω. Any count at or above it is treated as infinite.
pub const OMEGA: u64 = 1_000_000_000_000_000_000;

/// Default cutoff for `omega_sum`.
pub const DEFAULT_THRESHOLD: f64 = 1e-6;

/// Default scan length for `ordinal_limit`.
pub const DEFAULT_MAX_STEPS: usize = 1000;

/// Successive values closer than this are considered converged.
const CONVERGENCE_EPS: f64 = 1e-9;

/// `true` iff `a < ω`.
#[inline]
pub fn is_finite(a: u64) -> bool {
    a < OMEGA
}

/// Partial sum of `sequence`, stopping after the first term whose
/// magnitude falls below `threshold` (that term is included).
pub fn omega_sum(sequence: &[f64], threshold: f64) -> f64 {
    let mut sum = 0.0;
    for &term in sequence {
        sum += term;
        if term.abs() < threshold {
            break;
        }
    }
    sum
}

/// Estimate the limit of an ordinal-indexed field.
///
/// Scans at most `max_steps` entries and returns the first value within
/// 1e-9 of its predecessor, or the last value visited.
pub fn ordinal_limit(field: &[f64], max_steps: usize) -> AxResult<f64> {
    let Some(&first) = field.first() else {
        return Err(AxError::invalid("ordinal field is empty"));
    };
    let mut prev = first;
    for &current in field.iter().take(max_steps).skip(1) {
        if (current - prev).abs() < CONVERGENCE_EPS {
            return Ok(current);
        }
        prev = current;
    }
    Ok(prev)
}

/// Unit-norm projection of `input`.
pub fn omega_normalize(input: &DVector<f64>) -> AxResult<DVector<f64>> {
    let norm = input.norm();
    if norm == 0.0 {
        return Err(AxError::DegenerateOperation(
            "cannot normalize zero vector".to_string(),
        ));
    }
    Ok(input / norm)
}
