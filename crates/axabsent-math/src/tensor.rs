// ─────────────────────────────────────────────────────────────────────
// AxAbsEnt Kernel — Tensor Operations
// ─────────────────────────────────────────────────────────────────────
//! Rank-2 tensor helpers layered on `nalgebra` dense matrices.
//!
//! The Gram trace `Tr(M · Mᵀ)` (sum of squared entries) is the
//! action/entropy proxy used throughout the kernel.

use nalgebra::{DMatrix, DVector};

use axabsent_types::{AxError, AxResult};

/// Trace of a square tensor.
pub fn trace(t: &DMatrix<f64>) -> AxResult<f64> {
    if !t.is_square() {
        return Err(AxError::invalid(format!(
            "trace requires a square matrix, got {}x{}",
            t.nrows(),
            t.ncols()
        )));
    }
    Ok(t.trace())
}

/// Scale to unit Frobenius norm.
pub fn normalize(t: &DMatrix<f64>) -> AxResult<DMatrix<f64>> {
    let norm = t.norm();
    if norm == 0.0 {
        return Err(AxError::DegenerateOperation(
            "cannot normalize a zero tensor".to_string(),
        ));
    }
    Ok(t / norm)
}

/// Outer product a ⊗ b.
pub fn outer(a: &DVector<f64>, b: &DVector<f64>) -> DMatrix<f64> {
    a * b.transpose()
}

/// Double contraction Tr(A · Bᵀ).
pub fn double_contraction(a: &DMatrix<f64>, b: &DMatrix<f64>) -> AxResult<f64> {
    if a.shape() != b.shape() {
        return Err(AxError::invalid(format!(
            "double contraction requires equal shapes, got {:?} and {:?}",
            a.shape(),
            b.shape()
        )));
    }
    Ok((a * b.transpose()).trace())
}

/// Gram trace Tr(M · Mᵀ), always ≥ 0.
#[inline]
pub fn gram_trace(m: &DMatrix<f64>) -> f64 {
    (m * m.transpose()).trace()
}

/// Cosine-like overlap Σ(A ⊙ B) / sqrt(Σ A² · Σ B²).
///
/// Returns exactly 0.0 when either operand has zero norm. That value is
/// a sentinel, not a similarity.
pub fn frobenius_overlap(a: &DMatrix<f64>, b: &DMatrix<f64>) -> AxResult<f64> {
    if a.shape() != b.shape() {
        return Err(AxError::invalid(format!(
            "overlap requires equal shapes, got {:?} and {:?}",
            a.shape(),
            b.shape()
        )));
    }
    let dot = a.component_mul(b).sum();
    let norm = (a.norm_squared() * b.norm_squared()).sqrt();
    if norm == 0.0 {
        log::debug!("frobenius_overlap: zero-norm operand, returning 0.0");
        return Ok(0.0);
    }
    Ok(dot / norm)
}
