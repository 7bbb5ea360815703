// ─────────────────────────────────────────────────────────────────────
// AxAbsEnt Kernel — Mediator
// ─────────────────────────────────────────────────────────────────────
//! Derives an interaction operator from two entities' signatures alone:
//! the symmetric average `0.5 · (T + S)`.

use nalgebra::DMatrix;

use axabsent_math::tensor::gram_trace;
use axabsent_types::{AxError, AxResult};

use crate::absolute::Absolute;
use crate::interaction::Interaction;

/// Stateless signature-averaging mediator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mediator;

impl Mediator {
    pub fn new() -> Self {
        Self
    }

    /// `0.5 · (target.signature + source.signature)`.
    pub fn generate_operator(&self, source: &Absolute, target: &Absolute) -> AxResult<DMatrix<f64>> {
        let s = source.signature();
        let t = target.signature();
        if s.ncols() != t.ncols() {
            return Err(AxError::invalid(format!(
                "mediator: signature dimension mismatch ({} vs {})",
                s.ncols(),
                t.ncols()
            )));
        }
        Ok((t + s) * 0.5)
    }

    /// Wrap the generated operator into an Interaction.
    ///
    /// The Interaction re-validates the operator against the state
    /// dimensions.
    pub fn mediate(&self, source: &Absolute, target: &Absolute) -> AxResult<Interaction> {
        let op = self.generate_operator(source, target)?;
        Interaction::new(source, target, op)
    }

    /// Tr(O · Oᵀ) for an operator not yet bound to entities.
    pub fn compute_entropy(&self, operator: &DMatrix<f64>) -> f64 {
        gram_trace(operator)
    }
}
