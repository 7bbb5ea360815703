// ─────────────────────────────────────────────────────────────────────
// AxAbsEnt Kernel — Interaction (Operator Algebra)
// ─────────────────────────────────────────────────────────────────────
//! A linear operator mapping a source entity's state into a target
//! entity's state space.
//!
//! Both entities are deep-copied at construction, so later mutation of
//! the originals never changes an existing Interaction.

use nalgebra::{DMatrix, DVector};

use axabsent_math::tensor::gram_trace;
use axabsent_types::{AxError, AxResult};

use crate::absolute::Absolute;

/// Frozen source → target linear interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    source: Absolute,
    target: Absolute,
    operator: DMatrix<f64>,
}

impl Interaction {
    /// Bind `operator` between copies of `source` and `target`.
    ///
    /// Requires `operator.ncols() == source.dim()` and
    /// `operator.nrows() == target.dim()`.
    pub fn new(source: &Absolute, target: &Absolute, operator: DMatrix<f64>) -> AxResult<Self> {
        if operator.ncols() != source.dim() {
            return Err(AxError::invalid(format!(
                "operator columns ({}) must match source state size ({})",
                operator.ncols(),
                source.dim()
            )));
        }
        if operator.nrows() != target.dim() {
            return Err(AxError::invalid(format!(
                "operator rows ({}) must match target state size ({})",
                operator.nrows(),
                target.dim()
            )));
        }
        Ok(Self {
            source: source.clone(),
            target: target.clone(),
            operator,
        })
    }

    /// `operator · source.state`.
    pub fn apply(&self) -> DVector<f64> {
        &self.operator * self.source.state()
    }

    pub fn operator(&self) -> &DMatrix<f64> {
        &self.operator
    }

    pub fn source(&self) -> &Absolute {
        &self.source
    }

    pub fn target(&self) -> &Absolute {
        &self.target
    }

    /// Tr(O · Oᵀ), always ≥ 0.
    pub fn action_cost(&self) -> f64 {
        gram_trace(&self.operator)
    }

    /// Compose so that `earlier` runs first and `self` runs after it.
    ///
    /// `later.compose(&earlier)` yields operator `later.op · earlier.op`,
    /// source `earlier.source`, target `later.target`. Swapping the
    /// receiver and argument changes the result.
    pub fn compose(&self, earlier: &Interaction) -> AxResult<Interaction> {
        if earlier.target.dim() != self.source.dim() {
            return Err(AxError::invalid(format!(
                "cannot compose: earlier target dimension {} != source dimension {}",
                earlier.target.dim(),
                self.source.dim()
            )));
        }
        let composed = &self.operator * &earlier.operator;
        Interaction::new(&earlier.source, &self.target, composed)
    }
}
