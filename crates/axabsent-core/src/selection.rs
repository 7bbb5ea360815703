// ─────────────────────────────────────────────────────────────────────
// AxAbsEnt Kernel — Selection Scorer
// ─────────────────────────────────────────────────────────────────────
//! Ranks interactions by combining action cost and information overlap:
//!
//!   score = alpha · (−action) + beta · information
//!
//! Lower action and higher information give a higher score. The
//! information term of `selection_score` compares the derived vectors
//! `O · apply()` and `apply()`, not the interaction's entities.

use nalgebra::DMatrix;

use axabsent_math::tensor::frobenius_overlap;
use axabsent_types::{AxError, AxResult, SelectionWeights};

use crate::absolute::Absolute;
use crate::interaction::Interaction;

/// Action/information selection heuristic with fixed weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selection {
    weights: SelectionWeights,
}

impl Selection {
    pub fn new(weights: SelectionWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> SelectionWeights {
        self.weights
    }

    /// Action cost Tr(O · Oᵀ) of the interaction.
    pub fn evaluate_action(&self, interaction: &Interaction) -> f64 {
        interaction.action_cost()
    }

    /// Signature overlap Σ(S ⊙ T) / sqrt(Σ S² · Σ T²).
    ///
    /// Returns 0.0 when either signature has zero norm.
    pub fn evaluate_information(&self, source: &Absolute, target: &Absolute) -> AxResult<f64> {
        frobenius_overlap(source.signature(), target.signature())
    }

    /// Weighted selection score of an interaction.
    ///
    /// Requires a square operator, since `O · apply()` is otherwise
    /// undefined.
    pub fn selection_score(&self, interaction: &Interaction) -> AxResult<f64> {
        let action = self.evaluate_action(interaction);

        let op = interaction.operator();
        if !op.is_square() {
            return Err(AxError::invalid(format!(
                "selection score requires a square operator, got {}x{}",
                op.nrows(),
                op.ncols()
            )));
        }
        let projected = interaction.apply();
        let propagated = op * &projected;
        let n = projected.len();
        let info = frobenius_overlap(
            &DMatrix::from_column_slice(n, 1, propagated.as_slice()),
            &DMatrix::from_column_slice(n, 1, projected.as_slice()),
        )?;

        Ok(self.weights.alpha * (-action) + self.weights.beta * info)
    }
}
