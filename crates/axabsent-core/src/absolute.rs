// ─────────────────────────────────────────────────────────────────────
// AxAbsEnt Kernel — Absolute (Entity)
// ─────────────────────────────────────────────────────────────────────
//! An Absolute carries an identity, a symmetric signature (metric)
//! matrix, a state vector, and named auxiliary property vectors.
//!
//! Invariant: `state.len() == signature.nrows()` after every mutation.

use std::collections::HashMap;

use nalgebra::{DMatrix, DVector};
use uuid::Uuid;

use axabsent_math::tensor::gram_trace;
use axabsent_types::{AxError, AxResult};

/// Relative tolerance of the symmetry check.
pub const SYMMETRY_TOLERANCE: f64 = 1e-12;

/// A modeled entity.
///
/// `Clone` produces an independent deep copy that keeps the same id.
#[derive(Debug, Clone, PartialEq)]
pub struct Absolute {
    id: Uuid,
    signature: DMatrix<f64>,
    state: DVector<f64>,
    properties: HashMap<String, DVector<f64>>,
}

impl Default for Absolute {
    fn default() -> Self {
        Self::new()
    }
}

impl Absolute {
    /// Fresh entity with a 1×1 identity signature and zero state.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            signature: DMatrix::identity(1, 1),
            state: DVector::zeros(1),
            properties: HashMap::new(),
        }
    }

    /// Build an entity from a signature and a matching state.
    pub fn with_signature_and_state(
        signature: DMatrix<f64>,
        state: DVector<f64>,
    ) -> AxResult<Self> {
        let mut abs = Self::new();
        abs.set_signature(signature)?;
        abs.set_state(state)?;
        Ok(abs)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn signature(&self) -> &DMatrix<f64> {
        &self.signature
    }

    pub fn state(&self) -> &DVector<f64> {
        &self.state
    }

    /// Dimension shared by signature and state.
    pub fn dim(&self) -> usize {
        self.state.len()
    }

    /// Replace the signature.
    ///
    /// Fails unless `signature` is square and symmetric. The state is kept
    /// when the dimension is unchanged and `Ok(None)` is returned.
    ///
    /// When the dimension changes the previous state is discarded: it is
    /// replaced by zeros of the new dimension and handed back as
    /// `Ok(Some(previous))`. Follow up with `set_state` to supply a real one.
    pub fn set_signature(&mut self, signature: DMatrix<f64>) -> AxResult<Option<DVector<f64>>> {
        if !signature.is_square() {
            return Err(AxError::invalid(format!(
                "signature matrix must be square, got {}x{}",
                signature.nrows(),
                signature.ncols()
            )));
        }
        if !is_symmetric(&signature) {
            return Err(AxError::invalid("signature matrix must be symmetric"));
        }
        let dim = signature.nrows();
        let discarded = if dim != self.state.len() {
            log::debug!(
                "absolute {}: signature dimension {} -> {dim}, previous state discarded",
                self.id,
                self.state.len()
            );
            Some(std::mem::replace(&mut self.state, DVector::zeros(dim)))
        } else {
            None
        };
        self.signature = signature;
        Ok(discarded)
    }

    /// Replace the state. Its length must equal the signature dimension.
    pub fn set_state(&mut self, state: DVector<f64>) -> AxResult<()> {
        if state.len() != self.signature.nrows() {
            return Err(AxError::invalid(format!(
                "state dimension {} must match signature dimension {}",
                state.len(),
                self.signature.nrows()
            )));
        }
        self.state = state;
        Ok(())
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: DVector<f64>) {
        self.properties.insert(key.into(), value);
    }

    pub fn get_property(&self, key: &str) -> AxResult<&DVector<f64>> {
        self.properties
            .get(key)
            .ok_or_else(|| AxError::NotFound(format!("property not found: {key}")))
    }

    pub fn remove_property(&mut self, key: &str) -> AxResult<DVector<f64>> {
        self.properties
            .remove(key)
            .ok_or_else(|| AxError::NotFound(format!("property not found: {key}")))
    }

    /// Iterate over all properties in arbitrary order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &DVector<f64>)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `projection · state`, without touching the entity.
    pub fn project_state(&self, projection: &DMatrix<f64>) -> AxResult<DVector<f64>> {
        if projection.ncols() != self.state.len() {
            return Err(AxError::invalid(format!(
                "projection has {} columns, state has length {}",
                projection.ncols(),
                self.state.len()
            )));
        }
        Ok(projection * &self.state)
    }

    /// Tr(S · Sᵀ), the entropy proxy of the signature.
    pub fn entropy_signature(&self) -> f64 {
        gram_trace(&self.signature)
    }
}

fn is_symmetric(m: &DMatrix<f64>) -> bool {
    let asym = (m - m.transpose()).norm();
    asym <= SYMMETRY_TOLERANCE * m.norm().max(1.0)
}
