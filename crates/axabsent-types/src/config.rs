// ─────────────────────────────────────────────────────────────────────
// AxAbsEnt Kernel — Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{AxError, AxResult};

/// Weights of the selection heuristic.
///
/// `score = alpha * (-action) + beta * information`. Fixed for the
/// lifetime of a `Selection`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionWeights {
    /// Weight of the action (entropy) term.
    /// Default: 1.0.
    pub alpha: f64,

    /// Weight of the information (overlap) term.
    /// Default: 1.0.
    pub beta: f64,
}

impl Default for SelectionWeights {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
        }
    }
}

impl SelectionWeights {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    pub fn validate(&self) -> AxResult<()> {
        if !self.alpha.is_finite() {
            return Err(AxError::Config(format!(
                "alpha must be finite, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() {
            return Err(AxError::Config(format!(
                "beta must be finite, got {}",
                self.beta
            )));
        }
        Ok(())
    }
}

/// Grid layout of the field evolution engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Cells along the first axis (matrix rows).
    pub nx: usize,
    /// Cells along the second axis (matrix columns).
    pub ny: usize,
    /// Spacing along the first axis. Must be > 0.
    pub dx: f64,
    /// Spacing along the second axis. Must be > 0.
    pub dy: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            nx: 0,
            ny: 0,
            dx: 1.0,
            dy: 1.0,
        }
    }
}

impl GridConfig {
    pub fn new(nx: usize, ny: usize, dx: f64, dy: f64) -> Self {
        Self { nx, ny, dx, dy }
    }

    /// Number of cells that `evolve` updates (boundary excluded).
    pub fn interior_cells(&self) -> usize {
        self.nx.saturating_sub(2) * self.ny.saturating_sub(2)
    }

    pub fn validate(&self) -> AxResult<()> {
        if !(self.dx.is_finite() && self.dx > 0.0) {
            return Err(AxError::Config(format!(
                "dx must be positive and finite, got {}",
                self.dx
            )));
        }
        if !(self.dy.is_finite() && self.dy > 0.0) {
            return Err(AxError::Config(format!(
                "dy must be positive and finite, got {}",
                self.dy
            )));
        }
        Ok(())
    }
}

/// Top-level runtime configuration for the kernel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    pub selection: SelectionWeights,
    pub grid: GridConfig,

    /// Field evolution timestep.
    /// Default: 0.01.
    pub dt: f64,

    /// Field evolution steps per `evolve` call.
    /// Default: 1.
    pub steps: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            selection: SelectionWeights::default(),
            grid: GridConfig::default(),
            dt: 0.01,
            steps: 1,
        }
    }
}

impl KernelConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> AxResult<()> {
        self.selection.validate()?;
        self.grid.validate()?;
        if !self.dt.is_finite() {
            return Err(AxError::Config(format!("dt must be finite, got {}", self.dt)));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> AxResult<Self> {
        serde_json::from_str(json).map_err(|e| AxError::Config(format!("JSON parse error: {e}")))
    }
}
