// ─────────────────────────────────────────────────────────────────────
// AxAbsEnt Kernel — Discrete Dynamics Engine
// ─────────────────────────────────────────────────────────────────────
//! Relaxes a target entity toward the interaction-projected state:
//!
//!   δ      = O · s_source − s_target
//!   s'     = s_target + η · δ          (η = 0.05, fixed)
//!   F_last = δ                         (pre-update delta)
//!
//! Every step appends the new target state to the history, from which
//! the resonance signature (mean step-to-step displacement) is derived.

use std::fmt;
use std::str::FromStr;

use nalgebra::DVector;

use axabsent_core::{Absolute, Interaction};
use axabsent_types::{AxError, AxResult};

/// Fixed relaxation rate η of `step`.
pub const RELAXATION_RATE: f64 = 0.05;

/// Which of the two simulated entities a query refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRole {
    Source,
    Target,
}

impl EntityRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityRole::Source => "source",
            EntityRole::Target => "target",
        }
    }
}

impl fmt::Display for EntityRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityRole {
    type Err = AxError;

    fn from_str(s: &str) -> AxResult<Self> {
        match s {
            "source" => Ok(EntityRole::Source),
            "target" => Ok(EntityRole::Target),
            other => Err(AxError::invalid(format!("unknown entity name: {other}"))),
        }
    }
}

/// Source/target relaxation simulator.
///
/// Holds copies of the entities and interaction it was initialized with.
#[derive(Debug, Clone)]
pub struct DynamicSimulator {
    source: Absolute,
    target: Absolute,
    interaction: Interaction,
    target_state_history: Vec<DVector<f64>>,
    last_force: DVector<f64>,
}

impl DynamicSimulator {
    /// Create an initialized simulator. See [`DynamicSimulator::initialize`].
    pub fn new(entities: &[Absolute], interaction: &Interaction) -> AxResult<Self> {
        let (source, target) = Self::validate(entities, interaction)?;
        let dim = target.dim();
        Ok(Self {
            source,
            target,
            interaction: interaction.clone(),
            target_state_history: Vec::new(),
            last_force: DVector::zeros(dim),
        })
    }

    /// Re-initialize from `[source, target]` and an interaction.
    ///
    /// Stores copies, clears history and zeroes the force. On failure the
    /// simulator is left untouched.
    pub fn initialize(&mut self, entities: &[Absolute], interaction: &Interaction) -> AxResult<()> {
        *self = Self::new(entities, interaction)?;
        Ok(())
    }

    fn validate(entities: &[Absolute], interaction: &Interaction) -> AxResult<(Absolute, Absolute)> {
        let [source, target] = entities else {
            return Err(AxError::invalid(format!(
                "must provide exactly two Absolutes (source, target), got {}",
                entities.len()
            )));
        };
        if target.dim() != interaction.operator().nrows() {
            return Err(AxError::invalid(format!(
                "target state dimension {} != interaction output dimension {}",
                target.dim(),
                interaction.operator().nrows()
            )));
        }
        Ok((source.clone(), target.clone()))
    }

    /// Advance one timestep.
    ///
    /// Cannot fail once initialization has succeeded: the target/operator
    /// dimensions were checked there.
    pub fn step(&mut self) -> AxResult<()> {
        let projected = self.interaction.apply();
        let current = self.target.state();
        let delta = projected - current;
        let next = current + &delta * RELAXATION_RATE;

        log::trace!(
            "dynamics step {}: |delta|={:.6}",
            self.target_state_history.len() + 1,
            delta.norm()
        );

        self.target.set_state(next.clone())?;
        self.target_state_history.push(next);
        self.last_force = delta;
        Ok(())
    }

    /// Run exactly `steps` steps.
    pub fn run(&mut self, steps: usize) -> AxResult<()> {
        for _ in 0..steps {
            self.step()?;
        }
        Ok(())
    }

    /// Current state of the named entity.
    pub fn get_state(&self, role: EntityRole) -> &DVector<f64> {
        match role {
            EntityRole::Source => self.source.state(),
            EntityRole::Target => self.target.state(),
        }
    }

    /// Most recent pre-update delta. Only available for the target.
    pub fn get_emergent_force(&self, role: EntityRole) -> AxResult<&DVector<f64>> {
        match role {
            EntityRole::Target => Ok(&self.last_force),
            EntityRole::Source => Err(AxError::invalid("force only available for target")),
        }
    }

    /// Mean Euclidean distance between consecutive history entries.
    ///
    /// 0.0 with fewer than two entries. Only available for the target.
    pub fn get_resonance_signature(&self, role: EntityRole) -> AxResult<f64> {
        if role != EntityRole::Target {
            return Err(AxError::invalid("resonance only available for target"));
        }
        let history = &self.target_state_history;
        if history.len() < 2 {
            return Ok(0.0);
        }
        let total: f64 = history.windows(2).map(|w| (&w[1] - &w[0]).norm()).sum();
        Ok(total / (history.len() - 1) as f64)
    }

    /// Clear history and force.
    ///
    /// The target state is NOT rolled back to its initialized value.
    pub fn reset(&mut self) {
        self.target_state_history.clear();
        self.last_force = DVector::zeros(self.target.dim());
    }

    pub fn history(&self) -> &[DVector<f64>] {
        &self.target_state_history
    }

    pub fn step_count(&self) -> usize {
        self.target_state_history.len()
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }
}
