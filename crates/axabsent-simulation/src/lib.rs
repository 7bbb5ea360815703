// ─────────────────────────────────────────────────────────────────────
// AxAbsEnt Kernel — Simulation Engines
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Time-evolution engines: discrete source/target relaxation dynamics
//! and a 2-D complex field evolved by a finite-difference Laplacian.
//!
//! Both engines are single-threaded, deterministic, and own their data;
//! separate instances share no mutable state.

pub mod dynamics;
pub mod quantum;

#[cfg(test)]
mod tests_proptest;

pub use dynamics::{DynamicSimulator, EntityRole, RELAXATION_RATE};
pub use quantum::QuantumFieldSimulator;
