// ─────────────────────────────────────────────────────────────────────
// AxAbsEnt Kernel — Types
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Error hierarchy and configuration shared by every AxAbsEnt crate.

pub mod config;
pub mod error;

pub use config::{GridConfig, KernelConfig, SelectionWeights};
pub use error::{AxError, AxResult};
