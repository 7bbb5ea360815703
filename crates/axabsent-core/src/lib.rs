// ─────────────────────────────────────────────────────────────────────
// AxAbsEnt Kernel — Core Algebra
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Entity/interaction algebra of the AxAbsEnt kernel.
//!
//! - `Absolute`: identity + symmetric signature + state + properties
//! - `Interaction`: frozen linear operator between two entities
//! - `Mediator`: derives operators from signatures alone
//! - `Selection`: action/information ranking heuristic
//!
//! # Invariants
//!
//! 1. **Signatures are symmetric**: `set_signature` rejects non-square or
//!    non-symmetric matrices and never symmetrizes them implicitly.
//!
//! 2. **State matches signature**: `state.len() == signature.nrows()`
//!    after every mutation of an `Absolute`.
//!
//! 3. **Interactions are frozen**: entities are deep-copied at
//!    construction; later edits to the originals are invisible.
//!
//! 4. **Composition reads right-to-left**: `later.compose(&earlier)` means
//!    "earlier, then later".

pub mod absolute;
pub mod interaction;
pub mod mediator;
pub mod selection;

#[cfg(test)]
mod tests_proptest;

pub use absolute::Absolute;
pub use interaction::Interaction;
pub use mediator::Mediator;
pub use selection::Selection;
