// ─────────────────────────────────────────────────────────────────────
// AxAbsEnt Kernel — Mathematics
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Numeric helpers on top of `nalgebra`: rank-2 tensor operations and
//! transfinite (ω-indexed) sequence utilities.

pub mod tensor;
pub mod transfinite;

pub use tensor::{double_contraction, frobenius_overlap, gram_trace, normalize, outer, trace};
pub use transfinite::{is_finite, omega_normalize, omega_sum, ordinal_limit, OMEGA};
