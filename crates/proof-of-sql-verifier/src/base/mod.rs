//! Shared primitives: field scalars, byte parsing, the Fiat-Shamir
//! transcript, elliptic-curve operations, and Lagrange-basis evaluation.

pub mod byte;
pub mod curve;
pub mod math;
pub mod polynomial;
pub mod proof;
pub mod scalar;
