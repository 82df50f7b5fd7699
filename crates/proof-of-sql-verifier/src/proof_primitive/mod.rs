//! Proof primitives: the sumcheck verifier and the HyperKZG polynomial
//! commitment scheme batch verifier.

pub mod hyperkzg;
pub mod sumcheck;
