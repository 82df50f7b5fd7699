//! HyperKZG polynomial commitment scheme, verification side only.
//!
//! A batch of claimed multilinear evaluations at a shared point is folded
//! into a single commitment/evaluation pair by a transcript-drawn random
//! linear combination, then checked with one BN254 pairing.

mod public_setup;
pub use public_setup::HyperKzgVerifierSetup;

mod verifier;
pub use verifier::{verify_batched_evaluations, verify_evaluation};

#[cfg(test)]
pub(crate) mod test_utility;
