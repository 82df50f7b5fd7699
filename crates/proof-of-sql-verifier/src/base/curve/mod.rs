//! BN254 curve operations behind the same seams the on-chain verifier has:
//! point addition, scalar multiplication, and a two-pair pairing check, each
//! validating its inputs the way the precompiles do.

mod operation;
pub use operation::{ec_add, ec_mul, pairing_check_two};

mod point;
pub use point::{g1_from_words, g1_to_words, read_g1_array, read_g1_points};
