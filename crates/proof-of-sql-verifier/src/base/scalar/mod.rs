//! The BN254 scalar field, the field every value in a proof lives in.

mod bn_scalar;
pub use bn_scalar::{BNScalar, MODULUS_MASK};
