use crate::base::scalar::BNScalar;
use num_traits::Zero;

/// Folds a list of values with powers of `beta` by Horner's rule:
/// `sum vals[i] * beta^(n - 1 - i)`, so the first value carries the highest
/// power. The ordering is part of the protocol and must match the prover.
pub fn fold_vals(beta: BNScalar, vals: &[BNScalar]) -> BNScalar {
    vals.iter()
        .fold(BNScalar::zero(), |fold, &val| fold * beta + val)
}
