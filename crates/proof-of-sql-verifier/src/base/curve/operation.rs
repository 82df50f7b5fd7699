use crate::base::{proof::VerificationError, scalar::BNScalar};
use ark_bn254::{Bn254, G1Affine, G2Affine};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use num_traits::Zero;

fn g1_is_valid(point: &G1Affine) -> bool {
    point.is_zero()
        || (point.is_on_curve() && point.is_in_correct_subgroup_assuming_on_curve())
}

fn g2_is_valid(point: &G2Affine) -> bool {
    point.is_zero()
        || (point.is_on_curve() && point.is_in_correct_subgroup_assuming_on_curve())
}

/// Adds two G1 points, rejecting operands that are not on the curve.
pub fn ec_add(a: &G1Affine, b: &G1Affine) -> Result<G1Affine, VerificationError> {
    if !g1_is_valid(a) || !g1_is_valid(b) {
        return Err(VerificationError::InvalidEcAddInputs);
    }
    Ok((a.into_group() + b).into_affine())
}

/// Multiplies a G1 point by a scalar, rejecting operands that are not on
/// the curve.
pub fn ec_mul(point: &G1Affine, scalar: &BNScalar) -> Result<G1Affine, VerificationError> {
    if !g1_is_valid(point) {
        return Err(VerificationError::InvalidEcMulInputs);
    }
    Ok((*point * scalar.0).into_affine())
}

/// Checks `e(a1, a2) * e(b1, b2) == 1`, rejecting operands that are not on
/// their curves.
pub fn pairing_check_two(
    a1: &G1Affine,
    a2: &G2Affine,
    b1: &G1Affine,
    b2: &G2Affine,
) -> Result<bool, VerificationError> {
    if !g1_is_valid(a1) || !g1_is_valid(b1) || !g2_is_valid(a2) || !g2_is_valid(b2) {
        return Err(VerificationError::InvalidEcPairingInputs);
    }
    Ok(Bn254::multi_pairing([*a1, *b1], [*a2, *b2]).is_zero())
}
