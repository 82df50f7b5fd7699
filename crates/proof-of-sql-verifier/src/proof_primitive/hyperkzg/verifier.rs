use super::HyperKzgVerifierSetup;
use crate::base::{
    byte::ByteReader,
    curve::{ec_add, ec_mul, pairing_check_two, read_g1_points},
    proof::{Keccak256Transcript, VerificationError},
    scalar::BNScalar,
};
use ark_bn254::G1Affine;
use ark_ec::AffineRepr;
use num_traits::{One, Zero};

/// Verifies a batch of claimed multilinear evaluations at a shared point.
///
/// The commitments and claims are folded with transcript-drawn weights into
/// one commitment/evaluation pair, which is then checked by a single
/// HyperKZG opening read from the remainder of the proof stream.
#[tracing::instrument(
    name = "hyperkzg::verify_batched_evaluations",
    level = "debug",
    skip_all,
    err
)]
pub fn verify_batched_evaluations(
    transcript: &mut Keccak256Transcript,
    reader: &mut ByteReader,
    commitments: &[G1Affine],
    evaluations: &[BNScalar],
    point: &[BNScalar],
    setup: &HyperKzgVerifierSetup,
) -> Result<(), VerificationError> {
    if commitments.len() != evaluations.len() {
        return Err(VerificationError::PcsBatchLengthMismatch);
    }
    let batching_factors = transcript.draw_challenges(evaluations.len());
    let mut combined_commitment = G1Affine::identity();
    for (commitment, factor) in commitments.iter().zip(&batching_factors) {
        combined_commitment = ec_add(&combined_commitment, &ec_mul(commitment, factor)?)?;
    }
    let combined_evaluation = evaluations
        .iter()
        .zip(&batching_factors)
        .map(|(&evaluation, &factor)| evaluation * factor)
        .sum();
    verify_evaluation(
        transcript,
        reader,
        &combined_commitment,
        combined_evaluation,
        point,
        setup,
    )
}

/// HyperKZG verification of one claimed evaluation at `point`.
///
/// The proof shape is fixed by the point length `ell`: `ell - 1` folded
/// commitments, `ell` evaluation triples at `(r, -r, r^2)`, and three KZG
/// witness points; there are no inner length prefixes, and the stream must
/// end exactly after the witnesses.
pub fn verify_evaluation(
    transcript: &mut Keccak256Transcript,
    reader: &mut ByteReader,
    commitment: &G1Affine,
    evaluation: BNScalar,
    point: &[BNScalar],
    setup: &HyperKzgVerifierSetup,
) -> Result<(), VerificationError> {
    let ell = point.len();
    if ell == 0 {
        return Err(VerificationError::HyperKzgEmptyPoint);
    }

    let com = read_g1_points(reader, ell - 1)
        .map_err(|_| VerificationError::HyperKzgProofSizeMismatch)?;
    transcript.append_points(&com);
    let r = transcript.draw_challenge();

    let v = reader
        .read_scalars(3 * ell)
        .map_err(|_| VerificationError::HyperKzgProofSizeMismatch)?;
    transcript.append_scalars(&v);
    let q = transcript.draw_challenge();

    let w =
        read_g1_points(reader, 3).map_err(|_| VerificationError::HyperKzgProofSizeMismatch)?;
    transcript.append_points(&w);
    let d = transcript.draw_challenge();

    if !reader.is_empty() {
        return Err(VerificationError::HyperKzgProofSizeMismatch);
    }

    // b = sum_{i < ell} sum_{j < 3} q^i * d^j * v[i][j], by bivariate Horner
    // from the leading row down.
    let b = v.chunks_exact(3).rev().fold(BNScalar::zero(), |acc, row| {
        acc * q + ((row[2] * d + row[1]) * d + row[0])
    });

    // Each folded polynomial must agree with its predecessor's evaluations
    // at r and -r; the last one folds into the claimed evaluation.
    let one = BNScalar::one();
    for (i, (&x, row)) in point.iter().zip(v.chunks_exact(3)).enumerate() {
        let v_next2 = if i + 1 < ell {
            v[3 * (i + 1) + 2]
        } else {
            evaluation
        };
        let check =
            r * (v_next2 + v_next2 + (x - one) * (row[1] + row[0])) + x * (row[1] - row[0]);
        if !check.is_zero() {
            return Err(VerificationError::HyperKzgInconsistentV);
        }
    }

    // L = (1 + d + d^2)(C + sum q^{i+1} com[i]) - b*G
    //     + r*w[0] - d*r*w[1] + (d*r)^2*w[2]
    let mut folded_commitment = *commitment;
    let mut q_power = one;
    for com_point in &com {
        q_power = q_power * q;
        folded_commitment = ec_add(&folded_commitment, &ec_mul(com_point, &q_power)?)?;
    }
    let d_r = d * r;
    let mut left = ec_mul(&folded_commitment, &(one + d + d * d))?;
    left = ec_add(&left, &ec_mul(&setup.g, &(-b))?)?;
    left = ec_add(&left, &ec_mul(&w[0], &r)?)?;
    left = ec_add(&left, &ec_mul(&w[1], &(-d_r))?)?;
    left = ec_add(&left, &ec_mul(&w[2], &(d_r * d_r))?)?;

    // R = w[0] + d*w[1] + d^2*w[2]
    let mut right = w[0];
    right = ec_add(&right, &ec_mul(&w[1], &d)?)?;
    right = ec_add(&right, &ec_mul(&w[2], &(d * d))?)?;

    // e(L, -H) * e(R, tau*H) == 1
    let neg_h = -setup.h;
    if pairing_check_two(&left, &neg_h, &right, &setup.tau_h)? {
        Ok(())
    } else {
        Err(VerificationError::HyperKzgPairingCheckFailed)
    }
}
