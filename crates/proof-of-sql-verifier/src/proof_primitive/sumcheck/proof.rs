use crate::base::{
    byte::ByteReader,
    proof::{Keccak256Transcript, VerificationError},
    scalar::BNScalar,
};
use alloc::vec::Vec;
use num_traits::Zero;

/// The claim a completed sumcheck leaves behind: the aggregated polynomial
/// must evaluate to `expected_evaluation` at `evaluation_point`, and no
/// constraint folded into it may exceed degree `max_degree`.
#[derive(Debug)]
pub struct SumcheckSubclaim {
    pub evaluation_point: Vec<BNScalar>,
    pub expected_evaluation: BNScalar,
    pub max_degree: usize,
}

/// Verifies a sumcheck proof of a zero-sum claim, reading the round
/// coefficients directly from the proof stream.
///
/// The wire format is a `u64` coefficient count followed by that many field
/// words. The count must be a nonzero multiple of `num_variables`; the
/// per-round degree is `count / num_variables - 1`. Round polynomials are
/// leading-coefficient-first, so `p(x)` is a straight Horner pass and
/// `p(0) + p(1)` is the coefficient sum plus the trailing constant.
#[tracing::instrument(name = "sumcheck::verify_sumcheck_proof", level = "debug", skip_all, err)]
pub fn verify_sumcheck_proof(
    transcript: &mut Keccak256Transcript,
    reader: &mut ByteReader,
    num_variables: usize,
) -> Result<SumcheckSubclaim, VerificationError> {
    let coefficients = reader.read_scalar_array()?;
    if num_variables == 0 || coefficients.is_empty() || coefficients.len() % num_variables != 0 {
        return Err(VerificationError::InvalidSumcheckProofSize);
    }
    let max_degree = coefficients.len() / num_variables - 1;

    let mut evaluation_point = Vec::with_capacity(num_variables);
    let mut expected_evaluation = BNScalar::zero();
    for round_index in 0..num_variables {
        let start_index = round_index * (max_degree + 1);
        let round_coefficients = &coefficients[start_index..=start_index + max_degree];
        transcript.append_scalars(round_coefficients);
        let round_evaluation_point = transcript.draw_challenge();
        evaluation_point.push(round_evaluation_point);

        let mut round_evaluation = round_coefficients[0];
        let mut actual_sum = round_evaluation + round_coefficients[max_degree];
        for &coefficient in &round_coefficients[1..] {
            round_evaluation = round_evaluation * round_evaluation_point + coefficient;
            actual_sum += coefficient;
        }
        if actual_sum != expected_evaluation {
            return Err(VerificationError::RoundEvaluationMismatch);
        }
        expected_evaluation = round_evaluation;
    }

    Ok(SumcheckSubclaim {
        evaluation_point,
        expected_evaluation,
        max_degree,
    })
}
