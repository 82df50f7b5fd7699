use super::{provable_query_result::verify_result_columns, VerificationBuilder};
use crate::{
    base::{
        byte::ByteReader,
        curve::read_g1_array,
        math::log2_up,
        polynomial::{
            compute_rho_eval, compute_truncated_lagrange_basis_inner_product,
            compute_truncated_lagrange_basis_sum,
        },
        proof::{Keccak256Transcript, VerificationError},
        scalar::BNScalar,
    },
    proof_primitive::{
        hyperkzg::{verify_batched_evaluations, HyperKzgVerifierSetup},
        sumcheck::verify_sumcheck_proof,
    },
    sql::proof_plans::DynProofPlan,
};
use alloc::vec::Vec;
use ark_bn254::G1Affine;
use num_traits::Zero;

/// Challenge and constraint counts are claimed by the prover and drawn as
/// transcript challenges; nothing in a real proof comes close to this cap.
const MAX_CHALLENGE_COUNT: u64 = 1 << 16;

/// Skips the table/column/output names prefix of the plan. The verifier
/// never interprets the names, but the prefix is part of the hashed plan
/// bytes and must be walked to find the plan body.
pub(crate) fn skip_names_prefix(reader: &mut ByteReader) -> Result<(), VerificationError> {
    let table_count = reader.read_u64()?;
    for _ in 0..table_count {
        let length = reader.read_array_length(1)?;
        reader.read_bytes(length)?;
    }
    let column_count = reader.read_u64()?;
    for _ in 0..column_count {
        reader.read_u64()?; // table index
        let length = reader.read_array_length(1)?;
        reader.read_bytes(length)?;
        reader.read_u32()?; // column type
    }
    let output_count = reader.read_u64()?;
    for _ in 0..output_count {
        let length = reader.read_array_length(1)?;
        reader.read_bytes(length)?;
    }
    Ok(())
}

/// Verifies a query proof end to end.
///
/// Accepts exactly when the prover evaluated the plan honestly against the
/// committed data and the claimed result table is the query's output. The
/// table lengths and column commitments are public inputs supplied by the
/// host; everything else is read from the three byte streams.
///
/// Transcript discipline (the prover must match it bit for bit): the
/// transcript is seeded with the plan bytes, the result bytes, the table
/// lengths as a scalar array, the commitments as a point array (length
/// doubled for the `(x, y)` encoding), and a zero `u64` domain tag. Each
/// proof message is appended as its raw byte span before any challenge
/// depending on it is drawn; the PCS-exposed evaluation arrays use the
/// canonical scalar-array append.
#[tracing::instrument(name = "verify_query", level = "debug", skip_all, err)]
pub fn verify_query(
    plan: &[u8],
    result: &[u8],
    proof: &[u8],
    table_lengths: &[u64],
    commitments: &[G1Affine],
    setup: &HyperKzgVerifierSetup,
) -> Result<(), VerificationError> {
    let mut transcript = Keccak256Transcript::new();
    transcript.append_bytes(plan);
    transcript.append_bytes(result);
    let table_length_scalars: Vec<BNScalar> =
        table_lengths.iter().map(|&length| BNScalar::from(length)).collect();
    transcript.append_scalars(&table_length_scalars);
    transcript.append_points(commitments);
    transcript.append_bytes(&0_u64.to_be_bytes());

    let mut reader = ByteReader::new(proof);

    // First-round message: the proof's shape claims plus the commitments to
    // the prover's first-round columns.
    let mark = reader.offset();
    let range_length = reader.read_u64()?;
    let num_challenges = reader.read_u64()?;
    let chi_lengths = reader.read_u64_array()?;
    let rho_lengths = reader.read_u64_array()?;
    let first_round_commitments = read_g1_array(&mut reader)?;
    transcript.append_bytes(reader.consumed_since(mark));
    if num_challenges > MAX_CHALLENGE_COUNT {
        return Err(VerificationError::UnsupportedProof);
    }
    let challenges = transcript.draw_challenges(num_challenges as usize);

    // Final-round message: the constraint count and the commitments to the
    // prover's final-round columns.
    let mark = reader.offset();
    let num_constraints = reader.read_u64()?;
    let final_round_commitments = read_g1_array(&mut reader)?;
    transcript.append_bytes(reader.consumed_since(mark));
    if num_constraints > MAX_CHALLENGE_COUNT {
        return Err(VerificationError::UnsupportedProof);
    }
    let constraint_multipliers = transcript.draw_challenges(num_constraints as usize);

    let num_variables = log2_up(core::cmp::max(range_length, 2));
    let row_multiplier_challenges = transcript.draw_challenges(num_variables);

    let subclaim = verify_sumcheck_proof(&mut transcript, &mut reader, num_variables)?;
    let evaluation_point = &subclaim.evaluation_point;

    let table_chi_evaluations: Vec<BNScalar> = table_lengths
        .iter()
        .map(|&length| compute_truncated_lagrange_basis_sum(length, evaluation_point))
        .collect();
    let chi_evaluations: Vec<BNScalar> = chi_lengths
        .iter()
        .map(|&length| compute_truncated_lagrange_basis_sum(length, evaluation_point))
        .collect();
    let rho_evaluations: Vec<BNScalar> = rho_lengths
        .iter()
        .map(|&length| compute_rho_eval(length, evaluation_point))
        .collect();
    let row_multipliers_evaluation = compute_truncated_lagrange_basis_inner_product(
        range_length,
        &row_multiplier_challenges,
        evaluation_point,
    );

    // PCS-exposed evaluations, committed to the transcript before any
    // batching weight is drawn.
    let first_round_mles = reader.read_scalar_array()?;
    let column_evaluations = reader.read_scalar_array()?;
    let final_round_mles = reader.read_scalar_array()?;
    transcript.append_scalars(&first_round_mles);
    transcript.append_scalars(&column_evaluations);
    transcript.append_scalars(&final_round_mles);

    let mut builder = VerificationBuilder::new(
        subclaim.expected_evaluation,
        subclaim.max_degree,
        row_multipliers_evaluation,
        challenges,
        first_round_mles.clone(),
        final_round_mles.clone(),
        chi_evaluations,
        rho_evaluations,
        constraint_multipliers,
        column_evaluations.clone(),
        table_chi_evaluations,
    );

    let mut plan_reader = ByteReader::new(plan);
    skip_names_prefix(&mut plan_reader)?;
    let proof_plan = DynProofPlan::try_from_reader(&mut plan_reader)?;
    let output_evaluations = proof_plan.verifier_evaluate(&mut builder)?;
    if !builder.aggregate_evaluation().is_zero() {
        return Err(VerificationError::AggregateEvaluationMismatch);
    }

    verify_result_columns(result, evaluation_point, &output_evaluations)?;

    // Every claimed evaluation is checked against its commitment in one
    // batched opening: first-round, table-column, final-round, in the order
    // the evaluations were read.
    let batch_commitments: Vec<G1Affine> = first_round_commitments
        .iter()
        .chain(commitments)
        .chain(&final_round_commitments)
        .copied()
        .collect();
    let batch_evaluations: Vec<BNScalar> = first_round_mles
        .iter()
        .chain(&column_evaluations)
        .chain(&final_round_mles)
        .copied()
        .collect();
    verify_batched_evaluations(
        &mut transcript,
        &mut reader,
        &batch_commitments,
        &batch_evaluations,
        evaluation_point,
        setup,
    )
}
