//! Honest sumcheck prover, used only to generate round messages for tests.

use crate::base::{
    polynomial::interpolate::interpolate_evaluations_to_reverse_coefficients,
    proof::Keccak256Transcript, scalar::BNScalar,
};
use alloc::{vec, vec::Vec};
use num_traits::Zero;

/// Prover-side state for a polynomial given as a sum of products of dense
/// multilinear extensions: `sum_k coefficient_k * prod_j mle[indices_k[j]]`.
pub(crate) struct ProverState {
    pub list_of_products: Vec<(BNScalar, Vec<usize>)>,
    pub flattened_ml_extensions: Vec<Vec<BNScalar>>,
    pub num_vars: usize,
    pub max_multiplicands: usize,
    round: usize,
}

impl ProverState {
    pub fn new(
        list_of_products: Vec<(BNScalar, Vec<usize>)>,
        flattened_ml_extensions: Vec<Vec<BNScalar>>,
        num_vars: usize,
    ) -> Self {
        assert!(num_vars > 0, "attempt to prove a constant");
        for mle in &flattened_ml_extensions {
            assert_eq!(mle.len(), 1 << num_vars);
        }
        let max_multiplicands = list_of_products
            .iter()
            .map(|(_, product)| product.len())
            .max()
            .unwrap_or(0);
        ProverState {
            list_of_products,
            flattened_ml_extensions,
            num_vars,
            max_multiplicands,
            round: 0,
        }
    }
}

fn in_place_fix_variable(multiplicand: &mut [BNScalar], r: BNScalar, num_vars: usize) {
    assert!(num_vars > 0, "invalid size of partial point");
    for b in 0..(1 << num_vars) {
        let left = multiplicand[b << 1];
        let right = multiplicand[(b << 1) + 1];
        multiplicand[b] = left + r * (right - left);
    }
}

/// Produces the evaluations of this round's univariate polynomial at
/// `0..=degree`, first folding the previous round's challenge into every
/// multiplicand.
pub(crate) fn prove_round(prover_state: &mut ProverState, r_maybe: &Option<BNScalar>) -> Vec<BNScalar> {
    if let Some(r) = r_maybe {
        assert!(prover_state.round != 0, "first round should be prover first");
        for multiplicand in &mut prover_state.flattened_ml_extensions {
            in_place_fix_variable(
                multiplicand,
                *r,
                prover_state.num_vars - prover_state.round,
            );
        }
    } else {
        assert!(prover_state.round == 0, "verifier message is empty");
    }

    prover_state.round += 1;
    assert!(prover_state.round <= prover_state.num_vars, "prover is not active");

    let degree = prover_state.max_multiplicands;
    let round_length = 1usize << (prover_state.num_vars - prover_state.round);

    let mut sums = vec![BNScalar::zero(); degree + 1];
    for (coefficient, multiplicand_indices) in &prover_state.list_of_products {
        for b in 0..round_length {
            let mut products = vec![*coefficient; degree + 1];
            for &multiplicand_index in multiplicand_indices {
                let table = &prover_state.flattened_ml_extensions[multiplicand_index];
                // table[2b] * (1 - t) + table[2b + 1] * t == table[2b] + t * step
                let mut start = table[b << 1];
                let step = table[(b << 1) + 1] - start;
                products.iter_mut().take(degree).for_each(|product| {
                    *product *= start;
                    start += step;
                });
                products[degree] *= start;
            }
            sums.iter_mut().zip(&products).for_each(|(sum, product)| *sum += *product);
        }
    }
    sums
}

/// Runs the full prover against the transcript, returning the proof bytes in
/// wire format together with the evaluation point the transcript produced.
pub(crate) fn prove_sumcheck(
    transcript: &mut Keccak256Transcript,
    mut state: ProverState,
) -> (Vec<u8>, Vec<BNScalar>) {
    let num_vars = state.num_vars;
    let mut r = None;
    let mut evaluation_point = Vec::with_capacity(num_vars);
    let mut coefficients = Vec::new();
    for _ in 0..num_vars {
        let round_evaluations = prove_round(&mut state, &r);
        let round_coefficients =
            interpolate_evaluations_to_reverse_coefficients(&round_evaluations);
        transcript.append_scalars(&round_coefficients);
        let challenge = transcript.draw_challenge();
        evaluation_point.push(challenge);
        r = Some(challenge);
        coefficients.extend(round_coefficients);
    }
    let mut bytes = Vec::with_capacity(8 + 32 * coefficients.len());
    bytes.extend_from_slice(&(coefficients.len() as u64).to_be_bytes());
    for coefficient in &coefficients {
        bytes.extend_from_slice(&coefficient.to_be_bytes());
    }
    (bytes, evaluation_point)
}
