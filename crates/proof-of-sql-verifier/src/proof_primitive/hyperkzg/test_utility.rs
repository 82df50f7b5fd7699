//! Honest HyperKZG prover over a setup with a known `tau`, for tests only.
//!
//! With `tau` in hand a KZG commitment to `p` is just `G * p(tau)`, so the
//! whole prover reduces to polynomial arithmetic over the scalar field.

use super::HyperKzgVerifierSetup;
use crate::base::{
    curve::g1_to_words,
    proof::Keccak256Transcript,
    scalar::BNScalar,
};
use alloc::{vec, vec::Vec};
use ark_bn254::{G1Affine, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use num_traits::{One, Zero};

pub(crate) struct TestKzgSetup {
    pub tau: BNScalar,
    pub setup: HyperKzgVerifierSetup,
}

/// A verifier setup whose `tau` the tests know.
pub(crate) fn test_kzg_setup(tau_value: u64) -> TestKzgSetup {
    let tau = BNScalar::from(tau_value);
    TestKzgSetup {
        tau,
        setup: HyperKzgVerifierSetup {
            g: G1Affine::generator(),
            h: G2Affine::generator(),
            tau_h: (G2Affine::generator() * tau.0).into_affine(),
        },
    }
}

/// KZG commitment to the ascending-coefficient polynomial under a known
/// `tau`: simply `G * p(tau)`.
pub(crate) fn commit(tau: BNScalar, coefficients: &[BNScalar]) -> G1Affine {
    (G1Affine::generator() * evaluate_poly(coefficients, tau).0).into_affine()
}

fn evaluate_poly(ascending_coefficients: &[BNScalar], x: BNScalar) -> BNScalar {
    ascending_coefficients
        .iter()
        .rev()
        .fold(BNScalar::zero(), |acc, &coefficient| acc * x + coefficient)
}

/// `(p(X) - p(u)) / (X - u)` by synthetic division, ascending coefficients.
fn quotient_at(dividend: &[BNScalar], u: BNScalar) -> Vec<BNScalar> {
    let n = dividend.len();
    let mut quotient = vec![BNScalar::zero(); n.saturating_sub(1)];
    let mut carry = BNScalar::zero();
    for k in (1..n).rev() {
        carry = carry * u + dividend[k];
        quotient[k - 1] = carry;
    }
    quotient
}

fn push_point(bytes: &mut Vec<u8>, point: &G1Affine) {
    let [x, y] = g1_to_words(point);
    bytes.extend_from_slice(&x);
    bytes.extend_from_slice(&y);
}

/// Produces HyperKZG proof bytes opening the polynomial with ascending
/// coefficients `a` (length `2^ell`) at `point`, driving the transcript
/// exactly the way the verifier replays it.
pub(crate) fn prove_evaluation(
    transcript: &mut Keccak256Transcript,
    a: &[BNScalar],
    point: &[BNScalar],
    tau: BNScalar,
) -> Vec<u8> {
    let ell = point.len();
    assert!(ell > 0);
    assert_eq!(a.len(), 1 << ell);
    let one = BNScalar::one();

    // Fold with (1 - x_i) on even coefficients and x_i on odd ones; the
    // fold binds the lowest remaining variable, matching the evaluation
    // vector's bit order.
    let mut polys = vec![a.to_vec()];
    for &x in &point[..ell - 1] {
        let next: Vec<BNScalar> = polys
            .last()
            .unwrap()
            .chunks_exact(2)
            .map(|pair| pair[0] * (one - x) + pair[1] * x)
            .collect();
        polys.push(next);
    }

    let com: Vec<G1Affine> = polys[1..].iter().map(|p| commit(tau, p)).collect();
    transcript.append_points(&com);
    let r = transcript.draw_challenge();

    let openings = [r, -r, r * r];
    let v: Vec<BNScalar> = polys
        .iter()
        .flat_map(|p| openings.iter().map(|&u| evaluate_poly(p, u)))
        .collect();
    transcript.append_scalars(&v);
    let q = transcript.draw_challenge();

    // B = sum q^i * p_i, padded with zeros to the length of p_0.
    let mut b_poly = vec![BNScalar::zero(); a.len()];
    let mut q_power = one;
    for p in &polys {
        for (target, &coefficient) in b_poly.iter_mut().zip(p) {
            *target += q_power * coefficient;
        }
        q_power = q_power * q;
    }
    let w: Vec<G1Affine> = openings
        .iter()
        .map(|&u| commit(tau, &quotient_at(&b_poly, u)))
        .collect();
    transcript.append_points(&w);
    transcript.draw_challenge();

    let mut bytes = Vec::new();
    for p in &com {
        push_point(&mut bytes, p);
    }
    for scalar in &v {
        bytes.extend_from_slice(&scalar.to_be_bytes());
    }
    for p in &w {
        push_point(&mut bytes, p);
    }
    bytes
}

/// Batched counterpart of [`prove_evaluation`]: draws the batching factors
/// the verifier will draw, folds the columns, and opens the fold.
pub(crate) fn prove_batched_evaluations(
    transcript: &mut Keccak256Transcript,
    columns: &[Vec<BNScalar>],
    point: &[BNScalar],
    tau: BNScalar,
) -> Vec<u8> {
    let batching_factors = transcript.draw_challenges(columns.len());
    let mut folded = vec![BNScalar::zero(); 1 << point.len()];
    for (column, factor) in columns.iter().zip(&batching_factors) {
        for (target, &value) in folded.iter_mut().zip(column) {
            *target += *factor * value;
        }
    }
    prove_evaluation(transcript, &folded, point, tau)
}
