use alloc::{vec, vec::Vec};
use core::{
    iter::Product,
    ops::{Add, Mul},
};
use num_traits::{Inv, Zero};

/// Let `d` be `evals.len() - 1` and let `f` be the polynomial such that
/// `f(i) = evals[i]`. The output is the coefficient vector of `f` with the
/// leading coefficient first, matching the sumcheck wire ordering.
pub fn interpolate_evaluations_to_reverse_coefficients<S>(evals: &[S]) -> Vec<S>
where
    S: Zero + Copy + From<i32> + Mul<Output = S> + Add<Output = S> + Inv<Output = Option<S>> + Product,
{
    let n = evals.len().max(1) - 1;
    evals
        .iter()
        .enumerate()
        .map(|(idx, &eval_i)| {
            let i = i32::try_from(idx).expect("degree fits i32");
            let mut scaled_lagrange_basis = vec![S::zero(); n + 1];
            // First compute the constant factor of this lagrange basis polynomial:
            scaled_lagrange_basis[0] = (i - n as i32..0)
                .chain(1..=i)
                .map(S::from)
                .product::<S>()
                .inv()
                .expect("distinct interpolation nodes")
                * eval_i;
            // Then multiply by the appropriate linear terms:
            // for j in 0..=n if j != i {
            for neg_j in (-(n as i32)..-i).chain(1 - i..=0).map(S::from) {
                for k in (0..n).rev() {
                    scaled_lagrange_basis[k + 1] =
                        scaled_lagrange_basis[k + 1] + neg_j * scaled_lagrange_basis[k];
                }
            }
            scaled_lagrange_basis
        })
        // Finally, sum up all the resulting polynomials
        .reduce(|mut acc, b| {
            acc.iter_mut().zip(b).for_each(|(a, b)| *a = *a + b);
            acc
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::interpolate_evaluations_to_reverse_coefficients;
    use crate::base::scalar::BNScalar;

    fn evaluate_leading_first(coefficients: &[BNScalar], x: BNScalar) -> BNScalar {
        coefficients
            .iter()
            .fold(BNScalar::from(0_u64), |acc, &c| acc * x + c)
    }

    #[test]
    fn we_can_interpolate_evaluations_into_leading_first_coefficients() {
        // f(x) = 2x^2 + 3x + 5 evaluated at 0, 1, 2
        let evals = [
            BNScalar::from(5_u64),
            BNScalar::from(10_u64),
            BNScalar::from(19_u64),
        ];
        let coefficients = interpolate_evaluations_to_reverse_coefficients(&evals);
        assert_eq!(
            coefficients,
            vec![
                BNScalar::from(2_u64),
                BNScalar::from(3_u64),
                BNScalar::from(5_u64)
            ]
        );
        assert_eq!(
            evaluate_leading_first(&coefficients, BNScalar::from(7_u64)),
            BNScalar::from(2 * 49 + 3 * 7 + 5_u64)
        );
    }
}
