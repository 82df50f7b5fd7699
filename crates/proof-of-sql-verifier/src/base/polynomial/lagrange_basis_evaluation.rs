use core::ops::{Add, Mul, Sub};
use num_traits::{One, Zero};

/// Given a point with `nu` entries, evaluates the sum of the first `length`
/// multilinear Lagrange basis polynomials of the `2^nu` hypercube at that
/// point. That is:
/// ```text
/// (1-a[0])(1-a[1])...(1-a[nu-1]) +
/// (a[0])(1-a[1])...(1-a[nu-1]) +
/// (1-a[0])(a[1])...(1-a[nu-1]) + ...
/// ```
/// truncated after `length` terms. If `length` covers the whole hypercube
/// the result is exactly one.
pub fn compute_truncated_lagrange_basis_sum<F>(length: u64, point: &[F]) -> F
where
    F: One + Zero + Mul<Output = F> + Sub<Output = F> + Copy,
{
    if point.len() < 64 && length >= (1u64 << point.len()) {
        F::one()
    } else {
        point
            .iter()
            .enumerate()
            .fold(F::zero(), |chi, (i, &alpha)| {
                let bit = if i < 64 { (length >> i) & 1 } else { 0 };
                if bit == 0 {
                    chi * (F::one() - alpha)
                } else {
                    F::one() - (F::one() - chi) * alpha
                }
            })
    }
}

/// Computes `sum A[i] * B[i] for i in 0..length` where `A` and `B` are the
/// Lagrange basis evaluation vectors of the two points.
pub fn compute_truncated_lagrange_basis_inner_product<F>(length: u64, a: &[F], b: &[F]) -> F
where
    F: One + Zero + Mul<Output = F> + Add<Output = F> + Sub<Output = F> + Copy,
{
    compute_truncated_lagrange_basis_inner_product_impl(length as u128, a, b).0
}

// The returned value is (part, full): `full` is what the result would be
// without truncation, which the recursion needs to extend the first half of
// the hypercube.
/// # Panics
/// Requires `a` and `b` to have the same length.
fn compute_truncated_lagrange_basis_inner_product_impl<F>(
    part_length: u128,
    a: &[F],
    b: &[F],
) -> (F, F)
where
    F: One + Zero + Mul<Output = F> + Add<Output = F> + Sub<Output = F> + Copy,
{
    let nu = a.len();
    assert_eq!(nu, b.len());
    if nu == 0 {
        if part_length >= 1 {
            (F::one(), F::one())
        } else {
            (F::zero(), F::one())
        }
    } else {
        // The value multiplying every element of the first (resp. second)
        // half of the imaginary full evaluation vector.
        let first_half_term = (F::one() - a[nu - 1]) * (F::one() - b[nu - 1]);
        let second_half_term = a[nu - 1] * b[nu - 1];
        let half_full_length = 1u128 << (nu - 1);

        let sub_part_length = if part_length >= half_full_length {
            part_length - half_full_length
        } else {
            part_length
        };
        let (sub_part, sub_full) = compute_truncated_lagrange_basis_inner_product_impl(
            sub_part_length,
            &a[..nu - 1],
            &b[..nu - 1],
        );

        let part = if part_length >= half_full_length {
            sub_full * first_half_term + sub_part * second_half_term
        } else {
            sub_part * first_half_term
        };
        let full = sub_full * (first_half_term + second_half_term);
        (part, full)
    }
}

/// Evaluates the MLE of the row-index column `(0, 1, 2, ...)` of the given
/// length at the point. That is, `sum_{j < length} j * chi_j(point)`.
pub fn compute_rho_eval<F>(length: u64, point: &[F]) -> F
where
    F: One + Zero + Mul<Output = F> + Add<Output = F> + Sub<Output = F> + From<u64> + Copy,
{
    let full_length = if point.len() < 128 {
        1u128 << point.len()
    } else {
        u128::MAX
    };
    compute_rho_eval_impl((length as u128).min(full_length), point).0
}

// The returned value is (rho_part, rho_full, chi_part, chi_full): the
// truncated and full row-index sums, plus the matching chi sums the
// second-half terms need to offset row indexes by the half length.
fn compute_rho_eval_impl<F>(part_length: u128, point: &[F]) -> (F, F, F, F)
where
    F: One + Zero + Mul<Output = F> + Add<Output = F> + Sub<Output = F> + From<u64> + Copy,
{
    let nu = point.len();
    if nu == 0 {
        // The single basis element has row index zero.
        if part_length >= 1 {
            (F::zero(), F::zero(), F::one(), F::one())
        } else {
            (F::zero(), F::zero(), F::zero(), F::one())
        }
    } else {
        let x = point[nu - 1];
        let one_minus_x = F::one() - x;
        let half_full_length = 1u128 << (nu - 1);
        // Row indexes in the second half are the sub-cube indexes shifted by
        // the half length.
        let half_offset = F::from(half_full_length as u64);

        let sub_part_length = if part_length >= half_full_length {
            part_length - half_full_length
        } else {
            part_length
        };
        let (sub_rho_part, sub_rho_full, sub_chi_part, sub_chi_full) =
            compute_rho_eval_impl(sub_part_length, &point[..nu - 1]);

        let (rho_part, chi_part) = if part_length >= half_full_length {
            (
                sub_rho_full * one_minus_x + (sub_rho_part + half_offset * sub_chi_part) * x,
                sub_chi_full * one_minus_x + sub_chi_part * x,
            )
        } else {
            (sub_rho_part * one_minus_x, sub_chi_part * one_minus_x)
        };
        let rho_full = sub_rho_full * one_minus_x + (sub_rho_full + half_offset * sub_chi_full) * x;
        let chi_full = sub_chi_full;
        (rho_part, rho_full, chi_part, chi_full)
    }
}
