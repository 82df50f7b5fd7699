use super::{
    compute_evaluation_vector, compute_rho_eval, compute_truncated_lagrange_basis_inner_product,
    compute_truncated_lagrange_basis_sum,
};
use crate::base::scalar::BNScalar;
use ark_std::UniformRand;
use num_traits::Zero;

#[test]
fn compute_truncated_lagrange_basis_sum_gives_correct_values_with_0_variables() {
    let point: Vec<BNScalar> = vec![];
    assert_eq!(
        compute_truncated_lagrange_basis_sum(1, &point),
        BNScalar::from(1_u8)
    );
    assert_eq!(
        compute_truncated_lagrange_basis_sum(0, &point),
        BNScalar::from(0_u8)
    );
}

#[test]
fn compute_truncated_lagrange_basis_sum_gives_correct_values_with_1_variable() {
    let point = vec![BNScalar::from(2_u8)];
    assert_eq!(
        compute_truncated_lagrange_basis_sum(2, &point),
        BNScalar::from(1_u8) // This is (1-2) + (2)
    );
    assert_eq!(
        compute_truncated_lagrange_basis_sum(1, &point),
        -BNScalar::from(1_u8) // This is (1-2)
    );
    assert_eq!(
        compute_truncated_lagrange_basis_sum(0, &point),
        BNScalar::from(0_u8)
    );
}

#[test]
fn compute_truncated_lagrange_basis_sum_gives_correct_values_with_2_variables() {
    let point = vec![BNScalar::from(2_u8), BNScalar::from(5_u8)];
    assert_eq!(
        compute_truncated_lagrange_basis_sum(4, &point),
        BNScalar::from(1_u8) // This is (1-2)(1-5)+(2)(1-5)+(1-2)(5)+(2)(5)
    );
    assert_eq!(
        compute_truncated_lagrange_basis_sum(3, &point),
        -BNScalar::from(9_u8) // This is (1-2)(1-5)+(2)(1-5)+(1-2)(5)
    );
    assert_eq!(
        compute_truncated_lagrange_basis_sum(2, &point),
        -BNScalar::from(4_u8) // This is (1-2)(1-5)+(2)(1-5)
    );
    assert_eq!(
        compute_truncated_lagrange_basis_sum(1, &point),
        BNScalar::from(4_u8) // This is (1-2)(1-5)
    );
    assert_eq!(
        compute_truncated_lagrange_basis_sum(0, &point),
        BNScalar::from(0_u8)
    );
}

#[test]
fn compute_rho_eval_gives_correct_values_with_2_variables() {
    let point = vec![BNScalar::from(2_u8), BNScalar::from(5_u8)];
    assert_eq!(
        compute_rho_eval(4, &point),
        BNScalar::from(12_u8) // This is 0*(1-2)(1-5) + 1*(2)(1-5) + 2*(1-2)(5) + 3*(2)(5)
    );
    assert_eq!(
        compute_rho_eval(2, &point),
        -BNScalar::from(8_u8) // This is 0*(1-2)(1-5) + 1*(2)(1-5)
    );
    assert_eq!(compute_rho_eval(0, &point), BNScalar::zero());
}

#[test]
fn the_truncated_sums_match_a_naive_computation_at_every_length() {
    let mut rng = ark_std::test_rng();
    for nu in 0..=5usize {
        let point: Vec<BNScalar> = (0..nu).map(|_| BNScalar(ark_bn254::Fr::rand(&mut rng))).collect();
        let mut basis = vec![BNScalar::zero(); 1 << nu];
        compute_evaluation_vector(&mut basis, &point);
        let mut chi_sum = BNScalar::zero();
        let mut rho_sum = BNScalar::zero();
        for length in 0..=(1u64 << nu) {
            assert_eq!(
                compute_truncated_lagrange_basis_sum(length, &point),
                chi_sum,
                "chi mismatch at nu={nu} length={length}"
            );
            assert_eq!(
                compute_rho_eval(length, &point),
                rho_sum,
                "rho mismatch at nu={nu} length={length}"
            );
            if length < (1u64 << nu) {
                chi_sum += basis[length as usize];
                rho_sum += BNScalar::from(length) * basis[length as usize];
            }
        }
        // Lengths past the hypercube saturate.
        assert_eq!(
            compute_truncated_lagrange_basis_sum((1u64 << nu) + 3, &point),
            BNScalar::from(1_u8)
        );
        assert_eq!(compute_rho_eval((1u64 << nu) + 3, &point), rho_sum);
    }
}

#[test]
fn the_truncated_inner_product_matches_the_evaluation_vectors() {
    let mut rng = ark_std::test_rng();
    for nu in 0..=5usize {
        let a: Vec<BNScalar> = (0..nu).map(|_| BNScalar(ark_bn254::Fr::rand(&mut rng))).collect();
        let b: Vec<BNScalar> = (0..nu).map(|_| BNScalar(ark_bn254::Fr::rand(&mut rng))).collect();
        let mut a_vec = vec![BNScalar::zero(); 1 << nu];
        let mut b_vec = vec![BNScalar::zero(); 1 << nu];
        compute_evaluation_vector(&mut a_vec, &a);
        compute_evaluation_vector(&mut b_vec, &b);
        for length in 0..=(1u64 << nu) {
            let expected: BNScalar = a_vec[..length as usize]
                .iter()
                .zip(&b_vec[..length as usize])
                .map(|(&x, &y)| x * y)
                .sum();
            assert_eq!(
                compute_truncated_lagrange_basis_inner_product(length, &a, &b),
                expected,
                "mismatch at nu={nu} length={length}"
            );
        }
    }
}
