//! Multilinear Lagrange-basis evaluation over the boolean hypercube.

mod evaluation_vector;
pub use evaluation_vector::compute_evaluation_vector;

mod lagrange_basis_evaluation;
pub use lagrange_basis_evaluation::{
    compute_rho_eval, compute_truncated_lagrange_basis_inner_product,
    compute_truncated_lagrange_basis_sum,
};

#[cfg(test)]
mod lagrange_basis_evaluation_test;

#[cfg(test)]
pub(crate) mod interpolate;
