mod proof;
pub use proof::{verify_sumcheck_proof, SumcheckSubclaim};

#[cfg(test)]
pub(crate) mod test_utility;
