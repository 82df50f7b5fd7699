//! Plan interpreter: decodes the tagged plan body and produces the
//! polynomial constraints whose aggregate the sumcheck must match.

mod dyn_proof_plan;
pub use dyn_proof_plan::DynProofPlan;

mod filter_exec;
pub use filter_exec::FilterExec;

mod fold_util;
pub use fold_util::fold_vals;

pub(crate) const FILTER_EXEC_NUM: u32 = 0;
