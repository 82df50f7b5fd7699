use super::DynProofExpr;
use crate::{
    base::{proof::VerificationError, scalar::BNScalar},
    sql::proof::VerificationBuilder,
};
use alloc::boxed::Box;

/// Row-wise addition or subtraction of two expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddSubtractExpr {
    pub(crate) lhs: Box<DynProofExpr>,
    pub(crate) rhs: Box<DynProofExpr>,
    pub(crate) is_subtract: bool,
}

impl AddSubtractExpr {
    // Both operands are already chi-scaled column evaluations, so the sum
    // and difference are plain field operations; only literals multiply by
    // the indicator.
    pub(super) fn verifier_evaluate(
        &self,
        builder: &mut VerificationBuilder,
        chi_eval: BNScalar,
    ) -> Result<BNScalar, VerificationError> {
        let lhs_eval = self.lhs.verifier_evaluate(builder, chi_eval)?;
        let rhs_eval = self.rhs.verifier_evaluate(builder, chi_eval)?;
        Ok(if self.is_subtract {
            lhs_eval - rhs_eval
        } else {
            lhs_eval + rhs_eval
        })
    }
}
