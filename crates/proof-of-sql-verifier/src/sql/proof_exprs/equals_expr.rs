use super::DynProofExpr;
use crate::{
    base::{proof::VerificationError, scalar::BNScalar},
    sql::proof::VerificationBuilder,
};
use alloc::boxed::Box;

/// Row-wise equality of two expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualsExpr {
    pub(crate) lhs: Box<DynProofExpr>,
    pub(crate) rhs: Box<DynProofExpr>,
}

impl EqualsExpr {
    /// The prover supplies a pseudo-inverse column `diff_star` and a
    /// selection column `selection`. The two identity constraints force
    /// `selection[i] = 1` exactly where `lhs[i] = rhs[i]` within the column
    /// length, and `selection[i] = 0` elsewhere:
    ///
    /// - `selection * diff == 0` kills selected rows with a nonzero diff;
    /// - `chi - (diff * diff_star + selection) == 0` forces selection to be
    ///   the complement of `diff * diff_star`, which is 1 on rows where the
    ///   diff is invertible.
    pub(super) fn verifier_evaluate(
        &self,
        builder: &mut VerificationBuilder,
        chi_eval: BNScalar,
    ) -> Result<BNScalar, VerificationError> {
        let lhs_eval = self.lhs.verifier_evaluate(builder, chi_eval)?;
        let rhs_eval = self.rhs.verifier_evaluate(builder, chi_eval)?;
        let diff_eval = lhs_eval - rhs_eval;

        let diff_star_eval = builder.try_consume_final_round_mle_evaluation()?;
        let selection_eval = builder.try_consume_final_round_mle_evaluation()?;

        builder.try_produce_identity_constraint(selection_eval * diff_eval, 2)?;
        builder.try_produce_identity_constraint(
            chi_eval - (diff_eval * diff_star_eval + selection_eval),
            2,
        )?;

        Ok(selection_eval)
    }
}
