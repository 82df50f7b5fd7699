use super::fold_vals;
use crate::{
    base::{byte::ByteReader, proof::VerificationError, scalar::BNScalar},
    sql::{proof::VerificationBuilder, proof_exprs::DynProofExpr},
};
use alloc::vec::Vec;
use num_traits::One;

/// Plan for queries of the form
/// ```ignore
///     SELECT <expr_1>, ..., <expr_l> FROM <table> WHERE <where_clause>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExec {
    pub(crate) input_table_index: usize,
    pub(crate) where_clause: DynProofExpr,
    pub(crate) results: Vec<DynProofExpr>,
}

impl FilterExec {
    pub(super) fn try_from_reader(reader: &mut ByteReader) -> Result<Self, VerificationError> {
        let input_table_index = usize::try_from(reader.read_u64()?)
            .map_err(|_| VerificationError::InvalidIndex)?;
        let where_clause = DynProofExpr::try_from_reader(reader)?;
        let result_count = reader.read_u64()?;
        // Each expression is at least a four byte tag, so a hostile count
        // dies on underflow after a bounded number of decodes.
        let results = (0..result_count)
            .map(|_| DynProofExpr::try_from_reader(reader))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            input_table_index,
            where_clause,
            results,
        })
    }

    /// The random-fold argument: the claimed output column evaluations are
    /// exactly the selected input rows, in order, up to negligible
    /// probability in the two drawn challenges.
    pub(super) fn verifier_evaluate(
        &self,
        builder: &mut VerificationBuilder,
    ) -> Result<Vec<BNScalar>, VerificationError> {
        let chi_in_eval = builder.table_chi_evaluation(self.input_table_index)?;
        let alpha = builder.try_consume_challenge()?;

        let selection_eval = self
            .where_clause
            .verifier_evaluate(builder, chi_in_eval)?;

        let beta = builder.try_consume_challenge()?;
        let column_evals = self
            .results
            .iter()
            .map(|expr| expr.verifier_evaluate(builder, chi_in_eval))
            .collect::<Result<Vec<_>, _>>()?;
        let c_fold_eval = fold_vals(beta, &column_evals);

        let filtered_evals =
            builder.try_consume_final_round_mle_evaluations(self.results.len())?;
        let d_fold_eval = fold_vals(beta, &filtered_evals);

        let c_star_eval = builder.try_consume_final_round_mle_evaluation()?;
        let d_star_eval = builder.try_consume_final_round_mle_evaluation()?;
        let chi_out_eval = builder.try_consume_chi_evaluation()?;

        let one = BNScalar::one();

        // sum c_star * selection - d_star == 0
        builder.try_produce_zerosum_constraint(
            c_star_eval * selection_eval - d_star_eval,
            2,
        )?;

        // (1 + alpha * c_fold) * c_star - chi_in == 0
        builder.try_produce_identity_constraint(
            (one + alpha * c_fold_eval) * c_star_eval - chi_in_eval,
            2,
        )?;

        // (1 + alpha * d_fold) * d_star - chi_out == 0
        builder.try_produce_identity_constraint(
            (one + alpha * d_fold_eval) * d_star_eval - chi_out_eval,
            2,
        )?;

        Ok(filtered_evals)
    }
}
