use crate::base::{proof::VerificationError, scalar::BNScalar};
use alloc::vec::Vec;

/// An ordered sequence of scalars consumed head first. Running out is a
/// proof defect, not a crash.
struct ScalarQueue {
    values: Vec<BNScalar>,
    head: usize,
}

impl ScalarQueue {
    fn new(values: Vec<BNScalar>) -> Self {
        Self { values, head: 0 }
    }

    fn try_consume(&mut self) -> Result<BNScalar, VerificationError> {
        let value = self
            .values
            .get(self.head)
            .copied()
            .ok_or(VerificationError::EmptyQueue)?;
        self.head += 1;
        Ok(value)
    }

    fn remaining(&self) -> usize {
        self.values.len() - self.head
    }
}

/// Central state for one verification: the queues of transcript-derived and
/// prover-claimed scalars that the plan and expression evaluators consume,
/// plus the running constraint aggregate.
///
/// The aggregate starts at the negated sumcheck evaluation; every constraint
/// folds `evaluation * multiplier` into it (identity constraints carry an
/// extra row-multiplier factor), so a valid proof lands the aggregate on
/// exactly zero.
pub struct VerificationBuilder {
    challenges: ScalarQueue,
    first_round_mles: ScalarQueue,
    final_round_mles: ScalarQueue,
    chi_evaluations: ScalarQueue,
    rho_evaluations: ScalarQueue,
    constraint_multipliers: ScalarQueue,
    column_evaluations: Vec<BNScalar>,
    table_chi_evaluations: Vec<BNScalar>,
    aggregate_evaluation: BNScalar,
    row_multipliers_evaluation: BNScalar,
    max_degree: usize,
}

impl VerificationBuilder {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sumcheck_evaluation: BNScalar,
        max_degree: usize,
        row_multipliers_evaluation: BNScalar,
        challenges: Vec<BNScalar>,
        first_round_mles: Vec<BNScalar>,
        final_round_mles: Vec<BNScalar>,
        chi_evaluations: Vec<BNScalar>,
        rho_evaluations: Vec<BNScalar>,
        constraint_multipliers: Vec<BNScalar>,
        column_evaluations: Vec<BNScalar>,
        table_chi_evaluations: Vec<BNScalar>,
    ) -> Self {
        Self {
            challenges: ScalarQueue::new(challenges),
            first_round_mles: ScalarQueue::new(first_round_mles),
            final_round_mles: ScalarQueue::new(final_round_mles),
            chi_evaluations: ScalarQueue::new(chi_evaluations),
            rho_evaluations: ScalarQueue::new(rho_evaluations),
            constraint_multipliers: ScalarQueue::new(constraint_multipliers),
            column_evaluations,
            table_chi_evaluations,
            aggregate_evaluation: -sumcheck_evaluation,
            row_multipliers_evaluation,
            max_degree,
        }
    }

    pub fn try_consume_challenge(&mut self) -> Result<BNScalar, VerificationError> {
        self.challenges.try_consume()
    }

    pub fn try_consume_first_round_mle_evaluation(
        &mut self,
    ) -> Result<BNScalar, VerificationError> {
        self.first_round_mles.try_consume()
    }

    pub fn try_consume_final_round_mle_evaluation(
        &mut self,
    ) -> Result<BNScalar, VerificationError> {
        self.final_round_mles.try_consume()
    }

    pub fn try_consume_final_round_mle_evaluations(
        &mut self,
        count: usize,
    ) -> Result<Vec<BNScalar>, VerificationError> {
        core::iter::repeat_with(|| self.final_round_mles.try_consume())
            .take(count)
            .collect()
    }

    pub fn try_consume_chi_evaluation(&mut self) -> Result<BNScalar, VerificationError> {
        self.chi_evaluations.try_consume()
    }

    pub fn try_consume_rho_evaluation(&mut self) -> Result<BNScalar, VerificationError> {
        self.rho_evaluations.try_consume()
    }

    pub fn column_evaluation(&self, index: usize) -> Result<BNScalar, VerificationError> {
        self.column_evaluations
            .get(index)
            .copied()
            .ok_or(VerificationError::InvalidIndex)
    }

    pub fn table_chi_evaluation(&self, index: usize) -> Result<BNScalar, VerificationError> {
        self.table_chi_evaluations
            .get(index)
            .copied()
            .ok_or(VerificationError::InvalidIndex)
    }

    /// Folds a pointwise (identity) constraint into the aggregate. The row
    /// multiplier raises the effective sumcheck degree by one, hence the
    /// tighter bound.
    pub fn try_produce_identity_constraint(
        &mut self,
        evaluation: BNScalar,
        degree: usize,
    ) -> Result<(), VerificationError> {
        if degree + 1 > self.max_degree {
            return Err(VerificationError::ConstraintDegreeTooHigh);
        }
        let multiplier = self.constraint_multipliers.try_consume()?;
        self.aggregate_evaluation +=
            evaluation * multiplier * self.row_multipliers_evaluation;
        Ok(())
    }

    /// Folds a zero-sum constraint into the aggregate.
    pub fn try_produce_zerosum_constraint(
        &mut self,
        evaluation: BNScalar,
        degree: usize,
    ) -> Result<(), VerificationError> {
        if degree > self.max_degree {
            return Err(VerificationError::ConstraintDegreeTooHigh);
        }
        let multiplier = self.constraint_multipliers.try_consume()?;
        self.aggregate_evaluation += evaluation * multiplier;
        Ok(())
    }

    pub fn aggregate_evaluation(&self) -> BNScalar {
        self.aggregate_evaluation
    }

    /// Whether every queue has been consumed exactly.
    pub fn completed(&self) -> bool {
        self.challenges.remaining() == 0
            && self.first_round_mles.remaining() == 0
            && self.final_round_mles.remaining() == 0
            && self.chi_evaluations.remaining() == 0
            && self.rho_evaluations.remaining() == 0
            && self.constraint_multipliers.remaining() == 0
    }
}
