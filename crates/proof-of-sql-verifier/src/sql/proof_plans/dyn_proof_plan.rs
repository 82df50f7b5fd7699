use super::{FilterExec, FILTER_EXEC_NUM};
use crate::{
    base::{byte::ByteReader, proof::VerificationError, scalar::BNScalar},
    sql::proof::VerificationBuilder,
};
use alloc::vec::Vec;

/// A decoded proof plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DynProofPlan {
    Filter(FilterExec),
}

impl DynProofPlan {
    /// Decodes the plan body that follows the names prefix.
    pub fn try_from_reader(reader: &mut ByteReader) -> Result<Self, VerificationError> {
        match reader.read_u32()? {
            FILTER_EXEC_NUM => Ok(Self::Filter(FilterExec::try_from_reader(reader)?)),
            _ => Err(VerificationError::UnsupportedProofPlanVariant),
        }
    }

    /// Evaluates the plan against the builder, returning the claimed output
    /// column evaluations at the sumcheck point.
    pub fn verifier_evaluate(
        &self,
        builder: &mut VerificationBuilder,
    ) -> Result<Vec<BNScalar>, VerificationError> {
        match self {
            DynProofPlan::Filter(plan) => plan.verifier_evaluate(builder),
        }
    }
}
