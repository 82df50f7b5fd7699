use super::{DynProofExpr, BIGINT_TYPE_NUM};
use crate::{
    base::{byte::ByteReader, proof::VerificationError, scalar::BNScalar},
    sql::proof::VerificationBuilder,
};
use alloc::boxed::Box;

/// A cast of an expression to a (currently BigInt-only) target type.
///
/// At the MLE level a cast is the identity; the prover is responsible for
/// the range semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastExpr {
    pub(crate) from_expr: Box<DynProofExpr>,
}

impl CastExpr {
    pub(super) fn try_from_reader(
        reader: &mut ByteReader,
        depth: usize,
    ) -> Result<Self, VerificationError> {
        if reader.read_u32()? != BIGINT_TYPE_NUM {
            return Err(VerificationError::UnsupportedDataTypeVariant);
        }
        Ok(Self {
            from_expr: Box::new(DynProofExpr::decode(reader, depth + 1)?),
        })
    }

    pub(super) fn verifier_evaluate(
        &self,
        builder: &mut VerificationBuilder,
        chi_eval: BNScalar,
    ) -> Result<BNScalar, VerificationError> {
        self.from_expr.verifier_evaluate(builder, chi_eval)
    }
}
