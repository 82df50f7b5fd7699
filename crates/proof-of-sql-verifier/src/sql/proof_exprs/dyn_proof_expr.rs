use super::{
    AddSubtractExpr, CastExpr, ColumnExpr, EqualsExpr, LiteralExpr, ADD_EXPR_NUM, CAST_EXPR_NUM,
    COLUMN_EXPR_NUM, EQUALS_EXPR_NUM, LITERAL_EXPR_NUM, SUBTRACT_EXPR_NUM,
};
use crate::{
    base::{byte::ByteReader, proof::VerificationError, scalar::BNScalar},
    sql::proof::VerificationBuilder,
};
use alloc::boxed::Box;

/// The plan stream bounds decode recursion; a buffer can encode one nesting
/// level per four bytes, so a hostile plan needs an explicit depth cap.
const MAX_EXPRESSION_DEPTH: usize = 128;

/// A decoded proof expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DynProofExpr {
    Column(ColumnExpr),
    Literal(LiteralExpr),
    Equals(EqualsExpr),
    AddSubtract(AddSubtractExpr),
    Cast(CastExpr),
}

impl DynProofExpr {
    /// Decodes one expression from the plan stream.
    pub fn try_from_reader(reader: &mut ByteReader) -> Result<Self, VerificationError> {
        Self::decode(reader, 0)
    }

    pub(super) fn decode(
        reader: &mut ByteReader,
        depth: usize,
    ) -> Result<Self, VerificationError> {
        if depth > MAX_EXPRESSION_DEPTH {
            return Err(VerificationError::UnsupportedProof);
        }
        match reader.read_u32()? {
            COLUMN_EXPR_NUM => Ok(Self::Column(ColumnExpr::try_from_reader(reader)?)),
            LITERAL_EXPR_NUM => Ok(Self::Literal(LiteralExpr::try_from_reader(reader)?)),
            EQUALS_EXPR_NUM => Ok(Self::Equals(EqualsExpr {
                lhs: Box::new(Self::decode(reader, depth + 1)?),
                rhs: Box::new(Self::decode(reader, depth + 1)?),
            })),
            ADD_EXPR_NUM => Ok(Self::AddSubtract(AddSubtractExpr {
                lhs: Box::new(Self::decode(reader, depth + 1)?),
                rhs: Box::new(Self::decode(reader, depth + 1)?),
                is_subtract: false,
            })),
            SUBTRACT_EXPR_NUM => Ok(Self::AddSubtract(AddSubtractExpr {
                lhs: Box::new(Self::decode(reader, depth + 1)?),
                rhs: Box::new(Self::decode(reader, depth + 1)?),
                is_subtract: true,
            })),
            CAST_EXPR_NUM => Ok(Self::Cast(CastExpr::try_from_reader(reader, depth)?)),
            _ => Err(VerificationError::UnsupportedProofExprVariant),
        }
    }

    /// Evaluates to the chi-scaled MLE evaluation of this expression's
    /// output column at the sumcheck point, issuing whatever constraints the
    /// expression needs along the way. `chi_eval` is the evaluation of the
    /// indicator column matching the expression's column length.
    pub fn verifier_evaluate(
        &self,
        builder: &mut VerificationBuilder,
        chi_eval: BNScalar,
    ) -> Result<BNScalar, VerificationError> {
        match self {
            DynProofExpr::Column(expr) => expr.verifier_evaluate(builder),
            DynProofExpr::Literal(expr) => Ok(expr.verifier_evaluate(chi_eval)),
            DynProofExpr::Equals(expr) => expr.verifier_evaluate(builder, chi_eval),
            DynProofExpr::AddSubtract(expr) => expr.verifier_evaluate(builder, chi_eval),
            DynProofExpr::Cast(expr) => expr.verifier_evaluate(builder, chi_eval),
        }
    }
}
