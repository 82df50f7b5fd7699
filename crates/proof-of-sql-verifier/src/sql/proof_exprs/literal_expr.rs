use super::BIGINT_LITERAL_NUM;
use crate::base::{byte::ByteReader, proof::VerificationError, scalar::BNScalar};

/// A signed integer literal. Only the 8-byte BigInt variant is in scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralExpr {
    pub(crate) value: i64,
}

impl LiteralExpr {
    pub(super) fn try_from_reader(reader: &mut ByteReader) -> Result<Self, VerificationError> {
        match reader.read_u32()? {
            BIGINT_LITERAL_NUM => Ok(Self {
                value: reader.read_i64()?,
            }),
            _ => Err(VerificationError::UnsupportedLiteralVariant),
        }
    }

    /// A literal is the constant column of the given length, so its MLE
    /// evaluation is the lifted value times the indicator evaluation.
    pub(super) fn verifier_evaluate(&self, chi_eval: BNScalar) -> BNScalar {
        BNScalar::from(self.value) * chi_eval
    }
}
