use crate::{
    base::{byte::ByteReader, proof::VerificationError, scalar::BNScalar},
    sql::proof::VerificationBuilder,
};

/// A reference to an input column by its position in the commitment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnExpr {
    pub(crate) column_index: usize,
}

impl ColumnExpr {
    pub(super) fn try_from_reader(reader: &mut ByteReader) -> Result<Self, VerificationError> {
        let column_index = usize::try_from(reader.read_u64()?)
            .map_err(|_| VerificationError::InvalidIndex)?;
        Ok(Self { column_index })
    }

    pub(super) fn verifier_evaluate(
        &self,
        builder: &VerificationBuilder,
    ) -> Result<BNScalar, VerificationError> {
        builder.column_evaluation(self.column_index)
    }
}
