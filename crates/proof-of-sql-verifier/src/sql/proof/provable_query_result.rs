use crate::base::{
    byte::ByteReader, polynomial::compute_evaluation_vector, proof::VerificationError,
    scalar::BNScalar,
};
use alloc::{vec, vec::Vec};
use itertools::Itertools;
use num_traits::Zero;

const BIGINT_COLUMN_NUM: u32 = 0;

/// Parses the claimed result table and checks every column's MLE evaluation
/// at the sumcheck point against the plan's output column evaluations.
///
/// The result layout is: a `u64` column count, then per column a `u64` name
/// length, the name bytes, a one-byte quote flag (must be zero), a `u32`
/// column variant (BigInt only), a `u64` row count, and the rows as 8-byte
/// signed integers. All columns must agree on the row count, and the buffer
/// must end exactly after the last column.
pub(crate) fn verify_result_columns(
    result: &[u8],
    evaluation_point: &[BNScalar],
    output_evaluations: &[BNScalar],
) -> Result<(), VerificationError> {
    let mut reader = ByteReader::new(result);
    let column_count = reader.read_u64()?;
    if column_count != output_evaluations.len() as u64 {
        return Err(VerificationError::ResultColumnCountMismatch);
    }

    let mut columns = Vec::with_capacity(output_evaluations.len());
    for _ in 0..column_count {
        let name_length = reader.read_array_length(1)?;
        let name = reader.read_bytes(name_length)?;
        if core::str::from_utf8(name).is_err() {
            return Err(VerificationError::InvalidResultColumnName);
        }
        if reader.read_u8()? != 0 {
            return Err(VerificationError::InvalidResultColumnName);
        }
        if reader.read_u32()? != BIGINT_COLUMN_NUM {
            return Err(VerificationError::UnsupportedDataTypeVariant);
        }
        let row_count = reader.read_array_length(8)?;
        let entries = (0..row_count)
            .map(|_| reader.read_i64())
            .collect::<Result<Vec<_>, _>>()?;
        columns.push(entries);
    }
    if !reader.is_empty() {
        return Err(VerificationError::TrailingResultBytes);
    }
    if !columns.iter().map(Vec::len).all_equal() {
        return Err(VerificationError::InconsistentResultColumnLengths);
    }

    let row_count = columns.first().map(Vec::len).unwrap_or(0);
    if evaluation_point.len() < 64 && row_count > (1usize << evaluation_point.len()) {
        return Err(VerificationError::InconsistentResultColumnLengths);
    }
    let mut basis = vec![BNScalar::zero(); row_count];
    compute_evaluation_vector(&mut basis, evaluation_point);

    for (column, &claimed_evaluation) in columns.iter().zip(output_evaluations) {
        let evaluation: BNScalar = column
            .iter()
            .zip(&basis)
            .map(|(&entry, &weight)| BNScalar::from(entry) * weight)
            .sum();
        if evaluation != claimed_evaluation {
            return Err(VerificationError::IncorrectResult);
        }
    }
    Ok(())
}
