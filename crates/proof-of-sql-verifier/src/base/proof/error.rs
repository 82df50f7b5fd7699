use snafu::Snafu;

/// Every way a proof can fail to verify.
///
/// None of these are recoverable: the verifier rejects and reports which
/// check failed. No partial result is ever produced.
#[derive(Snafu, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationError {
    /// The EC addition primitive rejected a malformed input point.
    #[snafu(display("invalid inputs to the EC addition primitive"))]
    InvalidEcAddInputs,
    /// The EC scalar multiplication primitive rejected a malformed input point.
    #[snafu(display("invalid inputs to the EC multiplication primitive"))]
    InvalidEcMulInputs,
    /// The pairing primitive rejected a malformed input point.
    #[snafu(display("invalid inputs to the EC pairing primitive"))]
    InvalidEcPairingInputs,
    /// A sumcheck round polynomial does not sum to the previous round's evaluation.
    #[snafu(display("sumcheck round evaluation does not match the claimed sum"))]
    RoundEvaluationMismatch,
    /// The sumcheck coefficient count is zero or not divisible by the variable count.
    #[snafu(display("invalid sumcheck proof size"))]
    InvalidSumcheckProofSize,
    /// The plan required a value from a queue the proof did not supply.
    #[snafu(display("attempt to consume an exhausted queue"))]
    EmptyQueue,
    /// The HyperKZG `v` vector is inconsistent with the evaluation point.
    #[snafu(display("HyperKZG v vector is internally inconsistent"))]
    HyperKzgInconsistentV,
    /// HyperKZG was invoked with an empty evaluation point.
    #[snafu(display("HyperKZG evaluation point is empty"))]
    HyperKzgEmptyPoint,
    /// The final pairing identity does not hold.
    #[snafu(display("HyperKZG pairing check failed"))]
    HyperKzgPairingCheckFailed,
    /// The HyperKZG proof bytes do not match the shape the point length implies.
    #[snafu(display("HyperKZG proof size mismatch"))]
    HyperKzgProofSizeMismatch,
    /// The plan produced a constraint above the sumcheck degree bound.
    #[snafu(display("constraint degree exceeds the sumcheck degree bound"))]
    ConstraintDegreeTooHigh,
    /// A literal carries a variant tag outside the implemented set.
    #[snafu(display("unsupported literal variant"))]
    UnsupportedLiteralVariant,
    /// An expression carries a variant tag outside the implemented set.
    #[snafu(display("unsupported proof expression variant"))]
    UnsupportedProofExprVariant,
    /// A plan carries a variant tag outside the implemented set.
    #[snafu(display("unsupported proof plan variant"))]
    UnsupportedProofPlanVariant,
    /// A column data type tag is outside the implemented set.
    #[snafu(display("unsupported data type variant"))]
    UnsupportedDataTypeVariant,
    /// The proof is structurally outside what this verifier accepts.
    #[snafu(display("unsupported proof"))]
    UnsupportedProof,
    /// A random access into an evaluation vector was out of bounds.
    #[snafu(display("index out of bounds"))]
    InvalidIndex,
    /// Commitment and evaluation counts disagree in the PCS batch.
    #[snafu(display("PCS batch commitment and evaluation counts differ"))]
    PcsBatchLengthMismatch,
    /// The claimed result column count does not match the plan output count.
    #[snafu(display("result column count does not match the query"))]
    ResultColumnCountMismatch,
    /// A result column name is not valid.
    #[snafu(display("invalid result column name"))]
    InvalidResultColumnName,
    /// Result columns disagree on row count, or the row count exceeds the hypercube.
    #[snafu(display("inconsistent result column lengths"))]
    InconsistentResultColumnLengths,
    /// A result column does not evaluate to its claimed evaluation.
    #[snafu(display("result does not match the proof"))]
    IncorrectResult,
    /// The aggregated constraint evaluation is nonzero.
    #[snafu(display("aggregate constraint evaluation mismatch"))]
    AggregateEvaluationMismatch,
    /// A read ran past the end of the proof, plan, or result buffer.
    #[snafu(display("unexpected end of buffer"))]
    ProofBufferUnderflow,
    /// The result buffer has bytes left over after the last column.
    #[snafu(display("trailing bytes after the result table"))]
    TrailingResultBytes,
}
