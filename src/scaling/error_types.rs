use super::{ScaleType, SourceType};
use crate::algebra::SparseFormatError;
use thiserror::Error;

/// Error type returned by scaling computation and application.
///
/// Every check that can fail is made before the linear problem or any
/// registered diagonal is modified, so on error the system is left as it
/// was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScalingError {
    /// A registered diagonal does not match the dimension of the matrix
    #[error("{side} scaling vector {index} has length {found}, expected {expected}")]
    DimensionMismatch {
        index: usize,
        side: ScaleType,
        expected: usize,
        found: usize,
    },
    /// A scaling entry needs a matrix but the linear problem has none
    #[error("Scaling vector {index} ({kind}) requires a matrix but the problem has none")]
    UnmappedSource { index: usize, kind: SourceType },
    /// Unscale requested on a system with no outstanding scale
    #[error("Unscale requested but the linear system is not currently scaled")]
    AsymmetricUnscale,
    /// A factor is zero or not finite, so the scaling cannot be inverted
    #[error("Scaling vector {index} has a zero or non-finite factor at position {position}")]
    InvalidFactor { index: usize, position: usize },
    /// Vector scaler input and output lengths disagree
    #[error("Vector has length {found}, expected {expected}")]
    VectorLength { expected: usize, found: usize },
    /// A registered diagonal is borrowed through another handle
    #[error("Scaling vector {index} is borrowed through another handle")]
    DiagonalBorrowed { index: usize },
    /// The matrix no longer agrees with the right-hand side or solution,
    /// e.g. after it was replaced through
    /// [`matrix_mut`](crate::scaling::LinearProblem::matrix_mut)
    #[error("Inconsistent linear problem: {0}")]
    Problem(#[from] ProblemError),
    /// Writing the verbose report failed
    #[error("Failed to write scaling report: {0}")]
    Report(String),
}

impl From<std::io::Error> for ScalingError {
    fn from(e: std::io::Error) -> Self {
        ScalingError::Report(e.to_string())
    }
}

/// Error type returned by linear problem assembly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("Right-hand side has length {found}, expected {expected}")]
    /// Right-hand side does not match the matrix row dimension
    IncompatibleRhs { expected: usize, found: usize },
    #[error("Solution has length {found}, expected {expected}")]
    /// Solution does not match the matrix column dimension
    IncompatibleSolution { expected: usize, found: usize },
    #[error("Bad matrix format: {0}")]
    /// Sparse matrix data failed its format check
    Format(#[from] SparseFormatError),
}
