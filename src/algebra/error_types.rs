use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by sparse matrix format checks.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    #[error("Row value exceeds the matrix row dimension")]
    /// Row value exceeds the matrix row dimension
    BadRowval,
    #[error("Bad column pointer values")]
    /// Matrix column pointer values are defective
    BadColptr,
}
