#![allow(non_snake_case)]

use crate::algebra::{FloatT, ShapedMatrix, SparseFormatError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sparse matrix in Compressed Sparse Column (CSC) format.
///
/// The nonzeros of column `j` are `nzval[colptr[j]..colptr[j+1]]`, with
/// row indices in the matching range of `rowval`.   Row and column
/// scaling only touch `nzval`, so the sparsity pattern of a scaled
/// matrix is always that of the original.
///
/// The 2 x 3 matrix
/// ```text
/// A = [4.  ⋅  -1.]
///     [⋅  2.   5.]
/// ```
/// is built as
///
/// ```no_run
/// use diagscale::algebra::CscMatrix;
///
/// let A: CscMatrix<f64> = CscMatrix::new(
///     2,                     // m
///     3,                     // n
///     vec![0, 1, 2, 4],      // colptr
///     vec![0, 1, 0, 1],      // rowval
///     vec![4., 2., -1., 5.], // nzval
/// );
/// assert!(A.check_format().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CscMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// column pointer, length `n+1`, ending in the number of nonzeros
    pub colptr: Vec<usize>,
    /// row index of each stored entry
    pub rowval: Vec<usize>,
    /// value of each stored entry
    pub nzval: Vec<T>,
}

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// Assemble a matrix from raw CSC arrays.
    ///
    /// # Panics
    /// Panics if the array lengths disagree with each other or with `n`.
    /// Row ordering and bounds are not checked here, see
    /// [`check_format`](CscMatrix::check_format).
    pub fn new(m: usize, n: usize, colptr: Vec<usize>, rowval: Vec<usize>, nzval: Vec<T>) -> Self {
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(rowval.len(), nzval.len());
        assert_eq!(colptr[n], nzval.len());
        Self {
            m,
            n,
            colptr,
            rowval,
            nzval,
        }
    }

    /// An `m x n` matrix with storage for `nnz` entries.  With `nnz = 0`
    /// this is the zero matrix.
    pub fn spalloc(m: usize, n: usize, nnz: usize) -> Self {
        let mut colptr = vec![0; n + 1];
        colptr[n] = nnz;
        Self::new(m, n, colptr, vec![0; nnz], vec![T::zero(); nnz])
    }

    /// `n x n` identity
    pub fn identity(n: usize) -> Self {
        Self::new(n, n, (0..=n).collect(), (0..n).collect(), vec![T::one(); n])
    }

    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    /// Validates the CSC arrays: consistent lengths, nondecreasing
    /// `colptr`, and strictly increasing in-bounds row indices within
    /// every column.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        let nnz = self.nzval.len();
        if self.rowval.len() != nnz
            || self.colptr.len() != self.n + 1
            || self.colptr.last() != Some(&nnz)
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.colptr.windows(2).any(|w| w[0] > w[1]) {
            return Err(SparseFormatError::BadColptr);
        }

        let bad_column = |w: &[usize]| {
            let rows = &self.rowval[w[0]..w[1]];
            rows.windows(2).any(|r| r[0] >= r[1]) || rows.iter().any(|&r| r >= self.m)
        };
        if self.colptr.windows(2).any(bad_column) {
            return Err(SparseFormatError::BadRowval);
        }

        Ok(())
    }

    /// The stored value at `(row, col)`, or `None` if that position is
    /// not a structural nonzero.
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    pub fn get_entry(&self, (row, col): (usize, usize)) -> Option<T> {
        assert!(row < self.m && col < self.n);

        let range = self.colptr[col]..self.colptr[col + 1];
        self.rowval[range.clone()]
            .binary_search(&row)
            .ok()
            .map(|k| self.nzval[range.start + k])
    }
}

impl<T, const R: usize, const C: usize> From<&[[T; C]; R]> for CscMatrix<T>
where
    T: FloatT,
{
    /// Build a sparse matrix from a row-major dense array, storing
    /// only the nonzero entries.
    ///
    /// ```no_run
    /// use diagscale::algebra::CscMatrix;
    /// let A = CscMatrix::from(&[
    ///     [1., 0.],
    ///     [3., 4.],
    /// ]);
    /// assert_eq!(A.nnz(), 3);
    /// ```
    fn from(rows: &[[T; C]; R]) -> Self {
        let mut colptr = Vec::with_capacity(C + 1);
        let mut rowval = Vec::new();
        let mut nzval = Vec::new();

        colptr.push(0);
        for col in 0..C {
            for (row, vals) in rows.iter().enumerate() {
                let v = vals[col];
                if v != T::zero() {
                    rowval.push(row);
                    nzval.push(v);
                }
            }
            colptr.push(rowval.len());
        }
        CscMatrix::new(R, C, colptr, rowval, nzval)
    }
}

impl<T> ShapedMatrix for CscMatrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}
