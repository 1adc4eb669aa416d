#![allow(non_snake_case)]
use super::ProblemError;
use crate::algebra::*;

/// A linear system `A x = b` handed to a linear solver.
///
/// The matrix is optional so that a problem can be assembled before its
/// operator is available.   Scaling operations that need the matrix
/// report [`ScalingError::UnmappedSource`](crate::scaling::ScalingError::UnmappedSource)
/// when it is missing.
///
/// ```no_run
/// use diagscale::algebra::CscMatrix;
/// use diagscale::scaling::LinearProblem;
///
/// let A = CscMatrix::from(&[
///     [2., 0.],
///     [1., 3.],
/// ]);
/// let problem = LinearProblem::new(A, vec![1., 2.], vec![0.; 2]).unwrap();
/// assert_eq!(problem.rhs(), &[1., 2.]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProblem<T = f64, M = CscMatrix<T>> {
    pub(crate) A: Option<M>,
    pub(crate) b: Vec<T>,
    pub(crate) x: Vec<T>,
}

impl<T, M> LinearProblem<T, M>
where
    T: FloatT,
    M: ShapedMatrix,
{
    /// Bundle a matrix with its right-hand side and solution.  The
    /// right-hand side must match the row dimension of `A` and the
    /// solution its column dimension.
    pub fn new(A: M, b: Vec<T>, x: Vec<T>) -> Result<Self, ProblemError> {
        check_problem_dims(&A, &b, &x)?;
        Ok(Self { A: Some(A), b, x })
    }

    /// A problem whose operator is not (yet) assembled.
    pub fn without_matrix(b: Vec<T>, x: Vec<T>) -> Self {
        Self { A: None, b, x }
    }

    /// Attach or replace the matrix, returning any previous one.
    pub fn set_matrix(&mut self, A: M) -> Result<Option<M>, ProblemError> {
        check_problem_dims(&A, &self.b, &self.x)?;
        Ok(self.A.replace(A))
    }

    pub fn matrix(&self) -> Option<&M> {
        self.A.as_ref()
    }

    pub fn matrix_mut(&mut self) -> Option<&mut M> {
        self.A.as_mut()
    }

    pub fn rhs(&self) -> &[T] {
        &self.b
    }

    pub fn rhs_mut(&mut self) -> &mut [T] {
        &mut self.b
    }

    pub fn solution(&self) -> &[T] {
        &self.x
    }

    pub fn solution_mut(&mut self) -> &mut [T] {
        &mut self.x
    }

    /// Consume the problem, returning `(A, b, x)`.
    pub fn into_parts(self) -> (Option<M>, Vec<T>, Vec<T>) {
        (self.A, self.b, self.x)
    }
}

impl<T> LinearProblem<T, CscMatrix<T>>
where
    T: FloatT,
{
    /// As [`new`](LinearProblem::new), additionally checking the sparse
    /// format of `A`.
    pub fn from_csc(A: CscMatrix<T>, b: Vec<T>, x: Vec<T>) -> Result<Self, ProblemError> {
        A.check_format()?;
        Self::new(A, b, x)
    }
}

pub(crate) fn check_problem_dims<M, T>(A: &M, b: &[T], x: &[T]) -> Result<(), ProblemError>
where
    M: ShapedMatrix,
{
    let (m, n) = A.size();
    if b.len() != m {
        return Err(ProblemError::IncompatibleRhs {
            expected: m,
            found: b.len(),
        });
    }
    if x.len() != n {
        return Err(ProblemError::IncompatibleSolution {
            expected: n,
            found: x.len(),
        });
    }
    Ok(())
}
