use super::FloatT;

// All scaling arithmetic should go through these core
// traits, which are implemented generically for floats
// of type FloatT.

/// Scalar operations on [`FloatT`](crate::algebra::FloatT)

pub trait ScalarMath {
    type T: FloatT;
    /// Applies a threshold value.
    ///
    /// If `s < min_thresh`, it is assigned the new value `min_new`.
    ///
    /// If `s > max_thresh`, it assigned the new value `max_new`.
    fn clip(
        &self,
        min_thresh: Self::T,
        max_thresh: Self::T,
        min_new: Self::T,
        max_new: Self::T,
    ) -> Self::T;
}

/// Vector operations on slices of [`FloatT`](crate::algebra::FloatT)

pub trait VectorMath {
    type T;

    /// Copy values from `src` to `self`
    fn copy_from(&mut self, src: &Self) -> &mut Self;

    /// Apply an elementwise operation on a vector.
    fn scalarop(&mut self, op: impl Fn(Self::T) -> Self::T) -> &mut Self;

    /// Apply an elementwise operation to `v` and assign the
    /// results to `self`.
    fn scalarop_from(&mut self, op: impl Fn(Self::T) -> Self::T, v: &Self) -> &mut Self;

    /// set all elements to the same value
    fn set(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise reciprocal.
    fn recip(&mut self) -> &mut Self;

    /// Elementwise scaling by another vector. Produces `self[i] = self[i] * y[i]`
    fn hadamard(&mut self, y: &Self) -> &mut Self;

    /// Elementwise product of two vectors.  Produces `self[i] = x[i] * y[i]`
    fn hadamard_from(&mut self, x: &Self, y: &Self) -> &mut Self;

    /// Vector version of [clip](crate::algebra::ScalarMath::clip)
    fn clip(
        &mut self,
        min_thresh: Self::T,
        max_thresh: Self::T,
        min_new: Self::T,
        max_new: Self::T,
    ) -> &mut Self;

    /// Sum of elements.
    fn sum(&self) -> Self::T;

    /// Infinity norm
    fn norm_inf(&self) -> Self::T;

    /// One norm
    fn norm_one(&self) -> Self::T;

    /// Infinity norm of the difference `self - b`
    fn norm_inf_diff(&self, b: &Self) -> Self::T;

    /// Minimum value in vector
    fn minimum(&self) -> Self::T;

    /// Maximum value in vector
    fn maximum(&self) -> Self::T;

    /// Mean value in vector
    fn mean(&self) -> Self::T;

    /// Checks if all elements are finite, i.e. no Infs or NaNs
    fn is_finite(&self) -> bool;
}

/// Operations on matrices of [`FloatT`](crate::algebra::FloatT)
///
/// This is the matrix contract consumed by the
/// [scaling engine](crate::scaling::Scaling).   A matrix stored in some
/// other format participates in scaling by implementing this trait
/// together with [`ShapedMatrix`](crate::algebra::ShapedMatrix).

pub trait MatrixMath {
    type T: FloatT;

    /// Compute the sum of absolute values in each column
    /// and assign the results to the vector `sums`
    fn col_sums(&self, sums: &mut [Self::T]);

    /// Compute the sum of absolute values in each row
    /// and assign the results to the vector `sums`
    fn row_sums(&self, sums: &mut [Self::T]);

    /// Largest absolute value of any stored entry
    fn norm_inf(&self) -> Self::T;

    /// Left multiply the matrix `self` by `Diagonal(l)`
    fn lscale(&mut self, l: &[Self::T]);

    /// Right multiply the matrix self by `Diagonal(r)`
    fn rscale(&mut self, r: &[Self::T]);
}
