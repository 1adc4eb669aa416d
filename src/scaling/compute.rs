#![allow(non_snake_case)]
use super::*;
use crate::algebra::*;
use tracing::{debug, warn};

impl<T> Scaling<T>
where
    T: FloatT,
{
    /// Computes the factors of every `RowSum` and `ColSum` entry from the
    /// current matrix of `problem`.
    ///
    /// Row sum entries receive `d[i] = 1 / Σ_j |a_ij|` and column sum
    /// entries `d[j] = 1 / Σ_i |a_ij|`.   A sum below the near-zero
    /// threshold (see [`ScalingSettings::near_zero_tol`]) receives the
    /// factor `1.0`, so empty or zero rows and columns are left unscaled.
    /// A sum above `1 / T::min_positive_value()`, including one that
    /// overflows to infinity, is clamped to that value, so its factor is
    /// `T::min_positive_value()`.   Computed factors and their reciprocals
    /// are therefore always finite and nonzero.
    ///
    /// Dimensions and writability of every computed diagonal are checked
    /// before any of them is written.
    ///
    /// Only needs to be called if a row or column sum scaling has been
    /// registered, and again whenever the matrix changes.  Neither the
    /// matrix nor the vectors of `problem` are modified.
    pub fn compute_scaling<M>(&mut self, problem: &LinearProblem<T, M>) -> Result<(), ScalingError>
    where
        M: MatrixMath<T = T> + ShapedMatrix,
    {
        if !self.needs_computation() {
            return Ok(());
        }

        let Some(A) = problem.matrix() else {
            return self
                .unmapped(|e| e.source().needs_computation())
                .map_or(Ok(()), Err);
        };

        let (m, n) = A.size();
        self.check_dimensions(m, n)?;

        // every target must be writable before the first one is written
        for (index, entry) in self.entries.iter().enumerate() {
            if let ScalingSource::RowSum(d) | ScalingSource::ColSum(d) = entry.source() {
                d.try_write(index)?;
            }
        }

        let threshold = near_zero_threshold(A, self.settings.near_zero_tol);
        let ceiling = T::min_positive_value().recip();

        for (index, entry) in self.entries.iter().enumerate() {
            let (diag, over_rows) = match entry.source() {
                ScalingSource::RowSum(d) => (d, true),
                ScalingSource::ColSum(d) => (d, false),
                _ => continue,
            };
            let mut d = diag.borrow_mut();

            if over_rows {
                A.row_sums(&mut d);
            } else {
                A.col_sums(&mut d);
            }

            let nclamped = d.iter().filter(|&&s| s < threshold).count();
            if nclamped > 0 {
                warn!(
                    index,
                    source = %entry.source_type(),
                    count = nclamped,
                    "near-zero sums left unscaled"
                );
            }
            let nhuge = d.iter().filter(|&&s| s > ceiling).count();
            if nhuge > 0 {
                warn!(
                    index,
                    source = %entry.source_type(),
                    count = nhuge,
                    "overflowing sums clamped"
                );
            }

            // near-zero sums map to 1 so that recip leaves them unscaled.
            // Sums above the ceiling, including inf, map to the ceiling so
            // every factor and its reciprocal are finite and nonzero.
            d.clip(threshold, ceiling, T::one(), ceiling).recip();

            debug!(
                index,
                side = %entry.side(),
                source = %entry.source_type(),
                min = %d.minimum(),
                max = %d.maximum(),
                "computed scaling factors"
            );
        }

        if self.settings.verbose {
            self.report()?;
        }

        Ok(())
    }
}

// Sums below this value are treated as zero.  Scaled by the largest
// entry of the matrix so the test is independent of its magnitude,
// and never smaller than the least positive normal value so that the
// reciprocal of any accepted sum is finite.
pub(crate) fn near_zero_threshold<T, M>(A: &M, tol: T) -> T
where
    T: FloatT,
    M: MatrixMath<T = T>,
{
    T::max(tol * A.norm_inf(), T::min_positive_value())
}
