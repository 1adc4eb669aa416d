#![allow(non_snake_case)]
use super::problem::check_problem_dims;
use super::*;
use crate::algebra::*;
use itertools::Either;
use tracing::trace;

impl<T> Scaling<T>
where
    T: FloatT,
{
    /// Scales the linear system.
    ///
    /// Each entry is applied in registration order.  A `Left` entry
    /// multiplies row `i` of the matrix and entry `i` of the right-hand
    /// side by `d[i]`.  A `Right` entry multiplies column `j` of the matrix
    /// by `d[j]`.
    ///
    /// The solution vector is not touched.  If `y` solves the scaled system
    /// then the solution of the original system is `x = D_R y`, which
    /// [`apply_right_scaling`](Scaling::apply_right_scaling) produces.
    ///
    /// Calling this twice without an intervening
    /// [`unscale_linear_system`](Scaling::unscale_linear_system) applies
    /// the factors twice.
    pub fn scale_linear_system<M>(
        &mut self,
        problem: &mut LinearProblem<T, M>,
    ) -> Result<(), ScalingError>
    where
        M: MatrixMath<T = T> + ShapedMatrix,
    {
        self.apply_to_problem(problem, false)?;
        self.depth += 1;
        Ok(())
    }

    /// Removes the scaling from the linear system.
    ///
    /// Applies the reciprocal of every registered diagonal, in reverse
    /// registration order, restoring the matrix and right-hand side to
    /// their values before the matching
    /// [`scale_linear_system`](Scaling::scale_linear_system) up to rounding.
    ///
    /// Fails with [`ScalingError::AsymmetricUnscale`] if there is no
    /// outstanding scale and [`ScalingSettings::enforce_pairing`] is set.
    /// The factors must not have been recomputed since the matching scale.
    pub fn unscale_linear_system<M>(
        &mut self,
        problem: &mut LinearProblem<T, M>,
    ) -> Result<(), ScalingError>
    where
        M: MatrixMath<T = T> + ShapedMatrix,
    {
        if self.depth == 0 && self.settings.enforce_pairing {
            return Err(ScalingError::AsymmetricUnscale);
        }
        self.apply_to_problem(problem, true)?;
        self.depth = self.depth.saturating_sub(1);
        Ok(())
    }

    fn apply_to_problem<M>(
        &mut self,
        problem: &mut LinearProblem<T, M>,
        inverse: bool,
    ) -> Result<(), ScalingError>
    where
        M: MatrixMath<T = T> + ShapedMatrix,
    {
        let Some(A) = problem.A.as_mut() else {
            return self
                .unmapped(|e| e.diagonal().is_some())
                .map_or(Ok(()), Err);
        };

        // everything is checked before anything is modified
        check_problem_dims(&*A, &problem.b, &problem.x)?;
        let b = &mut problem.b;
        let (m, n) = A.size();
        self.check_dimensions(m, n)?;
        self.check_factors()?;

        let work = &mut self.work;
        if work.len() < usize::max(m, n) {
            work.resize(usize::max(m, n), T::zero());
        }

        let entries = if inverse {
            Either::Left(self.entries.iter().enumerate().rev())
        } else {
            Either::Right(self.entries.iter().enumerate())
        };

        for (index, entry) in entries {
            let Some(diag) = entry.diagonal() else {
                continue;
            };
            // check_factors has read every diagonal, so no borrow is outstanding
            let diag = diag.borrow();

            let d: &[T] = if inverse {
                let dinv = &mut work[..diag.len()];
                dinv.scalarop_from(T::recip, &diag);
                dinv
            } else {
                &diag
            };

            match entry.side() {
                ScaleType::Left => {
                    A.lscale(d);
                    b.hadamard(d);
                }
                ScaleType::Right => {
                    A.rscale(d);
                }
            }

            trace!(index, side = %entry.side(), inverse, "applied scaling");
        }

        Ok(())
    }
}
