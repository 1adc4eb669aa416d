use super::*;
use crate::algebra::*;

impl<T> Scaling<T>
where
    T: FloatT,
{
    /// Applies any `Left` scaling vectors to `input`, producing
    /// `result[i] = input[i] * Π d[i]` over every `Left` diagonal.
    ///
    /// Neither the registered diagonals nor any matrix are modified.
    /// See [`apply_left_scaling_in_place`](Scaling::apply_left_scaling_in_place)
    /// to scale a vector in place.
    pub fn apply_left_scaling(&self, input: &[T], result: &mut [T]) -> Result<(), ScalingError> {
        self.apply_side_scaling(ScaleType::Left, input, result)
    }

    /// Applies any `Right` scaling vectors to `input`.  Used to recover the
    /// solution of the original system from the solution of the scaled one.
    pub fn apply_right_scaling(&self, input: &[T], result: &mut [T]) -> Result<(), ScalingError> {
        self.apply_side_scaling(ScaleType::Right, input, result)
    }

    pub fn apply_left_scaling_in_place(&self, v: &mut [T]) -> Result<(), ScalingError> {
        self.apply_side_scaling_in_place(ScaleType::Left, v)
    }

    pub fn apply_right_scaling_in_place(&self, v: &mut [T]) -> Result<(), ScalingError> {
        self.apply_side_scaling_in_place(ScaleType::Right, v)
    }

    /// The net factors on one side, i.e. the elementwise product of every
    /// diagonal registered on that side, as a vector of length `n`.
    pub fn net_scaling(&self, side: ScaleType, n: usize) -> Result<Vec<T>, ScalingError> {
        let mut out = vec![T::one(); n];
        self.apply_side_scaling_in_place(side, &mut out)?;
        Ok(out)
    }

    fn apply_side_scaling(
        &self,
        side: ScaleType,
        input: &[T],
        result: &mut [T],
    ) -> Result<(), ScalingError> {
        if input.len() != result.len() {
            return Err(ScalingError::VectorLength {
                expected: input.len(),
                found: result.len(),
            });
        }
        self.check_side_length(side, input.len())?;

        // lengths were checked through try_read, so borrow cannot fail
        let mut first = true;
        for (_, d) in self.diagonals(side) {
            let d = d.borrow();
            if first {
                result.hadamard_from(input, &d);
                first = false;
            } else {
                result.hadamard(&d);
            }
        }
        if first {
            result.copy_from(input);
        }
        Ok(())
    }

    fn apply_side_scaling_in_place(&self, side: ScaleType, v: &mut [T]) -> Result<(), ScalingError> {
        self.check_side_length(side, v.len())?;

        for (_, d) in self.diagonals(side) {
            v.hadamard(&d.borrow());
        }
        Ok(())
    }
}
