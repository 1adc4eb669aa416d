#![allow(non_snake_case)]
use super::*;
use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use std::fs::File;
use std::io::Write;
use tracing::debug;

/// An ordered collection of diagonal scalings applied to a linear system.
///
/// Entries are registered with [`add_user_scaling`](Scaling::add_user_scaling),
/// [`add_row_sum_scaling`](Scaling::add_row_sum_scaling) or
/// [`add_col_sum_scaling`](Scaling::add_col_sum_scaling) and are never
/// removed.   A typical solve looks like
///
/// ```no_run
/// use diagscale::algebra::CscMatrix;
/// use diagscale::scaling::*;
///
/// let A = CscMatrix::from(&[
///     [1., 1., 0.],
///     [0., 4., 0.],
///     [2., 0., 3.],
/// ]);
/// let mut problem = LinearProblem::new(A, vec![6., 8., 10.], vec![0.; 3]).unwrap();
///
/// let mut scaling = Scaling::default();
/// let d = SharedDiagonal::new(3);
/// scaling.add_row_sum_scaling(ScaleType::Left, d.clone());
///
/// scaling.compute_scaling(&problem).unwrap();
/// scaling.scale_linear_system(&mut problem).unwrap();
/// // ... solve the scaled system ...
/// scaling.unscale_linear_system(&mut problem).unwrap();
/// ```
///
/// Net factors on one side are the elementwise product of every diagonal
/// registered on that side.   Since diagonal scalings commute the order of
/// registration only affects floating point rounding.
#[derive(Debug)]
pub struct Scaling<T: FloatT = f64> {
    pub(crate) entries: Vec<ScalingEntry<T>>,

    // scratch space for reciprocals, sized max(m,n) on first use
    pub(crate) work: Vec<T>,

    // number of scale_linear_system calls not yet undone
    pub(crate) depth: usize,

    pub settings: ScalingSettings<T>,

    pub(crate) stream: PrintTarget,
}

impl<T> Default for Scaling<T>
where
    T: FloatT,
{
    fn default() -> Self {
        Self::new(ScalingSettings::default())
    }
}

impl<T> Scaling<T>
where
    T: FloatT,
{
    pub fn new(settings: ScalingSettings<T>) -> Self {
        Self {
            entries: Vec::new(),
            work: Vec::new(),
            depth: 0,
            settings,
            stream: PrintTarget::default(),
        }
    }

    /// Add a user supplied diagonal scale vector.  `D` must match the
    /// row dimension for `Left` scaling or the column dimension for
    /// `Right` scaling, and is never recomputed.
    pub fn add_user_scaling(&mut self, side: ScaleType, D: SharedDiagonal<T>) {
        self.push(side, ScalingSource::UserDefined(D));
    }

    /// Add inverse row sum scaling.  `D` is storage for the factors,
    /// overwritten by each call to [`compute_scaling`](Scaling::compute_scaling).
    pub fn add_row_sum_scaling(&mut self, side: ScaleType, D: SharedDiagonal<T>) {
        self.push(side, ScalingSource::RowSum(D));
    }

    /// Add inverse column sum scaling.  `D` is storage for the factors,
    /// overwritten by each call to [`compute_scaling`](Scaling::compute_scaling).
    pub fn add_col_sum_scaling(&mut self, side: ScaleType, D: SharedDiagonal<T>) {
        self.push(side, ScalingSource::ColSum(D));
    }

    /// Add an identity entry with no factors.
    pub fn add_identity_scaling(&mut self, side: ScaleType) {
        self.push(side, ScalingSource::None);
    }

    fn push(&mut self, side: ScaleType, source: ScalingSource<T>) {
        let entry = ScalingEntry::new(side, source);
        debug!(
            index = self.entries.len(),
            side = %entry.side(),
            source = %entry.source_type(),
            "registered scaling"
        );
        self.entries.push(entry);
    }

    /// number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &ScalingEntry<T>> {
        self.entries.iter()
    }

    /// True if any entry takes its factors from the matrix.
    pub fn needs_computation(&self) -> bool {
        self.entries.iter().any(|e| e.source().needs_computation())
    }

    /// True if the system has been scaled and not yet unscaled.
    pub fn is_scaled(&self) -> bool {
        self.depth > 0
    }

    /// Number of outstanding [`scale_linear_system`](Scaling::scale_linear_system) calls.
    pub fn scale_depth(&self) -> usize {
        self.depth
    }

    // -------------------------------------
    // shared checks
    // -------------------------------------

    // entries holding factors on the given side
    pub(crate) fn diagonals(
        &self,
        side: ScaleType,
    ) -> impl Iterator<Item = (usize, &SharedDiagonal<T>)> {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.side() == side)
            .filter_map(|(i, e)| e.diagonal().map(|d| (i, d)))
    }

    // error for the first entry satisfying `pred`, for use when
    // the problem has no matrix
    pub(crate) fn unmapped(&self, pred: impl Fn(&ScalingEntry<T>) -> bool) -> Option<ScalingError> {
        self.entries
            .iter()
            .position(pred)
            .map(|index| ScalingError::UnmappedSource {
                index,
                kind: self.entries[index].source_type(),
            })
    }

    /// Checks every registered diagonal against an `m x n` matrix.
    pub(crate) fn check_dimensions(&self, m: usize, n: usize) -> Result<(), ScalingError> {
        for (index, entry) in self.entries.iter().enumerate() {
            let Some(d) = entry.diagonal() else {
                continue;
            };
            let found = d.try_read(index)?.len();
            let side = entry.side();

            let expected = match side {
                ScaleType::Left => m,
                ScaleType::Right => n,
            };
            // computed sums must also fit the dimension they are taken over
            let source_expected = match entry.source_type() {
                SourceType::RowSum => m,
                SourceType::ColSum => n,
                _ => expected,
            };

            for expected in [expected, source_expected] {
                if found != expected {
                    return Err(ScalingError::DimensionMismatch {
                        index,
                        side,
                        expected,
                        found,
                    });
                }
            }
        }
        Ok(())
    }

    /// Checks that every factor is finite and nonzero.
    pub(crate) fn check_factors(&self) -> Result<(), ScalingError> {
        for (index, entry) in self.entries.iter().enumerate() {
            let Some(d) = entry.diagonal() else {
                continue;
            };
            let d = d.try_read(index)?;
            if let Some(position) = d.iter().position(|&v| v == T::zero() || !v.is_finite()) {
                return Err(ScalingError::InvalidFactor { index, position });
            }
        }
        Ok(())
    }

    /// Checks every diagonal on `side` has length `len`.
    pub(crate) fn check_side_length(&self, side: ScaleType, len: usize) -> Result<(), ScalingError> {
        for (index, d) in self.diagonals(side) {
            let found = d.try_read(index)?.len();
            if found != len {
                return Err(ScalingError::DimensionMismatch {
                    index,
                    side,
                    expected: len,
                    found,
                });
            }
        }
        Ok(())
    }
}

impl<T> ConfigurablePrintTarget for Scaling<T>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}
