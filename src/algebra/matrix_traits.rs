/// Dimension queries on a matrix.
///
/// The row dimension is the map that left scaling vectors must
/// agree with, and the column dimension the one for right scaling.
pub trait ShapedMatrix {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}
