use crate::algebra::*;
use std::iter::zip;

impl<T: FloatT> MatrixMath for CscMatrix<T> {
    type T = T;

    fn col_sums(&self, sums: &mut [T]) {
        assert_eq!(sums.len(), self.colptr.len() - 1);

        for (i, s) in sums.iter_mut().enumerate() {
            *s = self.nzval[self.colptr[i]..self.colptr[i + 1]].norm_one();
        }
    }

    fn row_sums(&self, sums: &mut [T]) {
        assert_eq!(sums.len(), self.m);
        assert_eq!(self.rowval.len(), *self.colptr.last().unwrap());

        sums.fill(T::zero());
        for (row, val) in zip(&self.rowval, &self.nzval) {
            sums[*row] += T::abs(*val);
        }
    }

    fn norm_inf(&self) -> T {
        self.nzval.norm_inf()
    }

    fn lscale(&mut self, l: &[T]) {
        assert_eq!(l.len(), self.m);

        for (val, row) in zip(&mut self.nzval, &self.rowval) {
            *val *= l[*row];
        }
    }

    fn rscale(&mut self, r: &[T]) {
        assert_eq!(r.len(), self.n);

        let colptr = &self.colptr;
        let vals = &mut self.nzval;

        assert_eq!(vals.len(), *colptr.last().unwrap());
        for (i, &ri) in r.iter().enumerate() {
            vals[colptr[i]..colptr[i + 1]]
                .iter_mut()
                .for_each(|v| *v *= ri);
        }
    }
}
