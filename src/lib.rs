//! __diagscale__ is a diagonal scaling engine for sparse linear systems.
//!
//! Inside an iterative nonlinear solve each Newton step produces a linear
//! system `A x = b`.   Badly scaled rows and columns in `A` hurt the
//! linear solver, so the system is preconditioned by diagonal factors
//!
//! $$
//! \hat{A} = D_L A D_R, \qquad \hat{b} = D_L b
//! $$
//!
//! solved, and then mapped back with $x = D_R \hat{x}$.
//!
//! The factors can be supplied directly or derived from the matrix as
//! inverse absolute row sums or column sums.   Rows or columns whose sum is
//! numerically zero are left unscaled, so no Inf or NaN is ever introduced.
//!
//! ```no_run
//! use diagscale::algebra::CscMatrix;
//! use diagscale::scaling::*;
//!
//! let A = CscMatrix::from(&[
//!     [1., 1., 0.],
//!     [0., 4., 0.],
//!     [2., 0., 3.],
//! ]);
//! let mut problem = LinearProblem::new(A, vec![6., 8., 10.], vec![0.; 3]).unwrap();
//!
//! let d = SharedDiagonal::new(3);
//! let mut scaling = Scaling::default();
//! scaling.add_row_sum_scaling(ScaleType::Left, d.clone());
//!
//! scaling.compute_scaling(&problem).unwrap();
//! scaling.scale_linear_system(&mut problem).unwrap();
//! assert_eq!(problem.rhs(), &[3., 2., 2.]);
//!
//! scaling.unscale_linear_system(&mut problem).unwrap();
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
pub mod io;
pub mod scaling;
