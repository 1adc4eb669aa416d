//! Diagonal scaling of sparse linear systems.
//!
//! A [`Scaling`] records an ordered list of diagonal row (`Left`) and
//! column (`Right`) scalings.   Factors are supplied by the caller or
//! computed from the matrix as inverse absolute row or column sums.   The
//! registry scales a [`LinearProblem`] before it is handed to a linear
//! solver, removes the scaling afterwards, and applies the accumulated
//! factors of either side to standalone vectors such as residuals or
//! solution iterates.
//!
//! For a left diagonal `D_L` and a right diagonal `D_R` the scaled system is
//!
//! ```text
//!     (D_L A D_R) y = D_L b,      x = D_R y
//! ```

mod apply;
mod compute;
mod error_types;
mod print;
mod problem;
mod registry;
mod settings;
mod types;
mod vectors;

pub use error_types::*;
pub use problem::*;
pub use registry::*;
pub use settings::*;
pub use types::*;

#[cfg(test)]
mod tests;
