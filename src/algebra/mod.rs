//! Minimal sparse linear algebra consumed by the scaling engine.
//!
//! All scaling arithmetic goes through the [`VectorMath`] and [`MatrixMath`]
//! traits, implemented here for slices and for [`CscMatrix`].   A matrix
//! type from elsewhere can take part in scaling by implementing
//! [`MatrixMath`] and [`ShapedMatrix`].

#![allow(non_snake_case)]

mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod scalarmath;
mod vecmath;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;

mod csc;
pub use csc::*;
