#![allow(non_snake_case)]
use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Main trait for floating point types used throughout the crate.
///
/// Implementations are provided for any type satisfying the bounds below,
/// which in practice means `f32` and `f64`.  `FloatT` relies on
/// [`num_traits`](num_traits) for most of its constituent trait bounds.
pub trait FloatT:
    'static
    + Send
    + Float
    + FloatConst
    + NumAssign
    + Default
    + FromPrimitive
    + Display
    + LowerExp
    + Debug
    + Sized
{
}

impl<T> FloatT for T where
    T: 'static
        + Send
        + Float
        + FloatConst
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + Sized
{
}

/// Conversion of counts and constants to [`FloatT`](crate::algebra::FloatT),
/// e.g. `v.len().as_T()` when averaging.
pub trait AsFloatT<T>: 'static {
    fn as_T(&self) -> T;
}

macro_rules! impl_as_FloatT {
    ($ty:ty, $ident:ident) => {
        impl<T> AsFloatT<T> for $ty
        where
            T: std::ops::Mul<T, Output = T> + FromPrimitive + 'static,
        {
            #[inline]
            fn as_T(&self) -> T {
                T::$ident(*self).unwrap()
            }
        }
    };
}
impl_as_FloatT!(usize, from_usize);
impl_as_FloatT!(f64, from_f64);
