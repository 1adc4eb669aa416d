use super::ScalingError;
use crate::algebra::*;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt::{Display, Formatter};
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which side of the linear system a diagonal scaling acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScaleType {
    /// Row scaling.  Multiplies the rows of the matrix and the right-hand side.
    Left,
    /// Column scaling.  Multiplies the columns of the matrix.
    Right,
}

impl Display for ScaleType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleType::Left => f.pad("Left"),
            ScaleType::Right => f.pad("Right"),
        }
    }
}

/// Where the factors of a scaling entry come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SourceType {
    None,
    RowSum,
    ColSum,
    UserDefined,
}

impl Display for SourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceType::None => f.pad("None"),
            SourceType::RowSum => f.pad("RowSum"),
            SourceType::ColSum => f.pad("ColSum"),
            SourceType::UserDefined => f.pad("UserDefined"),
        }
    }
}

/// A vector of diagonal scaling factors with shared ownership.
///
/// Cloning a `SharedDiagonal` produces a second handle to the same
/// storage, so a caller can keep a handle to a vector that has been
/// registered with a [`Scaling`](crate::scaling::Scaling) and observe the
/// factors written into it by
/// [`compute_scaling`](crate::scaling::Scaling::compute_scaling).
/// Whoever writes last wins; after registration the registry is the only
/// writer unless the caller explicitly mutates through
/// [`borrow_mut`](SharedDiagonal::borrow_mut).
#[derive(Debug, Clone, Default)]
pub struct SharedDiagonal<T> {
    data: Rc<RefCell<Vec<T>>>,
}

impl<T> SharedDiagonal<T>
where
    T: FloatT,
{
    /// A diagonal of length `n` filled with ones.
    pub fn new(n: usize) -> Self {
        Self::from_vec(vec![T::one(); n])
    }

    pub fn from_vec(v: Vec<T>) -> Self {
        Self {
            data: Rc::new(RefCell::new(v)),
        }
    }

    /// number of factors
    ///
    /// # Panics
    /// Panics if the storage is currently mutably borrowed.
    pub fn len(&self) -> usize {
        self.data.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the current factors.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.borrow().clone()
    }

    /// Read access to the factors.
    ///
    /// # Panics
    /// Panics if the storage is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, [T]> {
        Ref::map(self.data.borrow(), |v| v.as_slice())
    }

    /// Write access to the factors.  The length is fixed.
    ///
    /// # Panics
    /// Panics if the storage is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, [T]> {
        RefMut::map(self.data.borrow_mut(), |v| v.as_mut_slice())
    }

    /// True if both handles refer to the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    pub(crate) fn try_read(&self, index: usize) -> Result<Ref<'_, [T]>, ScalingError> {
        self.data
            .try_borrow()
            .map(|v| Ref::map(v, |v| v.as_slice()))
            .map_err(|_| ScalingError::DiagonalBorrowed { index })
    }

    pub(crate) fn try_write(&self, index: usize) -> Result<RefMut<'_, [T]>, ScalingError> {
        self.data
            .try_borrow_mut()
            .map(|v| RefMut::map(v, |v| v.as_mut_slice()))
            .map_err(|_| ScalingError::DiagonalBorrowed { index })
    }
}

impl<T> From<Vec<T>> for SharedDiagonal<T>
where
    T: FloatT,
{
    fn from(v: Vec<T>) -> Self {
        Self::from_vec(v)
    }
}

/// Source of the factors of a single scaling entry, carrying the
/// diagonal storage where one is needed.
#[derive(Debug, Clone)]
pub enum ScalingSource<T> {
    /// Identity scaling.  Holds no factors and is skipped by every
    /// numeric operation.
    None,
    /// Inverse absolute row sums of the matrix, written into the
    /// held storage by [`compute_scaling`](crate::scaling::Scaling::compute_scaling).
    RowSum(SharedDiagonal<T>),
    /// Inverse absolute column sums of the matrix, written into the
    /// held storage by [`compute_scaling`](crate::scaling::Scaling::compute_scaling).
    ColSum(SharedDiagonal<T>),
    /// Factors supplied by the caller.  Never recomputed.
    UserDefined(SharedDiagonal<T>),
}

impl<T> ScalingSource<T> {
    pub fn source_type(&self) -> SourceType {
        match self {
            ScalingSource::None => SourceType::None,
            ScalingSource::RowSum(_) => SourceType::RowSum,
            ScalingSource::ColSum(_) => SourceType::ColSum,
            ScalingSource::UserDefined(_) => SourceType::UserDefined,
        }
    }

    pub fn diagonal(&self) -> Option<&SharedDiagonal<T>> {
        match self {
            ScalingSource::None => None,
            ScalingSource::RowSum(d) | ScalingSource::ColSum(d) | ScalingSource::UserDefined(d) => {
                Some(d)
            }
        }
    }

    /// True if the factors are derived from the matrix.
    pub fn needs_computation(&self) -> bool {
        matches!(self, ScalingSource::RowSum(_) | ScalingSource::ColSum(_))
    }
}

/// A single registered scaling: a side paired with a source.
#[derive(Debug, Clone)]
pub struct ScalingEntry<T> {
    side: ScaleType,
    source: ScalingSource<T>,
}

impl<T> ScalingEntry<T> {
    pub(crate) fn new(side: ScaleType, source: ScalingSource<T>) -> Self {
        Self { side, source }
    }

    pub fn side(&self) -> ScaleType {
        self.side
    }

    pub fn source(&self) -> &ScalingSource<T> {
        &self.source
    }

    pub fn source_type(&self) -> SourceType {
        self.source.source_type()
    }

    pub fn diagonal(&self) -> Option<&SharedDiagonal<T>> {
        self.source.diagonal()
    }
}
