use crate::algebra::*;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Error, Debug)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Settings for a [`Scaling`](crate::scaling::Scaling) registry.
///
/// Build with [`ScalingSettingsBuilder`], which validates on `build()`.
///
/// ```no_run
/// use diagscale::scaling::*;
///
/// let settings = ScalingSettingsBuilder::<f64>::default()
///     .near_zero_tol(1e-12)
///     .verbose(true)
///     .build()
///     .unwrap();
/// ```

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScalingSettings<T: FloatT> {
    /// relative threshold for treating a row or column sum as zero.
    ///
    /// A sum `s` gets the factor `1.0` instead of `1/s` when
    /// `s < max(near_zero_tol * max|a_ij|, T::min_positive_value())`.
    #[builder(default = "T::epsilon()")]
    pub near_zero_tol: T,

    /// reject an unscale that has no matching scale
    #[builder(default = "true")]
    pub enforce_pairing: bool,

    /// write a report to the print target after computing factors
    #[builder(default = "false")]
    pub verbose: bool,

    /// longest diagonal printed in full by the report.  Longer
    /// diagonals are summarized.
    #[builder(default = "10")]
    pub print_max_entries: usize,
}

impl<T> Default for ScalingSettings<T>
where
    T: FloatT,
{
    fn default() -> ScalingSettings<T> {
        ScalingSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> ScalingSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_near_zero_tol(self.near_zero_tol)
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for ScalingSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        ScalingSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> ScalingSettingsBuilder<T>
where
    T: FloatT,
{
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(tol) = self.near_zero_tol {
            validate_near_zero_tol(tol)?;
        }
        Ok(())
    }
}

fn validate_near_zero_tol<T: FloatT>(tol: T) -> Result<(), SettingsError> {
    if tol.is_finite() && tol >= T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("near_zero_tol"))
    }
}
