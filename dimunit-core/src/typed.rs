//! Narrow quantity types committed to a single dimension vector.

use crate::dimension::DimensionVector;
use crate::error::{ensure_compatible, Result};
use crate::quantity::HasDimensions;

/// A scalar type whose dimensions are fixed at compile time.
///
/// Implementations are generated with `#[derive(TypedQuantity)]` on a single-field `f64` tuple struct; see
/// [`Length`](crate::Length) for an example. The conversion protocol from a general value is
/// [`assign_from`](Self::assign_from) (NaN plus error on mismatch) or
/// [`try_from_dimensioned`](Self::try_from_dimensioned).
pub trait TypedQuantity: HasDimensions + Copy + Sized {
    /// Type name used by the `%#v` and bad-verb renderings.
    const NAME: &'static str;

    /// The fixed dimension vector.
    const DIMENSIONS: DimensionVector;

    /// Wraps a magnitude expressed in SI base units.
    fn from_magnitude(value: f64) -> Self;

    /// Converts a dimensioned value, failing when its dimensions differ from [`Self::DIMENSIONS`].
    ///
    /// ```rust
    /// use dimunit_core::{dims, Length, Quantity, TypedQuantity};
    ///
    /// let l = Length::try_from_dimensioned(&Quantity::new(42.0, dims::METER))?;
    /// assert_eq!(l, Length(42.0));
    /// assert!(Length::try_from_dimensioned(&Quantity::new(42.0, dims::KILOGRAM)).is_err());
    /// # Ok::<(), dimunit_core::DimensionError>(())
    /// ```
    fn try_from_dimensioned<T>(source: &T) -> Result<Self>
    where
        T: HasDimensions + ?Sized,
    {
        ensure_compatible(&Self::DIMENSIONS, &source.dimensions())?;
        Ok(Self::from_magnitude(source.magnitude()))
    }

    /// Adopts the magnitude of `source`. On a dimension mismatch `self` becomes NaN and the error is returned.
    ///
    /// ```rust
    /// use dimunit_core::{dims, Length, Quantity, TypedQuantity};
    ///
    /// let mut l = Length(1.0);
    /// assert!(l.assign_from(&Quantity::new(3.0, dims::SECOND)).is_err());
    /// assert!(l.0.is_nan());
    /// ```
    fn assign_from<T>(&mut self, source: &T) -> Result<()>
    where
        T: HasDimensions + ?Sized,
    {
        match Self::try_from_dimensioned(source) {
            Ok(value) => {
                *self = value;
                Ok(())
            }
            Err(err) => {
                *self = Self::from_magnitude(f64::NAN);
                Err(err)
            }
        }
    }
}

/// Name of the typed quantity whose dimensions are exactly `dims`, if any.
pub(crate) fn named_type(dims: &DimensionVector) -> Option<&'static str> {
    use crate::units::{Dimless, Length, Mass, Time};

    const NAMED: [(DimensionVector, &str); 4] = [
        (Dimless::DIMENSIONS, Dimless::NAME),
        (Mass::DIMENSIONS, Mass::NAME),
        (Length::DIMENSIONS, Length::NAME),
        (Time::DIMENSIONS, Time::NAME),
    ];

    NAMED.iter().find(|(d, _)| d == dims).map(|(_, name)| *name)
}
