//! Pure numbers.

use dimunit_derive::TypedQuantity;

/// A dimensionless value.
///
/// Ratios of like quantities convert into `Dimless`:
///
/// ```rust
/// use dimunit_core::{Dimless, Length, Quantity};
///
/// let ratio = Quantity::from(Length::KILOMETER) / Quantity::from(Length::METER);
/// assert_eq!(Dimless::try_from(ratio), Ok(Dimless(1000.0)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, TypedQuantity)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
#[quantity(name = "Dimless", dimensions = crate::dims::DIMLESS)]
pub struct Dimless(pub f64);

impl From<f64> for Dimless {
    #[inline]
    fn from(value: f64) -> Self {
        Dimless(value)
    }
}

impl From<Dimless> for f64 {
    #[inline]
    fn from(value: Dimless) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dims, Quantity};

    #[test]
    fn renders_without_dimensions() {
        let e = Dimless(core::f64::consts::E);
        assert_eq!(e.to_string(), "2.718281828459045");
        assert_eq!(format!("{e:#}"), "Dimless(2.718281828459045)");
    }

    #[test]
    fn accepts_only_dimensionless_quantities() {
        assert_eq!(Dimless::try_from(Quantity::dimensionless(0.5)), Ok(Dimless(0.5)));
        assert!(Dimless::try_from(Quantity::new(0.5, dims::HERTZ)).is_err());
    }

    #[test]
    fn f64_conversions() {
        assert_eq!(f64::from(Dimless::from(4.0)), 4.0);
    }
}
