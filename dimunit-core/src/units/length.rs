//! Length in metres.

use dimunit_derive::TypedQuantity;

/// A length in metres.
///
/// ```rust
/// use dimunit_core::Length;
///
/// let d = 3.0 * Length::KILOMETER + Length(250.0);
/// assert_eq!(d, Length(3250.0));
/// assert_eq!(d.to_string(), "3250 m");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, TypedQuantity)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
#[quantity(name = "Length", dimensions = crate::dims::METER)]
pub struct Length(pub f64);

// ─────────────────────────────────────────────────────────────────────────────
// SI ladder
// ─────────────────────────────────────────────────────────────────────────────

impl Length {
    /// 1e24 m
    pub const YOTTAMETER: Length = Length(1e24);
    /// 1e21 m
    pub const ZETTAMETER: Length = Length(1e21);
    /// 1e18 m
    pub const EXAMETER: Length = Length(1e18);
    /// 1e15 m
    pub const PETAMETER: Length = Length(1e15);
    /// 1e12 m
    pub const TERAMETER: Length = Length(1e12);
    /// 1e9 m
    pub const GIGAMETER: Length = Length(1e9);
    /// 1e6 m
    pub const MEGAMETER: Length = Length(1e6);
    /// 1e3 m
    pub const KILOMETER: Length = Length(1e3);
    /// 1e2 m
    pub const HECTOMETER: Length = Length(1e2);
    /// 1e1 m
    pub const DECAMETER: Length = Length(1e1);
    /// Metre (SI base unit).
    pub const METER: Length = Length(1.0);
    /// 1e-1 m
    pub const DECIMETER: Length = Length(1e-1);
    /// 1e-2 m
    pub const CENTIMETER: Length = Length(1e-2);
    /// 1e-3 m
    pub const MILLIMETER: Length = Length(1e-3);
    /// 1e-6 m
    pub const MICROMETER: Length = Length(1e-6);
    /// 1e-9 m
    pub const NANOMETER: Length = Length(1e-9);
    /// 1e-12 m
    pub const PICOMETER: Length = Length(1e-12);
    /// 1e-15 m
    pub const FEMTOMETER: Length = Length(1e-15);
    /// 1e-18 m
    pub const ATTOMETER: Length = Length(1e-18);
    /// 1e-21 m
    pub const ZEPTOMETER: Length = Length(1e-21);
    /// 1e-24 m
    pub const YOCTOMETER: Length = Length(1e-24);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dims, HasDimensions, Quantity, TypedQuantity};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn materialises_with_metre_dimensions() {
        let q = Length(2.0).to_quantity();
        assert_eq!(q.dimensions(), dims::METER);
        assert_eq!(q.value(), 2.0);
    }

    #[test]
    fn prefix_ladder() {
        assert_eq!(Length::KILOMETER.0, 1000.0);
        assert_eq!(Length::NANOMETER.0, 1e-9);
        assert_relative_eq!((Length::MEGAMETER / Length::KILOMETER.0).0, 1000.0);
        assert_relative_eq!((Length::CENTIMETER * 100.0).0, Length::METER.0);
    }

    #[test]
    fn same_type_arithmetic() {
        let mut l = Length::METER;
        l += Length(0.5);
        l -= Length(0.25);
        assert_eq!(l, Length(1.25));
        assert_eq!(-l, Length(-1.25));
        assert_eq!(l - Length(1.0), Length(0.25));
    }

    #[test]
    fn try_from_quantity() {
        assert_eq!(Length::try_from(Quantity::new(5.0, dims::METER)), Ok(Length(5.0)));
        assert!(Length::try_from(&Quantity::new(5.0, dims::SECOND)).is_err());
        assert_eq!(Quantity::from(Length(5.0)), Quantity::new(5.0, dims::METER));
    }

    #[test]
    fn formats_like_its_quantity() {
        let l = Length(1.61619926e-35);
        assert_eq!(l.to_string(), "1.61619926e-35 m");
        assert_eq!(format!("{l:#}"), "Length(1.61619926e-35)");
        assert_eq!(format!("{:.2e}", Length(1500.0)), "1.50e+03 m");
    }

    proptest! {
        #[test]
        fn typed_round_trip_through_quantity(v in -1e12f64..1e12) {
            let back = Length::try_from_dimensioned(&Length(v).to_quantity()).unwrap();
            prop_assert_eq!(back, Length(v));
        }
    }
}
