//! Mass in kilograms.
//!
//! The kilogram is the SI base unit, so the prefix ladder is stated against the gram (`Mass::GRAM == Mass(1e-3)`).

use dimunit_derive::TypedQuantity;

/// A mass in kilograms.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, TypedQuantity)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
#[quantity(name = "Mass", dimensions = crate::dims::KILOGRAM)]
pub struct Mass(pub f64);

impl Mass {
    /// 1e21 kg
    pub const YOTTAGRAM: Mass = Mass(1e21);
    /// 1e18 kg
    pub const ZETTAGRAM: Mass = Mass(1e18);
    /// 1e15 kg
    pub const EXAGRAM: Mass = Mass(1e15);
    /// 1e12 kg
    pub const PETAGRAM: Mass = Mass(1e12);
    /// 1e9 kg
    pub const TERAGRAM: Mass = Mass(1e9);
    /// 1e6 kg
    pub const GIGAGRAM: Mass = Mass(1e6);
    /// 1e3 kg
    pub const MEGAGRAM: Mass = Mass(1e3);
    /// Kilogram (SI base unit).
    pub const KILOGRAM: Mass = Mass(1.0);
    /// 1e-1 kg
    pub const HECTOGRAM: Mass = Mass(1e-1);
    /// 1e-2 kg
    pub const DECAGRAM: Mass = Mass(1e-2);
    /// 1e-3 kg
    pub const GRAM: Mass = Mass(1e-3);
    /// 1e-4 kg
    pub const DECIGRAM: Mass = Mass(1e-4);
    /// 1e-5 kg
    pub const CENTIGRAM: Mass = Mass(1e-5);
    /// 1e-6 kg
    pub const MILLIGRAM: Mass = Mass(1e-6);
    /// 1e-9 kg
    pub const MICROGRAM: Mass = Mass(1e-9);
    /// 1e-12 kg
    pub const NANOGRAM: Mass = Mass(1e-12);
    /// 1e-15 kg
    pub const PICOGRAM: Mass = Mass(1e-15);
    /// 1e-18 kg
    pub const FEMTOGRAM: Mass = Mass(1e-18);
    /// 1e-21 kg
    pub const ATTOGRAM: Mass = Mass(1e-21);
    /// 1e-24 kg
    pub const ZEPTOGRAM: Mass = Mass(1e-24);
    /// 1e-27 kg
    pub const YOCTOGRAM: Mass = Mass(1e-27);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dims, HasDimensions, Quantity, TypedQuantity};
    use approx::assert_relative_eq;

    #[test]
    fn gram_is_a_thousandth_of_a_kilogram() {
        assert_eq!(Mass::GRAM.0, 1e-3);
        assert_relative_eq!((Mass::GRAM * 1000.0).0, Mass::KILOGRAM.0);
        assert_relative_eq!((Mass::MEGAGRAM / 1000.0).0, Mass::KILOGRAM.0);
    }

    #[test]
    fn dimensions_are_kilogram() {
        assert_eq!(Mass::DIMENSIONS, dims::KILOGRAM);
        assert_eq!(Mass(3.0).dimensions(), dims::KILOGRAM);
    }

    #[test]
    fn assign_from_density_times_volume() {
        let density = Quantity::new(1000.0, dims::KILOGRAM_PER_METER3);
        let volume = Quantity::new(0.002, dims::METER3);
        let mut m = Mass::default();
        m.assign_from(&(density * volume)).unwrap();
        assert_relative_eq!(m.0, 2.0);
    }

    #[test]
    fn go_syntax_rendering() {
        assert_eq!(format!("{:#}", Mass::KILOGRAM), "Mass(1)");
        assert_eq!(Mass(9.81).to_string(), "9.81 kg");
    }
}
