//! Base dimensions and dimension vectors.
//!
//! A [`DimensionVector`] records the exponent of each of the seven SI base dimensions. It is stored as a fixed array
//! indexed by [`BaseDimension`], so a dimension that does not appear in a quantity simply has exponent `0` and there
//! is no difference between "absent" and "zero".
//!
//! ```rust
//! use dimunit_core::{BaseDimension, DimensionVector};
//!
//! let accel = DimensionVector::from_pairs([(BaseDimension::Length, 1), (BaseDimension::Time, -2)]);
//! assert_eq!(accel.to_string(), "m s^-2");
//! ```

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Div, DivAssign, Mul, MulAssign};

/// One of the seven SI base dimensions.
///
/// The declaration order is the canonical rendering order used by [`DimensionVector`]'s `Display` impl.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BaseDimension {
    /// Mass, in kilograms.
    Mass,
    /// Length, in metres.
    Length,
    /// Time, in seconds.
    Time,
    /// Electric current, in amperes.
    Current,
    /// Thermodynamic temperature, in kelvin.
    Temperature,
    /// Luminous intensity, in candela.
    Luminosity,
    /// Amount of substance, in moles.
    ChemicalAmount,
}

impl BaseDimension {
    /// Number of base dimensions.
    pub const COUNT: usize = 7;

    /// All base dimensions in canonical order.
    pub const ALL: [BaseDimension; Self::COUNT] = [
        BaseDimension::Mass,
        BaseDimension::Length,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Luminosity,
        BaseDimension::ChemicalAmount,
    ];

    /// SI base unit symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Mass => "kg",
            BaseDimension::Length => "m",
            BaseDimension::Time => "s",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::Luminosity => "cd",
            BaseDimension::ChemicalAmount => "mol",
        }
    }

    /// Lowercase name, used as the serialized key.
    pub const fn name(self) -> &'static str {
        match self {
            BaseDimension::Mass => "mass",
            BaseDimension::Length => "length",
            BaseDimension::Time => "time",
            BaseDimension::Current => "current",
            BaseDimension::Temperature => "temperature",
            BaseDimension::Luminosity => "luminosity",
            BaseDimension::ChemicalAmount => "chemical_amount",
        }
    }

    /// Looks a base dimension up by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// Exponents of the seven SI base dimensions.
///
/// Two vectors are equal exactly when every exponent is equal. Because the storage is a dense array, building a
/// vector with explicit zero entries yields the same value as leaving them out:
///
/// ```rust
/// use dimunit_core::{BaseDimension::*, DimensionVector};
///
/// let a = DimensionVector::from_pairs([(Mass, 1), (Time, -2)]);
/// let b = DimensionVector::from_pairs([(Mass, 1), (Time, -2), (Length, 0)]);
/// assert_eq!(a, b);
/// assert_eq!(b.len(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DimensionVector([i32; BaseDimension::COUNT]);

impl DimensionVector {
    /// The dimensionless vector (all exponents zero).
    pub const DIMLESS: Self = Self([0; BaseDimension::COUNT]);

    /// Vector with a single base dimension raised to `exponent`.
    pub const fn of(dim: BaseDimension, exponent: i32) -> Self {
        Self::DIMLESS.with(dim, exponent)
    }

    /// Returns a copy with `dim` set to `exponent`.
    ///
    /// Usable in `const` context to build named vectors:
    ///
    /// ```rust
    /// use dimunit_core::{BaseDimension, DimensionVector};
    ///
    /// const VELOCITY: DimensionVector = DimensionVector::DIMLESS
    ///     .with(BaseDimension::Length, 1)
    ///     .with(BaseDimension::Time, -1);
    /// assert_eq!(VELOCITY.to_string(), "m s^-1");
    /// ```
    pub const fn with(self, dim: BaseDimension, exponent: i32) -> Self {
        let mut exps = self.0;
        exps[dim.index()] = exponent;
        Self(exps)
    }

    /// Builds a vector from `(dimension, exponent)` pairs. Later duplicates overwrite earlier ones.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (BaseDimension, i32)>,
    {
        pairs.into_iter().collect()
    }

    /// Exponent of `dim` (zero when the dimension does not appear).
    #[inline]
    pub const fn exponent(&self, dim: BaseDimension) -> i32 {
        self.0[dim.index()]
    }

    /// Sets the exponent of `dim`.
    #[inline]
    pub fn set(&mut self, dim: BaseDimension, exponent: i32) {
        self.0[dim.index()] = exponent;
    }

    /// `true` when every exponent is zero.
    pub const fn is_dimensionless(&self) -> bool {
        let mut i = 0;
        while i < BaseDimension::COUNT {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Number of base dimensions with a non-zero exponent.
    pub fn len(&self) -> usize {
        self.0.iter().filter(|e| **e != 0).count()
    }

    /// Same as [`is_dimensionless`](Self::is_dimensionless).
    pub fn is_empty(&self) -> bool {
        self.is_dimensionless()
    }

    /// Iterates the non-zero entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (BaseDimension, i32)> + '_ {
        BaseDimension::ALL
            .into_iter()
            .map(|d| (d, self.exponent(d)))
            .filter(|(_, e)| *e != 0)
    }

    /// Dimension compatibility, i.e. exact equality of every exponent.
    #[inline]
    pub fn is_compatible(&self, other: &DimensionVector) -> bool {
        self == other
    }

    /// Dimensions of a product: exponents are summed, saturating at the `i32` bounds.
    pub const fn combine_mul(self, rhs: Self) -> Self {
        let mut exps = self.0;
        let mut i = 0;
        while i < BaseDimension::COUNT {
            exps[i] = exps[i].saturating_add(rhs.0[i]);
            i += 1;
        }
        Self(exps)
    }

    /// Dimensions of a quotient: `rhs` exponents are subtracted, saturating at the `i32` bounds.
    pub const fn combine_div(self, rhs: Self) -> Self {
        let mut exps = self.0;
        let mut i = 0;
        while i < BaseDimension::COUNT {
            exps[i] = exps[i].saturating_sub(rhs.0[i]);
            i += 1;
        }
        Self(exps)
    }

    /// Dimensions of a value raised to the integer power `n`. Exponents saturate at the `i32` bounds.
    pub const fn powi(self, n: i32) -> Self {
        let mut exps = self.0;
        let mut i = 0;
        while i < BaseDimension::COUNT {
            exps[i] = exps[i].saturating_mul(n);
            i += 1;
        }
        Self(exps)
    }

    /// Dimensions of the reciprocal.
    pub const fn recip(self) -> Self {
        self.powi(-1)
    }
}

impl FromIterator<(BaseDimension, i32)> for DimensionVector {
    fn from_iter<I: IntoIterator<Item = (BaseDimension, i32)>>(iter: I) -> Self {
        let mut dims = Self::DIMLESS;
        for (dim, exp) in iter {
            dims.set(dim, exp);
        }
        dims
    }
}

impl Mul for DimensionVector {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.combine_mul(rhs)
    }
}

impl MulAssign for DimensionVector {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.combine_mul(rhs);
    }
}

impl Div for DimensionVector {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.combine_div(rhs)
    }
}

impl DivAssign for DimensionVector {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = self.combine_div(rhs);
    }
}

impl Display for DimensionVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (dim, exp) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            f.write_str(dim.symbol())?;
            if exp != 1 {
                write!(f, "^{exp}")?;
            }
        }
        Ok(())
    }
}

impl Debug for DimensionVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Named dimension vectors
// ─────────────────────────────────────────────────────────────────────────────

/// Frequently used dimension vectors.
pub mod dims {
    use super::BaseDimension::*;
    use super::DimensionVector;

    /// No dimensions.
    pub const DIMLESS: DimensionVector = DimensionVector::DIMLESS;
    /// kg
    pub const KILOGRAM: DimensionVector = DimensionVector::of(Mass, 1);
    /// m
    pub const METER: DimensionVector = DimensionVector::of(Length, 1);
    /// Square metre.
    pub const METER2: DimensionVector = DimensionVector::of(Length, 2);
    /// Cubic metre.
    pub const METER3: DimensionVector = DimensionVector::of(Length, 3);
    /// s
    pub const SECOND: DimensionVector = DimensionVector::of(Time, 1);
    /// A
    pub const AMPERE: DimensionVector = DimensionVector::of(Current, 1);
    /// K
    pub const KELVIN: DimensionVector = DimensionVector::of(Temperature, 1);
    /// cd
    pub const CANDELA: DimensionVector = DimensionVector::of(Luminosity, 1);
    /// mol
    pub const MOLE: DimensionVector = DimensionVector::of(ChemicalAmount, 1);
    /// s^-1
    pub const HERTZ: DimensionVector = DimensionVector::of(Time, -1);
    /// Energy, kg m^2 s^-2.
    pub const JOULE: DimensionVector = DimensionVector::DIMLESS.with(Mass, 1).with(Length, 2).with(Time, -2);
    /// Power, kg m^2 s^-3.
    pub const WATT: DimensionVector = DimensionVector::DIMLESS.with(Mass, 1).with(Length, 2).with(Time, -3);
    /// Pressure, kg m^-1 s^-2.
    pub const PASCAL: DimensionVector = DimensionVector::DIMLESS.with(Mass, 1).with(Length, -1).with(Time, -2);
    /// Density, kg m^-3.
    pub const KILOGRAM_PER_METER3: DimensionVector = DimensionVector::DIMLESS.with(Mass, 1).with(Length, -3);
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde
// ─────────────────────────────────────────────────────────────────────────────

/// Serialized as a map of [`BaseDimension::name`] to exponent, omitting zero entries:
/// `{"mass": 1, "time": -2}`.
#[cfg(feature = "serde")]
mod serde_impl {
    use super::{BaseDimension, DimensionVector};
    use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
    use serde::ser::{Serialize, SerializeMap, Serializer};

    impl Serialize for DimensionVector {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (dim, exp) in self.iter() {
                map.serialize_entry(dim.name(), &exp)?;
            }
            map.end()
        }
    }

    impl<'de> Deserialize<'de> for DimensionVector {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(DimensionVectorVisitor)
        }
    }

    const FIELDS: &[&str] = &[
        BaseDimension::Mass.name(),
        BaseDimension::Length.name(),
        BaseDimension::Time.name(),
        BaseDimension::Current.name(),
        BaseDimension::Temperature.name(),
        BaseDimension::Luminosity.name(),
        BaseDimension::ChemicalAmount.name(),
    ];

    struct DimensionVectorVisitor;

    impl<'de> Visitor<'de> for DimensionVectorVisitor {
        type Value = DimensionVector;

        fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
            formatter.write_str("a map of base dimension names to integer exponents")
        }

        fn visit_map<V>(self, mut map: V) -> Result<DimensionVector, V::Error>
        where
            V: MapAccess<'de>,
        {
            let mut dims = DimensionVector::DIMLESS;
            let mut seen = [false; BaseDimension::COUNT];

            while let Some(key) = map.next_key::<String>()? {
                let dim = BaseDimension::from_name(&key).ok_or_else(|| {
                    de::Error::unknown_field(&key, FIELDS)
                })?;
                if seen[dim.index()] {
                    return Err(de::Error::duplicate_field(dim.name()));
                }
                seen[dim.index()] = true;
                dims.set(dim, map.next_value()?);
            }

            Ok(dims)
        }
    }
}
