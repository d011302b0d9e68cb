//! Quantity type and its implementations.

use crate::dimension::DimensionVector;
use crate::error::{ensure_compatible, DimensionError, Result};
use crate::format::{format_quantity, FormatSpec};
use core::cmp::Ordering;
use core::ops::{Add, Div, DivAssign, Mul, MulAssign, Neg, Sub};

/// Anything that can be viewed as a magnitude tagged with dimensions.
///
/// Implemented by [`Quantity`] and by every typed quantity ([`Length`](crate::Length), [`Mass`](crate::Mass), …),
/// so the in-place operators of [`Quantity`] and [`TypedQuantity::assign_from`](crate::TypedQuantity::assign_from)
/// accept either.
pub trait HasDimensions {
    /// Dimension vector of the value.
    fn dimensions(&self) -> DimensionVector;

    /// Magnitude in SI base units.
    fn magnitude(&self) -> f64;

    /// Materializes the value as a general [`Quantity`].
    #[inline]
    fn to_quantity(&self) -> Quantity {
        Quantity::new(self.magnitude(), self.dimensions())
    }

    /// Renders the value with a printf-style [`FormatSpec`].
    ///
    /// ```rust
    /// use dimunit_core::{FormatSpec, HasDimensions, Length};
    ///
    /// let l = Length(1500.0);
    /// assert_eq!(l.format(&FormatSpec::new('e').with_precision(2)), "1.50e+03 m");
    /// ```
    fn format(&self, spec: &FormatSpec) -> String {
        format_quantity(&self.to_quantity(), spec)
    }
}

/// A magnitude paired with a [`DimensionVector`].
///
/// Addition, subtraction, `max` and `min` require identical dimensions and report a
/// [`DimensionError::Mismatch`] otherwise. Multiplication and division are always defined and combine the
/// exponents.
///
/// ```rust
/// use dimunit_core::{dims, Quantity};
///
/// let work = Quantity::new(30.0, dims::JOULE);
/// let time = Quantity::new(2.0, dims::SECOND);
/// let power = work / time;
/// assert_eq!(power.value(), 15.0);
/// assert_eq!(power.dimensions(), dims::WATT);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantity {
    value: f64,
    dimensions: DimensionVector,
}

impl Quantity {
    /// Creates a quantity from a magnitude in SI base units and its dimensions.
    #[inline]
    pub const fn new(value: f64, dimensions: DimensionVector) -> Self {
        Self { value, dimensions }
    }

    /// Creates a dimensionless quantity.
    #[inline]
    pub const fn dimensionless(value: f64) -> Self {
        Self::new(value, DimensionVector::DIMLESS)
    }

    /// Returns the raw numeric value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns a copy of the dimension vector.
    #[inline]
    pub const fn dimensions(&self) -> DimensionVector {
        self.dimensions
    }

    /// `true` when all exponents are zero.
    #[inline]
    pub const fn is_dimensionless(&self) -> bool {
        self.dimensions.is_dimensionless()
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs(), self.dimensions)
    }

    /// Raises the quantity to an integer power; exponents are scaled by `n`, saturating at the `i32` bounds.
    ///
    /// ```rust
    /// use dimunit_core::{dims, Quantity};
    ///
    /// let side = Quantity::new(3.0, dims::METER);
    /// let volume = side.powi(3);
    /// assert_eq!(volume.value(), 27.0);
    /// assert_eq!(volume.dimensions(), dims::METER3);
    /// ```
    #[inline]
    pub fn powi(self, n: i32) -> Self {
        Self::new(self.value.powi(n), self.dimensions.powi(n))
    }

    /// Returns `1 / self`.
    #[inline]
    pub fn recip(self) -> Self {
        Self::new(self.value.recip(), self.dimensions.recip())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // In-place arithmetic
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds `rhs` to `self`. Fails without touching `self` when the dimensions differ.
    ///
    /// ```rust
    /// use dimunit_core::{dims, Length, Quantity};
    ///
    /// let mut d = Quantity::new(2.0, dims::METER);
    /// d.add_in_place(&Length(3.0))?.add_in_place(&Length(5.0))?;
    /// assert_eq!(d.value(), 10.0);
    /// assert!(d.add_in_place(&Quantity::new(1.0, dims::SECOND)).is_err());
    /// # Ok::<(), dimunit_core::DimensionError>(())
    /// ```
    pub fn add_in_place<R>(&mut self, rhs: &R) -> Result<&mut Self>
    where
        R: HasDimensions + ?Sized,
    {
        ensure_compatible(&self.dimensions, &rhs.dimensions())?;
        self.value += rhs.magnitude();
        Ok(self)
    }

    /// Subtracts `rhs` from `self`. Fails without touching `self` when the dimensions differ.
    pub fn sub_in_place<R>(&mut self, rhs: &R) -> Result<&mut Self>
    where
        R: HasDimensions + ?Sized,
    {
        ensure_compatible(&self.dimensions, &rhs.dimensions())?;
        self.value -= rhs.magnitude();
        Ok(self)
    }

    /// Multiplies `self` by `rhs`, summing the exponents.
    pub fn mul_in_place<R>(&mut self, rhs: &R) -> &mut Self
    where
        R: HasDimensions + ?Sized,
    {
        self.value *= rhs.magnitude();
        self.dimensions = self.dimensions.combine_mul(rhs.dimensions());
        self
    }

    /// Divides `self` by `rhs`, subtracting the exponents.
    pub fn div_in_place<R>(&mut self, rhs: &R) -> &mut Self
    where
        R: HasDimensions + ?Sized,
    {
        self.value /= rhs.magnitude();
        self.dimensions = self.dimensions.combine_div(rhs.dimensions());
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Comparisons
    // ─────────────────────────────────────────────────────────────────────────

    /// Larger of two quantities with the same dimensions.
    pub fn try_max(self, other: Quantity) -> Result<Quantity> {
        ensure_compatible(&self.dimensions, &other.dimensions)?;
        Ok(if other.value > self.value { other } else { self })
    }

    /// Smaller of two quantities with the same dimensions.
    pub fn try_min(self, other: Quantity) -> Result<Quantity> {
        ensure_compatible(&self.dimensions, &other.dimensions)?;
        Ok(if other.value < self.value { other } else { self })
    }
}

impl HasDimensions for Quantity {
    #[inline]
    fn dimensions(&self) -> DimensionVector {
        self.dimensions
    }

    #[inline]
    fn magnitude(&self) -> f64 {
        self.value
    }

    #[inline]
    fn to_quantity(&self) -> Quantity {
        *self
    }
}

impl<T: HasDimensions + ?Sized> HasDimensions for &T {
    #[inline]
    fn dimensions(&self) -> DimensionVector {
        (**self).dimensions()
    }

    #[inline]
    fn magnitude(&self) -> f64 {
        (**self).magnitude()
    }
}

/// Values are only ordered when the dimensions agree.
impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.dimensions.is_compatible(&other.dimensions) {
            self.value.partial_cmp(&other.value)
        } else {
            None
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl Add for Quantity {
    type Output = Result<Quantity>;
    #[inline]
    fn add(mut self, rhs: Self) -> Result<Quantity> {
        self.add_in_place(&rhs)?;
        Ok(self)
    }
}

impl Sub for Quantity {
    type Output = Result<Quantity>;
    #[inline]
    fn sub(mut self, rhs: Self) -> Result<Quantity> {
        self.sub_in_place(&rhs)?;
        Ok(self)
    }
}

impl Mul for Quantity {
    type Output = Self;
    #[inline]
    fn mul(mut self, rhs: Self) -> Self {
        self.mul_in_place(&rhs);
        self
    }
}

impl MulAssign for Quantity {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.mul_in_place(&rhs);
    }
}

impl Div for Quantity {
    type Output = Self;
    #[inline]
    fn div(mut self, rhs: Self) -> Self {
        self.div_in_place(&rhs);
        self
    }
}

impl DivAssign for Quantity {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        self.div_in_place(&rhs);
    }
}

impl Mul<f64> for Quantity {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.dimensions)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;
    #[inline]
    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl Div<f64> for Quantity {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs, self.dimensions)
    }
}

impl Neg for Quantity {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value, self.dimensions)
    }
}

impl From<f64> for Quantity {
    #[inline]
    fn from(value: f64) -> Self {
        Self::dimensionless(value)
    }
}

impl TryFrom<Quantity> for f64 {
    type Error = DimensionError;

    /// Only dimensionless quantities convert to a bare number.
    fn try_from(q: Quantity) -> Result<f64> {
        ensure_compatible(&DimensionVector::DIMLESS, &q.dimensions)?;
        Ok(q.value)
    }
}
