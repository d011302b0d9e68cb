//! Constructors for common non-SI units.
//!
//! Each function takes an amount in the named unit and returns the equivalent SI [`Quantity`].

use crate::{dims, Quantity};

/// Watts per mechanical horsepower.
pub const WATTS_PER_HORSEPOWER: f64 = 745.699872;

/// Kilograms per short ton (US customary, 2000 lb).
pub const KILOGRAMS_PER_SHORT_TON: f64 = 907.185;

/// Power of `hp` mechanical horsepower, in watts.
///
/// ```rust
/// use dimunit::{customary, dims};
///
/// let p = customary::horsepower(2.0);
/// assert_eq!(p.dimensions(), dims::WATT);
/// assert_eq!(p.value(), 1491.399744);
/// ```
pub fn horsepower(hp: f64) -> Quantity {
    Quantity::new(hp * WATTS_PER_HORSEPOWER, dims::WATT)
}

/// Mass of `t` short tons, in kilograms.
pub fn short_ton(t: f64) -> Quantity {
    Quantity::new(t * KILOGRAMS_PER_SHORT_TON, dims::KILOGRAM)
}
