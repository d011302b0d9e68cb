//! Core types for dimensional quantities checked at runtime.
//!
//! `dimunit-core` provides a small model of physical quantities whose dimensions are tracked as data:
//!
//! - A [`DimensionVector`] stores one integer exponent for each of the seven SI base dimensions.
//! - A [`Quantity`] pairs an `f64` magnitude in SI base units with a [`DimensionVector`].
//! - Arithmetic checks dimensions: addition, subtraction, `max` and `min` need identical vectors, while
//!   multiplication and division combine them.
//! - Typed quantities ([`Length`], [`Mass`], [`Time`], [`Dimless`]) are `f64` newtypes committed to one vector,
//!   with a checked conversion from any dimensioned value.
//! - Quantities render as `"<number> <dimensions>"` following printf verbs ([`FormatSpec`]).
//!
//! Most users should depend on `dimunit` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Catching dimension errors in computations whose dimensions are only known at runtime.
//! - Rendering derived dimensions (`kg m^2 s^-2`) without a unit catalogue.
//!
//! # What this crate does not try to solve
//!
//! - Parsing unit strings.
//! - Conversion between unit systems; every magnitude is in SI base units.
//! - Offset units such as degrees Celsius, or angles as a dimension.
//!
//! # Quick start
//!
//! ```rust
//! use dimunit_core::{dims, ops, Quantity};
//!
//! let work = Quantity::new(30.0, dims::JOULE);
//! let time = Quantity::new(2.0, dims::SECOND);
//! let power = ops::div([&work, &time])?;
//! assert_eq!(power.to_string(), "15 kg m^2 s^-3");
//!
//! // Adding a length to a duration is reported rather than computed.
//! let length = Quantity::new(1.0, dims::METER);
//! assert!(ops::add([&length, &time]).is_err());
//! # Ok::<(), dimunit_core::DimensionError>(())
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support. A [`DimensionVector`] serializes as a map of base-dimension names to
//!   non-zero exponents, a [`Quantity`] as `{ "value", "dimensions" }` and typed quantities as the raw `f64`.
//!
//! # Panics and errors
//!
//! Nothing in this crate panics on a dimension mismatch. Fallible operations return [`Result`] with a
//! [`DimensionError`]; typed conversions additionally leave the target at NaN. Formatting never fails, an
//! unsupported verb renders a diagnostic string instead.
//!
//! Exponent arithmetic saturates at the `i32` bounds rather than overflowing, so multiplication, division and
//! `powi` are total.
//!
//! # Logging
//!
//! Mismatches are logged through the `log` facade at debug level and reduction steps at trace level. No logger is
//! installed by this crate.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod error;
mod format;
mod quantity;
mod typed;

pub mod ops;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{dims, BaseDimension, DimensionVector};
pub use error::{DimensionError, Result};
pub use format::{FormatError, FormatSpec};
pub use ops::{add, div, max, min, mul, sub, Operation};
pub use quantity::{HasDimensions, Quantity};
pub use typed::TypedQuantity;

/// Derive macro for new typed quantities; see [`TypedQuantity`].
pub use dimunit_derive::TypedQuantity;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined typed quantities
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined typed quantities.
pub mod units;

pub use units::{Dimless, Length, Mass, Time};
