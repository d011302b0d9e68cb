//! Physical quantities with dimensional analysis at runtime.
//!
//! `dimunit` is the user-facing crate in this workspace. It re-exports the full API from `dimunit-core` plus a few
//! constructors for non-SI units ([`customary`]).
//!
//! The core idea is: a value is a magnitude in SI base units paired with the exponents of the seven base dimensions.
//! Dimensions are data, so they can be derived at runtime (`kg m^2 s^-2`), and every operation that needs matching
//! dimensions checks them and reports a [`DimensionError`] instead of producing a meaningless number.
//!
//! # What this crate solves
//!
//! - Detects mixing incompatible dimensions (you can't add metres to seconds) even when dimensions are computed.
//! - Tracks arbitrary products and quotients of base dimensions.
//! - Renders results with their dimensions using printf-style verbs.
//!
//! # What this crate does not try to solve
//!
//! - Compile-time dimension checking; see the typed quantities for a narrow form of it.
//! - Unit-string parsing or conversion catalogues: magnitudes are always SI.
//! - Exact arithmetic: quantities are backed by `f64`.
//!
//! # Quick start
//!
//! ```rust
//! use dimunit::{dims, Length, Quantity, Time, TypedQuantity};
//!
//! let d = Quantity::from(Length::KILOMETER * 1.5);
//! let t = Quantity::from(Time::MINUTE * 2.0);
//! let v = d / t;
//! assert_eq!(v.dimensions(), dims::METER / dims::SECOND);
//! assert_eq!(v.to_string(), "12.5 m s^-1");
//!
//! // A velocity is not a length.
//! let mut l = Length::default();
//! assert!(l.assign_from(&v).is_err());
//! assert!(l.0.is_nan());
//! ```
//!
//! Reductions over many operands:
//!
//! ```rust
//! use dimunit::{dims, Quantity};
//!
//! let readings = [
//!     Quantity::new(3.0, dims::KELVIN),
//!     Quantity::new(7.0, dims::KELVIN),
//!     Quantity::new(5.0, dims::KELVIN),
//! ];
//! assert_eq!(dimunit::max(&readings)?.value(), 7.0);
//! assert_eq!(dimunit::add(&readings)?.to_string(), "15 K");
//! # Ok::<(), dimunit::DimensionError>(())
//! ```
//!
//! # Modules
//!
//! - `dimunit::ops` (reductions and the [`Operation`] enum)
//! - `dimunit::units` (typed quantities, also re-exported at the crate root)
//! - `dimunit::dims` (named dimension vectors)
//! - `dimunit::customary` (horsepower, short tons)
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support in `dimunit-core`.
//!
//! # Panics and errors
//!
//! Dimension mismatches never panic. Arithmetic that needs matching dimensions returns [`Result`]; typed conversion
//! also sets the target to NaN. Apart from dimension checks everything follows IEEE-754 behavior.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use dimunit_core::*;

pub mod customary;
