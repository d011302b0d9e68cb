//! Predefined typed quantities.
//!
//! Each type is an `f64` newtype committed to one [`DimensionVector`](crate::DimensionVector), with its scale
//! constants available as associated constants:
//!
//! - [`Length`]: metres, SI prefixes from yotta to yocto.
//! - [`Mass`]: kilograms, SI prefixes applied to the gram.
//! - [`Time`]: seconds, sub-second prefixes plus minute, hour and day.
//! - [`Dimless`]: pure numbers.

mod dimless;
mod length;
mod mass;
mod time;

pub use dimless::Dimless;
pub use length::Length;
pub use mass::Mass;
pub use time::Time;
