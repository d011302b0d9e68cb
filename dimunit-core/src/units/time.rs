//! Time in seconds.

use dimunit_derive::TypedQuantity;

/// A duration in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, TypedQuantity)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
#[quantity(name = "Time", dimensions = crate::dims::SECOND)]
pub struct Time(pub f64);

impl Time {
    /// 86 400 s
    pub const DAY: Time = Time(86_400.0);
    /// 3 600 s
    pub const HOUR: Time = Time(3_600.0);
    /// 60 s
    pub const MINUTE: Time = Time(60.0);
    /// Second (SI base unit).
    pub const SECOND: Time = Time(1.0);
    /// 1e-1 s
    pub const DECISECOND: Time = Time(1e-1);
    /// 1e-2 s
    pub const CENTISECOND: Time = Time(1e-2);
    /// 1e-3 s
    pub const MILLISECOND: Time = Time(1e-3);
    /// 1e-6 s
    pub const MICROSECOND: Time = Time(1e-6);
    /// 1e-9 s
    pub const NANOSECOND: Time = Time(1e-9);
    /// 1e-12 s
    pub const PICOSECOND: Time = Time(1e-12);
    /// 1e-15 s
    pub const FEMTOSECOND: Time = Time(1e-15);
    /// 1e-18 s
    pub const ATTOSECOND: Time = Time(1e-18);
    /// 1e-21 s
    pub const ZEPTOSECOND: Time = Time(1e-21);
    /// 1e-24 s
    pub const YOCTOSECOND: Time = Time(1e-24);
}
