//! The four sexagesimal quantity types.
//!
//! Each type is a thin wrapper over one `f64` in a fixed native unit. The
//! wrapped float is the only state; nothing else is cached.
//!
//! | Type | Native unit | Displayed in | Sign |
//! |------|-------------|--------------|------|
//! | [`Angle`] | radians | degrees | any |
//! | [`HourAngle`] | radians | hours (1h = 15°) | any |
//! | [`RA`] | radians, wrapped to [0, 2pi) | hours | never negative |
//! | [`Time`] | seconds | hours | any |
//!
//! The formatter only needs two things from a type: its value in the display
//! unit and whether it is signed. Those are provided by the [`Sexagesimal`]
//! trait.
//!
//! ```
//! use celestial_sexa::{Angle, HourAngle, RA, Time};
//!
//! let obliquity = Angle::from_dms(false, 23, 26, 44.0);
//! assert!((obliquity.degrees() - 23.445555555555554).abs() < 1e-12);
//!
//! let ha = HourAngle::from_hms(true, 1, 30, 0.0);
//! assert!((ha.hours() + 1.5).abs() < 1e-12);
//!
//! // Right ascension never goes negative
//! let ra = RA::from_hours(-1.5);
//! assert!((ra.hours() - 22.5).abs() < 1e-12);
//!
//! let t = Time::from_hms(false, 15, 22, 7.0);
//! assert_eq!(t.seconds(), 55327.0);
//! ```

use super::normalize::wrap_0_2pi;
use crate::constants::{
    DEGREES_PER_HOUR, DEG_TO_RAD, HOUR_TO_RAD, MINUTES_PER_HOUR, PI, RAD_TO_DEG, SECONDS_PER_HOUR,
};
use core::fmt;

/// Unit of the first (most significant) segment of a formatted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayUnit {
    Degrees,
    Hours,
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Degrees => "Degrees",
            Self::Hours => "Hours",
        })
    }
}

/// A quantity the formatter can break into sexagesimal segments.
pub trait Sexagesimal {
    /// Unit of the first segment; also selects DMS or HMS glyphs.
    const UNIT: DisplayUnit;

    /// Unsigned types ignore the `+` and space flags and have no sign column.
    const SIGNED: bool = true;

    /// The value expressed in [`Self::UNIT`].
    fn display_value(&self) -> f64;
}

/// Sums sexagesimal components into a single value of the first unit.
#[inline]
fn from_components(negative: bool, whole: u32, min: u32, sec: f64) -> f64 {
    let v = (whole as f64 * MINUTES_PER_HOUR + min as f64) * 60.0 + sec;
    let v = v / SECONDS_PER_HOUR;
    if negative {
        -v
    } else {
        v
    }
}

/// A general angle, stored in radians.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    pub const ZERO: Self = Self { rad: 0.0 };

    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg * DEG_TO_RAD,
        }
    }

    /// Creates an angle from degrees, arcminutes and arcseconds.
    ///
    /// The components are magnitudes; `negative` negates the whole angle, so
    /// `-0° 30′` is expressible.
    ///
    /// ```
    /// use celestial_sexa::Angle;
    ///
    /// let a = Angle::from_dms(true, 0, 30, 0.0);
    /// assert!((a.degrees() + 0.5).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_dms(negative: bool, deg: u32, min: u32, sec: f64) -> Self {
        Self::from_degrees(from_components(negative, deg, min, sec))
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad * RAD_TO_DEG
    }
}

/// An hour angle, stored in radians and displayed in hours.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct HourAngle {
    rad: f64,
}

impl HourAngle {
    pub const ZERO: Self = Self { rad: 0.0 };

    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self {
            rad: h * HOUR_TO_RAD,
        }
    }

    /// Creates an hour angle from hours, minutes and seconds of time.
    #[inline]
    pub fn from_hms(negative: bool, h: u32, m: u32, s: f64) -> Self {
        Self::from_hours(from_components(negative, h, m, s))
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.rad * RAD_TO_DEG / DEGREES_PER_HOUR
    }
}

/// A right ascension, stored in radians in [0, 2pi) and displayed in hours.
///
/// Every constructor wraps its input, so an `RA` is never negative.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct RA {
    rad: f64,
}

impl RA {
    pub const ZERO: Self = Self { rad: 0.0 };

    #[inline]
    pub fn from_radians(rad: f64) -> Self {
        Self {
            rad: wrap_0_2pi(rad),
        }
    }

    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self::from_radians(h * HOUR_TO_RAD)
    }

    /// Creates a right ascension from hours, minutes and seconds of time.
    ///
    /// ```
    /// use celestial_sexa::RA;
    ///
    /// let ra = RA::from_hms(25, 0, 0.0);
    /// assert!((ra.hours() - 1.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_hms(h: u32, m: u32, s: f64) -> Self {
        Self::from_hours(from_components(false, h, m, s))
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.rad * RAD_TO_DEG / DEGREES_PER_HOUR
    }
}

/// A duration, stored in seconds and displayed in hours.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Time {
    sec: f64,
}

impl Time {
    pub const ZERO: Self = Self { sec: 0.0 };

    #[inline]
    pub const fn from_seconds(sec: f64) -> Self {
        Self { sec }
    }

    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self {
            sec: h * SECONDS_PER_HOUR,
        }
    }

    #[inline]
    pub fn from_hms(negative: bool, h: u32, m: u32, s: f64) -> Self {
        let v = (h as f64 * MINUTES_PER_HOUR + m as f64) * 60.0 + s;
        Self {
            sec: if negative { -v } else { v },
        }
    }

    #[inline]
    pub fn seconds(self) -> f64 {
        self.sec
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.sec / SECONDS_PER_HOUR
    }
}

impl From<HourAngle> for Angle {
    #[inline]
    fn from(h: HourAngle) -> Self {
        Angle::from_radians(h.radians())
    }
}

impl From<RA> for Angle {
    #[inline]
    fn from(ra: RA) -> Self {
        Angle::from_radians(ra.radians())
    }
}

impl From<Angle> for HourAngle {
    #[inline]
    fn from(a: Angle) -> Self {
        HourAngle::from_radians(a.radians())
    }
}

impl From<Angle> for RA {
    #[inline]
    fn from(a: Angle) -> Self {
        RA::from_radians(a.radians())
    }
}

/// A second of time is 15 arcseconds: 86400 s per turn.
impl From<Time> for HourAngle {
    #[inline]
    fn from(t: Time) -> Self {
        HourAngle::from_radians(t.seconds() * PI / 43200.0)
    }
}

impl From<HourAngle> for Time {
    #[inline]
    fn from(h: HourAngle) -> Self {
        Time::from_seconds(h.radians() * 43200.0 / PI)
    }
}

impl Sexagesimal for Angle {
    const UNIT: DisplayUnit = DisplayUnit::Degrees;

    fn display_value(&self) -> f64 {
        self.degrees()
    }
}

impl Sexagesimal for HourAngle {
    const UNIT: DisplayUnit = DisplayUnit::Hours;

    fn display_value(&self) -> f64 {
        self.hours()
    }
}

impl Sexagesimal for RA {
    const UNIT: DisplayUnit = DisplayUnit::Hours;
    const SIGNED: bool = false;

    fn display_value(&self) -> f64 {
        self.hours()
    }
}

impl Sexagesimal for Time {
    const UNIT: DisplayUnit = DisplayUnit::Hours;

    fn display_value(&self) -> f64 {
        self.hours()
    }
}
